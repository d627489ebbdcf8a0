//! Global configuration entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "global_configs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// GlobalConfigItemType code
    pub item_type: i32,

    /// JSON payload for the item type
    #[sea_orm(nullable)]
    pub item_value: Option<String>,

    /// Logical deletion flag
    pub deleted: bool,

    pub creation_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
