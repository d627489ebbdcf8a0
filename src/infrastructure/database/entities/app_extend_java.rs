//! Java extension entity (one row per Java app)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_extend_java")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub app_id: String,

    /// 1 Maven, 2 Gradle
    pub package_build_type: i32,

    /// 1 Jar, 2 War
    pub package_file_type: i32,

    #[sea_orm(nullable)]
    pub package_target_path: Option<String>,

    #[sea_orm(nullable)]
    pub java_home: Option<String>,

    #[sea_orm(nullable)]
    pub base_image: Option<String>,

    #[sea_orm(nullable)]
    pub jvm_args: Option<String>,

    pub creation_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app::Entity",
        from = "Column::AppId",
        to = "super::app::Column::Id"
    )]
    App,
}

impl Related<super::app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::App.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
