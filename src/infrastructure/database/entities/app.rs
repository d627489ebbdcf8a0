//! App entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub app_name: String,

    /// LanguageType code: 1 Java, 2 Node, 3 Go, 4 Python, 5 Html
    pub language_type: i32,

    #[sea_orm(nullable)]
    pub code_repo_path: Option<String>,

    #[sea_orm(nullable)]
    pub description: Option<String>,

    /// Logical deletion flag
    pub deleted: bool,

    pub creation_time: DateTimeUtc,
    pub update_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::app_extend_java::Entity")]
    AppExtendJava,
    #[sea_orm(has_many = "super::app_member::Entity")]
    AppMembers,
}

impl Related<super::app_extend_java::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppExtendJava.def()
    }
}

impl Related<super::app_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppMembers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
