//! Java extension rows. Owned by the app aggregate, so there is no domain
//! trait: only `SeaOrmAppRepository` talks to this store.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use super::db_err;
use crate::domain::{
    AppExtendJava, CreateAppExtendJava, DomainError, DomainResult, PackageBuildType,
    PackageFileType,
};
use crate::infrastructure::database::entities::app_extend_java;

#[derive(Clone, Default)]
pub struct SeaOrmAppExtendJavaRepository;

fn extend_model_to_domain(model: app_extend_java::Model) -> DomainResult<AppExtendJava> {
    let package_build_type = PackageBuildType::from_code(model.package_build_type).ok_or_else(|| {
        DomainError::Storage(format!(
            "Unknown package build type {} for app {}",
            model.package_build_type, model.app_id
        ))
    })?;
    let package_file_type = PackageFileType::from_code(model.package_file_type).ok_or_else(|| {
        DomainError::Storage(format!(
            "Unknown package file type {} for app {}",
            model.package_file_type, model.app_id
        ))
    })?;

    Ok(AppExtendJava {
        id: model.id,
        app_id: model.app_id,
        package_build_type,
        package_file_type,
        package_target_path: model.package_target_path,
        java_home: model.java_home,
        base_image: model.base_image,
        jvm_args: model.jvm_args,
        creation_time: model.creation_time,
        update_time: model.update_time,
    })
}

impl SeaOrmAppExtendJavaRepository {
    pub async fn query_by_app_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        app_id: &str,
    ) -> DomainResult<Option<AppExtendJava>> {
        let model = app_extend_java::Entity::find()
            .filter(app_extend_java::Column::AppId.eq(app_id))
            .one(conn)
            .await
            .map_err(db_err)?;

        model.map(extend_model_to_domain).transpose()
    }

    pub async fn add<C: ConnectionTrait>(
        &self,
        conn: &C,
        app_id: &str,
        dto: CreateAppExtendJava,
    ) -> DomainResult<AppExtendJava> {
        let now = Utc::now();
        let ext = app_extend_java::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            app_id: Set(app_id.to_string()),
            package_build_type: Set(dto.package_build_type.code()),
            package_file_type: Set(dto.package_file_type.code()),
            package_target_path: Set(dto.package_target_path),
            java_home: Set(dto.java_home),
            base_image: Set(dto.base_image),
            jvm_args: Set(dto.jvm_args),
            creation_time: Set(now),
            update_time: Set(now),
        };

        let model = ext.insert(conn).await.map_err(db_err)?;
        extend_model_to_domain(model)
    }
}
