use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::{
    AppMember, AppMemberDeletion, AppMemberRepository, AppMemberRole, CreateAppMember,
    DomainError, DomainResult,
};
use crate::domain::app_member::{format_role_types, parse_role_types};
use crate::infrastructure::database::entities::app_member;
use crate::shared::{PageData, PageQuery};

#[derive(Clone)]
pub struct SeaOrmAppMemberRepository {
    db: DatabaseConnection,
}

impl SeaOrmAppMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validate and insert one membership on `conn`, which may be a transaction.
    pub async fn add_with<C: ConnectionTrait>(
        &self,
        conn: &C,
        dto: CreateAppMember,
    ) -> DomainResult<AppMember> {
        AppMemberDeletion {
            app_id: dto.app_id.clone(),
            login_name: dto.login_name.clone(),
        }
        .validate()?;
        require_roles(&dto.roles)?;

        let existing = app_member::Entity::find()
            .filter(app_member::Column::LoginName.eq(dto.login_name.as_str()))
            .filter(app_member::Column::AppId.eq(dto.app_id.as_str()))
            .one(conn)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "{} is already a member of app {}",
                dto.login_name, dto.app_id
            )));
        }

        let now = Utc::now();
        let member = app_member::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            app_id: Set(dto.app_id),
            user_id: Set(dto.user_id),
            login_name: Set(dto.login_name),
            role_type: Set(format_role_types(&dto.roles)),
            creation_time: Set(now),
            update_time: Set(now),
        };

        let model = member.insert(conn).await.map_err(db_err)?;
        debug!(app_id = %model.app_id, login_name = %model.login_name, "App member added");
        Ok(member_model_to_domain(model))
    }

    pub async fn delete_by_app_id_with<C: ConnectionTrait>(
        &self,
        conn: &C,
        app_id: &str,
    ) -> DomainResult<u64> {
        let result = app_member::Entity::delete_many()
            .filter(app_member::Column::AppId.eq(app_id))
            .exec(conn)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected)
    }
}

fn member_model_to_domain(model: app_member::Model) -> AppMember {
    AppMember {
        roles: parse_role_types(&model.role_type),
        id: model.id,
        app_id: model.app_id,
        user_id: model.user_id,
        login_name: model.login_name,
        creation_time: model.creation_time,
        update_time: model.update_time,
    }
}

fn require_roles(roles: &[AppMemberRole]) -> DomainResult<()> {
    if roles.is_empty() {
        return Err(DomainError::Validation(
            "At least one member role is required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl AppMemberRepository for SeaOrmAppMemberRepository {
    async fn list_by_user_id(&self, user_id: &str) -> DomainResult<Vec<AppMember>> {
        let models = app_member::Entity::find()
            .filter(app_member::Column::UserId.eq(user_id))
            .order_by_desc(app_member::Column::UpdateTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(member_model_to_domain).collect())
    }

    async fn page_by_user_id(
        &self,
        user_id: &str,
        page: PageQuery,
    ) -> DomainResult<PageData<AppMember>> {
        let query = app_member::Entity::find()
            .filter(app_member::Column::UserId.eq(user_id))
            .order_by_desc(app_member::Column::UpdateTime);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.page_size() as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models.into_iter().map(member_model_to_domain).collect();
        Ok(PageData::new(items, total, page.page_num(), page.page_size()))
    }

    async fn query_by_login_name_and_app_id(
        &self,
        login_name: &str,
        app_id: &str,
    ) -> DomainResult<Option<AppMember>> {
        let model = app_member::Entity::find()
            .filter(app_member::Column::LoginName.eq(login_name))
            .filter(app_member::Column::AppId.eq(app_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(member_model_to_domain))
    }

    async fn add(&self, dto: CreateAppMember) -> DomainResult<AppMember> {
        self.add_with(&self.db, dto).await
    }

    async fn update_roles(
        &self,
        app_id: &str,
        login_name: &str,
        roles: &[AppMemberRole],
    ) -> DomainResult<bool> {
        require_roles(roles)?;

        let existing = app_member::Entity::find()
            .filter(app_member::Column::LoginName.eq(login_name))
            .filter(app_member::Column::AppId.eq(app_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(false);
        };

        let mut active: app_member::ActiveModel = existing.into();
        active.role_type = Set(format_role_types(roles));
        active.update_time = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;

        Ok(true)
    }

    async fn delete(&self, param: AppMemberDeletion) -> DomainResult<bool> {
        param.validate()?;

        let result = app_member::Entity::delete_many()
            .filter(app_member::Column::AppId.eq(param.app_id.as_str()))
            .filter(app_member::Column::LoginName.eq(param.login_name.as_str()))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_by_app_id(&self, app_id: &str) -> DomainResult<u64> {
        self.delete_by_app_id_with(&self.db, app_id).await
    }
}
