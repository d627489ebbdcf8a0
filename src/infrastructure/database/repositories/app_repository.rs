use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};
use tracing::{info, warn};

use super::{db_err, SeaOrmAppExtendJavaRepository, SeaOrmAppMemberRepository};
use crate::domain::{
    App, AppExtend, AppMember, AppMemberRepository, AppMemberRole, AppPageQuery, AppRepository,
    CreateApp, CreateAppMember, DomainError, DomainResult, LanguageType, LoginUser, UpdateApp,
};
use crate::infrastructure::database::entities::app;
use crate::shared::PageData;

pub struct SeaOrmAppRepository {
    db: DatabaseConnection,
    members: SeaOrmAppMemberRepository,
    extend_java: SeaOrmAppExtendJavaRepository,
}

impl SeaOrmAppRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            members: SeaOrmAppMemberRepository::new(db.clone()),
            extend_java: SeaOrmAppExtendJavaRepository,
            db,
        }
    }
}

fn app_model_to_domain(model: app::Model) -> DomainResult<App> {
    let language_type = LanguageType::from_code(model.language_type).ok_or_else(|| {
        DomainError::Storage(format!(
            "Unknown language type {} for app {}",
            model.language_type, model.id
        ))
    })?;

    Ok(App {
        id: model.id,
        app_name: model.app_name,
        language_type,
        code_repo_path: model.code_repo_path,
        description: model.description,
        creation_time: model.creation_time,
        update_time: model.update_time,
        modify_rights: false,
        delete_rights: false,
        app_extend: None,
    })
}

/// Apps that have not been logically deleted
fn live_apps() -> Select<app::Entity> {
    app::Entity::find().filter(app::Column::Deleted.eq(false))
}

impl SeaOrmAppRepository {
    async fn find_live(&self, id: &str) -> DomainResult<Option<App>> {
        let model = live_apps()
            .filter(app::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        model.map(app_model_to_domain).transpose()
    }

    /// One page of live apps matching the filters, optionally restricted to `ids`.
    async fn page_apps(
        &self,
        query: &AppPageQuery,
        ids: Option<Vec<String>>,
    ) -> DomainResult<PageData<App>> {
        let page_num = query.page.page_num();
        let page_size = query.page.page_size();

        let mut select = live_apps();

        if let Some(name) = query.app_name.as_deref().filter(|n| !n.trim().is_empty()) {
            select = select.filter(app::Column::AppName.contains(name.trim()));
        }
        if let Some(language_type) = query.language_type {
            select = select.filter(app::Column::LanguageType.eq(language_type.code()));
        }
        if let Some(ids) = ids {
            select = select.filter(app::Column::Id.is_in(ids));
        }
        select = select
            .order_by_desc(app::Column::UpdateTime)
            .order_by_asc(app::Column::Id);

        let total = select.clone().count(&self.db).await.map_err(db_err)?;

        let models = select
            .offset(query.page.offset())
            .limit(page_size as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models
            .into_iter()
            .map(app_model_to_domain)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(PageData::new(items, total, page_num, page_size))
    }

    async fn attach_extend(&self, app: &mut App) -> DomainResult<()> {
        if !app.language_type.has_extension() {
            return Ok(());
        }
        if let Some(ext) = self.extend_java.query_by_app_id(&self.db, &app.id).await? {
            app.app_extend = Some(AppExtend::Java(ext));
        }
        Ok(())
    }
}

/// Rights granted by a membership row to the caller.
fn member_grants_rights(member: &AppMember, login_user: &LoginUser) -> bool {
    member.login_name == login_user.login_name && member.can_operate_app()
}

#[async_trait]
impl AppRepository for SeaOrmAppRepository {
    async fn page(&self, login_user: &LoginUser, query: AppPageQuery) -> DomainResult<PageData<App>> {
        if login_user.is_admin() {
            let mut page = self.page_apps(&query, None).await?;
            page.items.iter_mut().for_each(App::grant_operate_rights);
            return Ok(page);
        }

        let members = self.members.list_by_user_id(&login_user.id).await?;
        if members.is_empty() {
            return Ok(PageData::empty(query.page.page_size()));
        }

        let by_app: HashMap<String, AppMember> = members
            .into_iter()
            .map(|m| (m.app_id.clone(), m))
            .collect();
        let ids = by_app.keys().cloned().collect();

        let mut page = self.page_apps(&query, Some(ids)).await?;
        for app in page.items.iter_mut() {
            if by_app
                .get(&app.id)
                .is_some_and(|m| member_grants_rights(m, login_user))
            {
                app.grant_operate_rights();
            }
        }
        Ok(page)
    }

    async fn query(&self, login_user: &LoginUser, id: Option<&str>) -> DomainResult<Option<App>> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };

        if !login_user.is_admin()
            && self
                .members
                .query_by_login_name_and_app_id(&login_user.login_name, id)
                .await?
                .is_none()
        {
            return Ok(None);
        }

        self.find_live(id).await
    }

    async fn query_with_extend_by_id(&self, id: &str) -> DomainResult<Option<App>> {
        let Some(mut app) = self.find_live(id).await? else {
            return Ok(None);
        };
        self.attach_extend(&mut app).await?;
        Ok(Some(app))
    }

    async fn query_with_extend_for(&self, login_user: &LoginUser, id: &str) -> DomainResult<Option<App>> {
        let Some(mut app) = self.query(login_user, Some(id)).await? else {
            return Ok(None);
        };
        self.attach_extend(&mut app).await?;
        Ok(Some(app))
    }

    async fn query_by_app_name(&self, app_name: &str) -> DomainResult<Option<App>> {
        let model = live_apps()
            .filter(app::Column::AppName.eq(app_name))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        model.map(app_model_to_domain).transpose()
    }

    async fn create(&self, login_user: &LoginUser, dto: CreateApp) -> DomainResult<App> {
        let app_name = dto.app_name.trim().to_string();
        if app_name.is_empty() {
            return Err(DomainError::Validation("App name is required".to_string()));
        }
        if self.query_by_app_name(&app_name).await?.is_some() {
            return Err(DomainError::Conflict(format!("App {} already exists", app_name)));
        }

        let now = Utc::now();
        let id = uuid::Uuid::new_v4().to_string();

        let txn = self.db.begin().await.map_err(db_err)?;

        let new_app = app::ActiveModel {
            id: Set(id.clone()),
            app_name: Set(app_name),
            language_type: Set(dto.language_type.code()),
            code_repo_path: Set(dto.code_repo_path),
            description: Set(dto.description),
            deleted: Set(false),
            creation_time: Set(now),
            update_time: Set(now),
        };
        let model = new_app.insert(&txn).await.map_err(db_err)?;

        let mut created = app_model_to_domain(model)?;
        if created.language_type.has_extension() {
            let ext = self
                .extend_java
                .add(&txn, &id, dto.extend_java.unwrap_or_default())
                .await?;
            created.app_extend = Some(AppExtend::Java(ext));
        }

        // Admins see every app already; anyone else needs a membership row.
        if !login_user.is_admin() {
            self.members
                .add_with(
                    &txn,
                    CreateAppMember {
                        app_id: id.clone(),
                        user_id: login_user.id.clone(),
                        login_name: login_user.login_name.clone(),
                        roles: vec![AppMemberRole::Admin],
                    },
                )
                .await?;
        }

        txn.commit().await.map_err(db_err)?;
        created.grant_operate_rights();

        info!(
            app_id = %created.id,
            app_name = %created.app_name,
            creator = %login_user.login_name,
            "App created"
        );
        Ok(created)
    }

    async fn update(&self, login_user: &LoginUser, dto: UpdateApp) -> DomainResult<bool> {
        if !self.has_operating_rights(login_user, &dto.id).await? {
            warn!(app_id = %dto.id, login_name = %login_user.login_name, "No right to update app");
            return Err(DomainError::no_access_right());
        }

        let existing = live_apps()
            .filter(app::Column::Id.eq(dto.id.as_str()))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(false);
        };

        if let Some(name) = dto.app_name.as_deref().map(str::trim) {
            if name.is_empty() {
                return Err(DomainError::Validation("App name is required".to_string()));
            }
            if let Some(other) = self.query_by_app_name(name).await? {
                if other.id != existing.id {
                    return Err(DomainError::Conflict(format!("App {} already exists", name)));
                }
            }
        }

        let mut active: app::ActiveModel = existing.into();

        if let Some(name) = dto.app_name {
            active.app_name = Set(name.trim().to_string());
        }
        if let Some(path) = dto.code_repo_path {
            active.code_repo_path = Set(Some(path));
        }
        if let Some(description) = dto.description {
            active.description = Set(Some(description));
        }
        active.update_time = Set(Utc::now());

        active.update(&self.db).await.map_err(db_err)?;
        Ok(true)
    }

    async fn delete(&self, login_user: &LoginUser, id: &str) -> DomainResult<bool> {
        if !self.has_operating_rights(login_user, id).await? {
            warn!(app_id = %id, login_name = %login_user.login_name, "No right to delete app");
            return Err(DomainError::no_access_right());
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let result = app::Entity::update_many()
            .col_expr(app::Column::Deleted, Expr::value(true))
            .col_expr(app::Column::UpdateTime, Expr::value(Utc::now()))
            .filter(app::Column::Id.eq(id))
            .filter(app::Column::Deleted.eq(false))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(db_err)?;
            return Ok(false);
        }

        let dropped = self.members.delete_by_app_id_with(&txn, id).await?;
        txn.commit().await.map_err(db_err)?;
        info!(app_id = %id, members_removed = dropped, "App deleted");
        Ok(true)
    }

    async fn has_operating_rights(&self, login_user: &LoginUser, id: &str) -> DomainResult<bool> {
        if id.trim().is_empty() {
            return Err(DomainError::Validation("App id is required".to_string()));
        }

        if self.find_live(id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity: "App",
                field: "id",
                value: id.to_string(),
            });
        }

        if login_user.is_admin() {
            return Ok(true);
        }

        let member = self
            .members
            .query_by_login_name_and_app_id(&login_user.login_name, id)
            .await?;

        Ok(member.is_some_and(|m| member_grants_rights(&m, login_user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateAppExtendJava, PackageBuildType, RoleType};
    use crate::infrastructure::database::test_support::migrated_db;
    use crate::shared::PageQuery;

    struct Fixture {
        apps: SeaOrmAppRepository,
        members: SeaOrmAppMemberRepository,
    }

    async fn fixture() -> Fixture {
        let db = migrated_db().await;
        Fixture {
            apps: SeaOrmAppRepository::new(db.clone()),
            members: SeaOrmAppMemberRepository::new(db),
        }
    }

    fn admin() -> LoginUser {
        LoginUser {
            id: "u-admin".into(),
            login_name: "admin".into(),
            role_type: RoleType::Admin,
        }
    }

    fn normal(name: &str) -> LoginUser {
        LoginUser {
            id: format!("u-{}", name),
            login_name: name.into(),
            role_type: RoleType::Normal,
        }
    }

    fn new_app(name: &str, language_type: LanguageType) -> CreateApp {
        CreateApp {
            app_name: name.into(),
            language_type,
            code_repo_path: Some(format!("group/{}", name)),
            description: None,
            extend_java: None,
        }
    }

    async fn join(f: &Fixture, app_id: &str, user: &LoginUser, roles: Vec<AppMemberRole>) {
        f.members
            .add(CreateAppMember {
                app_id: app_id.into(),
                user_id: user.id.clone(),
                login_name: user.login_name.clone(),
                roles,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn admin_page_sees_everything_with_rights() {
        let f = fixture().await;
        f.apps.create(&admin(), new_app("a", LanguageType::Go)).await.unwrap();
        f.apps.create(&admin(), new_app("b", LanguageType::Node)).await.unwrap();

        let page = f.apps.page(&admin(), AppPageQuery::default()).await.unwrap();
        assert_eq!(page.item_count, 2);
        assert!(page.items.iter().all(|a| a.modify_rights && a.delete_rights));
    }

    #[tokio::test]
    async fn normal_user_without_membership_gets_empty_page() {
        let f = fixture().await;
        f.apps.create(&admin(), new_app("a", LanguageType::Go)).await.unwrap();

        let query = AppPageQuery {
            page: PageQuery::new(2, 7),
            ..Default::default()
        };
        let page = f.apps.page(&normal("bob"), query).await.unwrap();
        assert_eq!(page.page_num, 1);
        assert_eq!(page.page_count, 0);
        assert_eq!(page.page_size, 7);
        assert_eq!(page.item_count, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn normal_user_sees_member_apps_with_role_based_rights() {
        let f = fixture().await;
        let owned = f.apps.create(&admin(), new_app("owned", LanguageType::Go)).await.unwrap();
        let dev = f.apps.create(&admin(), new_app("dev", LanguageType::Go)).await.unwrap();
        f.apps.create(&admin(), new_app("hidden", LanguageType::Go)).await.unwrap();

        let bob = normal("bob");
        join(&f, &owned.id, &bob, vec![AppMemberRole::Developer, AppMemberRole::Manager]).await;
        join(&f, &dev.id, &bob, vec![AppMemberRole::Developer]).await;

        let page = f.apps.page(&bob, AppPageQuery::default()).await.unwrap();
        assert_eq!(page.item_count, 2);

        let by_name: HashMap<_, _> = page.items.iter().map(|a| (a.app_name.as_str(), a)).collect();
        assert!(by_name["owned"].modify_rights && by_name["owned"].delete_rights);
        assert!(!by_name["dev"].modify_rights && !by_name["dev"].delete_rights);
        assert!(!by_name.contains_key("hidden"));
    }

    #[tokio::test]
    async fn page_filters_by_name_and_language() {
        let f = fixture().await;
        f.apps.create(&admin(), new_app("order-api", LanguageType::Java)).await.unwrap();
        f.apps.create(&admin(), new_app("order-web", LanguageType::Html)).await.unwrap();
        f.apps.create(&admin(), new_app("user-api", LanguageType::Java)).await.unwrap();

        let query = AppPageQuery {
            app_name: Some("order".into()),
            language_type: Some(LanguageType::Java),
            page: PageQuery::default(),
        };
        let page = f.apps.page(&admin(), query).await.unwrap();
        assert_eq!(page.item_count, 1);
        assert_eq!(page.items[0].app_name, "order-api");
    }

    #[tokio::test]
    async fn page_paginates() {
        let f = fixture().await;
        for i in 0..5 {
            f.apps
                .create(&admin(), new_app(&format!("app-{}", i), LanguageType::Go))
                .await
                .unwrap();
        }
        let query = AppPageQuery {
            page: PageQuery::new(2, 2),
            ..Default::default()
        };
        let page = f.apps.page(&admin(), query).await.unwrap();
        assert_eq!(page.item_count, 5);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.page_num, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn query_requires_membership_for_normal_users() {
        let f = fixture().await;
        let app = f.apps.create(&admin(), new_app("svc", LanguageType::Go)).await.unwrap();
        let bob = normal("bob");

        assert!(f.apps.query(&bob, None).await.unwrap().is_none());
        assert!(f.apps.query(&bob, Some(&app.id)).await.unwrap().is_none());
        assert!(f.apps.query(&admin(), Some(&app.id)).await.unwrap().is_some());

        join(&f, &app.id, &bob, vec![AppMemberRole::Tester]).await;
        let seen = f.apps.query(&bob, Some(&app.id)).await.unwrap().unwrap();
        assert_eq!(seen.app_name, "svc");
    }

    #[tokio::test]
    async fn java_apps_carry_extension() {
        let f = fixture().await;
        let mut dto = new_app("java-svc", LanguageType::Java);
        dto.extend_java = Some(CreateAppExtendJava {
            package_build_type: PackageBuildType::Gradle,
            jvm_args: Some("-Xmx512m".into()),
            ..Default::default()
        });
        let created = f.apps.create(&admin(), dto).await.unwrap();
        assert!(created.java_extend().is_some());

        let loaded = f.apps.query_with_extend_by_id(&created.id).await.unwrap().unwrap();
        let ext = loaded.java_extend().unwrap();
        assert_eq!(ext.package_build_type, PackageBuildType::Gradle);
        assert_eq!(ext.jvm_args.as_deref(), Some("-Xmx512m"));

        let go = f.apps.create(&admin(), new_app("go-svc", LanguageType::Go)).await.unwrap();
        let loaded = f.apps.query_with_extend_by_id(&go.id).await.unwrap().unwrap();
        assert!(loaded.app_extend.is_none());
    }

    #[tokio::test]
    async fn query_with_extend_for_is_permission_filtered() {
        let f = fixture().await;
        let app = f.apps.create(&admin(), new_app("java-svc", LanguageType::Java)).await.unwrap();
        let bob = normal("bob");

        assert!(f.apps.query_with_extend_for(&bob, &app.id).await.unwrap().is_none());
        join(&f, &app.id, &bob, vec![AppMemberRole::Developer]).await;
        let loaded = f.apps.query_with_extend_for(&bob, &app.id).await.unwrap().unwrap();
        assert!(loaded.java_extend().is_some());
    }

    #[tokio::test]
    async fn duplicate_or_blank_name_rejected() {
        let f = fixture().await;
        f.apps.create(&admin(), new_app("svc", LanguageType::Go)).await.unwrap();
        let err = f.apps.create(&admin(), new_app("svc", LanguageType::Go)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        let err = f.apps.create(&admin(), new_app("  ", LanguageType::Go)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        assert!(f.apps.query_by_app_name("svc").await.unwrap().is_some());
        assert!(f.apps.query_by_app_name("sv").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn normal_creator_becomes_admin_member() {
        let f = fixture().await;
        let bob = normal("bob");
        let app = f.apps.create(&bob, new_app("svc", LanguageType::Go)).await.unwrap();
        assert!(app.modify_rights && app.delete_rights);

        let member = f
            .members
            .query_by_login_name_and_app_id("bob", &app.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(member.roles, vec![AppMemberRole::Admin]);
        assert!(f.apps.has_operating_rights(&bob, &app.id).await.unwrap());

        let by_admin = f.apps.create(&admin(), new_app("other", LanguageType::Go)).await.unwrap();
        assert!(by_admin.modify_rights);
        assert!(f.members.list_by_user_id(&admin().id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_membership_rolls_back_the_app() {
        let f = fixture().await;
        let nameless = LoginUser {
            login_name: String::new(),
            ..normal("ghost")
        };
        let err = f
            .apps
            .create(&nameless, new_app("orphan", LanguageType::Java))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(f.apps.query_by_app_name("orphan").await.unwrap().is_none());

        // nothing left behind blocks the name
        f.apps.create(&admin(), new_app("orphan", LanguageType::Java)).await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_creates_with_one_name_keep_one_app() {
        let f = fixture().await;
        let root = admin();
        let (a, b) = tokio::join!(
            f.apps.create(&root, new_app("dup", LanguageType::Go)),
            f.apps.create(&root, new_app("dup", LanguageType::Go)),
        );
        assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert!(matches!(a.err().or(b.err()), Some(DomainError::Conflict(_))));

        let rows = live_apps()
            .filter(app::Column::AppName.eq("dup"))
            .all(&f.apps.db)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn store_rejects_second_live_app_with_same_name() {
        let f = fixture().await;
        let first = f.apps.create(&admin(), new_app("svc", LanguageType::Go)).await.unwrap();

        let now = Utc::now();
        let row = |id: &str, deleted: bool| app::ActiveModel {
            id: Set(id.into()),
            app_name: Set("svc".into()),
            language_type: Set(LanguageType::Go.code()),
            code_repo_path: Set(None),
            description: Set(None),
            deleted: Set(deleted),
            creation_time: Set(now),
            update_time: Set(now),
        };

        let err = row("live-copy", false)
            .insert(&f.apps.db)
            .await
            .map_err(db_err)
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // deleted rows do not count
        row("old-copy", true).insert(&f.apps.db).await.unwrap();
        assert_eq!(
            f.apps.query_by_app_name("svc").await.unwrap().unwrap().id,
            first.id
        );
    }

    #[tokio::test]
    async fn operating_rights_rules() {
        let f = fixture().await;
        let app = f.apps.create(&admin(), new_app("svc", LanguageType::Go)).await.unwrap();
        let owner = normal("owner");
        let dev = normal("dev");
        let stranger = normal("stranger");
        join(&f, &app.id, &owner, vec![AppMemberRole::Admin]).await;
        join(&f, &app.id, &dev, vec![AppMemberRole::Developer, AppMemberRole::Operator]).await;

        assert!(f.apps.has_operating_rights(&admin(), &app.id).await.unwrap());
        assert!(f.apps.has_operating_rights(&owner, &app.id).await.unwrap());
        assert!(!f.apps.has_operating_rights(&dev, &app.id).await.unwrap());
        assert!(!f.apps.has_operating_rights(&stranger, &app.id).await.unwrap());

        let err = f.apps.has_operating_rights(&owner, "").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        let err = f.apps.has_operating_rights(&admin(), "missing").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_requires_rights() {
        let f = fixture().await;
        let app = f.apps.create(&admin(), new_app("svc", LanguageType::Go)).await.unwrap();
        let dev = normal("dev");
        join(&f, &app.id, &dev, vec![AppMemberRole::Developer]).await;

        let dto = UpdateApp {
            id: app.id.clone(),
            description: Some("payments backend".into()),
            ..Default::default()
        };
        let err = f.apps.update(&dev, dto.clone()).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        assert!(f.apps.update(&admin(), dto).await.unwrap());
        let loaded = f.apps.query(&admin(), Some(&app.id)).await.unwrap().unwrap();
        assert_eq!(loaded.description.as_deref(), Some("payments backend"));
        assert_eq!(loaded.app_name, "svc");
    }

    #[tokio::test]
    async fn rename_to_taken_name_is_conflict() {
        let f = fixture().await;
        let a = f.apps.create(&admin(), new_app("a", LanguageType::Go)).await.unwrap();
        f.apps.create(&admin(), new_app("b", LanguageType::Go)).await.unwrap();

        let err = f
            .apps
            .update(
                &admin(),
                UpdateApp {
                    id: a.id.clone(),
                    app_name: Some("b".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_is_logical_and_drops_members() {
        let f = fixture().await;
        let app = f.apps.create(&admin(), new_app("svc", LanguageType::Go)).await.unwrap();
        let owner = normal("owner");
        join(&f, &app.id, &owner, vec![AppMemberRole::Manager]).await;

        join(&f, &app.id, &normal("tester"), vec![AppMemberRole::Tester]).await;

        assert!(f.apps.delete(&owner, &app.id).await.unwrap());
        assert!(f.members.list_by_user_id("u-tester").await.unwrap().is_empty());

        assert!(f.apps.query(&admin(), Some(&app.id)).await.unwrap().is_none());
        assert!(f.apps.query_by_app_name("svc").await.unwrap().is_none());
        assert!(f
            .members
            .query_by_login_name_and_app_id("owner", &app.id)
            .await
            .unwrap()
            .is_none());

        let err = f.apps.delete(&admin(), &app.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        // the name is free again
        f.apps.create(&admin(), new_app("svc", LanguageType::Go)).await.unwrap();
    }

    #[tokio::test]
    async fn delete_without_rights_is_forbidden() {
        let f = fixture().await;
        let app = f.apps.create(&admin(), new_app("svc", LanguageType::Go)).await.unwrap();
        let err = f.apps.delete(&normal("bob"), &app.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        assert!(f.apps.query_by_app_name("svc").await.unwrap().is_some());
    }
}
