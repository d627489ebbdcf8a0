use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};
use tracing::{info, warn};

use super::db_err;
use crate::domain::{
    DomainError, DomainResult, GlobalConfigAgg, GlobalConfigItem, GlobalConfigItemType,
    GlobalConfigQuery, GlobalConfigRepository, GlobalConfigRow, GlobalConfigUpdate,
};
use crate::infrastructure::database::entities::global_config;
use crate::shared::InfraError;

pub struct SeaOrmGlobalConfigRepository {
    db: DatabaseConnection,
}

impl SeaOrmGlobalConfigRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn config_model_to_domain(model: global_config::Model) -> DomainResult<GlobalConfigRow> {
    let item_type = GlobalConfigItemType::from_code(model.item_type).ok_or_else(|| {
        DomainError::Storage(format!(
            "Unknown global config item type {} on row {}",
            model.item_type, model.id
        ))
    })?;

    Ok(GlobalConfigRow {
        id: model.id,
        item_type,
        item_value: model.item_value.unwrap_or_default(),
        creation_time: model.creation_time,
        update_time: model.update_time,
    })
}

fn encode(item: &GlobalConfigItem) -> DomainResult<String> {
    item.to_json()
        .map_err(|e| InfraError::Serialization(e).into())
}

/// Rows that have not been logically deleted
fn live_configs() -> Select<global_config::Entity> {
    global_config::Entity::find().filter(global_config::Column::Deleted.eq(false))
}

#[async_trait]
impl GlobalConfigRepository for SeaOrmGlobalConfigRepository {
    async fn query_by_item_type(
        &self,
        item_type: GlobalConfigItemType,
    ) -> DomainResult<Option<GlobalConfigRow>> {
        let model = live_configs()
            .filter(global_config::Column::ItemType.eq(item_type.code()))
            .order_by_asc(global_config::Column::CreationTime)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        model.map(config_model_to_domain).transpose()
    }

    async fn query_agg(&self, query: GlobalConfigQuery) -> DomainResult<GlobalConfigAgg> {
        let mut select = live_configs();
        if let Some(item_type) = query.item_type {
            select = select.filter(global_config::Column::ItemType.eq(item_type.code()));
        }
        if let Some(ids) = query.ids {
            select = select.filter(global_config::Column::Id.is_in(ids));
        }

        let models = select
            .order_by_asc(global_config::Column::CreationTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut agg = GlobalConfigAgg::default();
        for model in models {
            if model.item_value.as_deref().map_or(true, |v| v.trim().is_empty()) {
                continue;
            }
            let row = match config_model_to_domain(model) {
                Ok(row) => row,
                Err(e) => {
                    warn!(error = %e, "Skipping global config row");
                    continue;
                }
            };
            let item = GlobalConfigItem::from_json(row.item_type, &row.item_value)
                .map_err(|e| -> DomainError { InfraError::Serialization(e).into() })?;
            agg.absorb(&row, item);
        }

        Ok(agg)
    }

    async fn add(&self, item: GlobalConfigItem) -> DomainResult<GlobalConfigRow> {
        let item_type = item.item_type();
        if item_type.is_singleton() && self.query_by_item_type(item_type).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Global config {} already exists",
                item_type
            )));
        }

        let now = Utc::now();
        let row = global_config::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            item_type: Set(item_type.code()),
            item_value: Set(Some(encode(&item)?)),
            deleted: Set(false),
            creation_time: Set(now),
            update_time: Set(now),
        };

        let model = row.insert(&self.db).await.map_err(db_err)?;
        info!(id = %model.id, item_type = %item_type, "Global config added");
        config_model_to_domain(model)
    }

    async fn save_singleton(&self, item: GlobalConfigItem) -> DomainResult<GlobalConfigRow> {
        let item_type = item.item_type();
        if !item_type.is_singleton() {
            return Err(DomainError::Validation(format!(
                "{} is not a singleton config item",
                item_type
            )));
        }

        let existing = live_configs()
            .filter(global_config::Column::ItemType.eq(item_type.code()))
            .order_by_asc(global_config::Column::CreationTime)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return self.add(item).await;
        };

        let mut active: global_config::ActiveModel = existing.into();
        active.item_value = Set(Some(encode(&item)?));
        active.update_time = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(db_err)?;
        config_model_to_domain(model)
    }

    async fn update(&self, dto: GlobalConfigUpdate) -> DomainResult<bool> {
        if dto.id.is_none() && dto.item_type.is_none() {
            return Err(DomainError::Validation(
                "Either id or item type is required to update a global config".to_string(),
            ));
        }
        let payload_type = dto.item.item_type();
        if let Some(item_type) = dto.item_type {
            if item_type != payload_type {
                return Err(DomainError::Validation(format!(
                    "Item of type {} cannot be stored as {}",
                    payload_type, item_type
                )));
            }
        }

        if let Some(id) = dto.id.as_deref() {
            let existing = live_configs()
                .filter(global_config::Column::Id.eq(id))
                .one(&self.db)
                .await
                .map_err(db_err)?;
            let Some(existing) = existing else {
                return Ok(false);
            };
            if existing.item_type != payload_type.code() {
                return Err(DomainError::Validation(format!(
                    "Global config {} holds item type {}, not {}",
                    id, existing.item_type, payload_type
                )));
            }
        }

        // The payload type always guards the write, whichever key selected the row.
        let mut update = global_config::Entity::update_many()
            .col_expr(global_config::Column::ItemValue, Expr::value(encode(&dto.item)?))
            .col_expr(global_config::Column::UpdateTime, Expr::value(Utc::now()))
            .filter(global_config::Column::Deleted.eq(false))
            .filter(global_config::Column::ItemType.eq(payload_type.code()));

        if let Some(id) = dto.id.as_deref() {
            update = update.filter(global_config::Column::Id.eq(id));
        }

        let result = update.exec(&self.db).await.map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let result = global_config::Entity::update_many()
            .col_expr(global_config::Column::Deleted, Expr::value(true))
            .col_expr(global_config::Column::UpdateTime, Expr::value(Utc::now()))
            .filter(global_config::Column::Id.eq(id))
            .filter(global_config::Column::Deleted.eq(false))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }
}
