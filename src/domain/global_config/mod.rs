//! Global configuration aggregate
//!
//! Each row stores one JSON-encoded item tagged by its item type. The
//! aggregate view decodes every row into a typed slot.

pub mod model;
pub mod repository;

pub use model::{
    CodeRepo, EnvTemplate, GlobalConfigAgg, GlobalConfigItem, GlobalConfigItemType,
    GlobalConfigQuery, GlobalConfigRow, GlobalConfigUpdate, ImageRepo, Ldap, Maven,
    TraceTemplate,
};
pub use repository::GlobalConfigRepository;
