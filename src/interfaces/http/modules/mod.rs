//! REST modules, one per resource

use std::sync::Arc;

use crate::domain::RepositoryProvider;

pub mod apps;
pub mod global_configs;
pub mod health;

/// State shared by the authenticated resource routes
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
}
