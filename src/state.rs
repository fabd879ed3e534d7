// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            metrics: MetricsManager::new(),
        }
    }
}
