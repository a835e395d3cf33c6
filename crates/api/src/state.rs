use std::sync::Arc;

use student_core::creator::{AcceptAll, StudentCreator};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (body limit, timeouts).
    pub config: Arc<ServerConfig>,
    /// Business step run after a create request has been decoded.
    pub creator: Arc<dyn StudentCreator>,
}

impl AppState {
    /// State with the given configuration and the [`AcceptAll`] creator.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_creator(config, Arc::new(AcceptAll))
    }

    pub fn with_creator(config: ServerConfig, creator: Arc<dyn StudentCreator>) -> Self {
        Self {
            config: Arc::new(config),
            creator,
        }
    }
}
