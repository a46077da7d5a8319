// --- File: crates/services/calendra_backend/src/app_state.rs ---
use calendra_common::services::RepositoryFactory;
use calendra_config::AppConfig;
use std::sync::Arc;

use crate::error::StartupError;
use crate::service_factory::build_repositories;

/// Shared state handed to every feature router at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repositories: Arc<dyn RepositoryFactory>,
}

impl AppState {
    pub fn with_repositories(
        config: Arc<AppConfig>,
        repositories: Arc<dyn RepositoryFactory>,
    ) -> Self {
        Self {
            config,
            repositories,
        }
    }

    /// Opens the configured repositories.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, StartupError> {
        let repositories = build_repositories(&config).await?;
        Ok(Self::with_repositories(config, repositories))
    }
}
