// --- File: crates/services/calendra_backend/src/service_factory.rs ---
//! Picks the persistence layer for the running server.
//!
//! With `use_database` set and a `[database]` section present the SQL
//! repositories are used, otherwise everything lives in memory.
use calendra_common::features::is_database_enabled;
use calendra_common::log_result;
use calendra_common::services::RepositoryFactory;
use calendra_config::AppConfig;
use calendra_db::{DbClient, DbRepositoryFactory, MemoryRepositoryFactory};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::StartupError;

pub async fn build_repositories(
    config: &AppConfig,
) -> Result<Arc<dyn RepositoryFactory>, StartupError> {
    if is_database_enabled(config) {
        info!("ℹ️ Initializing SQL repositories...");
        let client = DbClient::new(config).await?;
        if !client.is_healthy().await {
            warn!("Database did not answer the health check");
        }
        let factory = log_result(
            DbRepositoryFactory::new(client).await,
            "✅ SQL repositories initialized",
            "❌ Failed to initialize SQL repositories",
        )?;
        return Ok(Arc::new(factory));
    }

    if config.use_database {
        warn!("use_database is set but the [database] section is missing; using memory storage");
    } else {
        info!("ℹ️ Database disabled, using in-memory repositories");
    }
    Ok(Arc::new(MemoryRepositoryFactory::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendra_config::DatabaseConfig;

    #[tokio::test]
    async fn test_memory_repositories_by_default() {
        let config = AppConfig::default();
        let repositories = build_repositories(&config).await.unwrap();
        let all = repositories.event_types().list().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_sql_repositories_when_enabled() {
        let config = AppConfig {
            use_database: true,
            database: Some(DatabaseConfig {
                url: "sqlite::memory:".to_string(),
            }),
            ..AppConfig::default()
        };
        let repositories = build_repositories(&config).await.unwrap();
        assert!(repositories.bookings().find_by_uid("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_database_url_fails() {
        let config = AppConfig {
            use_database: true,
            database: Some(DatabaseConfig { url: String::new() }),
            ..AppConfig::default()
        };
        assert!(matches!(
            build_repositories(&config).await,
            Err(StartupError::Database(_))
        ));
    }
}
