// --- File: crates/calendra_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::warn;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Directory holding `default.toml` and the per-environment overrides.
///
/// `CALENDRA_CONFIG_DIR` wins; otherwise the workspace `config/` folder.
pub fn config_dir() -> PathBuf {
    env::var("CALENDRA_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../config")))
}

/// Loads the layered configuration: `default`, then `$RUN_ENV`, then the environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();
    let dir = config_dir();

    let default_path = dir.join("default");
    let env_path = dir.join(&run_env);

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .prefix_separator(env_vars::CONFIG_SEPARATOR)
                .separator(env_vars::CONFIG_SEPARATOR),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Replaces all `"secret_from_env"` values with their environment variable values.
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    for path in env_vars::inject_env_secrets(&mut json) {
        warn!("No environment value found for secret config key {}", path);
    }
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file once per process and returns the path that was used.
///
/// `DOTENV_OVERRIDE` selects the file, then a first CLI argument starting
/// with `.env`, then `.env`.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_usable() {
        let config = AppConfig::default();
        assert!(!config.use_database);
        assert!(config.database.is_none());
        assert_eq!(config.slots.default_time_zone, "UTC");
        assert_eq!(config.slots.working_days.len(), 5);
        assert_eq!(config.event_types.default_seats_per_time_slot, 5);
        assert_eq!(config.event_types.max_seats_per_time_slot, 1000);
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": { "host": "0.0.0.0", "port": 9000 },
            "slots": { "default_time_zone": "Europe/Zurich" }
        }))
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.slots.default_time_zone, "Europe/Zurich");
        assert_eq!(config.slots.work_start_time, "09:00");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_config_reads_workspace_defaults() {
        let config = load_config().expect("workspace config should load");
        assert!(!config.server.host.is_empty());
        assert!(config.slots.max_range_days > 0);
    }
}
