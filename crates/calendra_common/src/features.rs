//! Runtime feature flags.
//!
//! Compile-time features (`openapi`) are handled with `#[cfg]`; this module
//! covers switches that come from configuration.

use calendra_config::AppConfig;

/// A feature is on when its flag is set and its config section is present.
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Whether the SQL persistence layer should be used.
pub fn is_database_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_database, config.database.as_ref())
}
