// --- File: crates/calendra_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. "sqlite:data/calendra.db", or "secret_from_env" -> DATABASE_URL
}

// --- Slots Config ---
/// Defaults used by the availability computation when an event type does
/// not carry its own schedule values.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SlotsConfig {
    /// IANA time zone the working hours are expressed in.
    pub default_time_zone: String,
    /// "HH:MM"
    pub work_start_time: String,
    /// "HH:MM"
    pub work_end_time: String,
    /// Three letter day names, "Mon" .. "Sun".
    pub working_days: Vec<String>,
    pub minimum_booking_notice_minutes: i64,
    /// Largest window a single slots query may span.
    pub max_range_days: i64,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            default_time_zone: "UTC".to_string(),
            work_start_time: "09:00".to_string(),
            work_end_time: "17:00".to_string(),
            working_days: ["Mon", "Tue", "Wed", "Thu", "Fri"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            minimum_booking_notice_minutes: 120,
            max_range_days: 62,
        }
    }
}

// --- Event Types Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct EventTypesConfig {
    /// Seat count applied when seats get enabled on an event type without one.
    pub default_seats_per_time_slot: u32,
    pub max_seats_per_time_slot: u32,
}

impl Default for EventTypesConfig {
    fn default() -> Self {
        Self {
            default_seats_per_time_slot: 5,
            max_seats_per_time_slot: 1000,
        }
    }
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String, // trace | debug | info | warn | error
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_database: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub slots: SlotsConfig,
    #[serde(default)]
    pub event_types: EventTypesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
