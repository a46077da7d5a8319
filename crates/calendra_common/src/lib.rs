// --- File: crates/calendra_common/src/lib.rs ---

pub mod error; // Error handling
pub mod features; // Runtime feature flags
pub mod handlers; // Shared HTTP handlers
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod response; // API response envelope
pub mod routes; // Shared routes
pub mod services; // Repository abstractions
pub mod slugify; // Slug generation

pub use routes::routes;

pub use error::{
    conflict, forbidden, internal_error, not_found, validation_error, CalendraError,
    HttpStatusCode,
};

pub use logging::{init, init_with_level, log_result};

pub use response::{ApiResponse, ERROR_STATUS, SUCCESS_STATUS};

pub use features::is_feature_enabled;

pub use slugify::slugify;
