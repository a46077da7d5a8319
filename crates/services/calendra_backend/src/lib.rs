// File: crates/services/calendra_backend/src/lib.rs

pub mod app;
pub mod app_state;
pub mod error;
pub mod service_factory;

pub use app::build_app;
pub use app_state::AppState;
pub use error::StartupError;
