use calendra_db::DbError;
use calendra_slots::SlotsError;
use thiserror::Error;

/// Everything that can stop the server before it starts listening.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Failed to load config: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to open repositories: {0}")]
    Database(#[from] DbError),
    #[error("Failed to build slots module: {0}")]
    Slots(#[from] SlotsError),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
