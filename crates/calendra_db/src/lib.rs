//! Database integration for Calendra
//!
//! SQLx-backed repositories for event types and bookings, plus in-memory
//! implementations of the same traits for deployments without a database
//! and for tests.
//!
//! # Features
//!
//! - `sqlite` (default), `postgres`, `mysql`: the SQLx drivers to link
//!
//! # Example
//!
//! ```rust,no_run
//! use calendra_db::{DbClient, SqlEventTypeRepository};
//!
//! async fn setup() -> Result<SqlEventTypeRepository, calendra_db::DbError> {
//!     let client = DbClient::from_url("sqlite::memory:").await?;
//!     let repo = SqlEventTypeRepository::new(client);
//!     repo.init_schema().await?;
//!     Ok(repo)
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;

pub use client::DbClient;
pub use error::DbError;
pub use factory::{DbRepositoryFactory, MemoryRepositoryFactory};
pub use repositories::{
    MemoryBookingRepository, MemoryEventTypeRepository, SqlBookingRepository,
    SqlEventTypeRepository,
};
