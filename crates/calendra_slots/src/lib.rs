// Declare modules within this crate
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod module;
pub mod output;
pub mod repository;
pub mod service;

pub use error::SlotsError;
pub use module::SlotsModule;
pub use service::SlotsService;
