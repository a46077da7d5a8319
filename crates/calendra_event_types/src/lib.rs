//! Event type management for Calendra.
//!
//! Besides plain CRUD this crate computes the view models of the event type
//! editor: the "offer seats" toggle of the advanced tab, the lock state of
//! fields on managed event types and the editor's navigation tabs.

pub mod doc;
pub mod error;
pub mod handlers;
pub mod locale;
pub mod locked_fields;
pub mod routes;
pub mod seats;
#[cfg(test)]
mod seats_test;
pub mod service;
pub mod tabs;
#[cfg(test)]
mod tabs_test;

pub use error::EventTypeError;
pub use locale::{EnglishTranslator, Translator};
pub use locked_fields::LockedFieldsManager;
pub use routes::routes;
pub use service::EventTypeService;
