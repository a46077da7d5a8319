// --- File: crates/calendra_common/src/routes.rs ---

use axum::{routing::get, Router};

use crate::handlers::{health_handler, slugify_handler};

/// Routes shared by every deployment: health check and slug preview.
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/slugify", get(slugify_handler))
}
