// File: crates/services/calendra_backend/src/app.rs
//! Assembles the HTTP application: every feature router nested under `/api`,
//! request tracing, CORS and, with the `openapi` feature, Swagger UI.

use axum::{routing::get, Router};
use calendra_slots::SlotsModule;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app_state::AppState;
use crate::error::StartupError;

pub fn build_app(state: &AppState) -> Result<Router, StartupError> {
    let slots_module = SlotsModule::new(
        state.repositories.event_types(),
        state.repositories.bookings(),
        &state.config,
    )?;

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Calendra API!" }))
        .merge(calendra_common::routes())
        .merge(calendra_event_types::routes(
            state.repositories.event_types(),
            state.config.clone(),
        ))
        .merge(slots_module.routes());

    #[allow(unused_mut)] // only reassigned with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    #[cfg(feature = "openapi")]
    {
        use calendra_event_types::doc::EventTypesApiDoc;
        use calendra_slots::doc::SlotsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Calendra API",
                version = "0.1.0",
                description = "Event types, availability and bookings",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Calendra", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(EventTypesApiDoc::openapi());
        openapi_doc.merge(SlotsApiDoc::openapi());
        info!("📖 Adding Swagger UI at /api/docs");

        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    info!("Routes mounted under /api");
    Ok(app
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}
