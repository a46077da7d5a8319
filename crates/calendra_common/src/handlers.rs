// --- File: crates/calendra_common/src/handlers.rs ---

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;
use crate::slugify::slugify;

#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugifyQuery {
    pub value: String,
    #[serde(default)]
    pub for_displaying_input: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize, Deserialize)]
pub struct SlugResponse {
    pub slug: String,
}

/// Liveness check.
pub async fn health_handler() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("ok"))
}

/// Previews the slug a title would get.
pub async fn slugify_handler(Query(query): Query<SlugifyQuery>) -> Json<ApiResponse<SlugResponse>> {
    Json(ApiResponse::success(SlugResponse {
        slug: slugify(&query.value, query.for_displaying_input),
    }))
}
