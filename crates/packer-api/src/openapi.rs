//! # OpenAPI Specification Assembly
//!
//! Collects the utoipa-documented routes into one OpenAPI 3.1 document
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Packer API",
        version = "0.1.0",
        description = "Plans the packs needed to ship an order and manages the pack size catalogue.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::order::get_order,
        crate::routes::packs::add_sizes,
        crate::routes::packs::remove_size,
        crate::routes::packs::remove_all,
        crate::routes::packs::list_sizes,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::routes::order::PlanSchema,
        crate::routes::packs::SizePayload,
        crate::routes::packs::StatusBody,
        crate::routes::packs::SizesResponse,
    )),
    tags(
        (name = "order", description = "Order planning"),
        (name = "packs", description = "Pack size catalogue"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
