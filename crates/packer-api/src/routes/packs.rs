//! # Pack Size Registry API
//!
//! Manages the catalogue of pack sizes orders are planned against.
//!
//! | Method | Path | Effect |
//! |--------|------|--------|
//! | `POST` | `/pack` | Add a batch of sizes |
//! | `DELETE` | `/pack/{size}` | Remove one size |
//! | `DELETE` | `/packs` | Remove every size |
//! | `GET` | `/packs` | List sizes in insertion order |

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{parse_path_int, parse_validated_json, Validate};
use crate::state::AppState;

/// Request body for `POST /pack`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SizePayload {
    #[serde(default)]
    pub sizes: Vec<i64>,
}

impl Validate for SizePayload {
    fn validate(&self) -> Result<(), String> {
        if self.sizes.is_empty() {
            return Err("pack size must be positive".to_string());
        }
        Ok(())
    }
}

/// Acknowledgement body for successful mutations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusBody {
    pub status: String,
}

impl StatusBody {
    fn success() -> Json<Self> {
        Json(Self {
            status: "success".to_string(),
        })
    }
}

/// Response body for `GET /packs`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SizesResponse {
    pub sizes: Vec<u64>,
}

/// Build the packs router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pack", post(add_sizes).delete(missing_size))
        .route("/pack/", delete(missing_size))
        .route("/pack/{size}", delete(remove_size))
        .route("/packs", get(list_sizes).delete(remove_all))
}

/// POST /pack: Register a batch of pack sizes.
#[utoipa::path(
    post,
    path = "/pack",
    request_body = SizePayload,
    responses(
        (status = 201, description = "Sizes stored", body = StatusBody),
        (status = 400, description = "Malformed body or empty list", body = crate::error::ErrorBody),
        (status = 500, description = "Registry rejected the batch", body = crate::error::ErrorBody),
    ),
    tag = "packs"
)]
pub async fn add_sizes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusBody>), AppError> {
    let payload: SizePayload = parse_validated_json(&body)?;
    let added = state.store.add_sizes(&payload.sizes)?;
    tracing::info!(requested = payload.sizes.len(), added, "pack sizes added");
    Ok((StatusCode::CREATED, StatusBody::success()))
}

/// DELETE /pack/{size}: Remove one pack size.
#[utoipa::path(
    delete,
    path = "/pack/{size}",
    params(("size" = String, Path, description = "Pack size to remove")),
    responses(
        (status = 200, description = "Size removed", body = StatusBody),
        (status = 400, description = "Missing, non-numeric or non-positive size", body = crate::error::ErrorBody),
        (status = 500, description = "Size not registered", body = crate::error::ErrorBody),
    ),
    tag = "packs"
)]
pub async fn remove_size(
    State(state): State<AppState>,
    Path(size): Path<String>,
) -> Result<Json<StatusBody>, AppError> {
    let size = parse_path_int(&size)?;
    if size <= 0 {
        return Err(AppError::BadRequest(
            "you must provide a positive value".to_string(),
        ));
    }
    state.store.remove_size(size)?;
    tracing::info!(size, "pack size removed");
    Ok(StatusBody::success())
}

/// DELETE /packs: Remove every pack size.
#[utoipa::path(
    delete,
    path = "/packs",
    responses((status = 200, description = "Registry cleared", body = StatusBody)),
    tag = "packs"
)]
pub async fn remove_all(State(state): State<AppState>) -> Json<StatusBody> {
    state.store.remove_all();
    tracing::info!("pack sizes cleared");
    StatusBody::success()
}

/// GET /packs: List registered pack sizes.
#[utoipa::path(
    get,
    path = "/packs",
    responses((status = 200, description = "Registered sizes", body = SizesResponse)),
    tag = "packs"
)]
pub async fn list_sizes(State(state): State<AppState>) -> Json<SizesResponse> {
    let sizes = state.store.list_sizes().into_iter().map(|s| s.get()).collect();
    Json(SizesResponse { sizes })
}

async fn missing_size() -> AppError {
    AppError::BadRequest("you must provide a size value".to_string())
}
