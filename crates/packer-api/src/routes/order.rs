//! # Order Planning API
//!
//! `GET /order/{items}` returns the pack plan for an order as a JSON object
//! keyed by pack size: `{"250":1,"5000":2}`.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use packer_core::PackPlan;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::parse_path_int;
use crate::state::AppState;

/// Pack plan: pack size (as a string key) to number of packs.
#[derive(Debug, ToSchema)]
#[schema(as = OrderPlan, example = json!({"250": 1, "5000": 2}))]
pub struct PlanSchema(pub BTreeMap<String, u64>);

/// Build the order router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order", get(missing_items))
        .route("/order/", get(missing_items))
        .route("/order/{items}", get(get_order))
}

/// GET /order/{items}: Plan an order.
#[utoipa::path(
    get,
    path = "/order/{items}",
    params(("items" = String, Path, description = "Number of items ordered")),
    responses(
        (status = 200, description = "Pack plan", body = PlanSchema),
        (status = 400, description = "Invalid quantity or no pack sizes", body = crate::error::ErrorBody),
    ),
    tag = "order"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(items): Path<String>,
) -> Result<Json<PackPlan>, AppError> {
    let quantity = parse_path_int(&items)?;

    let orders = state.orders.clone();
    let plan = tokio::task::spawn_blocking(move || orders.compute_order(quantity))
        .await
        .map_err(|e| AppError::Internal(format!("order task failed: {e}")))??;

    Ok(Json(plan))
}

/// GET /order: Rejects a request without a quantity.
async fn missing_items() -> AppError {
    AppError::BadRequest("you must provide a number of items".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app(sizes: &[i64]) -> Router {
        let state = AppState::new();
        state.store.add_sizes(sizes).unwrap();
        router().with_state(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn plans_order() {
        let app = test_app(&[250, 500, 1000, 2000, 5000]);
        let (status, body) = get_json(app, "/order/501").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"250": 1, "500": 1}));
    }

    #[tokio::test]
    async fn non_numeric_items() {
        let (status, body) = get_json(test_app(&[250]), "/order/test").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "please provide a numeric value");
    }

    #[tokio::test]
    async fn missing_items_both_forms() {
        for uri in ["/order", "/order/"] {
            let (status, body) = get_json(test_app(&[250]), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "you must provide a number of items");
        }
    }

    #[tokio::test]
    async fn empty_catalogue() {
        let (status, body) = get_json(test_app(&[]), "/order/10").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "you must first add some packaging sizes");
    }
}
