use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ProductData;
use crate::inbound::http::router::AppState;

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<(StatusCode, Json<ProductData>), ApiError> {
    state
        .product_service
        .get_product(product_id)
        .await
        .map_err(ApiError::from)
        .map(|ref product| (StatusCode::OK, Json(product.into())))
}
