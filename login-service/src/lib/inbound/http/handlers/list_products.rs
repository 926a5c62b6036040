use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ProductData;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<ProductData>>), ApiError> {
    let products = state.product_service.list_products().await?;

    let data = products.iter().map(ProductData::from).collect();
    Ok((StatusCode::OK, Json(data)))
}
