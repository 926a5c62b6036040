use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.product_service.delete_product(product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
