use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ProductData;
use crate::domain::product::models::ProductDraft;
use crate::inbound::http::router::AppState;

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<(StatusCode, Json<ProductData>), ApiError> {
    let product = state
        .product_service
        .update_product(product_id, body.into_draft())
        .await?;

    Ok((StatusCode::OK, Json(ProductData::from(&product))))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProductRequest {
    name: String,
    price: i64,
    quantity: i32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
}

impl UpdateProductRequest {
    fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
            category: self.category,
        }
    }
}
