use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ProductData;
use crate::domain::product::models::ProductDraft;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductData>), ApiError> {
    let product = state
        .product_service
        .create_product(body.into_draft())
        .await?;

    tracing::info!(
        product_id = product.id,
        subject = %principal.subject,
        "Product created"
    );

    Ok((StatusCode::CREATED, Json(ProductData::from(&product))))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProductRequest {
    name: String,
    price: i64,
    quantity: i32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
}

impl CreateProductRequest {
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
