use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod login;
pub mod update_product;

/// Error responder shared by every handler: a status code and an
/// `{"error": ...}` JSON body, matching what the authentication filter
/// writes. Internal detail stays in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProductError::Validation(_) => ApiError::BadRequest(err.to_string()),
            ProductError::Database(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Wire representation of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductData {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: product.quantity,
            description: product.description.clone(),
            category: product.category.clone(),
            created_at: product.created_at,
        }
    }
}
