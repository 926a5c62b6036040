use thiserror::Error;

/// Top-level error for product operations.
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}
