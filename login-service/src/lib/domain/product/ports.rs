use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;

/// Port for product domain operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a product from a validated draft.
    ///
    /// # Errors
    /// * `Validation` - draft fields violate a format rule
    /// * `Database` - storage operation failed
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Retrieve a product by id.
    ///
    /// # Errors
    /// * `NotFound` - no such product
    /// * `Database` - storage operation failed
    async fn get_product(&self, id: i64) -> Result<Product, ProductError>;

    /// Retrieve all products.
    ///
    /// # Errors
    /// * `Database` - storage operation failed
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Replace a product's fields with a new draft.
    ///
    /// # Errors
    /// * `NotFound` - no such product
    /// * `Validation` - draft fields violate a format rule
    /// * `Database` - storage operation failed
    async fn update_product(&self, id: i64, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Delete a product.
    ///
    /// # Errors
    /// * `NotFound` - no such product
    /// * `Database` - storage operation failed
    async fn delete_product(&self, id: i64) -> Result<(), ProductError>;
}

/// Persistence operations for the product entity.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product and return it with its assigned id.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, ProductError>;

    /// Retrieve a product by id (None if not found).
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError>;

    /// Retrieve all products.
    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Update an existing product.
    ///
    /// # Errors
    /// * `NotFound` - the product no longer exists
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Remove a product.
    ///
    /// # Errors
    /// * `NotFound` - the product does not exist
    async fn delete(&self, id: i64) -> Result<(), ProductError>;
}
