use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::ports::ProductServicePort;

/// Domain service for the product resource.
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

fn validate_draft(draft: &ProductDraft) -> Result<(), ProductError> {
    if draft.name.trim().is_empty() {
        return Err(ProductError::Validation(
            "Product name cannot be empty".to_string(),
        ));
    }
    if draft.price < 0 {
        return Err(ProductError::Validation(
            "Product price cannot be negative".to_string(),
        ));
    }
    if draft.quantity < 0 {
        return Err(ProductError::Validation(
            "Product quantity cannot be negative".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        validate_draft(&draft)?;
        self.repository.insert(draft).await
    }

    async fn get_product(&self, id: i64) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.list_all().await
    }

    async fn update_product(&self, id: i64, draft: ProductDraft) -> Result<Product, ProductError> {
        validate_draft(&draft)?;

        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        draft.apply_to(&mut product);
        self.repository.update(product).await
    }

    async fn delete_product(&self, id: i64) -> Result<(), ProductError> {
        self.repository.delete(id).await
    }
}
