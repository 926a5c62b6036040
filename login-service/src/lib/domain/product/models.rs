use chrono::DateTime;
use chrono::Utc;

/// Product entity, the resource the authenticated routes expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied fields of a product, used for both creation and full
/// replacement on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    pub description: String,
    pub category: String,
}

impl ProductDraft {
    /// Apply this draft onto an existing product, keeping its identity.
    pub fn apply_to(self, product: &mut Product) {
        product.name = self.name;
        product.price = self.price;
        product.quantity = self.quantity;
        product.description = self.description;
        product.category = self.category;
    }
}
