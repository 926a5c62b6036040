use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDraft;
use crate::domain::product::ports::ProductRepository;

/// PostgreSQL-backed product store.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: i64,
    quantity: i32,
    description: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            quantity: row.quantity,
            description: row.description,
            category: row.category,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, price, quantity, description, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, price, quantity, description, category, created_at
            "#,
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(draft.quantity)
        .bind(&draft.description)
        .bind(&draft.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, quantity, description, category, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        Ok(row.map(Product::from))
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, quantity, description, category, created_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, quantity = $4, description = $5, category = $6
            WHERE id = $1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.description)
        .bind(&product.category)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id));
        }

        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<(), ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| ProductError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}
