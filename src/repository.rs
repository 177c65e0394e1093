use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;

/// Storage for product records.
///
/// `find_all` returns products in the order they were inserted.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Returns `true` when a record was removed.
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn product_from_row(row: &PgRow) -> Product {
    Product {
        id: row.get("id"),
        name: row.get("name"),
        price: row.get("price"),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, price FROM products ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(product_from_row).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(product_from_row))
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES ($1, $2, $3)")
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .execute(&self.pool)
            .await?;

        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Keeps products in process memory. Used when no database is configured.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}
