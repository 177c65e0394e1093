use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductRequest, ProductResponse};
use crate::repository::ProductRepository;

/// Sits between the HTTP handlers and a [`ProductRepository`], mapping
/// stored records to response DTOs.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> ProductResult<Vec<ProductResponse>> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(product_name = %request.name))]
    pub async fn create_product(&self, request: ProductRequest) -> ProductResult<ProductResponse> {
        let product = Product {
            id: Uuid::new_v4(),
            name: request.name,
            price: request.price,
        };

        let created = self.repository.insert(product).await?;
        Ok(created.into())
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<ProductResponse> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}
