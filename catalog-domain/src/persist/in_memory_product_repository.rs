use super::ProductRepository;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult as Result};
use crate::product::{Product, ProductId};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// 内存版商品仓储
///
/// 以插入顺序保存商品；`update` 覆盖同标识条目（后写覆盖先写），
/// `delete` 对不存在的标识为无操作。
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前保存的商品数量
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id() == product.id()) {
            return Err(DomainError::repository(format!(
                "duplicate product id: {}",
                product.id()
            )));
        }
        products.push(product.clone());
        tracing::debug!(product_id = %product.id(), "product added");
        Ok(())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id() == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id() == product.id()) {
            Some(slot) => {
                *slot = product.clone();
                tracing::debug!(product_id = %product.id(), "product updated");
                Ok(())
            }
            None => Err(DomainError::repository(format!(
                "cannot update missing product: {}",
                product.id()
            ))),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<()> {
        let mut products = self.products.write().await;
        products.retain(|p| p.id() != id);
        tracing::debug!(product_id = %id, "product deleted");
        Ok(())
    }
}
