use crate::error::DomainResult as Result;
use crate::product::{Product, ProductId};
use async_trait::async_trait;
use std::sync::Arc;

/// 商品仓储契约
///
/// - `get_by_id` 对不存在的标识返回 `None`，而非错误；是否需要存在由调用方决定；
/// - `get_all` 返回稳定顺序的商品序列；
/// - `add`/`update`/`delete` 在返回前完成持久化。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn add(&self, product: &Product) -> Result<()>;

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>>;

    async fn get_all(&self) -> Result<Vec<Product>>;

    async fn update(&self, product: &Product) -> Result<()>;

    async fn delete(&self, id: &ProductId) -> Result<()>;
}

#[async_trait]
impl<T> ProductRepository for Arc<T>
where
    T: ProductRepository + ?Sized,
{
    async fn add(&self, product: &Product) -> Result<()> {
        (**self).add(product).await
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>> {
        (**self).get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        (**self).get_all().await
    }

    async fn update(&self, product: &Product) -> Result<()> {
        (**self).update(product).await
    }

    async fn delete(&self, id: &ProductId) -> Result<()> {
        (**self).delete(id).await
    }
}
