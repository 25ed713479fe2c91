//! 商品请求处理器
//!
//! 每个处理器只负责一种请求。进入仓储前检查取消信号，
//! 成功路径返回的通知由调度器负责发布。
//!
use super::{CreateProduct, DeleteProduct, GetAllProducts, ProductDto, ProductsDto, UpdateProduct};
use crate::{
    context::AppContext,
    error::AppError,
    handler::{Handled, RequestHandler},
};
use async_trait::async_trait;
use catalog_domain::entity::Entity;
use catalog_domain::persist::ProductRepository;
use catalog_domain::product::{
    Product, ProductCreated, ProductDeleted, ProductId, ProductPolicy, ProductUpdated,
};

pub struct CreateProductHandler<R> {
    repository: R,
    policy: ProductPolicy,
}

impl<R> CreateProductHandler<R> {
    pub fn new(repository: R, policy: ProductPolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<R: ProductRepository> RequestHandler<CreateProduct> for CreateProductHandler<R> {
    async fn handle(
        &self,
        ctx: &AppContext,
        request: CreateProduct,
    ) -> Result<Handled<ProductId>, AppError> {
        let product = Product::new(&request.name, request.price, &self.policy)?;
        let id = *product.id();

        ctx.ensure_active()?;
        self.repository.add(&product).await?;

        tracing::debug!(product_id = %id, "product created");
        Ok(Handled::new(id).with_notification(ProductCreated::new(product)))
    }
}

pub struct UpdateProductHandler<R> {
    repository: R,
    policy: ProductPolicy,
}

impl<R> UpdateProductHandler<R> {
    pub fn new(repository: R, policy: ProductPolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<R: ProductRepository> RequestHandler<UpdateProduct> for UpdateProductHandler<R> {
    async fn handle(&self, ctx: &AppContext, request: UpdateProduct) -> Result<Handled<()>, AppError> {
        ctx.ensure_active()?;
        let Some(mut product) = self.repository.get_by_id(&request.id).await? else {
            return Err(AppError::not_found::<Product>(&request.id));
        };

        product.update(&request.name, request.price, &self.policy)?;

        ctx.ensure_active()?;
        self.repository.update(&product).await?;

        tracing::debug!(product_id = %product.id(), "product updated");
        Ok(Handled::new(()).with_notification(ProductUpdated::new(product)))
    }
}

pub struct DeleteProductHandler<R> {
    repository: R,
}

impl<R> DeleteProductHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> RequestHandler<DeleteProduct> for DeleteProductHandler<R> {
    async fn handle(&self, ctx: &AppContext, request: DeleteProduct) -> Result<Handled<()>, AppError> {
        ctx.ensure_active()?;
        if self.repository.get_by_id(&request.id).await?.is_none() {
            return Err(AppError::not_found::<Product>(&request.id));
        }

        ctx.ensure_active()?;
        self.repository.delete(&request.id).await?;

        tracing::debug!(product_id = %request.id, "product deleted");
        Ok(Handled::new(()).with_notification(ProductDeleted::new(request.id)))
    }
}

pub struct GetAllProductsHandler<R> {
    repository: R,
}

impl<R> GetAllProductsHandler<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> RequestHandler<GetAllProducts> for GetAllProductsHandler<R> {
    async fn handle(
        &self,
        ctx: &AppContext,
        _request: GetAllProducts,
    ) -> Result<Handled<ProductsDto>, AppError> {
        ctx.ensure_active()?;
        let products = self.repository.get_all().await?;

        Ok(Handled::new(products.iter().map(ProductDto::from).collect()))
    }
}
