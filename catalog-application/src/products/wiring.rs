use super::{
    CreateProduct, CreateProductHandler, DeleteProduct, DeleteProductHandler, GetAllProducts,
    GetAllProductsHandler, UpdateProduct, UpdateProductHandler, create_product_rules,
    update_product_rules,
};
use crate::{
    error::AppError,
    handler_registry::HandlerRegistry,
    in_process_mediator::{InProcessMediator, MediatorConfig},
    notification::NotificationPublisher,
    validation::ValidatorRegistry,
};
use catalog_domain::persist::ProductRepository;
use catalog_domain::product::ProductPolicy;
use std::sync::Arc;

/// 启动装配：注册商品请求的处理器与校验器，构建调度器
///
/// - 任一请求重复注册即返回装配错误，应在启动期终止；
/// - 订阅者可在返回后经由 `mediator.publisher()` 继续注册。
pub fn wire<R>(
    repository: Arc<R>,
    policy: ProductPolicy,
    config: MediatorConfig,
) -> Result<InProcessMediator, AppError>
where
    R: ProductRepository + ?Sized + 'static,
{
    let handlers = HandlerRegistry::new();
    handlers.register_command::<CreateProduct, _>(Arc::new(CreateProductHandler::new(
        repository.clone(),
        policy,
    )))?;
    handlers.register_command::<UpdateProduct, _>(Arc::new(UpdateProductHandler::new(
        repository.clone(),
        policy,
    )))?;
    handlers.register_command::<DeleteProduct, _>(Arc::new(DeleteProductHandler::new(
        repository.clone(),
    )))?;
    handlers.register_query::<GetAllProducts, _>(Arc::new(GetAllProductsHandler::new(repository)))?;

    let validators = ValidatorRegistry::new();
    validators.register::<CreateProduct, _>(Arc::new(create_product_rules(&policy)));
    validators.register::<UpdateProduct, _>(Arc::new(update_product_rules(&policy)));

    tracing::info!(
        requests = ?handlers.registered_requests(),
        "product catalog wired"
    );

    Ok(InProcessMediator::builder()
        .handlers(Arc::new(handlers))
        .validators(Arc::new(validators))
        .publisher(Arc::new(NotificationPublisher::new()))
        .config(config)
        .build())
}
