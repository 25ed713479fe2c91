//! 商品目录示例：装配调度器，依次演示校验拒绝、创建、查询、更新与删除
//!
//! 运行：`RUST_LOG=debug cargo run -p catalog-application --example product_catalog`
//!
use async_trait::async_trait;
use catalog_application::context::AppContext;
use catalog_application::mediator::Mediator;
use catalog_application::notification::NotificationSubscriber;
use catalog_application::products::{
    CreateProduct, DeleteProduct, GetAllProducts, UpdateProduct, wire,
};
use catalog_application::MediatorConfig;
use catalog_domain::persist::InMemoryProductRepository;
use catalog_domain::product::{ProductCreated, ProductPolicy};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

struct AuditLog;

#[async_trait]
impl NotificationSubscriber<ProductCreated> for AuditLog {
    fn subscriber_name(&self) -> &str {
        "audit-log"
    }

    async fn handle(&self, ctx: &AppContext, n: &ProductCreated) -> anyhow::Result<()> {
        tracing::info!(
            correlation_id = ctx.correlation_id(),
            product = %n.product.name(),
            at = %n.occurred_at,
            "audit: product created"
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let repository = Arc::new(InMemoryProductRepository::new());
    let mediator = wire(repository, ProductPolicy::default(), MediatorConfig::default())?;
    mediator
        .publisher()
        .subscribe::<ProductCreated, _>(Arc::new(AuditLog));

    let ctx = AppContext::new().with_correlation_id("demo");

    for rejected in [
        CreateProduct {
            name: String::new(),
            price: Decimal::new(100, 1),
        },
        CreateProduct {
            name: "Laptop".into(),
            price: Decimal::new(-5, 0),
        },
    ] {
        if let Err(err) = mediator.dispatch(&ctx, rejected).await {
            println!("rejected: {err}");
        }
    }

    let id = mediator
        .dispatch(
            &ctx,
            CreateProduct {
                name: "Laptop".into(),
                price: Decimal::new(99999, 2),
            },
        )
        .await?;
    println!("created: {id}");

    mediator
        .dispatch(
            &ctx,
            UpdateProduct {
                id,
                name: "Gaming Laptop".into(),
                price: Decimal::new(129999, 2),
            },
        )
        .await?;

    let products = mediator.dispatch(&ctx, GetAllProducts).await?;
    println!("products: {}", serde_json::to_string_pretty(&products)?);

    mediator.dispatch(&ctx, DeleteProduct { id }).await?;
    if let Err(err) = mediator.dispatch(&ctx, DeleteProduct { id }).await {
        println!("second delete: {err}");
    }

    Ok(())
}
