//! 商品领域事件
//!
use super::{Product, ProductId};
use crate::domain_event::DomainEvent;
use crate::entity::Entity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 商品已创建（携带创建后的完整快照）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreated {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

impl ProductCreated {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for ProductCreated {
    const EVENT_TYPE: &'static str = "product.created";

    fn aggregate_id(&self) -> String {
        self.product.id().to_string()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// 商品已更新（携带更新后的完整快照）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductUpdated {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

impl ProductUpdated {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for ProductUpdated {
    const EVENT_TYPE: &'static str = "product.updated";

    fn aggregate_id(&self) -> String {
        self.product.id().to_string()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// 商品已删除
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDeleted {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

impl ProductDeleted {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            occurred_at: Utc::now(),
        }
    }
}

impl DomainEvent for ProductDeleted {
    const EVENT_TYPE: &'static str = "product.deleted";

    fn aggregate_id(&self) -> String {
        self.product_id.to_string()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
