//! 商品聚合（Product）
//!
//! - 标识在创建时生成，此后不可重新分配；
//! - 名称与价格在每个可观察状态下都满足 `ProductPolicy`；
//! - 构造与修改均先完整校验再赋值，校验失败时聚合保持原状。
//!
mod events;
mod policy;
mod product_id;
mod values;

pub use events::{ProductCreated, ProductDeleted, ProductUpdated};
pub use policy::ProductPolicy;
pub use product_id::ProductId;
pub use values::{Price, ProductName};

use crate::entity::Entity;
use crate::error::DomainResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    price: Price,
}

impl Product {
    /// 创建新商品，生成新的标识
    pub fn new(name: &str, price: Decimal, policy: &ProductPolicy) -> DomainResult<Self> {
        let name = ProductName::parse(name, policy)?;
        let price = Price::parse(price)?;

        Ok(Self {
            id: ProductId::new(),
            name,
            price,
        })
    }

    /// 从存储中恢复（或由测试构造）已知标识的商品
    pub fn restore(id: ProductId, name: ProductName, price: Price) -> Self {
        Self { id, name, price }
    }

    /// 原地修改名称与价格，标识保持不变
    pub fn update(&mut self, name: &str, price: Decimal, policy: &ProductPolicy) -> DomainResult<()> {
        let name = ProductName::parse(name, policy)?;
        let price = Price::parse(price)?;

        self.name = name;
        self.price = price;
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn price(&self) -> Decimal {
        self.price.value()
    }
}

impl Entity for Product {
    const TYPE: &'static str = "product";
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn new_product_gets_fresh_id() {
        let policy = ProductPolicy::default();
        let a = Product::new("Laptop", Decimal::new(99999, 2), &policy).unwrap();
        let b = Product::new("Laptop", Decimal::new(99999, 2), &policy).unwrap();

        assert_ne!(a.id(), b.id());
        assert!(!a.id().is_nil());
        assert_eq!(a.name(), "Laptop");
        assert_eq!(a.price(), Decimal::new(99999, 2));
    }

    #[test]
    fn update_keeps_id_and_replaces_fields() {
        let policy = ProductPolicy::default();
        let mut p = Product::new("Laptop", Decimal::new(10, 0), &policy).unwrap();
        let id = *p.id();

        p.update("Desktop", Decimal::new(20, 0), &policy).unwrap();

        assert_eq!(p.id(), &id);
        assert_eq!(p.name(), "Desktop");
        assert_eq!(p.price(), Decimal::new(20, 0));
    }

    #[test]
    fn failed_update_leaves_product_untouched() {
        let policy = ProductPolicy::default();
        let mut p = Product::new("Laptop", Decimal::new(10, 0), &policy).unwrap();
        let before = p.clone();

        // 名称合法但价格非法：名称也不能被部分写入
        let err = p.update("Desktop", Decimal::ZERO, &policy).unwrap_err();

        assert!(matches!(err, DomainError::InvalidValue { field: "price", .. }));
        assert_eq!(p, before);
    }

    #[test]
    fn invalid_products_cannot_be_constructed() {
        let policy = ProductPolicy::default();
        assert!(Product::new("  ", Decimal::ONE, &policy).is_err());
        assert!(Product::new(&"x".repeat(101), Decimal::ONE, &policy).is_err());
        assert!(Product::new("Laptop", Decimal::new(-5, 0), &policy).is_err());
    }
}
