//! 商品值对象：名称与价格
//!
use super::ProductPolicy;
use crate::error::{DomainError, DomainResult};
use crate::specification::{MaxChars, NotBlank, Positive, Specification};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 商品名称：去除首尾空白后非空，且不超过策略上限
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub fn parse(value: &str, policy: &ProductPolicy) -> DomainResult<Self> {
        if !NotBlank.is_satisfied_by(value) {
            return Err(DomainError::invalid_value("name", "must not be empty"));
        }
        if !MaxChars(policy.name_max_chars).is_satisfied_by(value) {
            return Err(DomainError::invalid_value(
                "name",
                format!("must be at most {} characters", policy.name_max_chars),
            ));
        }
        Ok(Self(value.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 商品价格：严格大于零
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn parse(value: Decimal) -> DomainResult<Self> {
        if !Positive.is_satisfied_by(&value) {
            return Err(DomainError::invalid_value("price", "must be greater than 0"));
        }
        Ok(Self(value))
    }

    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_boundaries() {
        let policy = ProductPolicy::default();
        assert!(ProductName::parse(&"n".repeat(100), &policy).is_ok());
        assert!(ProductName::parse(&"n".repeat(101), &policy).is_err());
        assert!(ProductName::parse("", &policy).is_err());

        // 保留调用方原样输入，不做裁剪
        let name = ProductName::parse(" Laptop ", &policy).unwrap();
        assert_eq!(name.as_str(), " Laptop ");
    }

    #[test]
    fn name_limit_follows_policy() {
        let policy = ProductPolicy { name_max_chars: 3 };
        assert!(ProductName::parse("abc", &policy).is_ok());
        let err = ProductName::parse("abcd", &policy).unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_value("name", "must be at most 3 characters")
        );
    }

    #[test]
    fn price_must_be_positive() {
        assert!(Price::parse(Decimal::new(1, 2)).is_ok());
        assert!(Price::parse(Decimal::ZERO).is_err());
        assert!(Price::parse(Decimal::new(-5, 0)).is_err());
    }
}
