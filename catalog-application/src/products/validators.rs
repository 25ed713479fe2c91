//! 商品请求的校验规则
//!
//! 边界值来自 `ProductPolicy`，与聚合自身的不变量共用同一来源。
//!
use super::{CreateProduct, UpdateProduct};
use crate::validation::RuleSet;
use catalog_domain::product::ProductPolicy;
use catalog_domain::specification::{MaxChars, NonNilId, NotBlank, Positive};

pub fn create_product_rules(policy: &ProductPolicy) -> RuleSet<CreateProduct> {
    let max = policy.name_max_chars;

    RuleSet::new()
        .field("name", "name must not be empty", |r: &CreateProduct| r.name.as_str(), NotBlank)
        .field(
            "name",
            format!("name must be at most {max} characters"),
            |r: &CreateProduct| r.name.as_str(),
            MaxChars(max),
        )
        .field("price", "price must be greater than 0", |r: &CreateProduct| &r.price, Positive)
}

pub fn update_product_rules(policy: &ProductPolicy) -> RuleSet<UpdateProduct> {
    let max = policy.name_max_chars;

    RuleSet::new()
        .field("id", "product id is required", |r: &UpdateProduct| r.id.as_uuid(), NonNilId)
        .field("name", "name must not be empty", |r: &UpdateProduct| r.name.as_str(), NotBlank)
        .field(
            "name",
            format!("name must be at most {max} characters"),
            |r: &UpdateProduct| r.name.as_str(),
            MaxChars(max),
        )
        .field("price", "price must be greater than 0", |r: &UpdateProduct| &r.price, Positive)
}
