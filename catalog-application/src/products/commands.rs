use crate::{command::Command, error::AppError, request::Request, validation::ValidationErrors};
use catalog_domain::product::ProductId;
use rust_decimal::Decimal;
use serde::Deserialize;

/// 创建商品，返回新生成的商品标识
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub price: Decimal,
}

impl Request for CreateProduct {
    const NAME: &'static str = "CreateProduct";
    type Output = ProductId;
}

impl Command for CreateProduct {}

/// 修改商品名称与价格
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProduct {
    #[serde(default)]
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

impl UpdateProduct {
    /// 接口层以路径中的标识定位商品，请求体中的标识必须与之一致
    pub fn for_path(path_id: ProductId, body: UpdateProduct) -> Result<Self, AppError> {
        if body.id != path_id {
            return Err(AppError::Validation(ValidationErrors::single(
                "id",
                format!("product id mismatch: path={path_id}, body={}", body.id),
            )));
        }
        Ok(body)
    }
}

impl Request for UpdateProduct {
    const NAME: &'static str = "UpdateProduct";
    type Output = ();
}

impl Command for UpdateProduct {}

/// 删除商品
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DeleteProduct {
    pub id: ProductId,
}

impl Request for DeleteProduct {
    const NAME: &'static str = "DeleteProduct";
    type Output = ();
}

impl Command for DeleteProduct {}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: ProductId) -> UpdateProduct {
        UpdateProduct {
            id,
            name: "Laptop".into(),
            price: Decimal::ONE,
        }
    }

    #[test]
    fn for_path_accepts_matching_ids() {
        let id = ProductId::new();
        assert_eq!(UpdateProduct::for_path(id, body(id)).unwrap(), body(id));
    }

    #[test]
    fn for_path_rejects_mismatched_ids() {
        let err = UpdateProduct::for_path(ProductId::new(), body(ProductId::new())).unwrap_err();
        assert!(err.validation_errors().unwrap().has_field("id"));
    }

    #[test]
    fn update_body_without_id_deserializes_to_nil() {
        let cmd: UpdateProduct =
            serde_json::from_str(r#"{ "name": "Laptop", "price": "10.5" }"#).unwrap();
        assert!(cmd.id.is_nil());
        assert_eq!(cmd.price, Decimal::new(105, 1));
    }
}
