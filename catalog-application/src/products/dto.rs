use crate::dto::Dto;
use catalog_domain::entity::Entity;
use catalog_domain::product::{Product, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;

/// 商品读模型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: *product.id(),
            name: product.name().to_owned(),
            price: product.price(),
        }
    }
}

impl Dto for ProductDto {}

/// 商品列表读模型（保持存储顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductsDto(pub Vec<ProductDto>);

impl ProductsDto {
    pub fn items(&self) -> &[ProductDto] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn find(&self, id: &ProductId) -> Option<&ProductDto> {
        self.0.iter().find(|p| &p.id == id)
    }
}

impl FromIterator<ProductDto> for ProductsDto {
    fn from_iter<I: IntoIterator<Item = ProductDto>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Dto for ProductsDto {}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_domain::product::ProductPolicy;

    #[test]
    fn serializes_as_plain_list() {
        let product = Product::new("Laptop", Decimal::new(99999, 2), &ProductPolicy::default()).unwrap();
        let dtos: ProductsDto = std::iter::once(ProductDto::from(&product)).collect();

        let json = serde_json::to_value(&dtos).unwrap();
        assert_eq!(json[0]["id"], product.id().to_string());
        assert_eq!(json[0]["name"], "Laptop");
        assert_eq!(json[0]["price"], "999.99");
    }
}
