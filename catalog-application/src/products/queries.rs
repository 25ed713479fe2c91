use super::ProductsDto;
use crate::{query::Query, request::Request};

/// 查询全部商品，按存储顺序返回
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllProducts;

impl Request for GetAllProducts {
    const NAME: &'static str = "GetAllProducts";
    type Output = ProductsDto;
}

impl Query for GetAllProducts {}
