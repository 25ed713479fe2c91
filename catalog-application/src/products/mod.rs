//! 商品功能模块（products）
//!
//! 对外暴露的四个请求：
//!
//! | 请求              | 种类    | 输出          | 通知              |
//! |-------------------|---------|---------------|-------------------|
//! | `CreateProduct`   | Command | `ProductId`   | `ProductCreated`  |
//! | `UpdateProduct`   | Command | `()`          | `ProductUpdated`  |
//! | `DeleteProduct`   | Command | `()`          | `ProductDeleted`  |
//! | `GetAllProducts`  | Query   | `ProductsDto` | -                 |
//!
//! 通过 [`wire`] 在启动时一次性完成处理器与校验器的注册。
//!
mod commands;
mod dto;
mod handlers;
mod queries;
mod validators;
mod wiring;

pub use commands::{CreateProduct, DeleteProduct, UpdateProduct};
pub use dto::{ProductDto, ProductsDto};
pub use handlers::{
    CreateProductHandler, DeleteProductHandler, GetAllProductsHandler, UpdateProductHandler,
};
pub use queries::GetAllProducts;
pub use validators::{create_product_rules, update_product_rules};
pub use wiring::wire;
