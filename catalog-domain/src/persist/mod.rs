//! 持久化（persist）
//!
//! 定义商品仓储契约及进程内实现：
//! - `ProductRepository`：增删改查接口，写操作返回前即已落盘；
//! - `InMemoryProductRepository`：按插入顺序保存商品，用于测试、示例与本地开发。
//!
//! 具体存储后端（如关系型数据库）由上层提供实现并注入。
//!
mod in_memory_product_repository;
mod product_repository;

pub use in_memory_product_repository::InMemoryProductRepository;
pub use product_repository::ProductRepository;
