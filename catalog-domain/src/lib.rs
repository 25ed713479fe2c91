//! 商品目录领域层（catalog-domain）
//!
//! 提供商品目录的领域构件，应用层在其之上实现命令/查询分发：
//! - 实体（`entity`）与规约（`specification`）等通用模式
//! - 商品聚合（`product`）：标识、名称、价格值对象与不变量策略
//! - 领域事件（`domain_event`）：商品创建/更新/删除后的通知载荷
//! - 仓储契约（`persist`）：`ProductRepository` 及其内存实现
//!
//! 本 crate 不关心传输与存储细节，仓储实现可替换为任意持久化后端。
//!
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod persist;
pub mod product;
pub mod specification;
