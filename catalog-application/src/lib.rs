//! 商品目录应用层（catalog-application）
//!
//! 进程内的请求分发管线：请求 → 校验 → 唯一处理器 → 通知扇出。
//! - `validation`：声明式规则集与按请求类型注册的校验器；
//! - `handler_registry`：请求类型到唯一处理器的映射；
//! - `notification`：领域通知的订阅与顺序扇出；
//! - `in_process_mediator`：编排上述组件的调度器；
//! - `products`：商品相关的命令、查询、校验规则、处理器与启动装配。
//!
pub mod command;
pub mod context;
pub mod dto;
pub mod error;
pub mod handler;
pub mod handler_registry;
pub mod in_process_mediator;
pub mod mediator;
pub mod notification;
pub mod products;
pub mod query;
pub mod request;
pub mod validation;

pub use handler_registry::HandlerRegistry;
pub use in_process_mediator::{Dispatched, InProcessMediator, MediatorConfig};
pub use notification::NotificationPublisher;
pub use validation::ValidatorRegistry;
