//! 领域事件（Domain Event）
//!
//! 状态变更完成后对外广播的不可变事实，携带足够的数据，
//! 使订阅者无需再次查询存储即可作出反应。
//!
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// 领域事件载荷需要满足的通用能力边界
pub trait DomainEvent: Clone + fmt::Debug + Serialize + Send + Sync + 'static {
    /// 事件类型（稳定名称，形如 `product.created`）
    const EVENT_TYPE: &'static str;

    /// 事件对应的聚合标识
    fn aggregate_id(&self) -> String;

    /// 事件发生时间
    fn occurred_at(&self) -> DateTime<Utc>;
}
