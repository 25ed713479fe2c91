//! 通知发布（notification）
//!
//! 处理器完成写操作后，调度器把领域通知交给 `NotificationPublisher`：
//! - 每种通知类型可有零个或多个订阅者，零个即为无操作；
//! - 订阅者按注册顺序依次执行，结果可复现；
//! - 订阅者失败会汇总为 `SubscriberErrors` 报告给调用方，但绝不回滚已完成的写操作。
//!
mod pending;
mod publisher;
mod subscriber;

pub use pending::PendingNotification;
pub use publisher::NotificationPublisher;
pub use subscriber::NotificationSubscriber;

use serde::Serialize;
use std::fmt;

/// 单个订阅者的失败记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriberFailure {
    pub subscriber: String,
    pub reason: String,
}

/// 一次发布中所有失败订阅者的汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriberErrors {
    pub notification: &'static str,
    pub failures: Vec<SubscriberFailure>,
}

impl SubscriberErrors {
    pub fn failed_subscribers(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.subscriber.as_str())
    }
}

impl fmt::Display for SubscriberErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} subscriber(s) failed for {}", self.failures.len(), self.notification)?;
        for failure in &self.failures {
            write!(f, "; {}: {}", failure.subscriber, failure.reason)?;
        }
        Ok(())
    }
}
