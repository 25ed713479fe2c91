use crate::context::AppContext;
use async_trait::async_trait;
use catalog_domain::domain_event::DomainEvent;

/// 通知订阅者：处理某一类型的领域通知
#[async_trait]
pub trait NotificationSubscriber<N>: Send + Sync
where
    N: DomainEvent,
{
    /// 订阅者名称（用于失败汇总与日志）
    fn subscriber_name(&self) -> &str;

    /// 处理通知
    async fn handle(&self, ctx: &AppContext, notification: &N) -> anyhow::Result<()>;
}
