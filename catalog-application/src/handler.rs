use crate::{context::AppContext, error::AppError, notification::PendingNotification, request::Request};
use async_trait::async_trait;
use catalog_domain::domain_event::DomainEvent;

/// 请求处理器：与请求类型一一绑定
///
/// 处理器只负责自身的读写；若成功路径产生了领域通知，随结果一并返回，
/// 由调度器在处理器完成后负责发布。
#[async_trait]
pub trait RequestHandler<R>: Send + Sync
where
    R: Request,
{
    async fn handle(&self, ctx: &AppContext, request: R) -> Result<Handled<R::Output>, AppError>;
}

/// 处理器的成功结果：输出 + 可选的待发布通知
#[derive(Debug)]
pub struct Handled<T> {
    pub output: T,
    pub notification: Option<PendingNotification>,
}

impl<T> Handled<T> {
    pub fn new(output: T) -> Self {
        Self {
            output,
            notification: None,
        }
    }

    /// 附带一条在处理器完成后发布的领域通知
    pub fn with_notification<N: DomainEvent>(mut self, notification: N) -> Self {
        self.notification = Some(PendingNotification::new(notification));
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Handled<U> {
        Handled {
            output: f(self.output),
            notification: self.notification,
        }
    }

    pub fn into_parts(self) -> (T, Option<PendingNotification>) {
        (self.output, self.notification)
    }
}
