//! 进程内调度器（InProcessMediator）
//!
//! 单次分发的状态流转：
//!
//! ```text
//! Received → Validating → Rejected
//!                       → Validated → Handling → Failed
//!                                              → Completed → (Publishing)
//! ```
//!
//! - 校验严格先于任何副作用：被拒绝的请求不会触达处理器、仓储与订阅者；
//! - 处理器失败原样返回，不重试，也不发布任何通知；
//! - 处理器成功后由调度器（而非处理器）发布其返回的通知，发布在 `dispatch` 返回前完成，
//!   订阅者失败只作为报告附带返回，不改变请求本身的结果。
//!
use crate::{
    context::AppContext, error::AppError, handler_registry::HandlerRegistry,
    mediator::Mediator, notification::NotificationPublisher, request::Request,
    validation::{ValidationResult, ValidatorRegistry},
};
use async_trait::async_trait;
use bon::Builder;
use std::sync::Arc;
use tracing::Instrument;

/// 调度器配置
#[derive(Clone, Copy, Debug)]
pub struct MediatorConfig {
    /// 是否在处理器成功后发布其返回的通知
    pub publish_notifications: bool,
}

impl Default for MediatorConfig {
    fn default() -> Self {
        Self {
            publish_notifications: true,
        }
    }
}

/// 一次成功分发的结果：处理器输出 + 通知发布的失败报告（若有）
#[derive(Debug)]
pub struct Dispatched<T> {
    pub output: T,
    /// 订阅者失败（`AppError::Subscribers`）或发布途中被取消（`AppError::Cancelled`）
    pub publish_error: Option<AppError>,
}

impl<T> Dispatched<T> {
    pub fn into_output(self) -> T {
        self.output
    }

    pub fn is_fully_published(&self) -> bool {
        self.publish_error.is_none()
    }
}

/// 进程内调度器
///
/// 注册表在启动时构建一次，以 `Arc` 共享给调度器；调度器自身无可变状态，
/// 可被任意多个并发请求同时使用。
#[derive(Builder)]
pub struct InProcessMediator {
    handlers: Arc<HandlerRegistry>,
    #[builder(default)]
    validators: Arc<ValidatorRegistry>,
    #[builder(default)]
    publisher: Arc<NotificationPublisher>,
    #[builder(default)]
    config: MediatorConfig,
}

impl InProcessMediator {
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    pub fn publisher(&self) -> &NotificationPublisher {
        &self.publisher
    }

    /// 分发请求，并返回通知发布的失败报告
    pub async fn dispatch_with_report<R: Request>(
        &self,
        ctx: &AppContext,
        request: R,
    ) -> Result<Dispatched<R::Output>, AppError> {
        let span = tracing::debug_span!(
            "dispatch",
            request = R::NAME,
            correlation_id = ctx.correlation_id()
        );

        self.run_pipeline(ctx, request).instrument(span).await
    }

    async fn run_pipeline<R: Request>(
        &self,
        ctx: &AppContext,
        request: R,
    ) -> Result<Dispatched<R::Output>, AppError> {
        // Received
        if ctx.is_cancelled() {
            tracing::debug!("cancelled before validation");
            return Err(AppError::Cancelled);
        }

        // Validating
        if let ValidationResult::Invalid(errors) = self.validators.validate(&request) {
            tracing::warn!(errors = %errors, "request rejected");
            return Err(AppError::Validation(errors));
        }

        // Validated → Handling
        let handler = self.handlers.resolve::<R>()?;
        tracing::debug!(kind = ?handler.kind(), "handling");

        let handled = match handler.invoke(ctx, request).await {
            Ok(handled) => handled,
            Err(err) => {
                tracing::warn!(error = %err, "handler failed");
                return Err(err);
            }
        };

        // Completed：写操作已完成，之后的发布失败不影响结果
        let (output, notification) = handled.into_parts();
        let publish_error = match notification {
            Some(pending) if self.config.publish_notifications => {
                tracing::debug!(
                    notification = pending.event_type(),
                    aggregate_id = pending.aggregate_id(),
                    "publishing"
                );
                self.publisher.publish_pending(ctx, &pending).await.err()
            }
            _ => None,
        };

        if let Some(err) = &publish_error {
            tracing::warn!(error = %err, "notification fan-out incomplete");
        }
        tracing::info!("request completed");

        Ok(Dispatched {
            output,
            publish_error,
        })
    }
}

#[async_trait]
impl Mediator for InProcessMediator {
    async fn dispatch<R: Request>(&self, ctx: &AppContext, request: R) -> Result<R::Output, AppError> {
        self.dispatch_with_report(ctx, request)
            .await
            .map(Dispatched::into_output)
    }
}
