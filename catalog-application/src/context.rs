use crate::error::AppError;
use tokio_util::sync::CancellationToken;

/// 应用层上下文（Application Context）
///
/// 承载一次分发所需的横切信息：
/// - 关联标识（`correlation_id`）：贯穿日志与通知，便于追踪一次调用；
/// - 取消信号（`cancellation`）：在仓储与订阅者边界处检查，触发后中止管线剩余步骤。
///
/// 典型用法：
/// ```rust
/// use catalog_application::context::AppContext;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = AppContext::new()
///     .with_correlation_id("cor-123")
///     .with_cancellation(token.clone());
/// assert!(!ctx.is_cancelled());
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    /// 关联标识（可选）
    pub correlation_id: Option<String>,
    /// 调用方提供的取消信号
    pub cancellation: CancellationToken,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn correlation_id(&self) -> &str {
        self.correlation_id.as_deref().unwrap_or("-")
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// 在 I/O 边界前调用：已取消则返回 `AppError::Cancelled`
    pub fn ensure_active(&self) -> Result<(), AppError> {
        if self.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        Ok(())
    }
}
