use crate::{context::AppContext, error::AppError, request::Request};
use async_trait::async_trait;

/// 调度器（Mediator）
///
/// - 负责根据请求的具体类型完成“校验 → 处理 → 通知”的完整管线；
/// - 框架可提供不同实现，当前仅有进程内实现；
/// - 该 trait 带有泛型方法，通常以具体实现类型注入使用。
#[async_trait]
pub trait Mediator: Send + Sync {
    /// 分发请求，返回处理器输出
    ///
    /// - `ctx`：应用上下文（关联标识、取消信号）
    /// - `request`：具体请求实例
    ///
    /// 订阅者失败不会改变返回结果，只记录 `warn` 日志；需要拿到失败汇总的调用方
    /// 应改用 [`InProcessMediator::dispatch_with_report`](crate::InProcessMediator::dispatch_with_report)。
    async fn dispatch<R: Request>(&self, ctx: &AppContext, request: R) -> Result<R::Output, AppError>;
}
