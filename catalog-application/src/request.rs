/// 应用层请求（Request）
///
/// 不可变的请求值，类型即身份：每种请求类型在启动时绑定且仅绑定一个处理器。
/// 具体请求再通过 [`Command`](crate::command::Command) 或
/// [`Query`](crate::query::Query) 标明自身种类。
pub trait Request: Send + Sync + 'static {
    /// 请求的稳定名称，用于日志、追踪与错误信息。避免依赖 `type_name::<T>()`。
    const NAME: &'static str;

    /// 处理器成功后返回给调用方的结果类型
    type Output: Send + 'static;
}

/// 请求种类：命令与查询互不相交
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Command,
    Query,
}
