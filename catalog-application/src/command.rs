use crate::request::Request;

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，会修改领域状态。
/// - 结果仅为新标识或空值，不返回读模型；
/// - 与 [`Query`](crate::query::Query) 相对，`Command` 应避免读写混用；
/// - 建议保持语义化的“动宾结构”命名，如 `CreateProduct`、`DeleteProduct`。
pub trait Command: Request {}
