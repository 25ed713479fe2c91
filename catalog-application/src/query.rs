use crate::dto::Dto;
use crate::request::Request;

/// 应用层查询（Query）
///
/// 表达只读意图，不改变领域状态。
/// - 结果为 [`Dto`](crate::dto::Dto) 投影；
/// - 与 [`Command`](crate::command::Command) 相对，`Query` 应避免副作用。
pub trait Query: Request<Output: Dto> {}
