use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为查询的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将聚合直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}
