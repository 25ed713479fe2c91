//! 实体（Entity）基础抽象
//!
//! 为聚合与实体提供统一的标识（Id）能力。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 聚合类型名（用于日志与通知）
    const TYPE: &'static str;

    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display + Send + Sync;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
