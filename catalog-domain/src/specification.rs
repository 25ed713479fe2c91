//! 规约（Specification）
//!
//! 将业务规则封装为可复用的谓词，供聚合不变量与请求校验共用。
//!
use rust_decimal::Decimal;
use uuid::Uuid;

/// 规约：对候选对象给出是否满足业务规则的判断
pub trait Specification<T: ?Sized>: Send + Sync {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}

/// 去除首尾空白后非空
#[derive(Debug, Clone, Copy, Default)]
pub struct NotBlank;

impl Specification<str> for NotBlank {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        !candidate.trim().is_empty()
    }
}

/// 字符数（Unicode 标量值）不超过上限
#[derive(Debug, Clone, Copy)]
pub struct MaxChars(pub usize);

impl Specification<str> for MaxChars {
    fn is_satisfied_by(&self, candidate: &str) -> bool {
        candidate.chars().count() <= self.0
    }
}

/// 严格大于零
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

impl Specification<Decimal> for Positive {
    fn is_satisfied_by(&self, candidate: &Decimal) -> bool {
        *candidate > Decimal::ZERO
    }
}

/// 标识非默认值（非 nil UUID）
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNilId;

impl Specification<Uuid> for NonNilId {
    fn is_satisfied_by(&self, candidate: &Uuid) -> bool {
        !candidate.is_nil()
    }
}
