//! 校验引擎（validation）
//!
//! - `RuleSet`：按声明顺序排列的“字段 + 谓词 + 消息”规则，纯函数、无 I/O；
//! - `Validator`：对某一请求类型给出校验结论；
//! - `ValidatorRegistry`：按请求类型注册校验器，未注册即视为通过。
//!
//! 所有规则都会执行，不做短路：一个请求可以同时违反多条规则，失败会一并返回。
//!
mod registry;
mod rule_set;

pub use registry::ValidatorRegistry;
pub use rule_set::RuleSet;

use serde::Serialize;
use std::fmt;

/// 校验器：对请求给出确定性的校验结论
pub trait Validator<R>: Send + Sync {
    fn validate(&self, request: &R) -> ValidationResult;
}

/// 字段级错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 有序的字段错误集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 是否存在指定字段的错误
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// 校验结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationErrors),
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(ValidationErrors(errors))
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// 合并两个结论，保留双方错误的先后顺序
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Valid, other) => other,
            (this, Self::Valid) => this,
            (Self::Invalid(mut a), Self::Invalid(b)) => {
                a.0.extend(b.0);
                Self::Invalid(a)
            }
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(errors) => Err(errors),
        }
    }
}
