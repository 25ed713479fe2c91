use crate::notification::SubscriberErrors;
use crate::validation::ValidationErrors;
use catalog_domain::entity::Entity;
use catalog_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// 领域错误（含仓储/存储错误），原样透传，不重试
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    /// 请求未通过校验，处理器从未被调用
    #[error("validation: {0}")]
    Validation(ValidationErrors),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered: request={request}")]
    AlreadyRegistered { request: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// 一个或多个通知订阅者失败；触发通知的写操作不受影响
    #[error("notification: {0}")]
    Subscribers(SubscriberErrors),

    #[error("request cancelled")]
    Cancelled,
}

impl AppError {
    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        Self::NotFound {
            entity: E::TYPE,
            id: id.to_string(),
        }
    }

    /// 装配缺陷（缺失/重复注册、类型擦除不一致）：应在启动期暴露，而非按请求处理
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::HandlerNotFound(_) | Self::AlreadyRegistered { .. } | Self::TypeMismatch { .. }
        )
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
