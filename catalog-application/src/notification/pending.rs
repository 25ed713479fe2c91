use catalog_domain::domain_event::DomainEvent;
use std::any::{Any, TypeId};
use std::fmt;

/// 类型擦除后的待发布通知
///
/// 处理器返回时具体通知类型已被擦除，发布器依据 `TypeId` 找回对应订阅者。
pub struct PendingNotification {
    type_id: TypeId,
    event_type: &'static str,
    aggregate_id: String,
    payload: Box<dyn Any + Send + Sync>,
}

impl PendingNotification {
    pub fn new<N: DomainEvent>(notification: N) -> Self {
        Self {
            type_id: TypeId::of::<N>(),
            event_type: N::EVENT_TYPE,
            aggregate_id: notification.aggregate_id(),
            payload: Box::new(notification),
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }

    pub fn aggregate_id(&self) -> &str {
        &self.aggregate_id
    }

    pub(crate) fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub(crate) fn payload(&self) -> &(dyn Any + Send + Sync) {
        &*self.payload
    }

    /// 还原为具体通知类型
    pub fn downcast_ref<N: DomainEvent>(&self) -> Option<&N> {
        self.payload.downcast_ref::<N>()
    }
}

impl fmt::Debug for PendingNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingNotification")
            .field("event_type", &self.event_type)
            .field("aggregate_id", &self.aggregate_id)
            .finish_non_exhaustive()
    }
}
