use super::{NotificationSubscriber, PendingNotification, SubscriberErrors, SubscriberFailure};
use crate::{context::AppContext, error::AppError};
use catalog_domain::domain_event::DomainEvent;
use dashmap::DashMap;
use std::any::{Any, TypeId, type_name};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type AnyPayload = dyn Any + Send + Sync;

type SubscriberFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;

type SubscriberFn =
    Arc<dyn for<'a> Fn(&'a AnyPayload, &'a AppContext) -> SubscriberFuture<'a> + Send + Sync>;

#[derive(Clone)]
struct RegisteredSubscriber {
    name: String,
    call: SubscriberFn,
}

fn erase<F>(f: F) -> SubscriberFn
where
    F: for<'a> Fn(&'a AnyPayload, &'a AppContext) -> SubscriberFuture<'a> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 进程内通知发布器
/// - 通过 TypeId 注册不同通知类型的订阅者，同类型订阅者按注册顺序保存
/// - 发布时顺序调用，收集所有失败后统一报告
#[derive(Default)]
pub struct NotificationPublisher {
    subscribers: DashMap<TypeId, Vec<RegisteredSubscriber>>,
}

impl NotificationPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册订阅者
    pub fn subscribe<N, S>(&self, subscriber: Arc<S>)
    where
        N: DomainEvent,
        S: NotificationSubscriber<N> + 'static,
    {
        let name = subscriber.subscriber_name().to_owned();

        let call = erase(move |payload, ctx| {
            let subscriber = subscriber.clone();

            Box::pin(async move {
                // 键与闭包同一泛型 N，正常情况下不会失败
                let Some(notification) = payload.downcast_ref::<N>() else {
                    anyhow::bail!("type mismatch: expected={}", type_name::<N>());
                };
                subscriber.handle(ctx, notification).await
            })
        });

        tracing::debug!(notification = N::EVENT_TYPE, subscriber = %name, "subscriber registered");

        self.subscribers
            .entry(TypeId::of::<N>())
            .or_default()
            .push(RegisteredSubscriber { name, call });
    }

    /// 某通知类型的订阅者数量
    pub fn subscriber_count<N: DomainEvent>(&self) -> usize {
        self.subscribers
            .get(&TypeId::of::<N>())
            .map(|entry| entry.value().len())
            .unwrap_or(0)
    }

    /// 发布具体类型的通知
    pub async fn publish<N: DomainEvent>(&self, ctx: &AppContext, notification: &N) -> Result<(), AppError> {
        self.publish_erased(ctx, TypeId::of::<N>(), N::EVENT_TYPE, notification)
            .await
    }

    /// 发布处理器返回的待发布通知
    pub async fn publish_pending(
        &self,
        ctx: &AppContext,
        pending: &PendingNotification,
    ) -> Result<(), AppError> {
        self.publish_erased(ctx, pending.type_id(), pending.event_type(), pending.payload())
            .await
    }

    async fn publish_erased(
        &self,
        ctx: &AppContext,
        type_id: TypeId,
        event_type: &'static str,
        payload: &AnyPayload,
    ) -> Result<(), AppError> {
        // 先复制订阅者列表，避免跨 await 持有分片锁
        let subscribers: Vec<RegisteredSubscriber> = self
            .subscribers
            .get(&type_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        if subscribers.is_empty() {
            tracing::debug!(notification = event_type, "no subscribers");
            return Ok(());
        }

        let mut failures = Vec::new();

        for subscriber in &subscribers {
            ctx.ensure_active()?;

            match (subscriber.call)(payload, ctx).await {
                Ok(()) => {
                    tracing::debug!(
                        notification = event_type,
                        subscriber = %subscriber.name,
                        "notification handled"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        notification = event_type,
                        subscriber = %subscriber.name,
                        correlation_id = ctx.correlation_id(),
                        error = %err,
                        "subscriber failed"
                    );
                    failures.push(SubscriberFailure {
                        subscriber: subscriber.name.clone(),
                        reason: format!("{err:#}"),
                    });
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AppError::Subscribers(SubscriberErrors {
                notification: event_type,
                failures,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_domain::domain_event::DomainEvent;
    use catalog_domain::product::ProductId;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;
    use tokio_util::sync::CancellationToken;

    #[derive(Debug, Clone, serde::Serialize)]
    struct Pinged(ProductId);

    impl DomainEvent for Pinged {
        const EVENT_TYPE: &'static str = "test.pinged";

        fn aggregate_id(&self) -> String {
            self.0.to_string()
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            DateTime::UNIX_EPOCH
        }
    }

    struct Recorder {
        name: &'static str,
        fail: bool,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl NotificationSubscriber<Pinged> for Recorder {
        fn subscriber_name(&self) -> &str {
            self.name
        }

        async fn handle(&self, _ctx: &AppContext, _n: &Pinged) -> anyhow::Result<()> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                anyhow::bail!("{} refused", self.name);
            }
            Ok(())
        }
    }

    fn recorder(name: &'static str, fail: bool, log: &Arc<Mutex<Vec<&'static str>>>) -> Arc<Recorder> {
        Arc::new(Recorder {
            name,
            fail,
            log: log.clone(),
        })
    }

    #[tokio::test]
    async fn zero_subscribers_is_noop() {
        let publisher = NotificationPublisher::new();
        let ctx = AppContext::default();
        publisher.publish(&ctx, &Pinged(ProductId::new())).await.unwrap();
        assert_eq!(publisher.subscriber_count::<Pinged>(), 0);
    }

    #[tokio::test]
    async fn subscribers_run_in_registration_order_and_failures_are_aggregated() {
        let publisher = NotificationPublisher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        publisher.subscribe::<Pinged, _>(recorder("first", false, &log));
        publisher.subscribe::<Pinged, _>(recorder("second", true, &log));
        publisher.subscribe::<Pinged, _>(recorder("third", false, &log));
        publisher.subscribe::<Pinged, _>(recorder("fourth", true, &log));

        let ctx = AppContext::default();
        let err = publisher
            .publish(&ctx, &Pinged(ProductId::new()))
            .await
            .unwrap_err();

        // 失败不影响后续订阅者
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third", "fourth"]);

        match err {
            AppError::Subscribers(errors) => {
                assert_eq!(errors.notification, "test.pinged");
                let failed: Vec<&str> = errors.failed_subscribers().collect();
                assert_eq!(failed, vec!["second", "fourth"]);
                assert_eq!(errors.failures[0].reason, "second refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancelled_context_stops_fan_out() {
        let publisher = NotificationPublisher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        publisher.subscribe::<Pinged, _>(recorder("only", false, &log));

        let token = CancellationToken::new();
        token.cancel();
        let ctx = AppContext::new().with_cancellation(token);

        let err = publisher
            .publish(&ctx, &Pinged(ProductId::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Cancelled));
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn pending_notification_reaches_typed_subscribers() {
        let publisher = NotificationPublisher::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        publisher.subscribe::<Pinged, _>(recorder("typed", false, &log));

        let pending = PendingNotification::new(Pinged(ProductId::new()));
        assert_eq!(pending.event_type(), "test.pinged");

        publisher
            .publish_pending(&AppContext::default(), &pending)
            .await
            .unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["typed"]);
    }
}
