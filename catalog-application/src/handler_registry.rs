use crate::{
    command::Command,
    context::AppContext,
    error::AppError,
    handler::{Handled, RequestHandler},
    query::Query,
    request::{Request, RequestKind},
};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, TypeId, type_name};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

type BoxAnySend = Box<dyn Any + Send>;

type HandlerFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Handled<BoxAnySend>, AppError>> + Send + 'a>>;

type HandlerFn =
    Arc<dyn for<'a> Fn(BoxAnySend, &'a AppContext) -> HandlerFuture<'a> + Send + Sync>;

fn erase<F>(f: F) -> HandlerFn
where
    F: for<'a> Fn(BoxAnySend, &'a AppContext) -> HandlerFuture<'a> + Send + Sync + 'static,
{
    Arc::new(f)
}

#[derive(Clone)]
struct RegisteredHandler {
    name: &'static str,
    kind: RequestKind,
    invoke: HandlerFn,
}

/// 请求处理器注册表
/// - 通过 TypeId 注册不同请求对应的唯一处理器
/// - 重复注册与缺失注册均属于装配错误，应在启动期暴露
/// - 运行时以类型擦除（Any）方式调度，并在调用端进行结果还原
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: DashMap<TypeId, RegisteredHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器
    pub fn register_command<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: RequestHandler<C> + 'static,
    {
        self.register::<C, H>(RequestKind::Command, handler)
    }

    /// 注册查询处理器
    pub fn register_query<Q, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        Q: Query,
        H: RequestHandler<Q> + 'static,
    {
        self.register::<Q, H>(RequestKind::Query, handler)
    }

    fn register<R, H>(&self, kind: RequestKind, handler: Arc<H>) -> Result<(), AppError>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let slot = match self.handlers.entry(TypeId::of::<R>()) {
            Entry::Occupied(_) => {
                return Err(AppError::AlreadyRegistered { request: R::NAME });
            }
            Entry::Vacant(slot) => slot,
        };

        let invoke = erase(move |boxed_request, ctx| {
            let handler = handler.clone();

            Box::pin(async move {
                // 正常情况下这里的 downcast 永远不会失败（键与闭包同一泛型 R）
                match boxed_request.downcast::<R>() {
                    Ok(request) => {
                        let handled = handler.handle(ctx, *request).await?;
                        Ok(handled.map(|output| Box::new(output) as BoxAnySend))
                    }
                    Err(_) => Err(AppError::TypeMismatch {
                        expected: R::NAME,
                        found: "unknown",
                    }),
                }
            })
        });

        slot.insert(RegisteredHandler {
            name: R::NAME,
            kind,
            invoke,
        });

        tracing::debug!(request = R::NAME, ?kind, "handler registered");
        Ok(())
    }

    /// 解析请求类型对应的处理器
    pub fn resolve<R: Request>(&self) -> Result<ResolvedHandler<R>, AppError> {
        let Some(entry) = self
            .handlers
            .get(&TypeId::of::<R>())
            .map(|h| h.value().clone())
        else {
            return Err(AppError::HandlerNotFound(R::NAME));
        };

        Ok(ResolvedHandler {
            entry,
            _marker: PhantomData,
        })
    }

    pub fn contains<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    /// 获取已注册的请求名列表（按名称排序，只读视图）
    pub fn registered_requests(&self) -> Vec<(&'static str, RequestKind)> {
        let mut names: Vec<_> = self
            .handlers
            .iter()
            .map(|e| (e.value().name, e.value().kind))
            .collect();
        names.sort_unstable_by_key(|(name, _)| *name);
        names
    }
}

/// 已解析的处理器，调用时完成结果类型还原
pub struct ResolvedHandler<R> {
    entry: RegisteredHandler,
    _marker: PhantomData<fn(R)>,
}

impl<R: Request> ResolvedHandler<R> {
    pub fn kind(&self) -> RequestKind {
        self.entry.kind
    }

    pub async fn invoke(&self, ctx: &AppContext, request: R) -> Result<Handled<R::Output>, AppError> {
        let handled = (self.entry.invoke)(Box::new(request), ctx).await?;
        let (output, notification) = handled.into_parts();

        match output.downcast::<R::Output>() {
            Ok(output) => Ok(Handled {
                output: *output,
                notification,
            }),
            Err(_) => Err(AppError::TypeMismatch {
                expected: type_name::<R::Output>(),
                found: "unknown",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Dto;
    use async_trait::async_trait;
    use serde::Serialize;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::task::JoinSet;

    #[derive(Debug)]
    struct Bump;

    impl Request for Bump {
        const NAME: &'static str = "Bump";
        type Output = usize;
    }
    impl Command for Bump {}

    struct BumpHandler {
        counter: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RequestHandler<Bump> for BumpHandler {
        async fn handle(&self, _ctx: &AppContext, _req: Bump) -> Result<Handled<usize>, AppError> {
            Ok(Handled::new(self.counter.fetch_add(1, Ordering::SeqCst) + 1))
        }
    }

    #[derive(Debug)]
    struct Peek;

    #[derive(Debug, Serialize, PartialEq)]
    struct NumDto(usize);
    impl Dto for NumDto {}

    impl Request for Peek {
        const NAME: &'static str = "Peek";
        type Output = NumDto;
    }
    impl Query for Peek {}

    struct PeekHandler;

    #[async_trait]
    impl RequestHandler<Peek> for PeekHandler {
        async fn handle(&self, _ctx: &AppContext, _req: Peek) -> Result<Handled<NumDto>, AppError> {
            Ok(Handled::new(NumDto(7)))
        }
    }

    fn bump_handler() -> Arc<BumpHandler> {
        Arc::new(BumpHandler {
            counter: Arc::new(AtomicUsize::new(0)),
        })
    }

    #[tokio::test]
    async fn register_resolve_and_invoke() {
        let registry = HandlerRegistry::new();
        registry.register_command::<Bump, _>(bump_handler()).unwrap();
        registry.register_query::<Peek, _>(Arc::new(PeekHandler)).unwrap();

        let ctx = AppContext::default();
        let bump = registry.resolve::<Bump>().unwrap();
        assert_eq!(bump.kind(), RequestKind::Command);
        assert_eq!(bump.invoke(&ctx, Bump).await.unwrap().output, 1);

        let peek = registry.resolve::<Peek>().unwrap();
        assert_eq!(peek.kind(), RequestKind::Query);
        assert_eq!(peek.invoke(&ctx, Peek).await.unwrap().output, NumDto(7));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = HandlerRegistry::new();
        registry.register_command::<Bump, _>(bump_handler()).unwrap();

        let err = registry
            .register_command::<Bump, _>(bump_handler())
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyRegistered { request: "Bump" }));
        assert!(err.is_configuration());
    }

    #[test]
    fn resolving_unregistered_request_is_configuration_error() {
        let registry = HandlerRegistry::new();
        let err = match registry.resolve::<Peek>() {
            Ok(_) => panic!("resolved an unregistered request"),
            Err(err) => err,
        };
        assert!(matches!(err, AppError::HandlerNotFound("Peek")));
        assert!(err.is_configuration());
        assert!(!registry.contains::<Peek>());
    }

    #[test]
    fn registered_requests_are_listed_by_name() {
        let registry = HandlerRegistry::new();
        registry.register_query::<Peek, _>(Arc::new(PeekHandler)).unwrap();
        registry.register_command::<Bump, _>(bump_handler()).unwrap();

        assert_eq!(
            registry.registered_requests(),
            vec![("Bump", RequestKind::Command), ("Peek", RequestKind::Query)]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_invocation_is_safe() {
        let registry = Arc::new(HandlerRegistry::new());
        registry.register_command::<Bump, _>(bump_handler()).unwrap();

        let mut set = JoinSet::new();
        for _ in 0..100 {
            let registry = registry.clone();
            set.spawn(async move {
                let ctx = AppContext::default();
                let handler = registry.resolve::<Bump>().unwrap();
                handler.invoke(&ctx, Bump).await.unwrap().output
            });
        }

        let mut results = Vec::new();
        while let Some(res) = set.join_next().await {
            results.push(res.unwrap());
        }
        results.sort_unstable();
        assert_eq!(results.len(), 100);
        assert_eq!(results[0], 1);
        assert_eq!(results[99], 100);
    }
}
