use super::{ValidationResult, Validator};
use crate::request::Request;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

type ValidatorList<R> = Vec<Arc<dyn Validator<R>>>;

/// 按请求类型注册的校验器表
///
/// - 同一请求类型可注册多个校验器，按注册顺序执行并合并错误；
/// - 未注册校验器的请求类型自动通过（校验按类型选择性启用）。
#[derive(Default)]
pub struct ValidatorRegistry {
    // 值为 `ValidatorList<R>`，键与值的泛型 R 一一对应
    validators: DashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册校验器
    pub fn register<R, V>(&self, validator: Arc<V>)
    where
        R: Request,
        V: Validator<R> + 'static,
    {
        let mut slot = self
            .validators
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(ValidatorList::<R>::new()));

        if let Some(list) = slot.downcast_mut::<ValidatorList<R>>() {
            list.push(validator);
        }
    }

    /// 对请求执行全部已注册校验器
    pub fn validate<R: Request>(&self, request: &R) -> ValidationResult {
        let validators: ValidatorList<R> = self
            .validators
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.downcast_ref::<ValidatorList<R>>().cloned())
            .unwrap_or_default();

        validators
            .iter()
            .fold(ValidationResult::Valid, |acc, v| acc.merge(v.validate(request)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RuleSet;

    struct Ping {
        n: i32,
    }

    impl Request for Ping {
        const NAME: &'static str = "Ping";
        type Output = ();
    }

    struct Pong;

    impl Request for Pong {
        const NAME: &'static str = "Pong";
        type Output = ();
    }

    #[test]
    fn unregistered_type_passes() {
        let registry = ValidatorRegistry::new();
        assert!(registry.validate(&Pong).is_valid());
    }

    #[test]
    fn multiple_validators_merge_in_registration_order() {
        let registry = ValidatorRegistry::new();
        registry.register::<Ping, _>(Arc::new(
            RuleSet::<Ping>::new().rule("n", "positive", |p: &Ping| p.n > 0),
        ));
        registry.register::<Ping, _>(Arc::new(
            RuleSet::<Ping>::new().rule("n", "even", |p: &Ping| p.n % 2 == 0),
        ));

        let errors = registry.validate(&Ping { n: -1 }).into_result().unwrap_err();
        let messages: Vec<&str> = errors.messages_for("n").collect();
        assert_eq!(messages, vec!["positive", "even"]);

        assert!(registry.validate(&Ping { n: 2 }).is_valid());
        // 其他类型不受影响
        assert!(registry.validate(&Pong).is_valid());
    }
}
