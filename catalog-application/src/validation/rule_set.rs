use super::{FieldError, ValidationResult, Validator};
use catalog_domain::specification::Specification;

struct Rule<R> {
    field: &'static str,
    message: String,
    check: Box<dyn Fn(&R) -> bool + Send + Sync>,
}

/// 声明式规则集
///
/// 规则按声明顺序全部执行，失败的规则依次记录为字段错误。
///
/// ```rust
/// use catalog_application::validation::{RuleSet, Validator};
/// use catalog_domain::specification::{MaxChars, NotBlank};
///
/// struct Rename { name: String }
///
/// let rules = RuleSet::<Rename>::new()
///     .field("name", "name must not be empty", |r| r.name.as_str(), NotBlank)
///     .field("name", "name is too long", |r| r.name.as_str(), MaxChars(3));
///
/// assert!(rules.validate(&Rename { name: "abc".into() }).is_valid());
/// assert!(!rules.validate(&Rename { name: " ".into() }).is_valid());
/// ```
pub struct RuleSet<R> {
    rules: Vec<Rule<R>>,
}

impl<R> Default for RuleSet<R> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<R> RuleSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条以任意谓词表达的规则
    pub fn rule<P>(mut self, field: &'static str, message: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            field,
            message: message.into(),
            check: Box::new(predicate),
        });
        self
    }

    /// 追加一条字段规则：取出字段后交给规约判断
    pub fn field<F, A, S>(
        self,
        field: &'static str,
        message: impl Into<String>,
        accessor: A,
        spec: S,
    ) -> Self
    where
        F: ?Sized + 'static,
        A: Fn(&R) -> &F + Send + Sync + 'static,
        S: Specification<F> + 'static,
    {
        self.rule(field, message, move |request| {
            spec.is_satisfied_by(accessor(request))
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<R> Validator<R> for RuleSet<R> {
    fn validate(&self, request: &R) -> ValidationResult {
        let errors = self
            .rules
            .iter()
            .filter(|rule| !(rule.check)(request))
            .map(|rule| FieldError::new(rule.field, rule.message.clone()))
            .collect();

        ValidationResult::from_errors(errors)
    }
}
