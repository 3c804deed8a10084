use std::fmt;
use std::future::Future;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::rule::Rule;

/// Failure a deferred value may resolve with instead of a value.
///
/// Any deferred failure aborts the render that awaits it; there is no
/// partial-result recovery.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct DeferredError {
    pub message: String,
}

impl DeferredError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Future payload of a deferred value. Resolves exactly once, to another
/// presentable value of any shape.
pub type DeferredValue = BoxFuture<'static, Result<PresentableValue, DeferredError>>;

/// Lazily-produced ordered sequence of presentable values.
pub type ValueSequence = Box<dyn Iterator<Item = PresentableValue> + Send>;

/// Any value accepted by the renderer.
///
/// The union is closed: every shape the renderer handles has a variant
/// here, and producers construct variants directly instead of relying on
/// runtime shape inspection. A bare `Property` is not presentable on its
/// own — it only appears inside a `Rule`'s property sequence.
pub enum PresentableValue {
    /// Rendered verbatim.
    Text(String),
    /// Rendered in decimal text form.
    Number(f64),
    /// Resolved during rendering; may resolve to any other variant,
    /// including further deferred values.
    Deferred(DeferredValue),
    /// Flattened in place, interleaved with its siblings.
    Sequence(ValueSequence),
    /// Lowered to a `selector { key: value; }` block.
    Rule(Rule),
    /// Contributes nothing. Stands in for null/absent and boolean false.
    Empty,
}

impl PresentableValue {
    /// Wrap a future as a deferred value.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<PresentableValue, DeferredError>> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }
}

impl fmt::Debug for PresentableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Number(number) => f.debug_tuple("Number").field(number).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Sequence(_) => f.write_str("Sequence(..)"),
            Self::Rule(rule) => f.debug_tuple("Rule").field(rule).finish(),
            Self::Empty => f.write_str("Empty"),
        }
    }
}

impl From<&str> for PresentableValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PresentableValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for PresentableValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for PresentableValue {
    fn from(number: i32) -> Self {
        Self::Number(number.into())
    }
}

impl From<u32> for PresentableValue {
    fn from(number: u32) -> Self {
        Self::Number(number.into())
    }
}

impl From<Rule> for PresentableValue {
    fn from(rule: Rule) -> Self {
        Self::Rule(rule)
    }
}

impl From<Vec<PresentableValue>> for PresentableValue {
    fn from(items: Vec<PresentableValue>) -> Self {
        Self::Sequence(Box::new(items.into_iter()))
    }
}

impl<T> From<Option<T>> for PresentableValue
where
    T: Into<PresentableValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Empty,
        }
    }
}
