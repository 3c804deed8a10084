use std::fmt;

use serde::{Deserialize, Serialize};

/// A property key or value: plain CSS text, or the name of a custom
/// property carrying its human-readable description.
///
/// `Custom` prints with a different prefix convention depending on
/// position: `--name` when used as a key (declaration), `var(--name)`
/// when used as a value (reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyName {
    Plain(String),
    Custom(String),
}

impl From<&str> for PropertyName {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for PropertyName {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

/// Key/value pair within a rule. Each side is independently plain or
/// custom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub key: PropertyName,
    pub value: PropertyName,
}

/// Lazily-consumed property sequence. Read exactly once, at render time.
pub type PropertySequence = Box<dyn Iterator<Item = Property> + Send>;

/// Style rule: an eagerly-materialized selector list plus a property
/// sequence that stays lazy until the rule is rendered.
pub struct Rule {
    pub selectors: Vec<String>,
    pub properties: PropertySequence,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("selectors", &self.selectors)
            .field("properties", &"<lazy>")
            .finish()
    }
}

/// Second half of the curried rule constructor: holds the materialized
/// selectors until the property sequence is supplied.
pub struct RuleBuilder {
    selectors: Vec<String>,
}

impl RuleBuilder {
    pub fn new(selectors: Vec<String>) -> Self {
        Self { selectors }
    }

    /// Finish the rule. The property sequence is stored as handed in,
    /// not copied, so a one-shot producer runs only when rendered.
    pub fn properties<I>(self, properties: I) -> Rule
    where
        I: IntoIterator<Item = Property>,
        I::IntoIter: Send + 'static,
    {
        Rule {
            selectors: self.selectors,
            properties: Box::new(properties.into_iter()),
        }
    }
}
