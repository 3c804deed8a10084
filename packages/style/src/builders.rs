use crate::rule::{Property, PropertyName, Rule, RuleBuilder};
use crate::value::PresentableValue;

/// Build a property from a key and a value, each either plain text or a
/// custom-property name from [`custom`].
pub fn prop(key: impl Into<PropertyName>, value: impl Into<PropertyName>) -> Property {
    Property {
        key: key.into(),
        value: value.into(),
    }
}

/// Build a property whose `camelCase` key is converted to kebab-case
/// (`boxSizing` becomes `box-sizing`).
pub fn prop_camel(key: &str, value: impl Into<PropertyName>) -> Property {
    Property {
        key: PropertyName::Plain(camel_to_kebab(key)),
        value: value.into(),
    }
}

/// Name a custom property by its human-readable description.
pub fn custom(description: impl Into<String>) -> PropertyName {
    PropertyName::Custom(description.into())
}

/// Start a rule from its selectors. The selectors are materialized into a
/// fixed list immediately; the returned builder waits for the property
/// sequence.
pub fn rule<I>(selectors: I) -> RuleBuilder
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    RuleBuilder::new(selectors.into_iter().map(Into::into).collect())
}

/// Wrap an owned iterator of values as a single sequence value, so a lazy
/// producer can stand wherever one value is expected.
pub fn sequence<I>(items: I) -> PresentableValue
where
    I: IntoIterator<Item = PresentableValue>,
    I::IntoIter: Send + 'static,
{
    PresentableValue::Sequence(Box::new(items.into_iter()))
}

/// `[name]` data-attribute selector.
pub fn data(name: &str) -> String {
    format!("[{}]", name)
}

/// `[name="value"]` data-attribute selector, value JSON-quoted.
pub fn data_value(name: &str, value: &str) -> String {
    format!("[{}={}]", name, serde_json::json!(value))
}

pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
