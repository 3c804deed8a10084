pub mod builders;
pub mod rule;
pub mod value;

#[cfg(test)]
mod tests_builders;

pub use builders::{camel_to_kebab, custom, data, data_value, prop, prop_camel, rule, sequence};
pub use rule::{Property, PropertyName, PropertySequence, Rule, RuleBuilder};
pub use value::{DeferredError, DeferredValue, PresentableValue, ValueSequence};
