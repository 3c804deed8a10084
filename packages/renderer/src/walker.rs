use std::fmt;

use futures_util::future::BoxFuture;
use styleflow_style::{PresentableValue, PropertyName, Rule};
use tracing::debug;

use crate::renderer::{resolve_fragments, RenderResult};

/// One unit of output text: either ready, or a handle that resolves to
/// the flattened text of an entire deferred subtree.
pub enum Fragment {
    Ready(String),
    Deferred(BoxFuture<'static, RenderResult<String>>),
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(text) => f.debug_tuple("Ready").field(text).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Flatten a tree of presentable values into ordered fragments.
///
/// Depth-first, left to right. The synchronous shape of the tree is
/// drained completely here; deferred subtrees surface as `Deferred`
/// fragments that re-enter this pass when awaited. The walker itself
/// never fails — failures surface when the fragments are resolved.
pub fn flatten<I>(root: I) -> Vec<Fragment>
where
    I: IntoIterator<Item = PresentableValue>,
{
    let mut fragments = Vec::new();
    flatten_into(root, &mut fragments);
    fragments
}

fn flatten_into<I>(items: I, out: &mut Vec<Fragment>)
where
    I: IntoIterator<Item = PresentableValue>,
{
    for item in items {
        match item {
            PresentableValue::Empty => {}
            PresentableValue::Text(text) => out.push(Fragment::Ready(text)),
            PresentableValue::Number(number) => out.push(Fragment::Ready(number.to_string())),
            PresentableValue::Deferred(future) => {
                out.push(Fragment::Deferred(Box::pin(async move {
                    let value = future.await?;
                    resolve_value(value).await
                })));
            }
            PresentableValue::Sequence(items) => flatten_into(items, out),
            PresentableValue::Rule(rule) => flatten_rule(rule, out),
        }
    }
}

/// Lower a rule to its `selector { key: value; }` fragments. The property
/// sequence is consumed here, exactly once; property fragments carry no
/// separator between them.
fn flatten_rule(rule: Rule, out: &mut Vec<Fragment>) {
    debug!(selectors = ?rule.selectors, "lowering style rule");

    out.push(Fragment::Ready(rule.selectors.join(", ")));
    out.push(Fragment::Ready(" {\n".to_string()));
    for property in rule.properties {
        out.push(Fragment::Ready(key_text(property.key)));
        out.push(Fragment::Ready(": ".to_string()));
        out.push(Fragment::Ready(value_text(property.value)));
        out.push(Fragment::Ready(";".to_string()));
    }
    out.push(Fragment::Ready("\n}".to_string()));
}

fn key_text(name: PropertyName) -> String {
    match name {
        PropertyName::Plain(text) => text,
        PropertyName::Custom(description) => format!("--{}", description),
    }
}

fn value_text(name: PropertyName) -> String {
    match name {
        PropertyName::Plain(text) => text,
        PropertyName::Custom(description) => format!("var(--{})", description),
    }
}

/// Resolve one value by feeding it back through the flattening pass as a
/// one-element sequence and joining whatever flat fragments come out.
/// This is how a single deferred value expands into a whole subtree —
/// nested sequences, rules, and further deferred values included.
fn resolve_value(value: PresentableValue) -> BoxFuture<'static, RenderResult<String>> {
    Box::pin(async move {
        let fragments = flatten(std::iter::once(value));
        let resolved = resolve_fragments(fragments).await?;
        Ok(resolved.concat())
    })
}
