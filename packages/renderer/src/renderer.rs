use futures_util::future::{join_all, ready, BoxFuture};
use styleflow_style::{DeferredError, PresentableValue};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::walker::{flatten, Fragment};

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Deferred value failed: {0}")]
    Deferred(#[from] DeferredError),
}

/// Render a tree of presentable values to a single stylesheet string.
///
/// Flattens the synchronous shape of the tree first, then waits for every
/// deferred fragment concurrently. Completion timing never reorders
/// output — a fragment's position is fixed by traversal order. Any
/// deferred failure fails the whole render; a deferred that never
/// resolves suspends it indefinitely.
#[instrument(skip(root))]
pub async fn render<I>(root: I) -> RenderResult<String>
where
    I: IntoIterator<Item = PresentableValue>,
{
    let fragments = flatten(root);
    let deferred = fragments
        .iter()
        .filter(|fragment| matches!(fragment, Fragment::Deferred(_)))
        .count();
    debug!(total = fragments.len(), deferred, "flattened input tree");

    let resolved = resolve_fragments(fragments).await?;

    // Exactly-empty fragments are dropped; whitespace-only text survives.
    Ok(resolved
        .into_iter()
        .filter(|text| !text.is_empty())
        .collect())
}

/// Scatter/gather over one flattened pass: every deferred fragment is
/// polled concurrently, and each slot keeps its traversal position.
pub(crate) async fn resolve_fragments(fragments: Vec<Fragment>) -> RenderResult<Vec<String>> {
    let pending: Vec<BoxFuture<'static, RenderResult<String>>> = fragments
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Ready(text) => Box::pin(ready(Ok(text))) as BoxFuture<'static, _>,
            Fragment::Deferred(future) => future,
        })
        .collect();

    join_all(pending).await.into_iter().collect()
}
