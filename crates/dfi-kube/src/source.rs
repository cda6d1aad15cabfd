//! The seam between node fetching and table formatting.

use std::future::Future;

use dfi_common::error::Result;
use dfi_common::types::Node;

/// Supplies node records.
///
/// Implementors handle the transport; callers only see [`Node`] values.
pub trait NodeSource {
    /// Fetches a single node by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the node does not exist or the request fails.
    fn get(&self, name: &str) -> impl Future<Output = Result<Node>> + Send;

    /// Lists nodes matching a label selector. An empty selector matches all.
    ///
    /// # Errors
    ///
    /// Returns an error if the list request fails.
    fn list(&self, selector: &str) -> impl Future<Output = Result<Vec<Node>>> + Send;
}

/// Collects the nodes a command invocation reports on.
///
/// Explicit names are fetched one at a time in the given order and the first
/// failure aborts. Without names, a single list call with `selector` is made.
///
/// # Errors
///
/// Returns the first error reported by the source.
pub async fn fetch_nodes<S: NodeSource + Sync>(
    source: &S,
    names: &[String],
    selector: &str,
) -> Result<Vec<Node>> {
    if names.is_empty() {
        tracing::info!(selector, "listing nodes");
        let nodes = source.list(selector).await?;
        tracing::info!(count = nodes.len(), "listed nodes");
        return Ok(nodes);
    }

    let mut nodes = Vec::with_capacity(names.len());
    for name in names {
        tracing::info!(node = %name, "getting node");
        nodes.push(source.get(name).await?);
    }
    Ok(nodes)
}
