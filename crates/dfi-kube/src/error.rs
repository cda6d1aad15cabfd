//! Errors raised while talking to the Kubernetes API.

use dfi_common::error::DfiError;
use thiserror::Error;

/// Failure to configure the client or fetch node objects.
#[derive(Debug, Error)]
pub enum KubeError {
    /// The kubeconfig file could not be read or does not resolve.
    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    /// Neither a kubeconfig nor an in-cluster environment was usable.
    #[error("failed to infer cluster configuration: {0}")]
    Infer(#[from] kube::config::InferConfigError),

    /// The HTTP client could not be built from the configuration.
    #[error("failed to create kubernetes client: {0}")]
    Client(#[source] kube::Error),

    /// A node requested by name could not be fetched.
    #[error("failed to get node: {source}")]
    GetNode {
        /// Requested node name.
        name: String,
        /// Underlying API error.
        source: kube::Error,
    },

    /// The node list query failed.
    #[error("failed to get nodes: {source}")]
    ListNodes {
        /// Label selector of the query, empty for all nodes.
        selector: String,
        /// Underlying API error.
        source: kube::Error,
    },
}

impl From<KubeError> for DfiError {
    fn from(err: KubeError) -> Self {
        Self::Source {
            message: err.to_string(),
        }
    }
}
