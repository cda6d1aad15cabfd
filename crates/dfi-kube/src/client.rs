//! `kube`-backed node source and kubeconfig resolution.

use std::path::PathBuf;

use dfi_common::error::Result;
use dfi_common::types::Node;
use k8s_openapi::api::core::v1::Node as ApiNode;
use kube::api::{Api, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

use crate::convert;
use crate::error::KubeError;
use crate::source::NodeSource;

/// How to reach the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Kubeconfig file to read instead of the default resolution.
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use.
    pub context: Option<String>,
    /// Kubeconfig cluster to use.
    pub cluster: Option<String>,
    /// Kubeconfig user to use.
    pub user: Option<String>,
}

impl ConnectOptions {
    fn kubeconfig_options(&self) -> KubeConfigOptions {
        KubeConfigOptions {
            context: self.context.clone(),
            cluster: self.cluster.clone(),
            user: self.user.clone(),
        }
    }

    const fn selects_entries(&self) -> bool {
        self.context.is_some() || self.cluster.is_some() || self.user.is_some()
    }
}

/// Resolves the client configuration.
///
/// Resolution order:
/// 1. An explicit kubeconfig path, with any context/cluster/user overrides.
/// 2. With overrides but no path, the default kubeconfig (`KUBECONFIG`, then
///    `~/.kube/config`).
/// 3. Otherwise inference: default kubeconfig, falling back to the in-cluster
///    service account.
///
/// # Errors
///
/// Returns a [`KubeError`] if no usable configuration is found.
pub async fn load_config(options: &ConnectOptions) -> std::result::Result<Config, KubeError> {
    if let Some(path) = &options.kubeconfig {
        tracing::debug!(path = %path.display(), "reading kubeconfig");
        let kubeconfig = Kubeconfig::read_from(path)?;
        return Ok(Config::from_custom_kubeconfig(kubeconfig, &options.kubeconfig_options()).await?);
    }
    if options.selects_entries() {
        return Ok(Config::from_kubeconfig(&options.kubeconfig_options()).await?);
    }
    Ok(Config::infer().await?)
}

/// Node source backed by the Kubernetes API.
#[derive(Clone)]
pub struct KubeNodeSource {
    api: Api<ApiNode>,
}

impl KubeNodeSource {
    /// Wraps an existing client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            api: Api::all(client),
        }
    }

    /// Resolves the configuration and builds a client.
    ///
    /// # Errors
    ///
    /// Returns a [`KubeError`] if configuration or client construction fails.
    pub async fn connect(options: &ConnectOptions) -> std::result::Result<Self, KubeError> {
        let config = load_config(options).await?;
        tracing::info!(cluster = %config.cluster_url, "connecting to cluster");
        let client = Client::try_from(config).map_err(KubeError::Client)?;
        Ok(Self::new(client))
    }
}

impl NodeSource for KubeNodeSource {
    async fn get(&self, name: &str) -> Result<Node> {
        let node = self.api.get(name).await.map_err(|source| KubeError::GetNode {
            name: name.to_string(),
            source,
        })?;
        Ok(convert::node_from_api(node))
    }

    async fn list(&self, selector: &str) -> Result<Vec<Node>> {
        let mut params = ListParams::default();
        if !selector.is_empty() {
            params = params.labels(selector);
        }
        let list = self
            .api
            .list(&params)
            .await
            .map_err(|source| KubeError::ListNodes {
                selector: selector.to_string(),
                source,
            })?;
        Ok(list.items.into_iter().map(convert::node_from_api).collect())
    }
}
