//! Kubeconfig selection flags, as on other kubectl plugins.

use std::path::PathBuf;

use clap::Args;
use dfi_kube::ConnectOptions;

/// Flags selecting the cluster to talk to.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectArgs {
    /// Path to the kubeconfig file to use for CLI requests.
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// The name of the kubeconfig context to use.
    #[arg(long)]
    pub context: Option<String>,

    /// The name of the kubeconfig cluster to use.
    #[arg(long)]
    pub cluster: Option<String>,

    /// The name of the kubeconfig user to use.
    #[arg(long)]
    pub user: Option<String>,
}

impl ConnectArgs {
    /// Connection options for the node source.
    #[must_use]
    pub fn to_options(&self) -> ConnectOptions {
        ConnectOptions {
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
            cluster: self.cluster.clone(),
            user: self.user.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_every_override() {
        let args = ConnectArgs {
            kubeconfig: Some(PathBuf::from("/tmp/kubeconfig")),
            context: Some("dev".into()),
            cluster: Some("dev-cluster".into()),
            user: Some("admin".into()),
        };
        let options = args.to_options();
        assert_eq!(options.kubeconfig.as_deref(), Some(std::path::Path::new("/tmp/kubeconfig")));
        assert_eq!(options.context.as_deref(), Some("dev"));
        assert_eq!(options.cluster.as_deref(), Some("dev-cluster"));
        assert_eq!(options.user.as_deref(), Some("admin"));
    }

    #[test]
    fn nothing_given_means_inference() {
        assert_eq!(ConnectArgs::default().to_options(), ConnectOptions::default());
    }
}
