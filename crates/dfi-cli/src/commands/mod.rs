//! Command-line surface and execution of `kubectl dfi`.

pub mod connect;
pub mod display;

use std::io;

use clap::Parser;
use dfi_common::constants::{BIN_NAME, COMMAND_NAME};
use dfi_core::report;
use dfi_kube::{KubeNodeSource, fetch_nodes};

use crate::output;

const EXAMPLES: &str = "\
Examples:
  # Show image usage of Kubernetes nodes.
  kubectl dfi

  # Using label selector.
  kubectl dfi -l key=value

  # Use image count with image disk usage.
  kubectl dfi --count

  # Print raw(bytes) usage.
  kubectl dfi --bytes --without-unit

  # Using binary prefix unit (GiB, MiB, etc)
  kubectl dfi -g -B

  # List images on nodes.
  kubectl dfi --list";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    ", GitCommit: ",
    env!("DFI_GIT_COMMIT"),
    ", BuildDate: ",
    env!("DFI_BUILD_DATE"),
);

/// Show disk resources of images on Kubernetes nodes.
#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    bin_name = COMMAND_NAME,
    version,
    long_version = LONG_VERSION,
    about,
    long_about = "Show disk resources of images on Kubernetes nodes.",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Nodes to report on. Without names, nodes are listed by selector.
    #[arg(value_name = "NODE")]
    pub nodes: Vec<String>,

    /// Selector (label query) to filter on.
    #[arg(short = 'l', long, default_value = "")]
    pub selector: String,

    /// Show image list on node.
    #[arg(long)]
    pub list: bool,

    /// Rendering options.
    #[command(flatten)]
    pub display: display::DisplayArgs,

    /// Cluster connection options.
    #[command(flatten)]
    pub connect: connect::ConnectArgs,
}

/// Runs one invocation: validate, fetch, format, print.
///
/// Options are validated before the cluster is contacted, and nothing is
/// printed unless every node was fetched.
///
/// # Errors
///
/// Returns an error for invalid options, connection or fetch failures, or a
/// failed write to stdout.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = cli.display.to_config(cli.list)?;
    tracing::debug!(?config, "resolved display options");

    let source = KubeNodeSource::connect(&cli.connect.to_options()).await?;
    let nodes = fetch_nodes(&source, &cli.nodes, &cli.selector).await?;

    let table = report::build(&nodes, &config);
    tracing::info!(nodes = nodes.len(), rows = table.rows.len(), "rendering table");
    output::print_table(&mut io::stdout().lock(), &table)?;
    Ok(())
}
