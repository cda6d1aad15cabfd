//! Defaults, column headers, and Kubernetes resource names.

/// Default percentage at which usage turns yellow.
pub const DEFAULT_WARN_THRESHOLD: u64 = 25;

/// Default percentage at which usage turns red.
pub const DEFAULT_CRIT_THRESHOLD: u64 = 50;

/// Rendered in place of a size or percentage the cluster does not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder name for an API image record that carries no names.
pub const UNNAMED_IMAGE: &str = "<none>";

/// Node resource holding the image cache disk figures.
pub const EPHEMERAL_STORAGE: &str = "ephemeral-storage";

/// Column headers of the per-node summary table.
pub const SUMMARY_HEADERS: [&str; 5] = ["NAME", "IMAGE USED", "ALLOCATABLE", "CAPACITY", "%USED"];

/// Column headers of the image listing table.
pub const IMAGE_LIST_HEADERS: [&str; 3] = ["NAME", "IMAGE SIZE", "IMAGE NAME"];

/// Binary name, discovered by kubectl as the `dfi` plugin.
pub const BIN_NAME: &str = "kubectl-dfi";

/// Command name as the user types it.
pub const COMMAND_NAME: &str = "kubectl dfi";
