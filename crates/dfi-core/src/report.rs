//! Builds the summary and image-listing tables from node records.
//!
//! Both builders return a [`Table`] value; nothing is written until the
//! caller hands the finished table to a renderer.

use dfi_common::config::{DisplayConfig, OutputMode};
use dfi_common::constants::{IMAGE_LIST_HEADERS, SUMMARY_HEADERS};
use dfi_common::types::{Node, UnitSpec};

use crate::{color, threshold, unit, usage};

/// A header row and data rows of equal arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column titles.
    pub header: Vec<String>,
    /// Data rows, one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column titles.
    #[must_use]
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    ///
    /// Rows must carry one cell per header column.
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.header.len(), "row arity must match header");
        self.rows.push(row);
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the table selected by `config.mode`.
#[must_use]
pub fn build(nodes: &[Node], config: &DisplayConfig) -> Table {
    match config.mode {
        OutputMode::Summary => summary_table(nodes, config),
        OutputMode::ImageList => image_table(nodes, config),
    }
}

/// One row per node: name, image usage, allocatable, capacity, `%USED`.
#[must_use]
pub fn summary_table(nodes: &[Node], config: &DisplayConfig) -> Table {
    let spec = unit::unit_spec(config.unit, config.prefix);
    let mut table = Table::new(&SUMMARY_HEADERS);

    for node in nodes {
        let used = usage::aggregate(&node.images);
        tracing::debug!(
            node = %node.name,
            used = used.total_bytes,
            images = used.count,
            capacity = ?node.capacity_bytes,
            allocatable = ?node.allocatable_bytes,
            "summarising node"
        );

        let mut used_cell = size(used.total_bytes, &spec, config);
        if config.show_count {
            used_cell.push_str(&format!("({})", used.count));
        }

        table.push_row(vec![
            node.name.clone(),
            used_cell,
            size(node.allocatable(), &spec, config),
            size(node.capacity(), &spec, config),
            threshold::image_disk_usage(
                used.total_bytes,
                node.capacity(),
                &config.thresholds,
                config.color,
            ),
        ]);
    }

    table
}

/// One row per cached image: node name, image size, display name.
#[must_use]
pub fn image_table(nodes: &[Node], config: &DisplayConfig) -> Table {
    let spec = unit::unit_spec(config.unit, config.prefix);
    let mut table = Table::new(&IMAGE_LIST_HEADERS);

    for node in nodes {
        for image in &node.images {
            let name = image.display_name();
            let name = if config.color {
                color::highlight_tag(name)
            } else {
                name.to_string()
            };
            table.push_row(vec![
                node.name.clone(),
                size(image.size_bytes, &spec, config),
                name,
            ]);
        }
    }

    table
}

fn size(bytes: u64, spec: &UnitSpec, config: &DisplayConfig) -> String {
    unit::format_size(bytes, spec, config.without_unit)
}
