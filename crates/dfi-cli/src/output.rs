//! Terminal rendering of report tables.
//!
//! Columns are aligned by `comfy-table` with a borderless preset so the
//! output reads like other kubectl tables. ANSI sequences in cells do not
//! count towards column width.

use std::io::Write;

use comfy_table::{CellAlignment, ContentArrangement, Table};
use dfi_core::report;

/// Converts a report table into a borderless terminal table.
#[must_use]
pub fn to_terminal_table(report: &report::Table) -> Table {
    let mut table = Table::new();
    let _ = table
        .load_preset(comfy_table::presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(&report.header)
        .add_rows(&report.rows);
    // kubectl separates columns by three spaces and pads nothing on the left.
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Left);
        let _ = column.set_padding((0, 3));
    }
    table
}

/// Writes the rendered table followed by a newline.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_table<W: Write>(out: &mut W, report: &report::Table) -> std::io::Result<()> {
    let rendered = to_terminal_table(report).to_string();
    for line in rendered.lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    out.flush()
}

/// Writes the table, treating a closed reader (`| head`) as success.
///
/// # Errors
///
/// Returns any write error other than a broken pipe.
pub fn print_table<W: Write>(out: &mut W, report: &report::Table) -> std::io::Result<()> {
    match write_table(out, report) {
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before the table was written");
            Ok(())
        }
        other => other,
    }
}
