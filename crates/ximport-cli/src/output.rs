//! Rendering of command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use ximport_map::MappingSummary;

/// Marker printed for values that did not resolve.
pub const NO_MATCH: &str = "(no match)";

/// Outcome of resolving one command-line value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub value: String,
    pub code: Option<String>,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        self.code.is_some()
    }
}

/// One `value -> code` line per resolution.
pub fn render_resolutions(resolutions: &[Resolution]) -> String {
    resolutions
        .iter()
        .map(|resolution| {
            format!(
                "{} -> {}",
                resolution.value,
                resolution.code.as_deref().unwrap_or(NO_MATCH)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary table for a mapped column.
pub fn summary_table(column: &str, summary: &MappingSummary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Column", "Mapped", "Defaulted", "Dropped", "Total"]);
    table.add_row(vec![
        Cell::new(column),
        Cell::new(summary.mapped).set_alignment(CellAlignment::Right),
        Cell::new(summary.defaulted).set_alignment(CellAlignment::Right),
        Cell::new(summary.dropped).set_alignment(CellAlignment::Right),
        Cell::new(summary.total()).set_alignment(CellAlignment::Right),
    ]);
    table
}
