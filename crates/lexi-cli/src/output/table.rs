//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use lexi::check::Coverage;

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(coverage: &[Coverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Coverage", "Missing"]);

    for locale in coverage {
        table.add_row(vec![
            locale.locale.clone(),
            format!("{}/{}", locale.translated, locale.total),
            locale.missing.len().to_string(),
        ]);
    }

    table
}
