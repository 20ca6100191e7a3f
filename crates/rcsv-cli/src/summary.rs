use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rcsv_model::Table as DataTable;

use crate::cli::LayoutArg;
use crate::types::FetchOutcome;

pub fn print_fetch_summary(outcome: &FetchOutcome, preview_rows: usize, layout: LayoutArg) {
    let report = &outcome.report;
    println!(
        "Loaded {} rows and {} columns after skipping errors.",
        report.rows, report.columns
    );
    if report.dropped_rows > 0 {
        println!(
            "Skipped {} rows across {} chunks.",
            report.dropped_rows, report.chunks
        );
    }
    println!("Columns: {}", outcome.table.column_names().join(", "));
    let preview = outcome.table.head(preview_rows);
    if !preview.is_empty() {
        println!("{}", render_preview(&preview, layout));
        if outcome.table.row_count() > preview.row_count() {
            println!(
                "Showing {} of {} rows.",
                preview.row_count(),
                outcome.table.row_count()
            );
        }
    }
    if let Some(path) = &outcome.written {
        println!("Cleaned CSV written to {}", path.display());
    }
}

pub fn print_fetch_json(outcome: &FetchOutcome) {
    let payload = serde_json::json!({
        "report": outcome.report,
        "columns": outcome.table.column_names(),
        "written": outcome.written.as_ref().map(|path| path.display().to_string()),
    });
    match serde_json::to_string_pretty(&payload) {
        Ok(text) => println!("{text}"),
        Err(error) => eprintln!("error: failed to render JSON report: {error}"),
    }
}

fn render_preview(preview: &DataTable, layout: LayoutArg) -> Table {
    let mut table = Table::new();
    table.set_header(
        preview
            .column_names()
            .iter()
            .map(|name| header_cell(name))
            .collect::<Vec<_>>(),
    );
    match layout {
        LayoutArg::Compact => apply_compact_style(&mut table),
        LayoutArg::Wide => apply_wide_style(&mut table),
    }
    for index in 0..preview.column_count() {
        if is_numeric_column(preview, index) {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for row in &preview.rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    table
}

fn apply_compact_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// True when every non-empty cell in the column parses as a number.
fn is_numeric_column(preview: &DataTable, index: usize) -> bool {
    let mut non_empty = 0usize;
    for row in &preview.rows {
        let value = row.get(index).map(String::as_str).unwrap_or("").trim();
        if value.is_empty() {
            continue;
        }
        if value.parse::<f64>().is_err() {
            return false;
        }
        non_empty += 1;
    }
    non_empty > 0
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
