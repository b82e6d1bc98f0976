//! Terminal rendering of parse reports and the alias table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vocab_map::FIELD_ALIASES;
use vocab_model::{SkippedRow, VocabularyRecord};

use crate::commands::ImportOutcome;

/// How many accepted records the preview shows.
const PREVIEW_ROWS: usize = 5;

pub fn print_summary(outcome: &ImportOutcome) {
    let report = &outcome.report;
    println!(
        "Parsed {} sheet(s): {} accepted, {} skipped",
        report.sheets.len(),
        report.batch.accepted_count(),
        report.batch.skipped_count()
    );

    print_sheet_table(report);
    print_accepted_preview(&report.batch.accepted);
    print_skipped_table(&report.batch.skipped);

    match &outcome.receipt {
        Some(receipt) => println!("Submitted {} record(s).", receipt.inserted),
        None => {
            if report.batch.accepted_count() > 0 {
                println!("Preview only; pass --submit to persist the batch.");
            }
        }
    }
}

fn print_sheet_table(report: &vocab_import::ParseReport) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Header row"),
        header_cell("Accepted"),
        header_cell("Skipped"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for sheet in &report.sheets {
        table.add_row(vec![
            Cell::new(&sheet.name),
            // Reported 1-based, like a spreadsheet.
            Cell::new(sheet.header_row + 1),
            count_cell(sheet.accepted, Color::Green),
            count_cell(sheet.skipped, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("-"),
        count_cell(report.batch.accepted_count(), Color::Green).add_attribute(Attribute::Bold),
        count_cell(report.batch.skipped_count(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_accepted_preview(accepted: &[VocabularyRecord]) {
    if accepted.is_empty() {
        return;
    }
    println!(
        "Accepted preview (first {} of {}):",
        accepted.len().min(PREVIEW_ROWS),
        accepted.len()
    );
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Level"),
        header_cell("Headword"),
        header_cell("Romanization"),
        header_cell("Meaning"),
        header_cell("Example"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in accepted.iter().take(PREVIEW_ROWS) {
        table.add_row(vec![
            Cell::new(record.level),
            Cell::new(&record.headword).add_attribute(Attribute::Bold),
            Cell::new(&record.romanization),
            Cell::new(&record.meaning),
            Cell::new(record.example.as_deref().unwrap_or("")),
        ]);
    }
    println!("{table}");
    if accepted.len() > PREVIEW_ROWS {
        println!("... and {} more", accepted.len() - PREVIEW_ROWS);
    }
}

fn print_skipped_table(skipped: &[SkippedRow]) {
    if skipped.is_empty() {
        return;
    }
    println!("Skipped rows ({}):", skipped.len());
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Row"),
        header_cell("Reason"),
        header_cell("Raw data"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    for skip in skipped {
        let raw = serde_json::to_string(&skip.raw).unwrap_or_else(|_| "<unrenderable>".into());
        table.add_row(vec![
            Cell::new(&skip.sheet),
            Cell::new(skip.row_number),
            Cell::new(&skip.reason).fg(Color::Red),
            Cell::new(raw),
        ]);
    }
    println!("{table}");
}

pub fn print_fields() {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Canonical field"),
        header_cell("Required"),
        header_cell("Accepted header labels"),
    ]);
    for (field, aliases) in FIELD_ALIASES {
        let required = if field.is_optional() { "" } else { "yes" };
        table.add_row(vec![
            Cell::new(field.name()).add_attribute(Attribute::Bold),
            Cell::new(required),
            Cell::new(aliases.join(", ")),
        ]);
    }
    println!("{table}");
    println!("Label matching is case-insensitive and ignores surrounding whitespace.");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
