//! Workbook-level aggregation: the fold over sheets and rows.

use tracing::{debug, info, warn};

use vocab_ingest::{decode_rows, locate_header_row};
use vocab_model::{ImportBatch, Sheet, Workbook};

use crate::normalize::{RowOutcome, normalize_row};

/// Per-sheet outcome counts for the import summary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SheetSummary {
    pub name: String,
    /// 0-based header row position the locator settled on.
    pub header_row: usize,
    pub accepted: usize,
    pub skipped: usize,
}

/// An [`ImportBatch`] together with its per-sheet counts.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ParseReport {
    pub batch: ImportBatch,
    pub sheets: Vec<SheetSummary>,
}

/// Parses a decoded workbook into an import batch with per-sheet counts.
///
/// Sheets are processed in workbook order and rows in grid order, so the
/// accepted and skipped sequences preserve sheet order then row order.
/// Sheets are independent units of work; no shared state survives between
/// calls, and parsing the same workbook twice yields identical reports.
pub fn parse_workbook(workbook: &Workbook) -> ParseReport {
    let mut report = ParseReport::default();
    for sheet in &workbook.sheets {
        let summary = process_sheet(sheet, &mut report.batch);
        report.sheets.push(summary);
    }
    info!(
        sheets = report.sheets.len(),
        accepted = report.batch.accepted_count(),
        skipped = report.batch.skipped_count(),
        "parsed workbook"
    );
    report
}

/// Parses a decoded workbook into an import batch.
pub fn process_workbook(workbook: &Workbook) -> ImportBatch {
    parse_workbook(workbook).batch
}

fn process_sheet(sheet: &Sheet, batch: &mut ImportBatch) -> SheetSummary {
    let header_row = locate_header_row(&sheet.name, &sheet.grid);
    let rows = decode_rows(&sheet.grid, header_row);
    let mut accepted = 0usize;
    let mut skipped = 0usize;
    for (data_row_index, row) in &rows {
        match normalize_row(&sheet.name, header_row, *data_row_index, row) {
            RowOutcome::Accepted(record) => {
                batch.accepted.push(record);
                accepted += 1;
            }
            RowOutcome::Rejected(skip) => {
                batch.skipped.push(skip);
                skipped += 1;
            }
        }
    }
    debug!(
        sheet = %sheet.name,
        header_row,
        accepted,
        skipped,
        "processed sheet"
    );
    if accepted == 0 && !rows.is_empty() {
        // The lenient header fallback can mass-reject a whole sheet when
        // its labels match no alias; make that case loud.
        warn!(
            sheet = %sheet.name,
            skipped,
            "sheet produced no accepted rows; its header labels may not match any known alias"
        );
    }
    SheetSummary {
        name: sheet.name.clone(),
        header_row,
        accepted,
        skipped,
    }
}
