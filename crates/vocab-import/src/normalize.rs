//! Per-row normalization and validation.

use vocab_map::{resolve_field, resolve_text};
use vocab_model::{CanonicalField, DecodedRow, SkippedRow, VocabularyRecord};

use crate::level::infer_level;

/// Rejection reason for the single hard validity gate.
pub const MISSING_HEADWORD: &str = "missing headword";

/// Terminal outcome of normalizing one row.
///
/// Rejection is data, not control flow: one bad row never aborts the
/// batch, and every rejection stays observable.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Accepted(VocabularyRecord),
    Rejected(SkippedRow),
}

/// 1-based spreadsheet row number for a data row: its 0-based index below
/// the header, plus the header offset, plus 2 (0-based indexing and the
/// header row itself). Matches what a human sees opening the file.
pub fn spreadsheet_row_number(header_index: usize, data_row_index: usize) -> u32 {
    (data_row_index + header_index + 2) as u32
}

/// Builds a canonical record from a decoded row, or rejects it.
///
/// The headword is the unique key of the domain and the only field that
/// gates validity; empty meaning, malformed audio URLs, or missing example
/// fields are accepted as-is and enrichable later.
pub fn normalize_row(
    sheet_name: &str,
    header_index: usize,
    data_row_index: usize,
    row: &DecodedRow,
) -> RowOutcome {
    let headword = resolve_text(row, CanonicalField::Headword);
    let headword = headword.trim();
    if headword.is_empty() {
        return RowOutcome::Rejected(SkippedRow {
            sheet: sheet_name.to_string(),
            row_number: spreadsheet_row_number(header_index, data_row_index),
            reason: MISSING_HEADWORD.to_string(),
            raw: row.clone(),
        });
    }
    let level = infer_level(sheet_name, &resolve_field(row, CanonicalField::Level));
    RowOutcome::Accepted(VocabularyRecord {
        level,
        headword: headword.to_string(),
        romanization: resolve_text(row, CanonicalField::Romanization),
        meaning: resolve_text(row, CanonicalField::Meaning).trim().to_string(),
        audio_url: optional(resolve_text(row, CanonicalField::AudioUrl)),
        example: optional(resolve_text(row, CanonicalField::Example)),
        example_romanization: optional(resolve_text(row, CanonicalField::ExampleRomanization)),
        example_meaning: optional(resolve_text(row, CanonicalField::ExampleMeaning)),
    })
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}
