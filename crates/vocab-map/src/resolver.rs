use vocab_model::{CanonicalField, CellValue, DecodedRow};

use crate::aliases::aliases_for;

/// Normalizes a header label for comparison: trimmed and lowercased.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolves a canonical field against a row's literal header labels.
///
/// Per alias in priority order: exact label match first, then a
/// case-insensitive trimmed match against each label in column order.
/// Blank cells do not count as matches: a blank cell under a
/// higher-priority alias column falls through to the next alias, so a
/// row with an empty "Hán tự" cell still resolves its headword from a
/// populated "Hanzi" column. A miss resolves to [`CellValue::Missing`]
/// — valid for every field except the headword, where the caller
/// rejects the row.
pub fn resolve_field(row: &DecodedRow, field: CanonicalField) -> CellValue {
    for alias in aliases_for(field) {
        if let Some(value) = row.get(alias)
            && !value.is_blank()
        {
            return value.clone();
        }
        let wanted = normalize_label(alias);
        for (label, value) in row.iter() {
            if normalize_label(label) == wanted && !value.is_blank() {
                return value.clone();
            }
        }
    }
    CellValue::Missing
}

/// Resolves a field and renders it as text (empty string on a miss).
pub fn resolve_text(row: &DecodedRow, field: CanonicalField) -> String {
    resolve_field(row, field).as_text()
}
