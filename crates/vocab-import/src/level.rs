//! Proficiency-level inference.

use vocab_model::CellValue;

/// Level assigned when neither the sheet name nor the row says otherwise.
pub const DEFAULT_LEVEL: u32 = 1;

/// First run of ASCII digits in a string, parsed.
fn first_digit_run(text: &str) -> Option<u32> {
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if !digits.is_empty() {
            break;
        }
    }
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Per-sheet fallback level derived from the sheet's name ("HSK3" -> 3).
pub fn sheet_level(sheet_name: &str) -> u32 {
    first_digit_run(sheet_name).unwrap_or(DEFAULT_LEVEL)
}

/// Infers the level for one row.
///
/// Sheets are commonly organized one per level, so the sheet name supplies
/// a fallback; an explicit per-row value always overrides it because mixed
/// sheets carry a level column. Numeric cells below 1 (zero, negative)
/// cannot produce a valid level and keep the fallback; text cells
/// contribute their first digit run ("HSK 5" -> 5). No upper clamping:
/// whatever integer was inferred passes through.
pub fn infer_level(sheet_name: &str, explicit: &CellValue) -> u32 {
    let fallback = sheet_level(sheet_name);
    match explicit {
        CellValue::Number(value) if *value >= 1.0 => *value as u32,
        CellValue::Text(text) => first_digit_run(text).unwrap_or(fallback),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_name_digits_set_the_fallback() {
        assert_eq!(sheet_level("HSK3"), 3);
        assert_eq!(sheet_level("Level 12 vocab"), 12);
        assert_eq!(sheet_level("Sheet1"), 1);
        assert_eq!(sheet_level("vocabulary"), DEFAULT_LEVEL);
    }

    #[test]
    fn explicit_row_value_overrides_sheet_fallback() {
        assert_eq!(infer_level("HSK3", &CellValue::from("5")), 5);
        assert_eq!(infer_level("HSK3", &CellValue::Number(5.0)), 5);
        assert_eq!(infer_level("HSK3", &CellValue::from("HSK 5")), 5);
    }

    #[test]
    fn blank_explicit_value_keeps_the_fallback() {
        assert_eq!(infer_level("HSK3", &CellValue::Missing), 3);
        assert_eq!(infer_level("HSK3", &CellValue::from("")), 3);
        assert_eq!(infer_level("HSK3", &CellValue::from("advanced")), 3);
    }

    #[test]
    fn numeric_cells_below_one_keep_the_fallback() {
        assert_eq!(infer_level("HSK3", &CellValue::Number(0.0)), 3);
        assert_eq!(infer_level("HSK3", &CellValue::Number(-2.0)), 3);
        assert_eq!(infer_level("HSK3", &CellValue::Number(0.5)), 3);
    }

    #[test]
    fn default_level_when_nothing_is_known() {
        assert_eq!(infer_level("vocabulary", &CellValue::Missing), 1);
    }

    #[test]
    fn out_of_range_levels_pass_through() {
        assert_eq!(infer_level("HSK1", &CellValue::from("9")), 9);
        assert_eq!(infer_level("Sheet 42", &CellValue::Missing), 42);
    }
}
