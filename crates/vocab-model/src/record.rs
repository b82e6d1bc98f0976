use crate::DecodedRow;

/// The canonical output unit of an import.
///
/// Invariant: `headword` is non-empty and trimmed — the sole hard validity
/// gate. Everything else is enrichable later and may be empty or absent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VocabularyRecord {
    /// Proficiency level, 1-based. Levels 1-6 are the meaningful range in
    /// the surrounding system; out-of-range values pass through unclamped.
    pub level: u32,
    pub headword: String,
    pub romanization: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_romanization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_meaning: Option<String>,
}

/// A row that failed validation, captured verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SkippedRow {
    /// Sheet the row came from.
    pub sheet: String,
    /// 1-based spreadsheet row number, accounting for the header offset,
    /// so it matches what a human sees opening the original file.
    pub row_number: u32,
    pub reason: String,
    /// The original row's field map, untouched.
    pub raw: DecodedRow,
}

/// The result of parsing one workbook: accepted records and observable
/// rejections, each in sheet order then row order.
///
/// Constructed fresh per upload; never partially persisted without an
/// explicit submission.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ImportBatch {
    pub accepted: Vec<VocabularyRecord>,
    pub skipped: Vec<SkippedRow>,
}

impl ImportBatch {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.skipped.is_empty()
    }
}
