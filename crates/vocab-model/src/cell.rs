use std::fmt;

/// A single raw cell as produced by a workbook decoder.
///
/// Serializes untagged so a JSON grid row reads naturally:
/// `["你好", 3, null]`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    /// Renders the cell as text for matching and normalization.
    ///
    /// Whole numbers are formatted without a trailing `.0` so a numeric
    /// level cell `3.0` reads back as `"3"`.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    format!("{}", *value as i64)
                } else {
                    format!("{value}")
                }
            }
            Self::Missing => String::new(),
        }
    }

    /// True for missing cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::Number(_) => false,
            Self::Missing => true,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Missing
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
