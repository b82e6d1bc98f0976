use serde::ser::SerializeMap;

use crate::CellValue;

/// One data row keyed by the literal header labels of its sheet.
///
/// Column order is preserved; lookups by exact label are linear, which is
/// fine for the handful of columns a vocabulary sheet carries. Serializes
/// as a JSON object so a captured row reads like the source spreadsheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedRow {
    entries: Vec<(String, CellValue)>,
}

impl DecodedRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: CellValue) {
        self.entries.push((label.into(), value));
    }

    /// Exact-label lookup. First matching column wins when labels repeat.
    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), value))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every cell is missing or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(|(_, value)| value.is_blank())
    }
}

impl FromIterator<(String, CellValue)> for DecodedRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl serde::Serialize for DecodedRow {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
