use crate::CellValue;

/// An immutable rectangular grid of raw cells, scoped to one sheet.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RawGrid {
    pub rows: Vec<Vec<CellValue>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One named sheet of a workbook.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sheet {
    pub name: String,
    pub grid: RawGrid,
}

impl Sheet {
    pub fn new(name: impl Into<String>, grid: RawGrid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }
}

/// A decoded workbook: the ordered sheet sequence of one upload.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }
}
