pub mod cell;
pub mod field;
pub mod grid;
pub mod record;
pub mod row;

pub use cell::CellValue;
pub use field::CanonicalField;
pub use grid::{RawGrid, Sheet, Workbook};
pub use record::{ImportBatch, SkippedRow, VocabularyRecord};
pub use row::DecodedRow;
