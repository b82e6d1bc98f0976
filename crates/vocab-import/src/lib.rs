pub mod level;
pub mod normalize;
pub mod pipeline;

pub use level::{DEFAULT_LEVEL, infer_level, sheet_level};
pub use normalize::{MISSING_HEADWORD, RowOutcome, normalize_row, spreadsheet_row_number};
pub use pipeline::{ParseReport, SheetSummary, parse_workbook, process_workbook};
