pub mod csv_workbook;
pub mod decode;
pub mod error;
pub mod header;
pub mod json;
pub mod sheet;

pub use csv_workbook::{read_csv_dir, read_csv_sheet};
pub use decode::decode_workbook;
pub use error::DecodeError;
pub use header::locate_header_row;
pub use json::read_json_workbook;
pub use sheet::{decode_rows, header_labels};
