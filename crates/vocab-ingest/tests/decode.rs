use std::fs;
use std::path::{Path, PathBuf};

use vocab_ingest::{DecodeError, decode_workbook, locate_header_row};
use vocab_model::CellValue;

fn temp_dir(tag: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("vocab_ingest_{tag}_{stamp}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn decodes_single_csv_as_one_sheet() {
    let dir = temp_dir("single");
    let path = write_file(&dir, "HSK1.csv", "Hán tự,Pinyin,Nghĩa\n你好,nǐ hǎo,hello\n");
    let workbook = decode_workbook(&path).expect("decode csv");
    assert_eq!(workbook.sheets.len(), 1);
    let sheet = &workbook.sheets[0];
    assert_eq!(sheet.name, "HSK1");
    assert_eq!(sheet.grid.rows.len(), 2);
    assert_eq!(sheet.grid.rows[1][0], CellValue::from("你好"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn decodes_csv_directory_in_name_order() {
    let dir = temp_dir("dir");
    write_file(&dir, "HSK2.csv", "Hanzi,Meaning\n学习,to study\n");
    write_file(&dir, "HSK1.csv", "Hanzi,Meaning\n你好,hello\n");
    write_file(&dir, "notes.txt", "not a sheet");
    let workbook = decode_workbook(&dir).expect("decode dir");
    let names: Vec<&str> = workbook
        .sheets
        .iter()
        .map(|sheet| sheet.name.as_str())
        .collect();
    assert_eq!(names, vec!["HSK1", "HSK2"]);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn decodes_json_workbook() {
    let dir = temp_dir("json");
    let path = write_file(
        &dir,
        "book.json",
        r#"{"sheets":[{"name":"HSK3","grid":[["Hanzi","Pinyin","Meaning"],["水",null,3]]}]}"#,
    );
    let workbook = decode_workbook(&path).expect("decode json");
    assert_eq!(workbook.sheets[0].name, "HSK3");
    let row = &workbook.sheets[0].grid.rows[1];
    assert_eq!(row[0], CellValue::from("水"));
    assert_eq!(row[1], CellValue::Missing);
    assert_eq!(row[2], CellValue::Number(3.0));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_json_is_a_fatal_decode_error() {
    let dir = temp_dir("badjson");
    let path = write_file(&dir, "book.json", "{not json");
    let error = decode_workbook(&path).expect_err("should fail");
    assert!(matches!(error, DecodeError::JsonParse { .. }));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = temp_dir("unsupported");
    let path = write_file(&dir, "book.xlsx", "binary-ish");
    let error = decode_workbook(&path).expect_err("should fail");
    assert!(matches!(error, DecodeError::UnsupportedFormat { .. }));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_path_is_rejected() {
    let dir = temp_dir("missing");
    let error = decode_workbook(&dir.join("nope.csv")).expect_err("should fail");
    assert!(matches!(error, DecodeError::NotFound { .. }));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_directory_is_an_empty_workbook() {
    let dir = temp_dir("empty");
    let error = decode_workbook(&dir).expect_err("should fail");
    assert!(matches!(error, DecodeError::EmptyWorkbook { .. }));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn header_discovery_over_decoded_csv() {
    let dir = temp_dir("header");
    let path = write_file(
        &dir,
        "mixed.csv",
        "Danh sách từ vựng,,\nupdated 2024,,\nHán tự,Phiên âm,Nghĩa\n你好,nǐ hǎo,hello\n",
    );
    let workbook = decode_workbook(&path).expect("decode csv");
    let sheet = &workbook.sheets[0];
    assert_eq!(locate_header_row(&sheet.name, &sheet.grid), 2);
    let _ = fs::remove_dir_all(&dir);
}
