use std::fs;

use vocab_model::VocabularyRecord;
use vocab_submit::{
    JsonFileStore, MemoryStore, SubmissionAdapter, SubmitError, VocabularyStore,
};

fn record(headword: &str, level: u32) -> VocabularyRecord {
    VocabularyRecord {
        level,
        headword: headword.to_string(),
        romanization: String::new(),
        meaning: String::new(),
        audio_url: None,
        example: None,
        example_romanization: None,
        example_meaning: None,
    }
}

#[test]
fn stamps_every_record_with_the_owner() {
    let adapter = SubmissionAdapter::new(MemoryStore::new());
    let records = vec![record("你好", 1), record("学习", 2)];
    let receipt = adapter.submit(&records, "admin-9").expect("submit");
    assert_eq!(receipt.inserted, 2);
    let stored = adapter.store().records();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|entry| entry.created_by == "admin-9"));
    assert_eq!(stored[0].record.headword, "你好");
}

#[test]
fn store_rejection_is_surfaced_verbatim() {
    let adapter = SubmissionAdapter::new(MemoryStore::rejecting("Unauthorized"));
    let records = vec![record("你好", 1)];
    let error = adapter.submit(&records, "nobody").expect_err("should fail");
    assert_eq!(error.to_string(), "Unauthorized");
    assert!(matches!(error, SubmitError::Store(_)));
    assert!(adapter.store().is_empty());
}

#[test]
fn failed_submission_leaves_the_batch_resubmittable() {
    let records = vec![record("你好", 1)];
    let failing = SubmissionAdapter::new(MemoryStore::rejecting("network down"));
    assert!(failing.submit(&records, "admin").is_err());

    // Same in-memory sequence, no recomputation.
    let working = SubmissionAdapter::new(MemoryStore::new());
    let receipt = working.submit(&records, "admin").expect("resubmit");
    assert_eq!(receipt.inserted, 1);
}

#[test]
fn empty_batch_is_refused_before_reaching_the_store() {
    let adapter = SubmissionAdapter::new(MemoryStore::rejecting("must not be called"));
    let error = adapter.submit(&[], "admin").expect_err("should fail");
    assert!(matches!(error, SubmitError::EmptyBatch));
}

#[test]
fn json_file_store_appends_one_line_per_record() {
    let mut path = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("vocab_submit_store_{stamp}.jsonl"));

    let store = JsonFileStore::new(&path);
    let adapter = SubmissionAdapter::new(store);
    adapter
        .submit(&[record("你好", 1)], "admin")
        .expect("first submit");
    adapter
        .submit(&[record("学习", 2)], "admin")
        .expect("second submit");

    let contents = fs::read_to_string(&path).expect("read store file");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).expect("parse line");
    assert_eq!(first["headword"], "你好");
    assert_eq!(first["created_by"], "admin");

    let _ = fs::remove_file(&path);
}

#[test]
fn whole_batch_goes_in_one_store_call() {
    struct CountingStore {
        calls: std::sync::Mutex<usize>,
    }
    impl VocabularyStore for CountingStore {
        fn insert_batch(
            &self,
            records: &[vocab_submit::AttributedRecord],
        ) -> Result<(), vocab_submit::StoreError> {
            *self.calls.lock().expect("lock") += 1;
            assert_eq!(records.len(), 3);
            Ok(())
        }
    }
    let adapter = SubmissionAdapter::new(CountingStore {
        calls: std::sync::Mutex::new(0),
    });
    let records = vec![record("一", 1), record("二", 1), record("三", 1)];
    adapter.submit(&records, "admin").expect("submit");
    assert_eq!(*adapter.store().calls.lock().expect("lock"), 1);
}
