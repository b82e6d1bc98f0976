//! Command implementations.

use anyhow::{Context, Result};

use vocab_import::{ParseReport, parse_workbook};
use vocab_ingest::decode_workbook;
use vocab_submit::{JsonFileStore, SubmissionAdapter, SubmissionReceipt};

use crate::cli::ImportArgs;

/// Everything the `import` command produced, for the summary printer.
pub struct ImportOutcome {
    pub report: ParseReport,
    pub receipt: Option<SubmissionReceipt>,
}

pub fn run_import(args: &ImportArgs) -> Result<ImportOutcome> {
    let workbook = decode_workbook(&args.workbook)
        .with_context(|| format!("decode workbook {}", args.workbook.display()))?;
    let report = parse_workbook(&workbook);

    let receipt = if args.submit {
        let adapter = SubmissionAdapter::new(JsonFileStore::new(&args.store));
        let receipt = adapter
            .submit(&report.batch.accepted, &args.owner)
            .with_context(|| format!("submit batch to {}", args.store.display()))?;
        Some(receipt)
    } else {
        None
    };

    Ok(ImportOutcome { report, receipt })
}
