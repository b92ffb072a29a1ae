use crate::models::{SerializedRecord, TransactionRecord};
use anyhow::Context;
use csv::{Position, ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// A CSV row that did not become a record.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RejectedRow {
    /// 1-based line in the input, header included.
    pub line: u64,
    pub reason: String
}

/// Outcome of normalizing a CSV stream: every row lands in exactly one of the two lists.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub records: Vec<TransactionRecord>,
    pub rejected: Vec<RejectedRow>
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    fn reject(&mut self, line: u64, reason: String) {
        warn!("Rejected row on line [{line}]: {reason}");
        self.rejected.push(RejectedRow { line, reason });
    }
}

/// Opens the CSV file at `path` and normalizes every row in it.
pub fn read_records_from_path(path: impl AsRef<Path>) -> anyhow::Result<ImportReport> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Error opening CSV at path: {}", path.display()))?;

    Ok(read_records(BufReader::new(file))?)
}

/// Normalizes every row of a CSV stream with an `id,timestamp,amount,kind,category,note` header.
///
/// Only header names are trimmed; field values reach the record untouched so
/// that construction alone decides what gets trimmed. Rows that cannot be read
/// or that fail normalization are logged and reported instead of aborting the
/// import. Only an unreadable header is an error.
pub fn read_records<R: Read>(input: R) -> Result<ImportReport, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let mut report = ImportReport::default();

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(error) => {
                report.reject(line_of(error.position()), format!("CSV read error: {error}"));
                continue;
            }
        };

        let line = line_of(row.position());

        let serialized = match row.deserialize::<SerializedRecord>(Some(&headers)) {
            Ok(serialized) => serialized,
            Err(error) => {
                report.reject(line, format!("CSV deserialization error: {error}"));
                continue;
            }
        };

        match TransactionRecord::from_record(serialized) {
            Ok(record) => {
                debug!("Row on line [{line}] normalized into record [{}]", record.id());
                report.records.push(record);
            }
            Err(error) => report.reject(line, error.to_string())
        }
    }

    Ok(report)
}

fn line_of(position: Option<&Position>) -> u64 {
    position.map_or(0, |position| position.line())
}
