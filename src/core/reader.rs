use crate::domain::model::RecordSequence;
use crate::utils::error::{JobError, Result};
use std::fs::File;
use std::path::Path;

/// Reads one input file into a record sequence. The first row is the header
/// and is discarded unconditionally, even when malformed; every later row
/// must carry a base-10 signed integer in its first field. Trailing fields
/// are ignored.
pub fn read_sequence(path: &Path) -> Result<RecordSequence> {
    let file = File::open(path).map_err(|source| JobError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    // flexible: rows may have any field count, only field 0 matters
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut values = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let raw = record.get(0).unwrap_or("");
        let value = raw.trim().parse::<i64>().map_err(|_| JobError::Parse {
            path: path.to_path_buf(),
            row: index + 1,
            value: raw.to_string(),
        })?;
        values.push(value);
    }

    tracing::debug!("read {} rows from {}", values.len(), path.display());
    Ok(RecordSequence(values))
}
