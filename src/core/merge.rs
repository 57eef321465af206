use crate::domain::model::{MergedSequence, RecordSequence};
use crate::utils::error::{JobError, Result};

/// Structural precondition for the merge: both inputs must carry the same
/// number of data rows. On mismatch the job stops here, before the delay and
/// before any output is written.
pub fn validate_cardinality(a: &RecordSequence, b: &RecordSequence) -> Result<()> {
    if a.len() != b.len() {
        return Err(JobError::CardinalityMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Pure concatenation, first input first. The cardinality check implies the
/// inputs are aligned rows of one upstream dataset, but no pairing happens
/// here; the upstream server expects exactly this concatenate-only behavior.
pub fn merge(a: RecordSequence, b: RecordSequence) -> MergedSequence {
    let mut values = a.0;
    values.extend(b.0);
    MergedSequence(values)
}
