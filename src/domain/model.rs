/// Ordered integers read from one input file, header row excluded.
/// Constructed once per input at job start and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordSequence(pub Vec<i64>);

impl RecordSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The concatenation of two record sequences, first input first. Only ever
/// materialized after the cardinality check has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSequence(pub Vec<i64>);

impl MergedSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.0
    }
}
