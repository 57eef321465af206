use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes for the merge job. A host system keys on these, so
/// they must stay stable.
pub mod exit {
    /// Reading, validation, delay and write all succeeded.
    pub const SUCCESS: i32 = 0;
    /// Any I/O, parsing or otherwise unanticipated fault.
    pub const FAULT: i32 = 1;
    /// Malformed command line (clap's native usage-error status).
    pub const USAGE: i32 = 2;
    /// The two inputs had a different number of data rows.
    pub const CARDINALITY: i32 = 3;
}

#[derive(Error, Debug)]
pub enum JobError {
    #[error("cannot read input file '{path}': {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value '{value}' at data row {row} of '{path}': expected an integer")]
    Parse {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("input cardinality mismatch: first input has {left} rows, second has {right}")]
    CardinalityMismatch { left: usize, right: usize },

    #[error("cannot write output file '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),
}

impl JobError {
    /// Collapses the error taxonomy onto the exit-code contract. Everything
    /// except a cardinality mismatch reports as the generic fault code,
    /// matching the single catch-all status of the original job.
    pub fn exit_code(&self) -> i32 {
        match self {
            JobError::CardinalityMismatch { .. } => exit::CARDINALITY,
            _ => exit::FAULT,
        }
    }
}

pub type Result<T> = std::result::Result<T, JobError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_mismatch_has_its_own_exit_code() {
        let err = JobError::CardinalityMismatch { left: 2, right: 3 };
        assert_eq!(err.exit_code(), exit::CARDINALITY);
    }

    #[test]
    fn io_and_parse_faults_share_the_generic_code() {
        let input = JobError::Input {
            path: "missing.csv".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let parse = JobError::Parse {
            path: "bad.csv".into(),
            row: 3,
            value: "abc".into(),
        };
        assert_eq!(input.exit_code(), exit::FAULT);
        assert_eq!(parse.exit_code(), exit::FAULT);
    }

    #[test]
    fn parse_error_identifies_row_and_value() {
        let err = JobError::Parse {
            path: "a.csv".into(),
            row: 7,
            value: "x1".into(),
        };
        let message = err.to_string();
        assert!(message.contains("row 7"));
        assert!(message.contains("'x1'"));
    }
}
