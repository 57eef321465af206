use crate::core::{merge, reader, writer, DelaySource};
use crate::utils::error::Result;
use std::path::Path;
use std::thread;

/// Sequences one merge-job invocation: read both inputs, validate
/// cardinality, pause, write. Strictly sequential, single-threaded; the only
/// suspension point is the injected delay between validation and the write.
pub struct MergeJob<D: DelaySource> {
    delay: D,
}

impl<D: DelaySource> MergeJob<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn run(&mut self, input_a: &Path, input_b: &Path, output: &Path) -> Result<()> {
        tracing::info!("Reading input files...");
        let first = reader::read_sequence(input_a)?;
        tracing::info!("Read {} rows from {}", first.len(), input_a.display());
        let second = reader::read_sequence(input_b)?;
        tracing::info!("Read {} rows from {}", second.len(), input_b.display());

        // fail fast: a mismatch skips the delay and writes nothing
        merge::validate_cardinality(&first, &second)?;

        let merged = merge::merge(first, second);

        let pause = self.delay.next_delay();
        tracing::info!("Simulating work for {} ms", pause.as_millis());
        thread::sleep(pause);

        writer::write_sequence(output, &merged)?;
        tracing::info!("Wrote {} rows to {}", merged.len(), output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::delay::FixedDelay;
    use crate::utils::error::JobError;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn runs_read_validate_merge_write_in_order() {
        let dir = TempDir::new().unwrap();
        let a = write_input(&dir, "a.csv", "value\n1\n2\n");
        let b = write_input(&dir, "b.csv", "value\n3\n4\n");
        let out = dir.path().join("out.csv");

        let mut job = MergeJob::new(FixedDelay::zero());
        job.run(&a, &b, &out).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "value\n1\n2\n3\n4\n");
    }

    #[test]
    fn mismatch_fails_without_touching_the_output_path() {
        let dir = TempDir::new().unwrap();
        let a = write_input(&dir, "a.csv", "value\n1\n2\n");
        let b = write_input(&dir, "b.csv", "value\n3\n4\n5\n");
        let out = dir.path().join("out.csv");

        let mut job = MergeJob::new(FixedDelay::zero());
        let result = job.run(&a, &b, &out);

        assert!(matches!(
            result,
            Err(JobError::CardinalityMismatch { left: 2, right: 3 })
        ));
        assert!(!out.exists());
    }
}
