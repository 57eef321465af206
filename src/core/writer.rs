use crate::domain::model::MergedSequence;
use crate::utils::error::{JobError, Result};
use std::path::Path;
use tempfile::NamedTempFile;

/// Serializes the merged sequence as a single-column CSV: a `value` header,
/// then one integer per row. The rows go to a temp file in the target's
/// directory first and only land on the target path via an atomic rename, so
/// a failure mid-write never leaves a truncated file behind. An existing
/// file at the target is overwritten, never appended to.
pub fn write_sequence(path: &Path, merged: &MergedSequence) -> Result<()> {
    let output_error = |source: std::io::Error| JobError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(output_error)?;

    {
        let mut writer = csv::Writer::from_writer(&mut staged);
        writer.write_record(["value"])?;
        for value in merged.values() {
            writer.write_record([value.to_string()])?;
        }
        writer.flush().map_err(output_error)?;
    }

    staged.persist(path).map_err(|e| output_error(e.error))?;

    tracing::debug!("wrote {} rows to {}", merged.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_header_and_values_with_lf_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        write_sequence(&path, &MergedSequence(vec![1, 2, 3, 4])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "value\n1\n2\n3\n4\n");
    }

    #[test]
    fn empty_sequence_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        write_sequence(&path, &MergedSequence(vec![])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "value\n");
    }

    #[test]
    fn negative_values_serialize_in_plain_decimal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        write_sequence(&path, &MergedSequence(vec![-7, 0])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "value\n-7\n0\n");
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale contents").unwrap();
        write_sequence(&path, &MergedSequence(vec![9])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "value\n9\n");
    }

    #[test]
    fn unwritable_directory_is_an_output_error() {
        let path = Path::new("/definitely/not/a/real/dir/out.csv");
        assert!(matches!(
            write_sequence(path, &MergedSequence(vec![1])),
            Err(JobError::Output { .. })
        ));
    }
}
