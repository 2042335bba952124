use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures at the file-reading boundary. These are kept separate from
/// [`crate::error::StatsError`] so the CLI can map each class to its own
/// exit code.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("GHIN data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read the data file and decode it into a JSON value. The core never
/// opens files itself; this shim hands it already-decoded structured data.
pub fn read_input(path: &Path) -> Result<Value, InputError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    serde_json::from_str(&raw).map_err(|e| InputError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_valid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"handicap_index": 18.0}}"#).unwrap();

        let value = read_input(file.path()).unwrap();
        assert_eq!(value["handicap_index"], 18.0);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let err = read_input(file.path()).unwrap_err();
        assert!(matches!(err, InputError::Json { .. }));
    }

    #[test]
    fn test_non_object_top_level_still_decodes() {
        // Shape validation is the loader's job, not the shim's.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let value = read_input(file.path()).unwrap();
        assert!(value.is_array());
    }
}
