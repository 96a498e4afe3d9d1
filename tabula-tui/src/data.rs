//! Record loading from JSON files.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tabula_core::{into_record, Record};

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} must contain a JSON array of records")]
    NotAnArray { path: PathBuf },
}

/// Read a table's records from `path`.
pub async fn load_records(path: &Path) -> Result<Vec<Record>, DataError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_records(&contents, path)
}

/// Parse a JSON array into records. Entries that are not objects are skipped.
pub fn parse_records(contents: &str, path: &Path) -> Result<Vec<Record>, DataError> {
    let value: Value = serde_json::from_str(contents).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(entries) = value else {
        return Err(DataError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let total = entries.len();
    let records: Vec<Record> = entries.into_iter().filter_map(into_record).collect();
    if records.len() < total {
        tracing::warn!(
            path = %path.display(),
            skipped = total - records.len(),
            "Skipped non-object entries in record file"
        );
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("vendors.json")
    }

    #[test]
    fn test_parse_array_of_objects() {
        let records = parse_records(r#"[{"name": "Acme"}, {"name": "Beta"}]"#, path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_skips_non_objects() {
        let records = parse_records(r#"[{"name": "Acme"}, 42, null, "x"]"#, path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_rejects_object_root() {
        let result = parse_records(r#"{"name": "Acme"}"#, path());
        assert!(matches!(result, Err(DataError::NotAnArray { .. })));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = parse_records("[{", path());
        assert!(matches!(result, Err(DataError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_records(Path::new("/nonexistent/tabula/records.json")).await;
        assert!(matches!(result, Err(DataError::Io { .. })));
    }
}
