//! Offline metadata source reading a saved `tables.get` response.

use std::path::PathBuf;

use super::{MetadataSource, TableMetadata, WarehouseError};
use crate::source::TableRef;

#[derive(Debug, Clone)]
pub struct FileMetadataSource {
    path: PathBuf,
}

impl FileMetadataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MetadataSource for FileMetadataSource {
    fn fetch_table(&self, table: &TableRef) -> Result<TableMetadata, WarehouseError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| WarehouseError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let meta: TableMetadata = serde_json::from_str(&contents)?;
        tracing::debug!(path = ?self.path, source = %table, "Loaded table metadata from file");
        Ok(meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_metadata_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(
            &path,
            r#"{"description": "desc", "schema": {"fields": [{"name": "id", "type": "INT64"}]}}"#,
        )
        .unwrap();

        let source = FileMetadataSource::new(&path);
        let meta = source.fetch_table(&TableRef::new("p", "d", "t")).unwrap();
        assert_eq!(meta.description.as_deref(), Some("desc"));
        assert_eq!(meta.schema.fields[0].name, "id");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileMetadataSource::new(dir.path().join("missing.json"));
        let err = source
            .fetch_table(&TableRef::new("p", "d", "t"))
            .unwrap_err();
        assert!(matches!(err, WarehouseError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileMetadataSource::new(&path)
            .fetch_table(&TableRef::new("p", "d", "t"))
            .unwrap_err();
        assert!(matches!(err, WarehouseError::Parse(_)));
    }
}
