//! Warehouse metadata sources.
//!
//! Both sources speak the BigQuery `Table` resource JSON shape: the live REST
//! client and a local file holding a saved response.

mod auth;
mod bigquery;
mod file;

pub use auth::{resolve_access_token, TOKEN_ENV};
pub use bigquery::{BigQueryClient, DEFAULT_API_ENDPOINT};
pub use file::FileMetadataSource;

use serde::Deserialize;

use crate::source::TableRef;

/// Anything that can look up a table's description and schema.
pub trait MetadataSource {
    fn fetch_table(&self, table: &TableRef) -> Result<TableMetadata, WarehouseError>;
}

/// Subset of the BigQuery `Table` resource used for generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableMetadata {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: TableSchema,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableSchema {
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

/// One top-level schema field. Nested `RECORD` sub-fields are not expanded.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum WarehouseError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse table metadata: {0}")]
    Parse(#[from] serde_json::Error),
}

impl WarehouseError {
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_resource() {
        let json = r#"{
            "kind": "bigquery#table",
            "tableReference": {"projectId": "my-project", "datasetId": "my_dataset", "tableId": "my_table"},
            "description": "\nThis\n  is\n    table\ndescription",
            "schema": {
                "fields": [
                    {"name": "col1", "type": "STRING", "mode": "NULLABLE", "description": "col1 description"},
                    {"name": "col2", "type": "INTEGER", "mode": "REQUIRED"}
                ]
            }
        }"#;

        let meta: TableMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(
            meta.description.as_deref(),
            Some("\nThis\n  is\n    table\ndescription")
        );
        assert_eq!(meta.schema.fields.len(), 2);
        assert_eq!(meta.schema.fields[0].field_type.as_deref(), Some("STRING"));
        assert_eq!(meta.schema.fields[1].description, None);
    }

    #[test]
    fn test_parse_table_without_schema() {
        let meta: TableMetadata = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert!(meta.description.is_none());
        assert!(meta.schema.fields.is_empty());
    }

    #[test]
    fn test_api_error_message() {
        let err = WarehouseError::api_error(404, "Not found: Table p:d.t");
        assert_eq!(err.to_string(), "API error: 404 - Not found: Table p:d.t");
    }
}
