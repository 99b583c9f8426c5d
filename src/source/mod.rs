//! Data model handed to every template.
//!
//! A [`SourceRecord`] is assembled once from warehouse metadata and is read-only
//! afterwards. The directory, file name and document passes all borrow the same
//! record.

use std::fmt;

use serde::Serialize;

use crate::warehouse::TableMetadata;

/// Fully-qualified reference to a warehouse table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub project: String,
    pub dataset: String,
    pub table: String,
}

impl TableRef {
    pub fn new(
        project: impl Into<String>,
        dataset: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            dataset: dataset.into(),
            table: table.into(),
        }
    }

    /// Reject empty identifiers before any network or filesystem work happens.
    pub fn validate(&self) -> Result<(), SourceError> {
        for (field, value) in [
            ("project", &self.project),
            ("dataset", &self.dataset),
            ("table", &self.table),
        ] {
            if value.trim().is_empty() {
                return Err(SourceError::MissingIdentifier { field });
            }
        }
        Ok(())
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.project, self.dataset, self.table)
    }
}

/// A single schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    name: String,
    description: String,
    /// Native warehouse type label (`STRING`, `INTEGER`, ...), empty when untyped.
    data_type: String,
}

impl Column {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            data_type: data_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }
}

/// Template-facing view of one warehouse table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    project: String,
    project_normalized: String,
    dataset: String,
    table: String,
    description: String,
    columns: Vec<Column>,
}

impl SourceRecord {
    pub fn new(
        table_ref: &TableRef,
        description: impl Into<String>,
        columns: Vec<Column>,
    ) -> Result<Self, SourceError> {
        table_ref.validate()?;
        Ok(Self {
            project: table_ref.project.clone(),
            project_normalized: normalize_identifier(&table_ref.project),
            dataset: table_ref.dataset.clone(),
            table: table_ref.table.clone(),
            description: description.into(),
            columns,
        })
    }

    /// Build a record from fetched table metadata, keeping schema field order.
    pub fn from_metadata(table_ref: &TableRef, meta: &TableMetadata) -> Result<Self, SourceError> {
        let record = Self::new(
            table_ref,
            meta.description.clone().unwrap_or_default(),
            extract_columns(meta),
        )?;
        tracing::debug!(
            source = %table_ref,
            columns = record.columns.len(),
            "Built source record"
        );
        Ok(record)
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// `project` with every hyphen replaced by an underscore.
    pub fn project_normalized(&self) -> &str {
        &self.project_normalized
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}

/// Make a warehouse project id usable inside dbt identifiers.
pub fn normalize_identifier(value: &str) -> String {
    value.replace('-', "_")
}

fn extract_columns(meta: &TableMetadata) -> Vec<Column> {
    meta.schema
        .fields
        .iter()
        .map(|field| {
            Column::new(
                field.name.clone(),
                field.description.clone().unwrap_or_default(),
                field.field_type.clone().unwrap_or_default(),
            )
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("missing required identifier: {field}")]
    MissingIdentifier { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warehouse::{FieldSchema, TableSchema};

    fn field(name: &str, description: Option<&str>, field_type: Option<&str>) -> FieldSchema {
        FieldSchema {
            name: name.to_string(),
            description: description.map(str::to_string),
            field_type: field_type.map(str::to_string),
        }
    }

    fn metadata(fields: Vec<FieldSchema>) -> TableMetadata {
        TableMetadata {
            description: Some("A table".to_string()),
            schema: TableSchema { fields },
        }
    }

    #[test]
    fn test_columns_keep_schema_order_and_values() {
        let meta = metadata(vec![
            field("zeta", Some("last letter"), Some("STRING")),
            field("alpha", Some(""), Some("INTEGER")),
            field("mid", None, None),
        ]);
        let table_ref = TableRef::new("p", "d", "t");
        let record = SourceRecord::from_metadata(&table_ref, &meta).unwrap();

        let columns = record.columns();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0], Column::new("zeta", "last letter", "STRING"));
        assert_eq!(columns[1], Column::new("alpha", "", "INTEGER"));
        assert_eq!(columns[2], Column::new("mid", "", ""));
        assert_eq!(record.description(), "A table");
    }

    #[test]
    fn test_no_columns_is_valid() {
        let record =
            SourceRecord::from_metadata(&TableRef::new("p", "d", "t"), &metadata(vec![])).unwrap();
        assert!(record.columns().is_empty());
    }

    #[test]
    fn test_missing_description_becomes_empty() {
        let meta = TableMetadata::default();
        let record = SourceRecord::from_metadata(&TableRef::new("p", "d", "t"), &meta).unwrap();
        assert_eq!(record.description(), "");
    }

    #[test]
    fn test_project_normalized_replaces_every_hyphen() {
        let record = SourceRecord::new(
            &TableRef::new("my-gcp--project-1", "d", "t"),
            "",
            Vec::new(),
        )
        .unwrap();
        assert_eq!(record.project(), "my-gcp--project-1");
        assert_eq!(record.project_normalized(), "my_gcp__project_1");
    }

    #[test]
    fn test_normalize_leaves_other_characters() {
        assert_eq!(normalize_identifier("Proj.x:y_z"), "Proj.x:y_z");
        assert_eq!(normalize_identifier("a-b"), "a_b");
    }

    #[test]
    fn test_missing_identifier_rejected() {
        let err = SourceRecord::new(&TableRef::new("p", "", "t"), "", Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            SourceError::MissingIdentifier { field: "dataset" }
        ));

        let err = TableRef::new(" ", "d", "t").validate().unwrap_err();
        assert_eq!(err.to_string(), "missing required identifier: project");
    }

    #[test]
    fn test_table_ref_display() {
        let table_ref = TableRef::new("my-project", "my_dataset", "my_table");
        assert_eq!(table_ref.to_string(), "my-project.my_dataset.my_table");
    }
}
