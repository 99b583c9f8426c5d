//! BigQuery REST client (`tables.get`).

use reqwest::blocking::Client;

use super::{MetadataSource, TableMetadata, WarehouseError};
use crate::source::TableRef;

pub const DEFAULT_API_ENDPOINT: &str = "https://bigquery.googleapis.com";

/// Blocking BigQuery API client authenticated with an OAuth access token.
#[derive(Debug)]
pub struct BigQueryClient {
    http: Client,
    endpoint: String,
    access_token: String,
}

impl BigQueryClient {
    pub fn new(
        endpoint: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, WarehouseError> {
        let http = Client::builder()
            .user_agent(concat!("dbt-source-gen/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    /// `tables.get` URL for the given table.
    pub fn table_url(&self, table: &TableRef) -> String {
        format!(
            "{}/bigquery/v2/projects/{}/datasets/{}/tables/{}",
            self.endpoint, table.project, table.dataset, table.table
        )
    }
}

impl MetadataSource for BigQueryClient {
    fn fetch_table(&self, table: &TableRef) -> Result<TableMetadata, WarehouseError> {
        let url = self.table_url(table);
        tracing::debug!(%url, "Fetching table metadata");

        let response = self.http.get(&url).bearer_auth(&self.access_token).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(WarehouseError::api_error(status.as_u16(), message.trim()));
        }

        let meta: TableMetadata = response.json()?;
        tracing::debug!(
            source = %table,
            fields = meta.schema.fields.len(),
            "Fetched table metadata"
        );
        Ok(meta)
    }
}
