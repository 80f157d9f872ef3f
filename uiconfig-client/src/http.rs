//! Storage-adapter HTTP client.
//!
//! Talks to the storage-adapter REST service:
//! `{base}/collections/{collection}/values[/{key}]` and `{base}/status`.

use crate::client::{DocumentStoreClient, ServiceStatus};
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use serde_json::Value;
use tracing::{debug, info, warn};
use uiconfig_types::{CollectionId, Document, DocumentKey, ETag};

/// Storage-adapter connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageAdapterConfig {
    /// Base URL including the API version (e.g. `http://localhost:9022/v1`).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for StorageAdapterConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9022/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Storage-adapter wire structures.
#[derive(Debug, Deserialize)]
struct ValueApiModel {
    #[serde(rename = "Key")]
    key: String,
    #[serde(rename = "Data")]
    data: String,
    #[serde(rename = "ETag")]
    etag: String,
    #[serde(rename = "$metadata", default)]
    metadata: HashMap<String, Value>,
}

// Items are decoded one by one so that a bad entry does not fail the listing.
#[derive(Debug, Deserialize)]
struct ValueListApiModel {
    #[serde(rename = "Items", default)]
    items: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct ValueInput<'a> {
    #[serde(rename = "Data")]
    data: &'a str,
    #[serde(rename = "ETag", skip_serializing_if = "Option::is_none")]
    etag: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct StatusApiModel {
    #[serde(rename = "Status")]
    status: String,
}

fn parse_timestamp(metadata: &HashMap<String, Value>, field: &str) -> Option<DateTime<Utc>> {
    metadata
        .get(field)
        .and_then(Value::as_str)
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn transport_error(op: &str, e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Unavailable(format!("{op} failed: {e}"))
    }
}

/// HTTP implementation of [`DocumentStoreClient`].
pub struct StorageAdapterClient {
    config: StorageAdapterConfig,
    client: Client,
}

impl StorageAdapterClient {
    /// Creates a client for the configured storage adapter.
    pub fn new(config: StorageAdapterConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Unavailable(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &StorageAdapterConfig {
        &self.config
    }

    fn values_url(&self, collection: &CollectionId) -> String {
        format!(
            "{}/collections/{}/values",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(collection.as_str())
        )
    }

    fn value_url(&self, collection: &CollectionId, key: &DocumentKey) -> String {
        format!(
            "{}/{}",
            self.values_url(collection),
            urlencoding::encode(key.as_str())
        )
    }

    /// Maps non-success statuses onto the client error kinds.
    async fn check(
        response: Response,
        op: &str,
        collection: &CollectionId,
        key: Option<&DocumentKey>,
    ) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::not_found(
                collection.as_str(),
                key.map(DocumentKey::as_str).unwrap_or_default(),
            )),
            StatusCode::CONFLICT | StatusCode::PRECONDITION_FAILED => {
                Err(ClientError::Conflict(format!("{op} rejected: {body}")))
            }
            _ => Err(ClientError::Unavailable(format!(
                "{op} failed with status {status}: {body}"
            ))),
        }
    }

    async fn read_value(
        response: Response,
        op: &str,
        collection: &CollectionId,
    ) -> ClientResult<Document> {
        let body = response.text().await.map_err(|e| transport_error(op, e))?;
        let value: ValueApiModel = serde_json::from_str(&body)?;
        Self::to_document(collection, value)
    }

    fn to_document(collection: &CollectionId, value: ValueApiModel) -> ClientResult<Document> {
        let key = DocumentKey::new(value.key).map_err(|e| {
            ClientError::Unavailable(format!("service returned an invalid key: {e}"))
        })?;

        Ok(Document {
            collection_id: collection.clone(),
            key,
            data: value.data,
            etag: ETag::new(value.etag),
            created: parse_timestamp(&value.metadata, "$created"),
            modified: parse_timestamp(&value.metadata, "$modified"),
        })
    }
}

#[async_trait]
impl DocumentStoreClient for StorageAdapterClient {
    async fn get(&self, collection: &CollectionId, key: &DocumentKey) -> ClientResult<Document> {
        debug!("GET {}/{}", collection, key);

        let response = self
            .client
            .get(self.value_url(collection, key))
            .send()
            .await
            .map_err(|e| transport_error("get", e))?;

        let response = Self::check(response, "get", collection, Some(key)).await?;
        Self::read_value(response, "get", collection).await
    }

    async fn get_all(&self, collection: &CollectionId) -> ClientResult<Vec<Document>> {
        debug!("GET {}/*", collection);

        let response = self
            .client
            .get(self.values_url(collection))
            .send()
            .await
            .map_err(|e| transport_error("get all", e))?;

        let response = Self::check(response, "get all", collection, None).await?;
        let body = response
            .text()
            .await
            .map_err(|e| transport_error("get all", e))?;
        let list: ValueListApiModel = serde_json::from_str(&body)?;

        let mut documents = Vec::with_capacity(list.items.len());
        for item in list.items {
            let document = serde_json::from_value::<ValueApiModel>(item)
                .map_err(ClientError::from)
                .and_then(|value| Self::to_document(collection, value));
            match document {
                Ok(document) => documents.push(document),
                Err(e) => warn!("Skipping malformed item in {}: {}", collection, e),
            }
        }
        Ok(documents)
    }

    /// A keyed create is a `PUT` with `If-None-Match: *`. It only fails with
    /// `Conflict` on an existing key if the adapter honours that header; an
    /// adapter that treats `PUT` as an upsert lets two racing first writers
    /// overwrite each other.
    async fn create(
        &self,
        collection: &CollectionId,
        key: Option<&DocumentKey>,
        data: &str,
    ) -> ClientResult<Document> {
        let input = ValueInput { data, etag: None };

        let request = match key {
            Some(key) => self
                .client
                .put(self.value_url(collection, key))
                .header("If-None-Match", "*"),
            None => self.client.post(self.values_url(collection)),
        };

        let response = request
            .json(&input)
            .send()
            .await
            .map_err(|e| transport_error("create", e))?;

        let response = Self::check(response, "create", collection, key).await?;
        let document = Self::read_value(response, "create", collection).await?;
        info!("Created document {}/{}", collection, document.key);
        Ok(document)
    }

    async fn update(
        &self,
        collection: &CollectionId,
        key: &DocumentKey,
        data: &str,
        expected: &ETag,
    ) -> ClientResult<Document> {
        let input = ValueInput {
            data,
            etag: Some(expected.as_str()),
        };

        let response = self
            .client
            .put(self.value_url(collection, key))
            .header("If-Match", expected.as_str())
            .json(&input)
            .send()
            .await
            .map_err(|e| transport_error("update", e))?;

        let response = Self::check(response, "update", collection, Some(key)).await?;
        let document = Self::read_value(response, "update", collection).await?;
        info!("Updated document {}/{}", collection, key);
        Ok(document)
    }

    async fn delete(&self, collection: &CollectionId, key: &DocumentKey) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.value_url(collection, key))
            .send()
            .await
            .map_err(|e| transport_error("delete", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Delete of absent document {}/{}", collection, key);
            return Ok(());
        }

        Self::check(response, "delete", collection, Some(key)).await?;
        info!("Deleted document {}/{}", collection, key);
        Ok(())
    }

    async fn status(&self) -> ClientResult<ServiceStatus> {
        let response = self
            .client
            .get(format!(
                "{}/status",
                self.config.base_url.trim_end_matches('/')
            ))
            .send()
            .await
            .map_err(|e| transport_error("status", e))?;

        if !response.status().is_success() {
            let status = response.status();
            return Ok(ServiceStatus::unhealthy(format!(
                "status probe returned {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error("status", e))?;
        let model: StatusApiModel = serde_json::from_str(&body)?;

        if model.status.starts_with("OK") {
            Ok(ServiceStatus::healthy(model.status))
        } else {
            Ok(ServiceStatus::unhealthy(model.status))
        }
    }
}
