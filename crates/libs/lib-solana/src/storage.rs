//! # Metadata Storage
//!
//! Uploads metadata documents to an IPFS node over its HTTP API
//! (`POST {address}/api/v0/add`, multipart body) and hands back `ipfs://` URIs.

use std::time::Duration;

use lib_core::model::MetadataDocument;
use lib_core::{AppError, Result, StorageConfig};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

/// Response of `/api/v0/add`.
#[derive(Debug, Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash")]
    hash: String,
}

/// IPFS storage backend built from a [`StorageConfig`].
#[derive(Debug, Clone)]
pub struct IpfsStorage {
    client: reqwest::Client,
    config: StorageConfig,
}

impl IpfsStorage {
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Storage(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config: config.clone() })
    }

    /// Upload `document` as `metadata.json`, returning `ipfs://{cid}`.
    pub async fn upload_json(&self, document: &MetadataDocument) -> Result<String> {
        let body = serde_json::to_vec(document)?;
        let url = format!("{}/api/v0/add?pin=true", self.config.address.trim_end_matches('/'));
        debug!(url = %url, bytes = body.len(), "Uploading metadata");

        let part = Part::bytes(body)
            .file_name("metadata.json")
            .mime_str("application/json")
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Upload failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Storage(format!(
                "Upload failed with status {}: {}",
                status,
                text.trim()
            )));
        }

        let added: AddResponse = response
            .json()
            .await
            .map_err(|e| AppError::Storage(format!("Invalid upload response: {}", e)))?;

        let uri = format!("ipfs://{}", added.hash);
        info!(uri = %uri, "Metadata stored");
        Ok(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Multipart;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use lib_core::model::ImageReference;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn storage(address: String) -> IpfsStorage {
        IpfsStorage::new(&StorageConfig {
            address,
            provider_url: "https://gateway.test".to_string(),
            timeout_ms: 5_000,
        })
        .unwrap()
    }

    fn document() -> MetadataDocument {
        let image = ImageReference::new("https://img/1.png").unwrap();
        MetadataDocument::for_image("Fox", "A red fox", &image)
    }

    #[tokio::test]
    async fn test_upload_returns_ipfs_uri() {
        async fn add(mut multipart: Multipart) -> Json<serde_json::Value> {
            let field = multipart.next_field().await.unwrap().unwrap();
            assert_eq!(field.name(), Some("file"));
            let bytes = field.bytes().await.unwrap();
            let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(doc["name"], "Fox");
            assert_eq!(doc["properties"]["files"][0]["type"], "image/png");
            Json(serde_json::json!({ "Name": "metadata.json", "Hash": "bafyabc", "Size": "120" }))
        }

        let address = serve(Router::new().route("/api/v0/add", post(add))).await;

        let uri = storage(address).upload_json(&document()).await.unwrap();
        assert_eq!(uri, "ipfs://bafyabc");
    }

    #[tokio::test]
    async fn test_upload_error_status() {
        async fn add() -> (StatusCode, &'static str) {
            (StatusCode::INTERNAL_SERVER_ERROR, "node offline")
        }

        let address = serve(Router::new().route("/api/v0/add", post(add))).await;

        let err = storage(address).upload_json(&document()).await.unwrap_err();
        match err {
            AppError::Storage(message) => assert!(message.contains("node offline")),
            other => panic!("expected storage error, got {:?}", other),
        }
    }
}
