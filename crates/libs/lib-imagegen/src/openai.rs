//! # OpenAI Image Client
//!
//! Sends `POST {base_url}/v1/images/generations` with a bearer key and returns the
//! URL of the first generated image.

use async_trait::async_trait;
use lib_core::config::DEFAULT_OPENAI_BASE_URL;
use lib_core::model::ImageReference;
use lib_core::service::{GenerationRequest, ImageGenerator};
use lib_core::{AppError, Result};
use reqwest::Client;
use tracing::{debug, warn};

use crate::types::{ErrorResponse, ImagesResponse};

pub struct OpenAiImageClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiImageClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_OPENAI_BASE_URL)
    }

    /// Point the client at another host (a proxy or a local test server).
    ///
    /// No request timeout is set; a slow generation runs until the service answers.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/images/generations", self.base_url)
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<ImageReference> {
        debug!(
            model = %request.model,
            n = request.n,
            size = %request.size,
            "POST images/generations"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::ImageGeneration(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ImageGeneration(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let (message, kind) = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(e) => (e.error.message, e.error.kind),
                Err(_) => (format!("HTTP {}: {}", status, body.trim()), None),
            };
            warn!(
                status = %status,
                kind = kind.as_deref().unwrap_or("unknown"),
                "Image generation rejected"
            );
            return Err(AppError::ImageGeneration(message));
        }

        let parsed: ImagesResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::ImageGeneration(format!("Invalid response: {}", e)))?;

        let first = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ImageGeneration("No image returned".to_string()))?;

        if let Some(revised) = &first.revised_prompt {
            debug!(revised_prompt = %revised, "Prompt revised by model");
        }

        let url = first
            .url
            .ok_or_else(|| AppError::ImageGeneration("Image has no URL".to_string()))?;
        ImageReference::new(url).map_err(|e| AppError::ImageGeneration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_sends_fixed_request_and_returns_url() {
        async fn generate(
            headers: HeaderMap,
            Json(body): Json<Value>,
        ) -> (StatusCode, Json<Value>) {
            assert_eq!(headers["authorization"], "Bearer sk-test");
            assert_eq!(body["model"], "dall-e-3");
            assert_eq!(body["n"], 1);
            assert_eq!(body["size"], "1024x1024");
            assert_eq!(body["prompt"], "a red fox in snow");
            (
                StatusCode::OK,
                Json(json!({
                    "created": 1,
                    "data": [{ "url": "https://img/1.png", "revised_prompt": "a fox" }]
                })),
            )
        }

        let base = serve(Router::new().route("/v1/images/generations", post(generate))).await;
        let client = OpenAiImageClient::with_base_url("sk-test", base);

        let image = client
            .generate(&GenerationRequest::for_prompt("a red fox in snow"))
            .await
            .unwrap();
        assert_eq!(image.as_str(), "https://img/1.png");
    }

    #[tokio::test]
    async fn test_slow_generation_is_awaited() {
        async fn generate() -> Json<Value> {
            tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
            Json(json!({ "created": 1, "data": [{ "url": "https://img/slow.png" }] }))
        }

        let base = serve(Router::new().route("/v1/images/generations", post(generate))).await;
        let client = OpenAiImageClient::with_base_url("sk-test", base);

        let image = client.generate(&GenerationRequest::for_prompt("x")).await.unwrap();
        assert_eq!(image.as_str(), "https://img/slow.png");
    }

    #[tokio::test]
    async fn test_surfaces_api_error_message() {
        async fn generate() -> (StatusCode, Json<Value>) {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": {
                        "message": "Your request was rejected by the safety system.",
                        "type": "invalid_request_error"
                    }
                })),
            )
        }

        let base = serve(Router::new().route("/v1/images/generations", post(generate))).await;
        let client = OpenAiImageClient::with_base_url("sk-test", base);

        let err = client.generate(&GenerationRequest::for_prompt("x")).await.unwrap_err();
        assert_eq!(
            err,
            AppError::ImageGeneration("Your request was rejected by the safety system.".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_data_is_an_error() {
        async fn generate() -> Json<Value> {
            Json(json!({ "created": 1, "data": [] }))
        }

        let base = serve(Router::new().route("/v1/images/generations", post(generate))).await;
        let client = OpenAiImageClient::with_base_url("sk-test", base);

        let err = client.generate(&GenerationRequest::for_prompt("x")).await.unwrap_err();
        assert_eq!(err, AppError::ImageGeneration("No image returned".to_string()));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let client = OpenAiImageClient::with_base_url("sk-test", "http://127.0.0.1:1");
        let err = client.generate(&GenerationRequest::for_prompt("x")).await.unwrap_err();
        assert!(matches!(err, AppError::ImageGeneration(_)));
    }
}
