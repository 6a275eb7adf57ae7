//! Wire types of the OpenAI Images API.

use serde::Deserialize;

/// Successful `/v1/images/generations` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
    /// Prompt after the model's rewrite (dall-e-3 only)
    pub revised_prompt: Option<String>,
}

/// Error body: `{"error": {"message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
