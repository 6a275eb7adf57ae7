//! # Image Generation Step
//!
//! Turns a prompt into an [`ImageReference`] through an [`ImageGenerator`].
//! Flag handling lives in [`crate::screen::ScreenState`]; this step is only the call.

use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::model::ImageReference;
use crate::service::{GenerationRequest, ImageGenerator};

/// Generate one image for `prompt`.
///
/// Empty (or whitespace-only) prompts are rejected before any external call.
pub async fn generate_image(
    generator: &dyn ImageGenerator,
    prompt: &str,
) -> Result<ImageReference> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::InvalidInput("Prompt must not be empty".to_string()));
    }

    let request = GenerationRequest::for_prompt(prompt);
    debug!(model = %request.model, size = %request.size, "Requesting image generation");

    let image = generator.generate(&request).await?;
    info!(image = %image, "Image generated");
    Ok(image)
}
