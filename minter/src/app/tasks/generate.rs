//! # Image Generation Task

use std::sync::Arc;

use async_channel::Sender;
use lib_core::service::ImageGenerator;

use crate::app::events::AppEvent;

/// Generate an image for `prompt` and report the result.
pub(crate) fn generate_image(
    generator: Arc<dyn ImageGenerator>,
    prompt: String,
    event_tx: Sender<AppEvent>,
) {
    super::spawn_reported(
        "generate_image",
        async move {
            lib_core::generate::generate_image(&*generator, &prompt)
                .await
                .map_err(|e| e.message().to_string())
        },
        event_tx,
        AppEvent::ImageGenerated,
    );
}
