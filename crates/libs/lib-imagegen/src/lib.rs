//! # Image Generation Library
//!
//! OpenAI Images API client implementing [`lib_core::service::ImageGenerator`].

pub mod openai;
pub mod types;

pub use openai::OpenAiImageClient;
