//! Image generation service integration
//!
//! Provides the service trait for producing thumbnail image bytes, the
//! Ideogram-backed client, and a mock implementation for tests.

pub mod ideogram;
pub mod mock;

pub use ideogram::IdeogramClient;
pub use mock::MockImageClient;

use crate::models::GenerationOptions;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate one image for `prompt` and return its raw bytes.
    async fn generate_image(&self, prompt: &str, options: &GenerationOptions) -> Result<Vec<u8>>;
}
