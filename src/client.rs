//! The thumbnail client: single-topic generation and sequential batches.

use crate::ai::{IdeogramClient, ImageGenerationService};
use crate::models::{Config, GenerationOptions, GenerationResult};
use crate::prompts;
use crate::storage::ThumbnailStore;
use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Pause between consecutive API requests in a batch.
const BATCH_PAUSE: Duration = Duration::from_secs(1);

/// Generates course thumbnails through an [`ImageGenerationService`] and
/// persists them to the output directory.
pub struct ThumbnailClient {
    image_gen: Box<dyn ImageGenerationService>,
    store: ThumbnailStore,
}

impl std::fmt::Debug for ThumbnailClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailClient")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl ThumbnailClient {
    /// Build a client backed by the Ideogram API.
    ///
    /// Fails with a configuration error before any request is attempted when
    /// the API key is blank, and with an IO error when the output directory
    /// cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::Config("IDEOGRAM_API_KEY is required".to_string()));
        }

        let store = ThumbnailStore::new(config.output_dir);
        store.ensure_dir()?;
        info!("Output directory ensured: {}", store.output_dir().display());

        Ok(Self {
            image_gen: Box::new(IdeogramClient::new(config.api_key)),
            store,
        })
    }

    /// Build a client around an injected service, for tests and harnesses.
    pub fn with_service(
        image_gen: Box<dyn ImageGenerationService>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image_gen,
            store: ThumbnailStore::new(output_dir),
        }
    }

    /// Generate one thumbnail and return the path of the written file.
    pub async fn generate_thumbnail(
        &self,
        topic: &str,
        options: &GenerationOptions,
    ) -> Result<PathBuf> {
        if topic.trim().is_empty() {
            return Err(Error::InvalidTopic("topic must not be empty".to_string()));
        }

        info!("Generating thumbnail for: {}", topic);

        let prompt = prompts::thumbnail_prompt(topic, &options.style);
        let image_bytes = self.image_gen.generate_image(&prompt, options).await?;

        if image_bytes.is_empty() {
            return Err(Error::Api("no image data received".to_string()));
        }

        let file_path = self.store.save(topic, &image_bytes)?;
        info!("Thumbnail saved to: {}", file_path.display());

        Ok(file_path)
    }

    /// Generate thumbnails for every topic in input order.
    ///
    /// Each topic yields exactly one result; a failing topic is recorded as
    /// a [`GenerationResult::Failure`] and never stops the batch.
    pub async fn generate_multiple_thumbnails(
        &self,
        topics: &[String],
        options: &GenerationOptions,
    ) -> Vec<GenerationResult> {
        let mut results = Vec::with_capacity(topics.len());

        for (index, topic) in topics.iter().enumerate() {
            match self.generate_thumbnail(topic, options).await {
                Ok(file_path) => results.push(GenerationResult::Success {
                    topic: topic.clone(),
                    file_path,
                }),
                Err(e) => {
                    warn!("Failed to generate thumbnail for \"{}\": {}", topic, e);
                    results.push(GenerationResult::Failure {
                        topic: topic.clone(),
                        error: e.to_string(),
                    });
                }
            }

            if index + 1 < topics.len() {
                tokio::time::sleep(BATCH_PAUSE).await;
            }
        }

        results
    }
}
