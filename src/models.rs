//! Data models and structures
//!
//! Defines the core data structures for generation options, per-topic batch
//! results, configuration, and the Ideogram API wire format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options applied to a single generation request.
///
/// Unknown fields are rejected when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationOptions {
    pub aspect_ratio: String,
    pub style: String,
    pub quality: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            aspect_ratio: "16:9".to_string(),
            style: "cinematic".to_string(),
            quality: "medium".to_string(),
        }
    }
}

/// Outcome for one topic in a batch. Produced once, never mutated.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationResult {
    Success { topic: String, file_path: PathBuf },
    Failure { topic: String, error: String },
}

impl GenerationResult {
    pub fn topic(&self) -> &str {
        match self {
            Self::Success { topic, .. } | Self::Failure { topic, .. } => topic,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

// Ideogram API request/response models
#[derive(Debug, Serialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub rendering_speed: String,
    pub aspect_ratio: String,
    pub style: String,
    pub quality: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageGenerationResponse {
    pub data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("IDEOGRAM_API_KEY")
            .map_err(|_| crate::Error::Config("IDEOGRAM_API_KEY not set".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(crate::Error::Config(
                "IDEOGRAM_API_KEY is empty".to_string(),
            ));
        }

        let output_dir =
            std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "./thumbnails".to_string());

        Ok(Self {
            api_key,
            output_dir: PathBuf::from(output_dir),
        })
    }
}
