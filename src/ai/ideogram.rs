use super::ImageGenerationService;
use crate::models::{GenerationOptions, ImageGenerationRequest, ImageGenerationResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.ideogram.ai";
const GENERATE_PATH: &str = "/v1/ideogram-v3/generate";
const RENDERING_SPEED: &str = "TURBO";

pub struct IdeogramClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl IdeogramClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    // Options carry "16:9"; the wire format is "16x9".
    fn wire_aspect_ratio(aspect_ratio: &str) -> String {
        aspect_ratio.replace(':', "x")
    }

    async fn request_generation(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        tracing::debug!("Sending generation request to Ideogram");

        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Ideogram: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Ideogram API error (status {}): {}", status, error_text);
            return Err(Error::Api(format!(
                "request failed with status {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Ideogram response: {}\nBody: {}", e, body);
            Error::Api(format!("failed to parse response: {}", e))
        })
    }

    async fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "image download failed with status {}",
                response.status()
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ImageGenerationService for IdeogramClient {
    async fn generate_image(&self, prompt: &str, options: &GenerationOptions) -> Result<Vec<u8>> {
        let request = ImageGenerationRequest {
            prompt: prompt.to_string(),
            rendering_speed: RENDERING_SPEED.to_string(),
            aspect_ratio: Self::wire_aspect_ratio(&options.aspect_ratio),
            style: options.style.clone(),
            quality: options.quality.clone(),
        };

        let response = self.request_generation(&request).await?;

        let image = response
            .data
            .first()
            .ok_or_else(|| Error::Api("no image data received".to_string()))?;

        let url = image
            .url
            .as_deref()
            .ok_or_else(|| Error::Api("no image URL in response".to_string()))?;

        tracing::debug!("Downloading generated image from {}", url);
        self.download_image(url).await
    }
}
