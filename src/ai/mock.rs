use super::ImageGenerationService;
use crate::models::GenerationOptions;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// 1x1 PNG returned when no responses are queued.
const DEFAULT_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 pixel
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
    0x44, 0x41, // IDAT chunk
    0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0xE2, 0x25,
    0x00, 0xBC, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, // IEND chunk
    0x44, 0xAE, 0x42, 0x60, 0x82,
];

enum MockResponse {
    Image(Vec<u8>),
    Failure(String),
}

/// Scripted [`ImageGenerationService`] for tests.
///
/// Queued responses are served in order, cycling when exhausted; with no
/// responses queued every call returns a tiny valid PNG. Clones share the
/// same response queue and call counter.
#[derive(Clone)]
pub struct MockImageClient {
    responses: Arc<Mutex<Vec<MockResponse>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockResponse::Image(response));
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(MockResponse::Failure(message.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(&self, _prompt: &str, _options: &GenerationOptions) -> Result<Vec<u8>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(DEFAULT_PNG.to_vec());
        }

        let index = (*count - 1) % responses.len();
        match &responses[index] {
            MockResponse::Image(bytes) => Ok(bytes.clone()),
            MockResponse::Failure(message) => Err(Error::Api(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_response_is_valid_png() {
        let client = MockImageClient::new();

        let bytes = client
            .generate_image("prompt", &GenerationOptions::default())
            .await
            .unwrap();

        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    async fn test_queued_responses_cycle() {
        let client = MockImageClient::new()
            .with_image_response(vec![1])
            .with_image_response(vec![2]);
        let options = GenerationOptions::default();

        assert_eq!(client.generate_image("p", &options).await.unwrap(), vec![1]);
        assert_eq!(client.generate_image("p", &options).await.unwrap(), vec![2]);
        assert_eq!(client.generate_image("p", &options).await.unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let client = MockImageClient::new().with_failure("simulated outage");

        let err = client
            .generate_image("p", &GenerationOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(_)));
        assert!(err.to_string().contains("simulated outage"));
    }

    #[tokio::test]
    async fn test_call_count_is_shared_across_clones() {
        let client = MockImageClient::new();
        let probe = client.clone();
        let options = GenerationOptions::default();

        assert_eq!(probe.get_call_count(), 0);
        client.generate_image("p", &options).await.unwrap();
        client.generate_image("p", &options).await.unwrap();
        assert_eq!(probe.get_call_count(), 2);
    }
}
