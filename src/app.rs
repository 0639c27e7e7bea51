//! Application orchestration: configuration, batch execution, summary.

use crate::client::ThumbnailClient;
use crate::models::{Config, GenerationOptions, GenerationResult};
use crate::{Error, Result};
use tracing::{error, info};

pub struct App {
    client: ThumbnailClient,
}

impl App {
    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;
        Ok(Self {
            client: ThumbnailClient::new(config)?,
        })
    }

    /// Build an app around an existing client, for tests and harnesses.
    pub fn with_client(client: ThumbnailClient) -> Self {
        Self { client }
    }

    /// Run a batch over `topics`, logging per-topic outcomes and a summary.
    pub async fn run(
        &self,
        topics: Vec<String>,
        options: GenerationOptions,
    ) -> Result<Vec<GenerationResult>> {
        if topics.is_empty() {
            return Err(Error::Config("no course topics to process".to_string()));
        }

        info!("Found {} course topics", topics.len());
        for (index, topic) in topics.iter().enumerate() {
            info!("{}. {}", index + 1, topic);
        }

        let results = self
            .client
            .generate_multiple_thumbnails(&topics, &options)
            .await;

        let success_count = results.iter().filter(|r| r.is_success()).count();
        let failure_count = results.len() - success_count;

        for result in &results {
            match result {
                GenerationResult::Success { topic, file_path } => {
                    info!("{}: saved to {}", topic, file_path.display());
                }
                GenerationResult::Failure { topic, error } => {
                    error!("{}: {}", topic, error);
                }
            }
        }

        info!(
            "Summary: {} successful, {} failed",
            success_count, failure_count
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockImageClient;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_with_no_topics_is_config_error() {
        let dir = TempDir::new().unwrap();
        let mock = MockImageClient::new();
        let probe = mock.clone();
        let app = App::with_client(ThumbnailClient::with_service(
            Box::new(mock),
            dir.path(),
        ));

        let err = app
            .run(Vec::new(), GenerationOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        assert_eq!(probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_run_returns_one_result_per_topic() {
        let dir = TempDir::new().unwrap();
        let app = App::with_client(ThumbnailClient::with_service(
            Box::new(MockImageClient::new()),
            dir.path(),
        ));

        let topics = vec!["Rust Basics".to_string(), "Go Basics".to_string()];
        let results = app
            .run(topics, GenerationOptions::default())
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_success()));
    }
}
