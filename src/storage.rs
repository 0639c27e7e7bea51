//! Output directory management and thumbnail persistence.

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_SLUG_LEN: usize = 50;

/// Filesystem-safe slug for a topic.
///
/// Lowercases, collapses runs of non-alphanumeric characters to a single
/// `-`, and caps the result at 50 characters. Idempotent: sanitizing an
/// already-sanitized name returns it unchanged.
pub fn sanitize_filename(topic: &str) -> String {
    let mut slug = String::new();
    let mut pending_separator = false;

    for c in topic.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    slug.trim_end_matches('-').to_string()
}

/// Owns the output directory and writes thumbnail files into it.
#[derive(Debug)]
pub struct ThumbnailStore {
    output_dir: PathBuf,
}

impl ThumbnailStore {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create the output directory tree if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Write image bytes for a topic, overwriting any previous file with the
    /// same slug. Returns the path of the written file.
    pub fn save(&self, topic: &str, bytes: &[u8]) -> Result<PathBuf> {
        let slug = sanitize_filename(topic);
        if slug.is_empty() {
            return Err(Error::InvalidTopic(format!(
                "\"{}\" contains no filename-safe characters",
                topic
            )));
        }

        self.ensure_dir()?;

        let file_path = self.output_dir.join(format!("{}.png", slug));
        fs::write(&file_path, bytes)?;
        Ok(file_path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
