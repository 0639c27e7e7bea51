//! Batch input parsing: course topics from a plain-text file.

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Read course topics from `path`, one per line.
///
/// Blank lines are skipped and a leading line number ("12 Topic") is
/// stripped. An unreadable file surfaces as an IO error; a file with no
/// topics is a configuration error.
pub fn load_from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let topics: Vec<String> = content.lines().filter_map(parse_line).collect();

    if topics.is_empty() {
        return Err(Error::Config(format!(
            "no course topics found in {}",
            path.display()
        )));
    }

    Ok(topics)
}

fn parse_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let without_number = trimmed
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start();
    if without_number.is_empty() {
        None
    } else {
        Some(without_number.to_string())
    }
}
