//! Course thumbnail generation backed by the Ideogram image API.
//!
//! Builds a design prompt from a course topic, requests an image from the
//! remote API, and writes the result into a local thumbnails directory under
//! a filesystem-safe name. Batches of topics are processed sequentially with
//! per-topic success/failure capture.

pub mod ai;
pub mod app;
pub mod client;
pub mod error;
pub mod models;
pub mod prompts;
pub mod storage;
pub mod topics;

pub use error::{Error, Result};
