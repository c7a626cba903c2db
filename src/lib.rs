//! Astrofeed library
//!
//! Exposes the daily content cache — topic rotation, NASA Images client,
//! disk store, and curator — for the binary and for integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod topics;

pub use cache::{Curator, ImageStore};
pub use data::{CacheMetadata, ImageRecord, NasaImagesClient};
pub use topics::{today_topic, topic_for, TOPICS};
