//! Disk cache for the daily curated feed
//!
//! This module owns everything persisted between launches: the image store
//! (metadata document plus downloaded files) and the curator that decides
//! when cached content is still valid and when to refresh it. Degradation
//! is the rule throughout — stale or remote-fallback data beats an error.

mod curator;
mod store;

pub use curator::Curator;
pub use store::{DownloadError, ImageStore};
