//! Daily curation orchestrator
//!
//! Ties the topic rotation, the search client, and the on-disk store
//! together: once per calendar day the curator refreshes the feed, and
//! every call after that is a pure read of the cached selection. Failures
//! anywhere below degrade to previously cached data; callers never see an
//! error.

use chrono::{Local, NaiveDate};
use tokio::sync::Mutex;

use crate::cache::ImageStore;
use crate::data::{CacheMetadata, ImageRecord, NasaImagesClient};
use crate::topics::topic_for;

/// Number of images selected per day
const IMAGES_PER_DAY: usize = 2;

/// Orchestrates the daily refresh of the curated feed
///
/// A refresh lock serializes overlapping invocations (e.g., rapid repeated
/// manual refreshes): the second caller waits, re-reads the metadata, and
/// normally lands on the fresh path.
#[derive(Debug)]
pub struct Curator {
    store: ImageStore,
    client: NasaImagesClient,
    refresh_lock: Mutex<()>,
}

impl Curator {
    /// Creates a curator over the given store and search client
    pub fn new(store: ImageStore, client: NasaImagesClient) -> Self {
        Self {
            store,
            client,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Returns the curated images for today's local date
    ///
    /// Fresh cache (today's date, non-empty selection) is returned without
    /// any network activity. Otherwise the curator fetches today's topic,
    /// caches what it got, persists new metadata, and returns the fresh
    /// selection — falling back to whatever was previously stored when the
    /// fetch comes back empty. Worst case is an empty vector, never an
    /// error.
    pub async fn get_curated_images(&self) -> Vec<ImageRecord> {
        self.curate_for(Local::now().date_naive()).await
    }

    /// Date-injected variant of [`get_curated_images`](Self::get_curated_images)
    pub async fn curate_for(&self, date: NaiveDate) -> Vec<ImageRecord> {
        let _guard = self.refresh_lock.lock().await;

        let today = date_key(date);
        let metadata = self.store.read_metadata();

        let is_fresh =
            metadata.last_fetch_date.as_deref() == Some(&today) && !metadata.images.is_empty();
        if is_fresh {
            log::debug!("Cache fresh for {}, serving stored selection", today);
            return metadata.images;
        }

        let topic = topic_for(date);
        log::info!("Refreshing feed for {} (topic: {})", today, topic);

        let fetched = self.client.fetch_images(topic, IMAGES_PER_DAY).await;
        if fetched.is_empty() {
            // Stored metadata stays untouched so the next call retries.
            log::warn!(
                "No images fetched for '{}', keeping previous selection",
                topic
            );
            return metadata.images;
        }

        let cached = self.store.download_and_cache(fetched).await;
        self.store.write_metadata(&CacheMetadata {
            last_fetch_date: Some(today),
            images: cached.clone(),
        });

        cached
    }
}

/// Formats a date as the `YYYY-MM-DD` key stored in the metadata file
fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
