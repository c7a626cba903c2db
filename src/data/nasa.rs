//! NASA Images search API client
//!
//! This module queries the NASA Image and Video Library search endpoint for
//! a topic, filters the results down to usable photographs, and samples a
//! small selection for the day's feed.

use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use super::ImageRecord;

/// Base URL for the NASA Image and Video Library API
const NASA_IMAGES_BASE_URL: &str = "https://images-api.nasa.gov";

/// Number of results requested per search
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Minimum description length for an item to be considered usable
const DEFAULT_MIN_DESCRIPTION_LEN: usize = 50;

/// Errors that can occur when fetching search results
///
/// These never cross the fetcher's public boundary: `fetch_images` absorbs
/// them into an empty result and logs the condition.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server replied with a non-success status
    #[error("Search returned status {0}")]
    Status(StatusCode),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the NASA Images search API
#[derive(Debug, Clone)]
pub struct NasaImagesClient {
    client: Client,
    base_url: String,
    page_size: u32,
    /// Items with a description at or below this length are discarded
    min_description_len: usize,
    /// When set, items without location data are discarded as well.
    /// Off by default; kept as a policy knob pending product direction on
    /// whether location-bearing items should be required.
    require_location: bool,
}

impl Default for NasaImagesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NasaImagesClient {
    /// Create a new client with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: NASA_IMAGES_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            min_description_len: DEFAULT_MIN_DESCRIPTION_LEN,
            require_location: false,
        }
    }

    /// Create a client pointed at a custom API base URL
    ///
    /// Useful for testing against a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the minimum description length filter
    #[allow(dead_code)]
    pub fn with_min_description_len(mut self, len: usize) -> Self {
        self.min_description_len = len;
        self
    }

    /// Require items to carry location data
    #[allow(dead_code)]
    pub fn with_require_location(mut self, require: bool) -> Self {
        self.require_location = require;
        self
    }

    /// Fetch up to `count` curated images for a search topic
    ///
    /// Issues a single search request, filters the results, and samples
    /// `count` of them at random (unseeded, so repeated calls with the same
    /// inputs may return different subsets). Returns fewer than `count`
    /// records when the filtered pool is smaller, and an empty vector on
    /// any transport, status, or decode failure — errors are logged, never
    /// propagated.
    pub async fn fetch_images(&self, topic: &str, count: usize) -> Vec<ImageRecord> {
        let response = match self.search(topic).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Image search for '{}' failed: {}", topic, e);
                return Vec::new();
            }
        };

        self.curate_from(response, count, &mut rand::thread_rng())
    }

    /// Like [`fetch_images`](Self::fetch_images) but with a caller-supplied
    /// random source, so tests can make the sampling step deterministic
    pub async fn fetch_images_with_rng<R: Rng>(
        &self,
        topic: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<ImageRecord> {
        let response = match self.search(topic).await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Image search for '{}' failed: {}", topic, e);
                return Vec::new();
            }
        };

        self.curate_from(response, count, rng)
    }

    /// Issue the search request for a topic
    async fn search(&self, topic: &str) -> Result<SearchResponse, FetchError> {
        let url = format!("{}/search", self.base_url);
        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", topic),
                ("media_type", "image"),
                ("page_size", page_size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let text = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Filter and sample a search response into image records
    fn curate_from<R: Rng>(
        &self,
        response: SearchResponse,
        count: usize,
        rng: &mut R,
    ) -> Vec<ImageRecord> {
        let candidates: Vec<SearchItem> = response
            .collection
            .items
            .into_iter()
            .filter(|item| self.is_usable(item))
            .collect();

        candidates
            .choose_multiple(rng, count)
            .filter_map(item_to_record)
            .collect()
    }

    /// Whether a search item passes the curation filter
    ///
    /// Keeps items whose primary data entry declares image media and whose
    /// description is longer than the configured minimum. The description
    /// threshold weeds out bare catalog entries with no story to show.
    fn is_usable(&self, item: &SearchItem) -> bool {
        let Some(data) = item.data.first() else {
            return false;
        };

        if data.media_type.as_deref() != Some("image") {
            return false;
        }

        let description_ok = data
            .description
            .as_ref()
            .is_some_and(|d| d.len() > self.min_description_len);
        if !description_ok {
            return false;
        }

        if self.require_location {
            return data.location.as_ref().is_some_and(|l| !l.is_empty());
        }

        true
    }
}

/// Convert a search item into an image record
///
/// Items without an asset id are unusable and yield `None`. `local_path`
/// starts as the remote URL; the store replaces it once the download lands.
fn item_to_record(item: &SearchItem) -> Option<ImageRecord> {
    let data = item.data.first()?;
    let id = data.nasa_id.clone()?;

    let remote_url = pick_link(&item.links, "preview");
    let remote_hd_url = pick_link(&item.links, "orig");

    Some(ImageRecord {
        id,
        title: data.title.clone(),
        description: data.description.clone(),
        date: data.date_created.clone(),
        location: data.location.clone(),
        photographer: data
            .photographer
            .clone()
            .or_else(|| data.secondary_creator.clone()),
        remote_url: remote_url.clone(),
        remote_hd_url,
        local_path: remote_url,
    })
}

/// Pick the href of the link annotated with `rel`, falling back to the
/// first link, then to an empty string
fn pick_link(links: &[ItemLink], rel: &str) -> String {
    links
        .iter()
        .find(|link| link.rel.as_deref() == Some(rel))
        .or_else(|| links.first())
        .map(|link| link.href.clone())
        .unwrap_or_default()
}

/// NASA Images API search response document
#[derive(Debug, Deserialize)]
struct SearchResponse {
    collection: SearchCollection,
}

#[derive(Debug, Deserialize)]
struct SearchCollection {
    #[serde(default)]
    items: Vec<SearchItem>,
}

/// One search hit: descriptive data entries plus asset links
#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    data: Vec<ItemData>,
    #[serde(default)]
    links: Vec<ItemLink>,
}

#[derive(Debug, Deserialize)]
struct ItemData {
    nasa_id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    date_created: Option<String>,
    location: Option<String>,
    photographer: Option<String>,
    secondary_creator: Option<String>,
    media_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemLink {
    href: String,
    rel: Option<String>,
}
