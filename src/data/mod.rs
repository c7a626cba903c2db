//! Core data models for the astrofeed cache
//!
//! This module contains the types shared between the NASA Images API client
//! and the on-disk cache: a curated image record and the per-device cache
//! metadata document.

pub mod nasa;

pub use nasa::{FetchError, NasaImagesClient};

use serde::{Deserialize, Serialize};

/// One curated astrophotography image
///
/// Field names are serialized in the camelCase form used by the metadata
/// file on disk, so a record round-trips byte-compatibly with what the
/// presentation layer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Unique identifier from the source API (NASA asset id)
    pub id: String,
    /// Display title, if the source provided one
    pub title: Option<String>,
    /// Long-form description
    pub description: Option<String>,
    /// Capture or publication date string from the source
    pub date: Option<String>,
    /// Where the image was taken
    pub location: Option<String>,
    /// Credited photographer
    pub photographer: Option<String>,
    /// Preview-resolution source URL
    pub remote_url: String,
    /// Full-resolution source URL (may equal `remote_url`)
    pub remote_hd_url: String,
    /// Path of the cached copy on disk, or `remote_url` when the download
    /// failed. Never empty for records emitted by the store.
    pub local_path: String,
}

/// Cache state persisted once per device
///
/// Replaced wholesale on every successful refresh; readers never observe a
/// partially updated document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheMetadata {
    /// Local calendar date (`YYYY-MM-DD`) of the last successful refresh,
    /// or `None` if the feed has never been fetched
    pub last_fetch_date: Option<String>,
    /// The current day's curated selection, in display order
    pub images: Vec<ImageRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ImageRecord {
        ImageRecord {
            id: "PIA12345".to_string(),
            title: Some("Crab Nebula".to_string()),
            description: Some("A supernova remnant in the constellation Taurus.".to_string()),
            date: Some("2026-01-15T00:00:00Z".to_string()),
            location: Some("Chandra X-ray Observatory".to_string()),
            photographer: None,
            remote_url: "https://images-assets.example/PIA12345~thumb.jpg".to_string(),
            remote_hd_url: "https://images-assets.example/PIA12345~orig.jpg".to_string(),
            local_path: "/cache/images/PIA12345.jpg".to_string(),
        }
    }

    #[test]
    fn test_image_record_serialization_roundtrip() {
        let record = sample_record();

        let json = serde_json::to_string(&record).expect("Failed to serialize ImageRecord");
        let deserialized: ImageRecord =
            serde_json::from_str(&json).expect("Failed to deserialize ImageRecord");

        assert_eq!(deserialized, record);
    }

    #[test]
    fn test_image_record_uses_camel_case_wire_names() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("Failed to serialize");

        assert!(json.contains("\"remoteUrl\""));
        assert!(json.contains("\"remoteHdUrl\""));
        assert!(json.contains("\"localPath\""));
        assert!(!json.contains("remote_url"));
    }

    #[test]
    fn test_cache_metadata_default_is_empty_and_unfetched() {
        let metadata = CacheMetadata::default();
        assert!(metadata.last_fetch_date.is_none());
        assert!(metadata.images.is_empty());
    }

    #[test]
    fn test_cache_metadata_serialization_roundtrip() {
        let metadata = CacheMetadata {
            last_fetch_date: Some("2026-08-23".to_string()),
            images: vec![sample_record()],
        };

        let json = serde_json::to_string(&metadata).expect("Failed to serialize CacheMetadata");
        assert!(json.contains("\"lastFetchDate\""));

        let deserialized: CacheMetadata =
            serde_json::from_str(&json).expect("Failed to deserialize CacheMetadata");
        assert_eq!(deserialized, metadata);
    }

    #[test]
    fn test_cache_metadata_null_date_parses_to_none() {
        let json = r#"{ "lastFetchDate": null, "images": [] }"#;
        let metadata: CacheMetadata = serde_json::from_str(json).expect("Failed to parse");
        assert!(metadata.last_fetch_date.is_none());
        assert!(metadata.images.is_empty());
    }
}
