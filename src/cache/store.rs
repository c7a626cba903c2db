//! On-disk store for curated images and their metadata
//!
//! The store owns two resources under a single base directory: a
//! `metadata.json` document describing the current day's selection, and an
//! `images/` directory of downloaded files named by asset id. Reads degrade
//! to defaults and writes are best-effort, so storage trouble never breaks
//! the feed.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use reqwest::Client;
use thiserror::Error;

use crate::data::{CacheMetadata, ImageRecord};

/// File name of the persisted metadata document
const METADATA_FILE: &str = "metadata.json";

/// Directory holding downloaded image files, relative to the base dir
const IMAGES_DIR: &str = "images";

/// Extension used for all cached image files
const IMAGE_EXT: &str = "jpg";

/// Errors from a single image download attempt
#[derive(Debug, Error)]
pub enum DownloadError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Writing the file to disk failed
    #[error("Failed to write image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Manages the metadata file and image directory on disk
///
/// No other component touches these paths directly. The base directory is
/// explicit so tests (and the `--cache-dir` flag) can point the store at an
/// isolated location.
#[derive(Debug, Clone)]
pub struct ImageStore {
    base_dir: PathBuf,
    client: Client,
}

impl ImageStore {
    /// Creates a store rooted at the XDG-compliant cache directory
    ///
    /// Uses `~/.cache/astrofeed/` on Linux, or the platform equivalent.
    /// Returns `None` if no cache directory can be determined (e.g., no
    /// home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "astrofeed")?;
        Some(Self::with_dir(project_dirs.cache_dir().to_path_buf()))
    }

    /// Creates a store rooted at an explicit base directory
    pub fn with_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            client: Client::new(),
        }
    }

    /// Path of the metadata document
    fn metadata_path(&self) -> PathBuf {
        self.base_dir.join(METADATA_FILE)
    }

    /// Path of the downloaded-images directory
    fn images_dir(&self) -> PathBuf {
        self.base_dir.join(IMAGES_DIR)
    }

    /// Path where the image with the given asset id is cached
    pub fn image_path(&self, id: &str) -> PathBuf {
        self.images_dir().join(format!("{}.{}", id, IMAGE_EXT))
    }

    /// Idempotently creates the image directory and a default metadata file
    ///
    /// Safe to call on every startup; an existing metadata file is left
    /// untouched.
    pub fn ensure_initialized(&self) -> std::io::Result<()> {
        fs::create_dir_all(self.images_dir())?;

        let path = self.metadata_path();
        if !path.exists() {
            let json = serde_json::to_string_pretty(&CacheMetadata::default())
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            fs::write(path, json)?;
        }
        Ok(())
    }

    /// Reads the persisted metadata
    ///
    /// A missing, unreadable, or corrupt file yields the default empty
    /// metadata rather than an error, which in turn drives the refresh
    /// path.
    pub fn read_metadata(&self) -> CacheMetadata {
        let path = self.metadata_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return CacheMetadata::default(),
        };

        match serde_json::from_str(&content) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::warn!("Discarding corrupt metadata at {}: {}", path.display(), e);
                CacheMetadata::default()
            }
        }
    }

    /// Overwrites the persisted metadata in full
    ///
    /// Best-effort: failures are logged and swallowed, so a read-only disk
    /// costs freshness on the next launch rather than a crash now.
    pub fn write_metadata(&self, metadata: &CacheMetadata) {
        let result = serde_json::to_string_pretty(metadata)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            .and_then(|json| {
                fs::create_dir_all(&self.base_dir)?;
                fs::write(self.metadata_path(), json)
            });

        if let Err(e) = result {
            log::warn!("Failed to persist cache metadata: {}", e);
        }
    }

    /// Downloads each record's image and rewrites its `local_path`
    ///
    /// Records are processed one at a time, in input order. A record with
    /// an empty `remote_url` is skipped entirely; a record whose download
    /// fails is still emitted with `local_path` left pointing at the remote
    /// URL. A file already present for the record's id is reused without
    /// re-downloading. Every emitted record has a non-empty `local_path`.
    pub async fn download_and_cache(&self, images: Vec<ImageRecord>) -> Vec<ImageRecord> {
        let mut cached = Vec::with_capacity(images.len());

        for mut record in images {
            if record.remote_url.is_empty() {
                log::debug!("Skipping '{}': no source URL", record.id);
                continue;
            }

            let path = self.image_path(&record.id);
            if path.exists() {
                record.local_path = path.to_string_lossy().into_owned();
            } else {
                match self.download(&record.remote_url, &path).await {
                    Ok(()) => {
                        record.local_path = path.to_string_lossy().into_owned();
                    }
                    Err(e) => {
                        log::warn!(
                            "Download of '{}' failed, falling back to remote URL: {}",
                            record.id,
                            e
                        );
                        record.local_path = record.remote_url.clone();
                    }
                }
            }

            cached.push(record);
        }

        cached
    }

    /// Fetches one image into a file
    async fn download(&self, url: &str, path: &std::path::Path) -> Result<(), DownloadError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        fs::create_dir_all(self.images_dir())?;
        fs::write(path, &bytes)?;
        Ok(())
    }
}
