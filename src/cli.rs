//! Command-line interface parsing for astrofeed
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --cache-dir override that points the image store at an explicit base
//! directory instead of the platform cache location.

use std::path::PathBuf;

use clap::Parser;

use crate::cache::ImageStore;

/// Astrofeed - a daily curated astrophotography feed
#[derive(Parser, Debug)]
#[command(name = "astrofeed")]
#[command(about = "Show today's curated astrophotography images")]
#[command(version)]
pub struct Cli {
    /// Base directory for the image cache (defaults to the platform cache
    /// directory, e.g. ~/.cache/astrofeed on Linux)
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Print today's search topic and exit
    #[arg(long)]
    pub topic: bool,

    /// Emit the curated records as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Builds the image store selected by the arguments
    ///
    /// Returns `None` only when no --cache-dir was given and the platform
    /// cache directory cannot be determined.
    pub fn store(&self) -> Option<ImageStore> {
        match &self.cache_dir {
            Some(dir) => Some(ImageStore::with_dir(dir.clone())),
            None => ImageStore::new(),
        }
    }
}
