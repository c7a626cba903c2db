//! Astrofeed - daily curated astrophotography images
//!
//! Fetches a small daily selection of images from the NASA Image and Video
//! Library, caches them on disk, and prints the current day's selection.
//! Within one calendar day repeated runs are pure cache reads.

use clap::Parser;

use astrofeed::cache::Curator;
use astrofeed::cli::Cli;
use astrofeed::data::{ImageRecord, NasaImagesClient};
use astrofeed::topics::today_topic;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.topic {
        println!("{}", today_topic());
        return Ok(());
    }

    let Some(store) = cli.store() else {
        eprintln!("Could not determine a cache directory; pass --cache-dir <PATH>");
        std::process::exit(1);
    };

    if let Err(e) = store.ensure_initialized() {
        // Reads degrade to defaults and writes are best-effort, so a failed
        // init only costs persistence, not the feed itself.
        log::warn!("Could not initialize cache directory: {}", e);
    }

    let curator = Curator::new(store, NasaImagesClient::new());
    let images = curator.get_curated_images().await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&images)?);
    } else {
        print_feed(&images);
    }

    Ok(())
}

/// Prints the day's selection as plain text
fn print_feed(images: &[ImageRecord]) {
    println!("Topic of the day: {}", today_topic());

    if images.is_empty() {
        println!("No images available (offline and nothing cached yet).");
        return;
    }

    for record in images {
        println!();
        println!("{}", record.title.as_deref().unwrap_or(&record.id));
        if let Some(date) = &record.date {
            println!("  date:         {}", date);
        }
        if let Some(location) = &record.location {
            println!("  location:     {}", location);
        }
        if let Some(photographer) = &record.photographer {
            println!("  photographer: {}", photographer);
        }
        println!("  image:        {}", record.local_path);
    }
}
