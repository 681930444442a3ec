//! `cadence chart`
use super::track_line;
use anyhow::{bail, Result};
use cadence_core::{Catalog, CuratedCollection, TrackList};

/// Fetch one curated collection and print it
pub async fn run(catalog: &dyn Catalog, collection: CuratedCollection) -> Result<TrackList> {
    let mut list = catalog.curated(collection).await;
    if !list.success {
        bail!("Failed to load {}", collection.title());
    }
    list.tracks.retain(|t| t.is_playable());

    println!("{} ({} songs)", collection.title(), list.tracks.len());
    for (index, track) in list.tracks.iter().enumerate() {
        println!("{:>4}. {}", index + 1, track_line(track));
    }

    Ok(list)
}

/// Print the available collection keys
pub fn list_collections() {
    for collection in CuratedCollection::ALL {
        println!("{:<14} {}", collection.key(), collection.title());
    }
}
