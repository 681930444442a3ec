//! `cadence search`
use super::track_line;
use anyhow::{bail, Result};
use cadence_core::{Catalog, SearchResults};
use tracing::info;

/// Search songs and playlists and print both lists
pub async fn run(catalog: &dyn Catalog, query: &str, limit: usize) -> Result<SearchResults> {
    let query = query.trim();
    if query.is_empty() {
        bail!("Search query must not be empty");
    }

    let mut results = catalog.search(query, limit).await;
    if !results.success {
        bail!("Search for '{}' failed", query);
    }
    results.tracks.retain(|t| t.is_playable());

    info!(
        query,
        tracks = results.tracks.len(),
        playlists = results.playlists.len(),
        "Search finished"
    );

    println!("Songs ({}):", results.tracks.len());
    for (index, track) in results.tracks.iter().enumerate() {
        println!("{:>4}. {}  [{}]", index + 1, track_line(track), track.id);
    }

    if !results.playlists.is_empty() {
        println!();
        println!("Playlists ({}):", results.playlists.len());
        for playlist in &results.playlists {
            match playlist.song_count {
                Some(count) => println!("      {} ({} songs)  [{}]", playlist.name, count, playlist.id),
                None => println!("      {}  [{}]", playlist.name, playlist.id),
            }
        }
    }

    Ok(results)
}
