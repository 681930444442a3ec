//! `cadence playlist`
use super::track_line;
use anyhow::{bail, Context, Result};
use cadence_catalog::CatalogClient;
use cadence_core::TrackRef;
use cadence_storage::PlaylistLibrary;
use tracing::info;

/// Print every saved playlist with its song count
pub fn list(library: &PlaylistLibrary) {
    if library.is_empty() {
        println!("No saved playlists");
        return;
    }
    for playlist in library.list_all() {
        println!("{} ({} songs)", playlist.name, playlist.songs.len());
    }
}

/// Print the songs of one saved playlist
pub fn show(library: &PlaylistLibrary, name: &str) -> Result<()> {
    let Some(songs) = library.get(name) else {
        bail!("No playlist named '{}'", name);
    };

    println!("{} ({} songs)", name, songs.len());
    for (index, track) in songs.iter().enumerate() {
        println!("{:>4}. {}", index + 1, track_line(track));
    }
    Ok(())
}

/// Delete a saved playlist; a missing name is reported, not an error
pub fn delete(library: &mut PlaylistLibrary, name: &str) -> Result<bool> {
    let deleted = library.delete(name)?;
    if deleted {
        println!("Deleted '{}'", name);
    } else {
        println!("No playlist named '{}'", name);
    }
    Ok(deleted)
}

/// Fetch a catalog playlist and save its playable songs locally
///
/// Saved under `name`, or the catalog playlist's name when not given.
/// Returns the name it was saved under.
pub async fn import(
    client: &CatalogClient,
    library: &mut PlaylistLibrary,
    playlist_id: &str,
    name: Option<&str>,
) -> Result<String> {
    let details = client
        .fetch_playlist(playlist_id)
        .await
        .with_context(|| format!("Failed to fetch playlist {}", playlist_id))?;
    let Some(details) = details else {
        bail!("Playlist {} not found", playlist_id);
    };

    let songs: Vec<TrackRef> = details
        .songs
        .into_iter()
        .filter(|t| t.is_playable())
        .collect();

    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(details.name.as_str())
        .to_string();

    if !library.save(&name, songs.clone())? {
        bail!("Nothing to import from playlist {}", playlist_id);
    }

    info!(playlist_id, name = %name, songs = songs.len(), "Imported playlist");
    println!("Imported '{}' ({} songs)", name, songs.len());
    Ok(name)
}
