//! Normalization of catalog responses.
//!
//! The service is loose about shapes: ids may be strings or numbers, artists
//! come either as a comma-separated `primaryArtists` string or as
//! `artists.primary[].name`, durations and play counts may be numeric strings,
//! and older payloads call variant URLs `link` instead of `url`. Everything
//! is normalized here so the rest of the workspace sees strict types.
//!
//! Entries are parsed one by one: a malformed entry is dropped without
//! affecting its siblings.

use cadence_core::{MediaVariant, PlaylistDetails, PlaylistSummary, Track, TrackRef};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// `{success, data}` wrapper every endpoint answers with.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Payload of a successful response, `None` for `success = false`.
    pub fn into_data(self) -> Option<Value> {
        if self.success && !self.data.is_null() {
            Some(self.data)
        } else {
            None
        }
    }
}

/// Parse the `results` array of a search page into playable tracks.
pub(crate) fn tracks_from_results(data: &Value) -> Vec<TrackRef> {
    playable_tracks(data.get("results"))
}

/// Parse the `results` array of a playlist search page.
pub(crate) fn playlists_from_results(data: &Value) -> Vec<PlaylistSummary> {
    data.get("results")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(parse_playlist_summary).collect())
        .unwrap_or_default()
}

/// Parse a playlist-by-id payload.
pub(crate) fn playlist_details(data: &Value) -> Option<PlaylistDetails> {
    let id = text(data.get("id"))?;

    Some(PlaylistDetails {
        id,
        name: display_name(data),
        description: text(data.get("description")).map(|d| unescape_html(&d)),
        song_count: count(data.get("songCount")).and_then(|n| u32::try_from(n).ok()),
        images: variants(data.get("image")),
        songs: playable_tracks(data.get("songs")),
    })
}

/// Parse a song-by-id payload (either a single object or a one-element array).
pub(crate) fn single_track(data: &Value) -> Option<TrackRef> {
    let entry = match data {
        Value::Array(items) => items.first()?,
        other => other,
    };

    parse_track(entry)
        .filter(Track::is_playable)
        .map(Track::into_ref)
}

fn playable_tracks(entries: Option<&Value>) -> Vec<TrackRef> {
    let Some(entries) = entries.and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut dropped = 0usize;
    let tracks: Vec<TrackRef> = entries
        .iter()
        .filter_map(|entry| {
            let track = parse_track(entry).filter(Track::is_playable);
            if track.is_none() {
                dropped += 1;
            }
            track.map(Track::into_ref)
        })
        .collect();

    if dropped > 0 {
        debug!(kept = tracks.len(), dropped, "Dropped unusable catalog entries");
    }

    tracks
}

/// Normalize one track-like entry; `None` if it has no usable id.
pub(crate) fn parse_track(entry: &Value) -> Option<Track> {
    if !entry.is_object() {
        return None;
    }

    let id = text(entry.get("id"))?;

    Some(Track {
        id,
        name: display_name(entry),
        artists: artists(entry),
        album: album(entry.get("album")),
        language: text(entry.get("language")),
        images: variants(entry.get("image")),
        audio: variants(entry.get("downloadUrl")),
        duration: count(entry.get("duration")).and_then(|n| u32::try_from(n).ok()),
        play_count: count(entry.get("playCount")),
    })
}

fn parse_playlist_summary(entry: &Value) -> Option<PlaylistSummary> {
    if !entry.is_object() {
        return None;
    }

    Some(PlaylistSummary {
        id: text(entry.get("id"))?,
        name: display_name(entry),
        images: variants(entry.get("image")),
        song_count: count(entry.get("songCount")).and_then(|n| u32::try_from(n).ok()),
        language: text(entry.get("language")),
        url: text(entry.get("url")),
    })
}

fn display_name(entry: &Value) -> String {
    text(entry.get("name"))
        .or_else(|| text(entry.get("title")))
        .map(|name| unescape_html(&name))
        .unwrap_or_default()
}

fn artists(entry: &Value) -> Vec<String> {
    if let Some(line) = entry.get("primaryArtists").and_then(Value::as_str) {
        let names = split_names(line);
        if !names.is_empty() {
            return names;
        }
    }

    entry
        .get("artists")
        .and_then(|artists| artists.get("primary"))
        .and_then(Value::as_array)
        .map(|primary| {
            primary
                .iter()
                .filter_map(|artist| text(artist.get("name")))
                .map(|name| unescape_html(&name))
                .collect()
        })
        .unwrap_or_default()
}

fn split_names(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(unescape_html)
        .collect()
}

fn album(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Object(_) => text(value?.get("name")),
        other => text(Some(other)),
    }
    .map(|name| unescape_html(&name))
}

/// Variant list: array of `{quality, url|link}` objects, or a bare URL string.
fn variants(value: Option<&Value>) -> Vec<MediaVariant> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let url = text(item.get("url")).or_else(|| text(item.get("link")))?;
                let quality = text(item.get("quality")).unwrap_or_default();
                Some(MediaVariant::new(quality, url))
            })
            .collect(),
        Some(Value::String(url)) if !url.trim().is_empty() => {
            vec![MediaVariant::new("", url.trim())]
        }
        _ => Vec::new(),
    }
}

/// Non-empty string, accepting numbers for id-like fields.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-negative integer from a number or a numeric string.
fn count(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// The service HTML-escapes names ("Tum Hi Ho &quot;Aashiqui&quot;").
fn unescape_html(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    input
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
