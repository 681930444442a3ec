//! Subcommand implementations

pub mod chart;
pub mod play;
pub mod playlist;
pub mod search;

use cadence_core::Track;

/// One-line description of a track: `Name - Artists (m:ss)`
pub fn track_line(track: &Track) -> String {
    let mut line = track.name.clone();

    let artists = track.artist_line();
    if !artists.is_empty() {
        line.push_str(" - ");
        line.push_str(&artists);
    }
    if let Some(seconds) = track.duration {
        line.push_str(&format!(" ({})", format_duration(seconds)));
    }
    line
}

/// Format seconds as `m:ss`
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
