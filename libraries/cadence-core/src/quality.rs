//! Media variant quality selection
//!
//! The catalog reports every asset as a list of quality-tagged URLs
//! (`"12kbps"`, `"96kbps"`, `"320kbps"` for audio, `"50x50"`, `"500x500"` for
//! artwork). Selection is deterministic:
//!
//! 1. A variant whose label equals one of [`PREFERRED_QUALITIES`] wins outright
//!    (first match in input order).
//! 2. Otherwise variants are ranked by the integer prefix of their label,
//!    highest first. Labels without a numeric prefix rank as 0. Ties keep
//!    input order.
//! 3. An empty list yields `""`.

use crate::types::MediaVariant;

/// Top standard tiers: highest audio bitrate and largest artwork size
pub const PREFERRED_QUALITIES: [&str; 2] = ["320kbps", "500x500"];

/// Pick the URL of the best variant, or `""` when there is none
pub fn select_best_variant(variants: &[MediaVariant]) -> &str {
    if let Some(preferred) = variants
        .iter()
        .find(|v| PREFERRED_QUALITIES.contains(&v.quality.as_str()))
    {
        return &preferred.url;
    }

    // max_by_key returns the last maximum; fold keeps the first one
    variants
        .iter()
        .fold(None::<(&MediaVariant, i64)>, |best, variant| {
            let rank = quality_rank(&variant.quality);
            match best {
                Some((_, best_rank)) if best_rank >= rank => best,
                _ => Some((variant, rank)),
            }
        })
        .map_or("", |(variant, _)| variant.url.as_str())
}

/// Integer prefix of a quality label
///
/// Leading whitespace is skipped and an optional sign is honored, so
/// `"320kbps"` ranks 320, `"500x500"` ranks 500 and `"lossless"` ranks 0.
pub fn quality_rank(label: &str) -> i64 {
    let trimmed = label.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end]
        .parse::<i64>()
        .map(|value| sign * value)
        .unwrap_or(0)
}
