use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub const MAINSTREAM_HITS: &str = "Mainstream Hits";
pub const SLEEPER_PICKS: &str = "Sleeper Picks";
pub const GATEKEEPING: &str = "Gatekeeping";
pub const WHAT_IS_THIS: &str = "What is this?";

pub const FREQUENCY_LOW: &str = "low";
pub const FREQUENCY_MEDIUM: &str = "medium";
pub const FREQUENCY_HIGH: &str = "high";

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Strips every character that is not a letter, a digit or whitespace.
pub fn sanitize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Tier label for a popularity value. Each range is closed at its lower end.
pub fn popularity_tier(popularity: u32) -> &'static str {
    match popularity {
        p if p >= 80 => MAINSTREAM_HITS,
        p if p >= 50 => SLEEPER_PICKS,
        p if p >= 20 => GATEKEEPING,
        _ => WHAT_IS_THIS,
    }
}

/// Tier label for the number of listening windows a track was found in.
/// A score of zero has no tier.
pub fn frequency_tier(score: usize) -> Option<&'static str> {
    match score {
        1 => Some(FREQUENCY_LOW),
        2 => Some(FREQUENCY_MEDIUM),
        3 => Some(FREQUENCY_HIGH),
        _ => None,
    }
}

/// `"1994-03-01"` becomes `"1990s"`. Release dates shorter than three
/// characters are not special-cased: whatever prefix exists is used.
pub fn decade_key(release_date: &str) -> String {
    let prefix: String = release_date.chars().take(3).collect();
    format!("{}0s", prefix)
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Spotify track URI for a bare track id.
pub fn track_uri(id: &str) -> String {
    if id.starts_with("spotify:track:") {
        id.to_string()
    } else {
        format!("spotify:track:{}", id)
    }
}
