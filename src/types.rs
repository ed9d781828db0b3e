use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Body of a token endpoint response. The refresh grant may omit
/// `refresh_token`, in which case the previous one stays valid.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Reads an explicit `null` like a missing field. Local files come back
/// with `null` in album and artist fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Performer reference as embedded in tracks and top-artist listings.
/// Local files carry no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Begins with a 4-digit year; precision varies (`1998`, `1998-05`, `1998-05-12`).
    /// Empty when the service sends `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Absent for tracks that are not available on the service (local files).
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album: AlbumRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistRef>,
}

impl Track {
    pub fn first_artist(&self) -> Option<&ArtistRef> {
        self.artists.first()
    }
}

/// Item of the saved tracks listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedTrackEntry {
    #[serde(default)]
    pub added_at: Option<String>,
    pub track: Track,
}

/// Full artist object, the source of genre tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performer {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
}

/// Generic offset-paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Listening window of the top tracks/artists endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRange {
    /// Roughly the last 4 weeks.
    Short,
    /// Roughly the last 6 months.
    Medium,
    /// Several years of history.
    Long,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Short, TimeRange::Medium, TimeRange::Long];

    /// Value of the `time_range` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Short => "Last 4 Weeks",
            TimeRange::Medium => "Last 6 Months",
            TimeRange::Long => "All Time",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

/// Playlist object as returned by the playlist endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub collaborative: bool,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

/// A playlist created by the materializer. Never modified once populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub public: bool,
    pub external_url: Option<String>,
}

impl From<Playlist> for PlaylistDescriptor {
    fn from(playlist: Playlist) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            description: playlist.description.unwrap_or_default(),
            public: playlist.public.unwrap_or(false),
            external_url: playlist.external_urls.spotify,
        }
    }
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub description: String,
    pub link: String,
}

impl From<&PlaylistDescriptor> for PlaylistTableRow {
    fn from(playlist: &PlaylistDescriptor) -> Self {
        Self {
            name: playlist.name.clone(),
            description: playlist.description.clone(),
            link: playlist.external_url.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
pub struct StrategyTableRow {
    pub strategy: String,
    pub groups_by: String,
}
