//! # Organizing Engine
//!
//! Turns the user's liked tracks into new playlists:
//!
//! ```text
//! load_liked ──▶ strategy ──▶ Partition ──▶ materialize ──▶ PlaylistDescriptor*
//! ```
//!
//! - [`loader`] pages through the saved-track collection
//! - [`strategies`] hold the eight grouping functions
//! - [`materialize`] creates and fills the remote playlists
//! - [`organize`] ties them together behind a strategy selector
//!
//! The engine only talks to a [`CatalogClient`]; it never sees tokens.
//! Runs are sequential and not retried: the first remote failure ends the
//! request and any playlist already created stays on the service.

pub mod batch;
pub mod loader;
pub mod materialize;
pub mod partition;
pub mod strategies;

use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    spotify::CatalogClient,
    types::{PlaylistDescriptor, Track},
    utils,
};

pub use loader::load_liked;
pub use materialize::materialize;
pub use partition::{Group, Partition};
pub use strategies::Grouping;

/// Grouping strategy, selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Artist,
    Genre,
    Decade,
    Album,
    Popularity,
    Frequency,
    TopArtists,
    TopTracks,
}

impl Strategy {
    pub const ALL: [Strategy; 8] = [
        Strategy::Artist,
        Strategy::Genre,
        Strategy::Decade,
        Strategy::Album,
        Strategy::Popularity,
        Strategy::Frequency,
        Strategy::TopArtists,
        Strategy::TopTracks,
    ];

    /// Selector accepted by [`FromStr`] and the `organize` command.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Artist => "artist",
            Strategy::Genre => "genre",
            Strategy::Decade => "decade",
            Strategy::Album => "album",
            Strategy::Popularity => "popularity",
            Strategy::Frequency => "frequency",
            Strategy::TopArtists => "top-artists",
            Strategy::TopTracks => "top-tracks",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Strategy::Artist => "first listed artist",
            Strategy::Genre => "first genre of the first artist",
            Strategy::Decade => "release decade",
            Strategy::Album => "album",
            Strategy::Popularity => "popularity tier",
            Strategy::Frequency => "how many listening windows contain the track",
            Strategy::TopArtists => "artist, restricted to your top 20 artists",
            Strategy::TopTracks => "top tracks per listening window",
        }
    }

    pub async fn group<C: CatalogClient + ?Sized>(
        &self,
        tracks: &[Track],
        client: &C,
    ) -> Result<Grouping> {
        match self {
            Strategy::Artist => strategies::by_artist(tracks, client).await,
            Strategy::Genre => strategies::by_genre(tracks, client).await,
            Strategy::Decade => strategies::by_decade(tracks, client).await,
            Strategy::Album => strategies::by_album(tracks, client).await,
            Strategy::Popularity => strategies::by_popularity(tracks, client).await,
            Strategy::Frequency => strategies::by_frequency(tracks, client).await,
            Strategy::TopArtists => strategies::by_top_artist(tracks, client).await,
            Strategy::TopTracks => strategies::by_top_track(tracks, client).await,
        }
    }

    pub fn playlist_name(&self, key: &str) -> String {
        match self {
            Strategy::Frequency => format!("{} Rotation", utils::capitalize(key)),
            Strategy::TopTracks => format!("Top Tracks: {}", key),
            _ => key.to_string(),
        }
    }

    pub fn playlist_description(&self, key: &str) -> String {
        match self {
            Strategy::Artist => format!("Liked tracks by {}", key),
            Strategy::Genre => format!("Liked tracks tagged {}", key),
            Strategy::Decade => format!("Liked tracks released in the {}", key),
            Strategy::Album => format!("Liked tracks from {}", key),
            Strategy::Popularity => format!("Liked tracks in the {} popularity tier", key),
            Strategy::Frequency => format!("Liked tracks you play with {} frequency", key),
            Strategy::TopArtists => format!("Liked tracks by {}, one of your top artists", key),
            Strategy::TopTracks => format!("Liked tracks in your top tracks of the {}", key),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        Strategy::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::Configuration(format!("unknown strategy '{}'", value)))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of an organize request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(Vec<PlaylistDescriptor>),
    /// The library holds no liked tracks.
    NoTracks,
    /// The strategy left every group empty.
    NoPlaylists,
}

/// Loads the liked tracks, groups them with the named strategy and creates one
/// playlist per non-empty group.
///
/// # Errors
///
/// [`Error::Configuration`] for an unknown strategy name (checked before any
/// remote call), [`Error::Remote`] for any failed catalog call.
pub async fn organize<C: CatalogClient + ?Sized>(strategy_name: &str, client: &C) -> Result<Outcome> {
    let strategy: Strategy = strategy_name.parse()?;

    let tracks = loader::tracks_of(load_liked(client).await?);
    if tracks.is_empty() {
        return Ok(Outcome::NoTracks);
    }

    let partition = match strategy.group(&tracks, client).await? {
        Grouping::NoTracks => return Ok(Outcome::NoTracks),
        Grouping::Groups(partition) => partition,
    };

    if !partition.has_members() {
        return Ok(Outcome::NoPlaylists);
    }

    let user_id = client.get_current_user_id().await?;
    let created = materialize(&user_id, strategy, &partition, client).await?;

    if created.is_empty() {
        Ok(Outcome::NoPlaylists)
    } else {
        Ok(Outcome::Created(created))
    }
}
