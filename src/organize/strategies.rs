//! Grouping strategies.
//!
//! Each strategy maps the liked tracks (plus whatever auxiliary signal it
//! fetches on its own) to a [`Partition`]. An empty input never produces a
//! partition; it yields [`Grouping::NoTracks`] so callers stop before
//! materializing anything.

use std::collections::{HashMap, HashSet};

use crate::{
    error::Result,
    organize::partition::Partition,
    spotify::CatalogClient,
    types::{TimeRange, Track},
    utils,
};

pub const MISCELLANEOUS: &str = "Miscellaneous";

/// Entries fetched per listening window for the frequency and top-track strategies.
pub const TOP_TRACKS_LIMIT: u32 = 50;
/// Size of the top-artist set used by [`by_top_artist`].
pub const TOP_PERFORMERS_LIMIT: u32 = 20;

#[derive(Debug, Clone)]
pub enum Grouping {
    NoTracks,
    Groups(Partition),
}

impl Grouping {
    pub fn partition(&self) -> Option<&Partition> {
        match self {
            Grouping::NoTracks => None,
            Grouping::Groups(partition) => Some(partition),
        }
    }
}

/// Keyed by the first listed artist's name with punctuation stripped, so
/// names differing only in punctuation share a group.
pub async fn by_artist<C: CatalogClient + ?Sized>(tracks: &[Track], _client: &C) -> Result<Grouping> {
    Ok(group_by(tracks, |track| {
        let name = track.first_artist().map(|a| a.name.as_str()).unwrap_or_default();
        Some(utils::sanitize_key(name))
    }))
}

/// Keyed by the first genre of the primary artist. Artist metadata is looked
/// up once per distinct artist id for the duration of the call.
pub async fn by_genre<C: CatalogClient + ?Sized>(tracks: &[Track], client: &C) -> Result<Grouping> {
    if tracks.is_empty() {
        return Ok(Grouping::NoTracks);
    }

    let mut genres: HashMap<String, Option<String>> = HashMap::new();
    let mut partition = Partition::new();

    for track in tracks {
        let artist_id = track.first_artist().and_then(|a| a.id.as_deref());

        let genre = match artist_id {
            Some(id) => {
                if !genres.contains_key(id) {
                    let performer = client.get_performer(id).await?;
                    genres.insert(id.to_string(), performer.genres.into_iter().next());
                }
                genres.get(id).cloned().flatten()
            }
            None => None,
        };

        partition.push(genre.unwrap_or_else(|| MISCELLANEOUS.to_string()), track.clone());
    }

    Ok(Grouping::Groups(partition))
}

pub async fn by_decade<C: CatalogClient + ?Sized>(tracks: &[Track], _client: &C) -> Result<Grouping> {
    Ok(group_by(tracks, |track| {
        Some(utils::decade_key(&track.album.release_date))
    }))
}

/// Tracks without an album name end up under the empty key.
pub async fn by_album<C: CatalogClient + ?Sized>(tracks: &[Track], _client: &C) -> Result<Grouping> {
    Ok(group_by(tracks, |track| Some(track.album.name.clone())))
}

pub async fn by_popularity<C: CatalogClient + ?Sized>(tracks: &[Track], _client: &C) -> Result<Grouping> {
    Ok(group_by(tracks, |track| {
        Some(utils::popularity_tier(track.popularity).to_string())
    }))
}

/// Scores each track by how many of the three top-track windows contain it.
/// Tracks found in none of them are left out.
pub async fn by_frequency<C: CatalogClient + ?Sized>(tracks: &[Track], client: &C) -> Result<Grouping> {
    if tracks.is_empty() {
        return Ok(Grouping::NoTracks);
    }

    let mut windows: Vec<HashSet<String>> = Vec::with_capacity(TimeRange::ALL.len());
    for window in TimeRange::ALL {
        let top = client.get_top_tracks(window, TOP_TRACKS_LIMIT).await?;
        windows.push(top.into_iter().filter_map(|t| t.id).collect());
    }

    let mut partition = Partition::with_keys([
        utils::FREQUENCY_LOW,
        utils::FREQUENCY_MEDIUM,
        utils::FREQUENCY_HIGH,
    ]);

    for track in tracks {
        let Some(id) = track.id.as_deref() else {
            continue;
        };

        let score = windows.iter().filter(|set| set.contains(id)).count();
        if let Some(tier) = utils::frequency_tier(score) {
            partition.push(tier, track.clone());
        }
    }

    Ok(Grouping::Groups(partition))
}

/// Keeps tracks with at least one artist among the user's all-time top 20.
///
/// The group is named after the first listed artist even when a co-artist is
/// the one in the top set. Changing this would change user-visible grouping.
pub async fn by_top_artist<C: CatalogClient + ?Sized>(tracks: &[Track], client: &C) -> Result<Grouping> {
    if tracks.is_empty() {
        return Ok(Grouping::NoTracks);
    }

    let top: HashSet<String> = client
        .get_top_performers(TimeRange::Long, TOP_PERFORMERS_LIMIT)
        .await?
        .into_iter()
        .filter_map(|artist| artist.id)
        .collect();

    Ok(group_by(tracks, |track| {
        let matches = track
            .artists
            .iter()
            .filter_map(|a| a.id.as_deref())
            .any(|id| top.contains(id));

        if matches {
            track.first_artist().map(|a| a.name.clone())
        } else {
            None
        }
    }))
}

/// One group per listening window holding the liked tracks found in that
/// window's top 50. A track can appear in several windows.
pub async fn by_top_track<C: CatalogClient + ?Sized>(tracks: &[Track], client: &C) -> Result<Grouping> {
    if tracks.is_empty() {
        return Ok(Grouping::NoTracks);
    }

    let mut liked: HashMap<&str, &Track> = HashMap::new();
    for track in tracks {
        if let Some(id) = track.id.as_deref() {
            liked.entry(id).or_insert(track);
        }
    }

    let mut partition = Partition::with_keys(TimeRange::ALL.iter().map(|w| w.label()));

    for window in TimeRange::ALL {
        let top = client.get_top_tracks(window, TOP_TRACKS_LIMIT).await?;
        for candidate in top {
            let hit = candidate.id.as_deref().and_then(|id| liked.get(id));
            if let Some(&track) = hit {
                partition.push(window.label(), track.clone());
            }
        }
    }

    Ok(Grouping::Groups(partition))
}

/// Single pass in input order; `None` from `key_of` drops the track.
fn group_by<F>(tracks: &[Track], mut key_of: F) -> Grouping
where
    F: FnMut(&Track) -> Option<String>,
{
    if tracks.is_empty() {
        return Grouping::NoTracks;
    }

    let mut partition = Partition::new();
    for track in tracks {
        if let Some(key) = key_of(track) {
            partition.push(key, track.clone());
        }
    }

    Grouping::Groups(partition)
}
