#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use likesort::{
    error::{Error, Result},
    spotify::{CatalogClient, MAX_BATCH},
    types::{
        AlbumRef, ArtistRef, CreatePlaylistRequest, LikedTrackEntry, Performer,
        PlaylistDescriptor, TimeRange, Track,
    },
};

/// In-memory catalog that records every call it receives.
#[derive(Default)]
pub struct FakeCatalog {
    pub saved: Vec<LikedTrackEntry>,
    pub performers: HashMap<String, Performer>,
    pub top_tracks: HashMap<TimeRange, Vec<Track>>,
    pub top_performers: Vec<ArtistRef>,
    pub user_id: String,

    /// Offset at which `list_saved_tracks` fails.
    pub fail_saved_at: Option<u32>,
    /// Zero-based index of the append call that fails.
    pub fail_append_at: Option<usize>,

    pub saved_requests: Mutex<Vec<(u32, u32)>>,
    pub performer_lookups: Mutex<Vec<String>>,
    pub top_track_requests: Mutex<Vec<(TimeRange, u32)>>,
    pub top_performer_requests: Mutex<Vec<(TimeRange, u32)>>,
    pub user_requests: Mutex<usize>,
    pub created: Mutex<Vec<(String, CreatePlaylistRequest)>>,
    pub appends: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeCatalog {
    pub fn with_tracks(tracks: Vec<Track>) -> Self {
        Self {
            saved: tracks
                .into_iter()
                .map(|track| LikedTrackEntry {
                    added_at: Some("2024-01-01T00:00:00Z".to_string()),
                    track,
                })
                .collect(),
            user_id: "listener".to_string(),
            ..Default::default()
        }
    }

    pub fn performer(mut self, id: &str, name: &str, genres: &[&str]) -> Self {
        self.performers.insert(
            id.to_string(),
            Performer {
                id: id.to_string(),
                name: name.to_string(),
                genres: genres.iter().map(|g| g.to_string()).collect(),
            },
        );
        self
    }

    pub fn top(mut self, window: TimeRange, ids: &[&str]) -> Self {
        self.top_tracks
            .insert(window, ids.iter().map(|id| track(id, vec![])).collect());
        self
    }

    pub fn created_names(&self) -> Vec<String> {
        self.created
            .lock()
            .unwrap()
            .iter()
            .map(|(_, request)| request.name.clone())
            .collect()
    }

    pub fn append_sizes(&self) -> Vec<usize> {
        self.appends.lock().unwrap().iter().map(|(_, ids)| ids.len()).collect()
    }

    pub fn remote_writes(&self) -> usize {
        self.created.lock().unwrap().len() + self.appends.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn list_saved_tracks(&self, limit: u32, offset: u32) -> Result<Vec<LikedTrackEntry>> {
        self.saved_requests.lock().unwrap().push((limit, offset));
        if self.fail_saved_at == Some(offset) {
            return Err(Error::Remote(format!("saved tracks at offset {} failed", offset)));
        }

        let start = (offset as usize).min(self.saved.len());
        let end = (start + limit as usize).min(self.saved.len());
        Ok(self.saved[start..end].to_vec())
    }

    async fn get_performer(&self, id: &str) -> Result<Performer> {
        self.performer_lookups.lock().unwrap().push(id.to_string());
        self.performers
            .get(id)
            .cloned()
            .ok_or_else(|| Error::Remote(format!("artist {} not found", id)))
    }

    async fn get_top_tracks(&self, window: TimeRange, limit: u32) -> Result<Vec<Track>> {
        self.top_track_requests.lock().unwrap().push((window, limit));
        let mut tracks = self.top_tracks.get(&window).cloned().unwrap_or_default();
        tracks.truncate(limit as usize);
        Ok(tracks)
    }

    async fn get_top_performers(&self, window: TimeRange, limit: u32) -> Result<Vec<ArtistRef>> {
        self.top_performer_requests.lock().unwrap().push((window, limit));
        let mut artists = self.top_performers.clone();
        artists.truncate(limit as usize);
        Ok(artists)
    }

    async fn get_current_user_id(&self) -> Result<String> {
        *self.user_requests.lock().unwrap() += 1;
        Ok(self.user_id.clone())
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<PlaylistDescriptor> {
        let mut created = self.created.lock().unwrap();
        let id = format!("pl-{}", created.len());
        created.push((user_id.to_string(), request.clone()));

        Ok(PlaylistDescriptor {
            id: id.clone(),
            name: request.name.clone(),
            description: request.description.clone(),
            public: request.public,
            external_url: Some(format!("https://open.spotify.com/playlist/{}", id)),
        })
    }

    async fn append_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        let mut appends = self.appends.lock().unwrap();
        if self.fail_append_at == Some(appends.len()) {
            return Err(Error::Remote("rate limited".to_string()));
        }
        if track_ids.len() > MAX_BATCH {
            return Err(Error::Remote("too many tracks".to_string()));
        }

        appends.push((playlist_id.to_string(), track_ids.to_vec()));
        Ok(())
    }
}

pub fn artist(id: &str, name: &str) -> ArtistRef {
    ArtistRef {
        id: Some(id.to_string()),
        name: name.to_string(),
    }
}

/// Track named after its id, from a 2000s album with popularity 50.
pub fn track(id: &str, artists: Vec<ArtistRef>) -> Track {
    Track {
        id: Some(id.to_string()),
        name: format!("Track {}", id),
        popularity: 50,
        album: AlbumRef {
            name: "Album".to_string(),
            release_date: "2001-06-01".to_string(),
        },
        artists,
    }
}

pub fn local_track(name: &str) -> Track {
    Track {
        id: None,
        name: name.to_string(),
        popularity: 0,
        album: AlbumRef::default(),
        artists: vec![ArtistRef {
            id: None,
            name: "Local Artist".to_string(),
        }],
    }
}

pub fn ids(tracks: &[Track]) -> Vec<String> {
    tracks.iter().filter_map(|t| t.id.clone()).collect()
}
