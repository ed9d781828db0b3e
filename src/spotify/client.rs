use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::{
    config,
    error::{Error, Result},
    management::TokenManager,
    organize::batch,
    spotify::catalog::{CatalogClient, MAX_BATCH},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, ArtistRef, CreatePlaylistRequest,
        LikedTrackEntry, Paging, Performer, Playlist, PlaylistDescriptor, TimeRange, Track,
        UserProfile,
    },
    utils,
};

/// Largest page the Web API serves for `/me/tracks` and `/me/playlists`.
const API_PAGE_LIMIT: u32 = 50;

/// [`CatalogClient`] backed by the Spotify Web API.
///
/// Holds the token cache behind an async mutex so an expired access token is
/// refreshed once and shared by subsequent calls.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token_manager: TokenManager) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            tokens: Mutex::new(token_manager),
        }
    }

    /// Builds a client from the cached token and the configured API URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Auth`] when no token has been cached yet.
    pub async fn connect() -> Result<Self> {
        let token_manager = TokenManager::load().await.map_err(|e| {
            Error::Auth(format!(
                "Failed to load token. Please run likesort auth\n Error: {}",
                e
            ))
        })?;

        Ok(Self::new(config::spotify_apiurl(), token_manager))
    }

    /// Every playlist of the current user, following pagination to the end.
    pub async fn list_playlists(&self) -> Result<Vec<Playlist>> {
        let mut playlists = Vec::new();
        let mut offset = 0;

        loop {
            let page: Paging<Playlist> = self
                .get_json(
                    "/me/playlists",
                    &[
                        ("limit", API_PAGE_LIMIT.to_string()),
                        ("offset", offset.to_string()),
                    ],
                )
                .await?;

            let fetched = page.items.len() as u32;
            playlists.extend(page.items);

            if page.next.is_none() || fetched < API_PAGE_LIMIT {
                return Ok(playlists);
            }
            offset += fetched;
        }
    }

    async fn bearer(&self) -> Result<String> {
        self.tokens.lock().await.get_valid_token().await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(format!("{}{}", self.api_url, path))
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(format!("{}{}", self.api_url, path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Remote(format!("{} returned {}: {}", url, status, body)))
}

#[async_trait]
impl CatalogClient for SpotifyClient {
    async fn list_saved_tracks(&self, limit: u32, offset: u32) -> Result<Vec<LikedTrackEntry>> {
        let mut entries = Vec::with_capacity(limit as usize);

        // the endpoint serves at most 50 items, larger pages are stitched together
        for (start, len) in batch::spans(limit, API_PAGE_LIMIT) {
            let page: Paging<LikedTrackEntry> = self
                .get_json(
                    "/me/tracks",
                    &[
                        ("limit", len.to_string()),
                        ("offset", (offset + start).to_string()),
                    ],
                )
                .await?;

            let short = (page.items.len() as u32) < len;
            entries.extend(page.items);
            if short {
                break;
            }
        }

        Ok(entries)
    }

    async fn get_performer(&self, id: &str) -> Result<Performer> {
        self.get_json(&format!("/artists/{}", id), &[]).await
    }

    async fn get_top_tracks(&self, window: TimeRange, limit: u32) -> Result<Vec<Track>> {
        let page: Paging<Track> = self
            .get_json(
                "/me/top/tracks",
                &[
                    ("time_range", window.as_param().to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(page.items)
    }

    async fn get_top_performers(&self, window: TimeRange, limit: u32) -> Result<Vec<ArtistRef>> {
        let page: Paging<ArtistRef> = self
            .get_json(
                "/me/top/artists",
                &[
                    ("time_range", window.as_param().to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(page.items)
    }

    async fn get_current_user_id(&self) -> Result<String> {
        let profile: UserProfile = self.get_json("/me", &[]).await?;
        Ok(profile.id)
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<PlaylistDescriptor> {
        let playlist: Playlist = self
            .post_json(&format!("/users/{}/playlists", user_id), request)
            .await?;
        Ok(playlist.into())
    }

    async fn append_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        if track_ids.len() > MAX_BATCH {
            return Err(Error::Remote(format!(
                "cannot add {} tracks in one request, the limit is {}",
                track_ids.len(),
                MAX_BATCH
            )));
        }

        let request = AddTrackToPlaylistRequest {
            uris: track_ids.iter().map(|id| utils::track_uri(id)).collect(),
        };
        let _: AddTrackToPlaylistResponse = self
            .post_json(&format!("/playlists/{}/tracks", playlist_id), &request)
            .await?;
        Ok(())
    }
}
