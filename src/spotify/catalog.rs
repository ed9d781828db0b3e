use async_trait::async_trait;

use crate::{
    error::Result,
    types::{ArtistRef, CreatePlaylistRequest, LikedTrackEntry, Performer, PlaylistDescriptor, TimeRange, Track},
};

/// Largest number of track ids accepted by a single [`CatalogClient::append_tracks`] call.
pub const MAX_BATCH: usize = 100;

/// Capabilities of the music catalog consumed by the organizing engine.
///
/// Implementations must already be authorized; the engine performs no token
/// handling. Every failure is reported as [`crate::error::Error::Remote`].
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// One page of the user's saved tracks, in the order the service returns them.
    /// An empty page marks the end of the collection.
    async fn list_saved_tracks(&self, limit: u32, offset: u32) -> Result<Vec<LikedTrackEntry>>;

    async fn get_performer(&self, id: &str) -> Result<Performer>;

    async fn get_top_tracks(&self, window: TimeRange, limit: u32) -> Result<Vec<Track>>;

    async fn get_top_performers(&self, window: TimeRange, limit: u32) -> Result<Vec<ArtistRef>>;

    async fn get_current_user_id(&self) -> Result<String>;

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<PlaylistDescriptor>;

    /// Appends tracks to the end of a playlist. At most [`MAX_BATCH`] ids per call.
    async fn append_tracks(&self, playlist_id: &str, track_ids: &[String]) -> Result<()>;
}
