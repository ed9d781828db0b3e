use crate::{
    error::Result,
    info,
    organize::{Strategy, batch, partition::Partition},
    spotify::{CatalogClient, MAX_BATCH},
    success,
    types::{CreatePlaylistRequest, PlaylistDescriptor},
};

/// Creates one public playlist per group that has writable tracks and fills
/// it in batches of at most [`MAX_BATCH`] ids, preserving track order.
///
/// Groups are handled in partition order; the returned descriptors follow the
/// same order. Tracks without an id are never written, so a group made only of
/// such tracks is skipped like an empty one. The first failing call aborts;
/// playlists created up to that point stay on the service.
pub async fn materialize<C: CatalogClient + ?Sized>(
    user_id: &str,
    strategy: Strategy,
    partition: &Partition,
    client: &C,
) -> Result<Vec<PlaylistDescriptor>> {
    let mut created = Vec::new();

    for group in partition {
        let track_ids: Vec<String> = group
            .tracks
            .iter()
            .filter_map(|track| track.id.clone())
            .collect();

        if track_ids.is_empty() {
            continue;
        }

        let request = CreatePlaylistRequest {
            name: strategy.playlist_name(&group.key),
            description: strategy.playlist_description(&group.key),
            public: true,
            collaborative: false,
        };

        info!("Create playlist {}", request.name);
        let playlist = client.create_playlist(user_id, &request).await?;

        for chunk in batch::batches(&track_ids, MAX_BATCH) {
            client.append_tracks(&playlist.id, chunk).await?;
        }

        success!("Added {} tracks to {}", track_ids.len(), playlist.name);
        created.push(playlist);
    }

    Ok(created)
}
