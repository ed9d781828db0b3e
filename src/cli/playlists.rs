use tabled::Table;

use super::spinner;
use crate::{
    error, info,
    spotify::SpotifyClient,
    types::{PlaylistDescriptor, PlaylistTableRow},
};

/// Lists every playlist of the current user with its link.
pub async fn playlists() {
    let client = match SpotifyClient::connect().await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let pb = spinner("Fetching playlists...");
    let fetched = client.list_playlists().await;
    pb.finish_and_clear();

    let playlists = match fetched {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };

    if playlists.is_empty() {
        info!("You have no playlists yet.");
        return;
    }

    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(PlaylistDescriptor::from)
        .map(|p| PlaylistTableRow::from(&p))
        .collect();
    println!("{}", Table::new(rows));
}
