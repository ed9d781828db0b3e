use tabled::Table;

use crate::{
    error, info,
    organize::{self, Outcome, Strategy},
    spotify::SpotifyClient,
    success,
    types::{PlaylistTableRow, StrategyTableRow},
    warning,
};

pub async fn organize(strategy: String) {
    let client = match SpotifyClient::connect().await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    // no spinner here, the engine prints its own progress lines
    info!("Organizing liked tracks by {}...", strategy);

    match organize::organize(&strategy, &client).await {
        Ok(Outcome::Created(playlists)) => {
            let rows: Vec<PlaylistTableRow> = playlists.iter().map(PlaylistTableRow::from).collect();
            println!("{}", Table::new(rows));
            success!("Created {} playlists", playlists.len());
        }
        Ok(Outcome::NoTracks) => warning!("No liked tracks found."),
        Ok(Outcome::NoPlaylists) => warning!("No playlists were created."),
        Err(e) => error!("Organizing by {} failed: {}", strategy, e),
    }
}

pub fn strategies() {
    let rows: Vec<StrategyTableRow> = Strategy::ALL
        .iter()
        .map(|s| StrategyTableRow {
            strategy: s.name().to_string(),
            groups_by: s.summary().to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
