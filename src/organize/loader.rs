use crate::{
    error::Result,
    info,
    spotify::CatalogClient,
    types::{LikedTrackEntry, Track},
};

/// Page size requested from [`CatalogClient::list_saved_tracks`].
pub const LIKED_PAGE_SIZE: u32 = 100;

/// Fetches the complete saved-track collection, page by page, until a page
/// comes back empty. Server order is preserved across pages.
///
/// Any failing page aborts the whole load; nothing partial is returned.
pub async fn load_liked<C: CatalogClient + ?Sized>(client: &C) -> Result<Vec<LikedTrackEntry>> {
    let mut entries = Vec::new();
    let mut offset = 0;

    loop {
        let page = client.list_saved_tracks(LIKED_PAGE_SIZE, offset).await?;
        if page.is_empty() {
            break;
        }

        offset += page.len() as u32;
        entries.extend(page);
    }

    info!("Loaded {} liked tracks", entries.len());
    Ok(entries)
}

/// Unwraps the tracks of the listing entries, keeping order.
pub fn tracks_of(entries: Vec<LikedTrackEntry>) -> Vec<Track> {
    entries.into_iter().map(|entry| entry.track).collect()
}
