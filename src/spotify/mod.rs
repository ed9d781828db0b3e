//! # Spotify Integration Module
//!
//! This module is the integration layer between likesort and the Spotify Web
//! API. It defines the capability boundary the organizing engine depends on and
//! provides the HTTP implementation of it, together with the OAuth flow that
//! produces the credentials.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! Organizing Engine (generic over CatalogClient)
//!     ↓
//! Spotify Integration Layer
//!     ├── CatalogClient trait (capabilities)
//!     ├── SpotifyClient (reqwest + TokenManager)
//!     └── Authentication (OAuth 2.0 PKCE)
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Catalog
//!
//! [`catalog`] - The [`CatalogClient`] trait: saved tracks, artist metadata,
//! top tracks and artists per listening window, the current user id, playlist
//! creation and track appends. Test code substitutes an in-memory catalog.
//!
//! ### Client
//!
//! [`client`] - [`SpotifyClient`], the [`CatalogClient`] over the Web API:
//! - **Token Handling**: Refreshes the access token before it expires
//! - **Page Stitching**: Serves saved-track pages above the API maximum of 50
//!   with consecutive sub-requests
//! - **Error Mapping**: Non-2xx responses become `Error::Remote` with status and body
//! - **No Retries**: A failed call is reported immediately
//!
//! ### Authentication
//!
//! [`auth`] - OAuth 2.0 Authorization Code flow with PKCE:
//! 1. **Code Verifier Generation**: Random 128 character verifier
//! 2. **Challenge Creation**: SHA256, URL-safe base64 without padding
//! 3. **Authorization Request**: Opens Spotify's consent page in the browser
//! 4. **Local Callback**: Receives the code on the local axum server
//! 5. **Token Exchange**: Trades code + verifier for a token
//! 6. **Token Storage**: Persists the token in the local data directory
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user id
//! - `GET /me/tracks` - Saved tracks, offset pagination
//! - `GET /me/top/tracks`, `GET /me/top/artists` - Listening history per window
//! - `GET /me/playlists` - The user's playlists
//! - `GET /artists/{id}` - Artist metadata and genres
//! - `POST /users/{user_id}/playlists` - Create playlist
//! - `POST /playlists/{playlist_id}/tracks` - Add up to 100 tracks
//! - `POST /api/token` - Token exchange and refresh

pub mod auth;
pub mod catalog;
pub mod client;

pub use catalog::{CatalogClient, MAX_BATCH};
pub use client::SpotifyClient;
