//! HTTP endpoints of the local server started during `likesort auth`.
//!
//! - [`callback`] completes the PKCE flow by exchanging the authorization code
//!   Spotify redirects back with.
//! - [`health`] reports status and version.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
