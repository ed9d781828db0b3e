//! # CLI Module
//!
//! User-facing commands of likesort. Each command builds what it needs
//! (token cache, Spotify client), delegates to the library and turns the
//! result into terminal output: tables for data, the status macros for
//! progress, and `error!` (print and exit) for failures.
//!
//! ## Commands
//!
//! - [`auth`] - Spotify OAuth flow with PKCE, caches the token
//! - [`logout`] - Removes the cached token
//! - [`organize`] - Sorts liked tracks into playlists with a named strategy
//! - [`strategies`] - Lists the available strategies
//! - [`playlists`] - Lists the user's playlists with their links
//!
//! ## Usage
//!
//! ```bash
//! likesort auth
//! likesort strategies
//! likesort organize decade
//! likesort playlists
//! ```

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

mod auth;
mod organize;
mod playlists;

pub use auth::auth;
pub use auth::logout;
pub use organize::organize;
pub use organize::strategies;
pub use playlists::playlists;

/// Ticking spinner for a quiet remote call. Callers finish it before
/// printing anything, the status macros would be drawn over otherwise.
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
