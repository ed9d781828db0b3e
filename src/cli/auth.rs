use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error, info, management::TokenManager, spotify, success, types::PkceToken};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    if let Err(e) = spotify::auth::auth(shared_state).await {
        error!("{}", e);
    }
}

pub async fn logout() {
    match TokenManager::clear().await {
        Ok(true) => success!("Logged out, cached token removed."),
        Ok(false) => info!("No cached token found, nothing to do."),
        Err(e) => error!("Failed to remove cached token: {}", e),
    }
}
