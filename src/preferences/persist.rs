use crate::storage::DynPersistenceProvider;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

/// Wrapper the site's browser storage used for object-shaped state:
/// `{"state": {...}, "version": 0}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub state: T,
    #[serde(default)]
    pub version: u32,
}

impl<T> Envelope<T> {
    pub fn new(state: T) -> Self {
        Self { state, version: 0 }
    }
}

/// Missing, unreadable, or malformed values all come back as `None`.
pub async fn load_json<T: DeserializeOwned>(
    provider: &DynPersistenceProvider,
    key: &str,
) -> Option<T> {
    let raw = match provider.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No persisted value for {}", key);
            return None;
        }
        Err(e) => {
            warn!("Failed to read {} from {}: {}", key, provider.name(), e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding malformed value for {}: {}", key, e);
            None
        }
    }
}

/// Best effort: failures are logged and the in-memory state stays authoritative.
pub async fn save_json<T: Serialize + ?Sized>(
    provider: &DynPersistenceProvider,
    key: &str,
    value: &T,
) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize {}: {}", key, e);
            return;
        }
    };

    if let Err(e) = provider.set(key, &json).await {
        warn!("Failed to persist {} to {}: {}", key, provider.name(), e);
    }
}
