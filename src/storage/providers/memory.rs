use crate::storage::{PersistenceProvider, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Keeps everything in process memory. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryProvider {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceProvider for MemoryProvider {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!("MEMORY STORAGE - set {} ({} bytes)", key, value.len());
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.values.write().await.remove(key);
        Ok(())
    }

    fn name(&self) -> &str {
        "In-Memory Storage"
    }
}
