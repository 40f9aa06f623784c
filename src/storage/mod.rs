pub mod config;
pub mod error;
pub mod providers;

pub use config::*;
pub use error::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Durable key-value backing for the preference stores.
#[async_trait]
pub trait PersistenceProvider: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
    fn name(&self) -> &str;
}

pub type DynPersistenceProvider = Arc<dyn PersistenceProvider>;

pub async fn create_provider(config: &StorageConfig) -> Result<DynPersistenceProvider, StorageError> {
    match config {
        StorageConfig::Memory => Ok(Arc::new(providers::memory::MemoryProvider::new())),
        StorageConfig::File(file_config) => Ok(Arc::new(
            providers::file::FileProvider::new(&file_config.directory).await?,
        )),
    }
}
