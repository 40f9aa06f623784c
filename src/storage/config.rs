use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum StorageConfig {
    Memory,
    File(FileStorageConfig),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileStorageConfig {
    pub directory: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig::File(FileStorageConfig {
            directory: PathBuf::from("data"),
        })
    }
}
