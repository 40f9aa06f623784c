use crate::{Config, catalog::ContentCatalog, storage::StorageConfig};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum StartupCheckError {
    #[error("Failed to create storage directory: {0}")]
    StorageDirectoryCreationFailed(#[from] std::io::Error),

    #[error("Catalog file does not exist: {0}")]
    CatalogFileMissing(String),

    #[error("Catalog file is invalid: {0}")]
    CatalogInvalid(String),
}

pub async fn perform_startup_checks(config: &Config) -> Result<(), Vec<StartupCheckError>> {
    let mut errors = Vec::new();

    info!("Performing startup checks...");

    match &config.storage {
        StorageConfig::File(file_config) => {
            let directory = &file_config.directory;
            if !directory.exists() {
                info!("Storage directory does not exist, creating: {:?}", directory);
                if let Err(e) = tokio::fs::create_dir_all(directory).await {
                    error!("Failed to create storage directory: {}", e);
                    errors.push(StartupCheckError::StorageDirectoryCreationFailed(e));
                } else {
                    info!("Storage directory created successfully");
                }
            } else {
                info!("Storage directory exists: {:?}", directory);
            }
        }
        StorageConfig::Memory => {
            warn!("Using in-memory storage, preferences will not survive a restart");
        }
    }

    if let Some(path) = &config.catalog.path {
        if !path.exists() {
            error!("Catalog file does not exist: {:?}", path);
            errors.push(StartupCheckError::CatalogFileMissing(
                path.display().to_string(),
            ));
        } else {
            match ContentCatalog::load_from_file(path).await {
                Ok(_) => info!("Catalog file is valid: {:?}", path),
                Err(e) => {
                    error!("Catalog file {:?} is invalid: {}", path, e);
                    errors.push(StartupCheckError::CatalogInvalid(e.to_string()));
                }
            }
        }
    } else {
        info!("No catalog file configured, using the built-in catalog");
    }

    if errors.is_empty() {
        info!("All startup checks passed");
        Ok(())
    } else {
        error!("Startup checks failed with {} errors", errors.len());
        Err(errors)
    }
}
