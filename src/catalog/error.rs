use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml_edit::de::Error),

    #[error("Duplicate post slug: {0}")]
    DuplicateSlug(String),

    #[error("Post has an empty slug: {0}")]
    EmptySlug(String),
}
