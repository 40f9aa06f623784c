pub mod builtin;
pub mod content;
pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{Bio, BlogPost, ContentCatalog, Project, SkillCategory, Skills};
