use super::{error::CatalogError, types::*};
use std::{collections::HashSet, path::Path};
use tracing::{debug, info};

impl ContentCatalog {
    pub async fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        info!("Loading content catalog from: {:?}", path);
        let contents = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_toml_str(&contents)?;
        info!(
            "Catalog loaded: {} projects, {} posts",
            catalog.projects.len(),
            catalog.posts.len()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let catalog: ContentCatalog = toml_edit::de::from_str(contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Post slugs are the join key for bookmarks, ratings and comments, so they
    /// must be present and unique.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for post in &self.posts {
            if post.slug.trim().is_empty() {
                return Err(CatalogError::EmptySlug(post.title.clone()));
            }
            if !seen.insert(post.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(post.slug.clone()));
            }
        }
        Ok(())
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Union of every post's topics, in order of first appearance.
    pub fn blog_topics(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .flat_map(|post| post.topics.iter())
            .filter(|topic| seen.insert(topic.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn projects_using<'a>(&'a self, tech: &'a str) -> impl Iterator<Item = &'a Project> {
        self.projects.iter().filter(move |project| project.uses(tech))
    }

    /// Other posts ranked by shared topics, then newest first. An unknown slug
    /// yields the newest posts.
    pub fn related_posts(&self, slug: &str, limit: usize) -> Vec<&BlogPost> {
        let current = self.post(slug);

        let mut candidates: Vec<(usize, &BlogPost)> = self
            .posts
            .iter()
            .filter(|post| post.slug != slug)
            .map(|post| (current.map_or(0, |c| c.shared_topics(post)), post))
            .collect();

        // Stable sort keeps catalog order for full ties.
        candidates.sort_by(|(shared_a, a), (shared_b, b)| {
            shared_b.cmp(shared_a).then_with(|| b.date.cmp(&a.date))
        });

        debug!(
            "Found {} related post candidates for {}",
            candidates.len(),
            slug
        );

        candidates
            .into_iter()
            .take(limit)
            .map(|(_, post)| post)
            .collect()
    }
}
