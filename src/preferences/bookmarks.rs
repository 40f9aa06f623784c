use super::{
    BOOKMARKS_KEY,
    persist::{Envelope, load_json, save_json},
    types::BookmarkState,
};
use crate::storage::DynPersistenceProvider;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Post slugs the visitor has bookmarked, in the order they were added.
#[derive(Clone)]
pub struct BookmarkStore {
    provider: DynPersistenceProvider,
    bookmarks: Arc<RwLock<Vec<String>>>,
}

impl BookmarkStore {
    pub async fn load(provider: DynPersistenceProvider) -> Self {
        let mut bookmarks = load_json::<Envelope<BookmarkState>>(&provider, BOOKMARKS_KEY)
            .await
            .map(|envelope| envelope.state.bookmarks)
            .unwrap_or_default();

        // Older saved state may repeat a slug.
        let mut seen = std::collections::HashSet::new();
        bookmarks.retain(|slug| seen.insert(slug.clone()));

        info!("Loaded {} bookmarks", bookmarks.len());

        Self {
            provider,
            bookmarks: Arc::new(RwLock::new(bookmarks)),
        }
    }

    /// Returns `false` when the slug was already bookmarked.
    pub async fn add(&self, slug: &str) -> bool {
        let mut bookmarks = self.bookmarks.write().await;
        if bookmarks.iter().any(|b| b == slug) {
            return false;
        }

        bookmarks.push(slug.to_string());
        self.persist(&bookmarks).await;
        debug!("Bookmarked {}", slug);
        true
    }

    pub async fn remove(&self, slug: &str) -> bool {
        let mut bookmarks = self.bookmarks.write().await;
        let len_before = bookmarks.len();
        bookmarks.retain(|b| b != slug);
        if bookmarks.len() == len_before {
            return false;
        }

        self.persist(&bookmarks).await;
        debug!("Removed bookmark {}", slug);
        true
    }

    /// Flips the bookmark and returns whether the slug is now bookmarked.
    pub async fn toggle(&self, slug: &str) -> bool {
        let mut bookmarks = self.bookmarks.write().await;
        let bookmarked = if let Some(index) = bookmarks.iter().position(|b| b == slug) {
            bookmarks.remove(index);
            false
        } else {
            bookmarks.push(slug.to_string());
            true
        };

        self.persist(&bookmarks).await;
        bookmarked
    }

    pub async fn is_bookmarked(&self, slug: &str) -> bool {
        self.bookmarks.read().await.iter().any(|b| b == slug)
    }

    pub async fn bookmarks(&self) -> Vec<String> {
        self.bookmarks.read().await.clone()
    }

    async fn persist(&self, bookmarks: &[String]) {
        let envelope = Envelope::new(BookmarkState {
            bookmarks: bookmarks.to_vec(),
        });
        save_json(&self.provider, BOOKMARKS_KEY, &envelope).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::providers::memory::MemoryProvider;

    async fn store() -> BookmarkStore {
        BookmarkStore::load(Arc::new(MemoryProvider::new())).await
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let store = store().await;
        assert!(store.add("ai-chat-assistant").await);
        assert!(!store.add("ai-chat-assistant").await);
        assert_eq!(store.bookmarks().await, vec!["ai-chat-assistant"]);
    }

    #[tokio::test]
    async fn test_add_then_remove_leaves_empty() {
        let store = store().await;
        store.add("ai-chat-assistant").await;
        assert!(store.remove("ai-chat-assistant").await);
        assert!(store.bookmarks().await.is_empty());
        assert!(!store.remove("ai-chat-assistant").await);
    }

    #[tokio::test]
    async fn test_membership_and_toggle() {
        let store = store().await;
        assert!(!store.is_bookmarked("a").await);

        assert!(store.toggle("a").await);
        assert!(store.is_bookmarked("a").await);

        assert!(!store.toggle("a").await);
        assert!(!store.is_bookmarked("a").await);
    }

    #[tokio::test]
    async fn test_keeps_insertion_order() {
        let store = store().await;
        for slug in ["c", "a", "b"] {
            store.add(slug).await;
        }
        assert_eq!(store.bookmarks().await, vec!["c", "a", "b"]);
    }
}
