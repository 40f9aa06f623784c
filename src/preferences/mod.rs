pub mod bookmarks;
pub mod comments;
pub mod error;
pub mod persist;
pub mod ratings;
pub mod types;

pub use bookmarks::BookmarkStore;
pub use comments::CommentStore;
pub use error::PreferencesError;
pub use ratings::RatingStore;
pub use types::{Comment, NewComment, Rating};

use crate::storage::DynPersistenceProvider;
use tracing::info;

pub const BOOKMARKS_KEY: &str = "bookmarks-storage";
pub const RATINGS_KEY: &str = "blog-ratings";
pub const COMMENTS_KEY: &str = "blogComments";

/// The visitor preference stores, loaded once at startup and shared by handle.
#[derive(Clone)]
pub struct Preferences {
    pub bookmarks: BookmarkStore,
    pub ratings: RatingStore,
    pub comments: CommentStore,
}

impl Preferences {
    pub async fn load(provider: DynPersistenceProvider) -> Self {
        info!("Loading preferences from {}", provider.name());

        let bookmarks = BookmarkStore::load(provider.clone()).await;
        let ratings = RatingStore::load(provider.clone()).await;
        let comments = CommentStore::load(provider).await;

        Self {
            bookmarks,
            ratings,
            comments,
        }
    }
}
