use super::{
    COMMENTS_KEY,
    error::PreferencesError,
    persist::{load_json, save_json},
    types::{Comment, NewComment},
};
use crate::storage::DynPersistenceProvider;
use chrono::{Local, NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

const DATE_FORMAT: &str = "%-m/%-d/%Y";

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%m/%d/%Y").ok()
}

/// Every post's comments in one flat list, newest first.
#[derive(Clone)]
pub struct CommentStore {
    provider: DynPersistenceProvider,
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl CommentStore {
    pub async fn load(provider: DynPersistenceProvider) -> Self {
        let comments: Vec<Comment> = load_json(&provider, COMMENTS_KEY)
            .await
            .unwrap_or_default();

        info!("Loaded {} comments", comments.len());

        Self {
            provider,
            comments: Arc::new(RwLock::new(comments)),
        }
    }

    pub async fn add_comment(&self, new_comment: NewComment) -> Result<Comment, PreferencesError> {
        if new_comment.name.trim().is_empty() {
            return Err(PreferencesError::EmptyField("name"));
        }
        if new_comment.content.trim().is_empty() {
            return Err(PreferencesError::EmptyField("content"));
        }

        let mut comments = self.comments.write().await;

        let mut id = Utc::now().timestamp_millis();
        while comments.iter().any(|c| c.id == id.to_string()) {
            id += 1;
        }

        let comment = Comment {
            id: id.to_string(),
            name: new_comment.name,
            content: new_comment.content,
            date: Local::now().format(DATE_FORMAT).to_string(),
            post_id: new_comment.post_id,
        };

        // Same-day comments keep insertion order, newest first. Unparseable
        // dates sink to the end.
        comments.insert(0, comment.clone());
        comments.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));

        self.persist(&comments).await;
        debug!("Added comment {} on {}", comment.id, comment.post_id);
        Ok(comment)
    }

    pub async fn comments_for(&self, post_id: &str) -> Vec<Comment> {
        self.comments
            .read()
            .await
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }

    /// Removes the comment with this id, wherever it was posted.
    pub async fn delete(&self, id: &str) -> bool {
        let mut comments = self.comments.write().await;
        let Some(index) = comments.iter().position(|c| c.id == id) else {
            return false;
        };

        comments.remove(index);
        self.persist(&comments).await;
        debug!("Deleted comment {}", id);
        true
    }

    pub async fn comments(&self) -> Vec<Comment> {
        self.comments.read().await.clone()
    }

    async fn persist(&self, comments: &[Comment]) {
        save_json(&self.provider, COMMENTS_KEY, comments).await;
    }
}
