use super::{
    RATINGS_KEY,
    error::PreferencesError,
    persist::{Envelope, load_json, save_json},
    types::{Rating, RatingState},
};
use crate::storage::DynPersistenceProvider;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Star ratings, at most one per post. A new rating replaces the old one.
#[derive(Clone)]
pub struct RatingStore {
    provider: DynPersistenceProvider,
    ratings: Arc<RwLock<Vec<Rating>>>,
}

impl RatingStore {
    pub async fn load(provider: DynPersistenceProvider) -> Self {
        let loaded = load_json::<Envelope<RatingState>>(&provider, RATINGS_KEY)
            .await
            .map(|envelope| envelope.state.ratings)
            .unwrap_or_default();

        // Keep only the latest in-range record for each post.
        let mut ratings: Vec<Rating> = Vec::with_capacity(loaded.len());
        for rating in loaded {
            if !(MIN_RATING..=MAX_RATING).contains(&rating.rating) {
                warn!(
                    "Dropping stored rating {} for {}: out of range",
                    rating.rating, rating.post_id
                );
                continue;
            }
            ratings.retain(|r| r.post_id != rating.post_id);
            ratings.push(rating);
        }

        info!("Loaded {} ratings", ratings.len());

        Self {
            provider,
            ratings: Arc::new(RwLock::new(ratings)),
        }
    }

    pub async fn add_rating(&self, post_id: &str, rating: u8) -> Result<Rating, PreferencesError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(PreferencesError::InvalidRating(rating.to_string()));
        }

        let record = Rating {
            post_id: post_id.to_string(),
            rating,
            timestamp: Utc::now().timestamp_millis(),
        };

        let mut ratings = self.ratings.write().await;
        ratings.retain(|r| r.post_id != post_id);
        ratings.push(record.clone());
        self.persist(&ratings).await;

        debug!("Rated {} with {} stars", post_id, rating);
        Ok(record)
    }

    pub async fn get_rating(&self, post_id: &str) -> Option<u8> {
        self.ratings
            .read()
            .await
            .iter()
            .find(|r| r.post_id == post_id)
            .map(|r| r.rating)
    }

    pub async fn remove_rating(&self, post_id: &str) -> bool {
        let mut ratings = self.ratings.write().await;
        let len_before = ratings.len();
        ratings.retain(|r| r.post_id != post_id);
        if ratings.len() == len_before {
            return false;
        }

        self.persist(&ratings).await;
        true
    }

    pub async fn ratings(&self) -> Vec<Rating> {
        self.ratings.read().await.clone()
    }

    async fn persist(&self, ratings: &[Rating]) {
        let envelope = Envelope::new(RatingState {
            ratings: ratings.to_vec(),
        });
        save_json(&self.provider, RATINGS_KEY, &envelope).await;
    }
}
