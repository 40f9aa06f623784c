use crate::{
    AppState,
    catalog::BlogPost,
    chat::{GREETING, SUGGESTED_PROMPTS, Topic},
    preferences::{Comment, NewComment, PreferencesError, Rating},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const RELATED_POSTS_LIMIT: usize = 3;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    response: String,
    topic: Option<Topic>,
}

#[derive(Serialize)]
pub struct PromptsResponse {
    greeting: &'static str,
    prompts: [&'static str; 5],
}

#[derive(Serialize)]
pub struct BookmarksResponse {
    bookmarks: Vec<String>,
}

#[derive(Serialize)]
pub struct BookmarkResponse {
    slug: String,
    bookmarked: bool,
}

#[derive(Deserialize)]
pub struct RatingRequest {
    /// Any JSON number, so negative, fractional and oversized values are
    /// reported as invalid ratings rather than as body rejections.
    pub rating: serde_json::Number,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingLookupResponse {
    post_id: String,
    rating: Option<u8>,
}

#[derive(Deserialize)]
pub struct CommentRequest {
    pub name: String,
    pub content: String,
}

pub async fn chat_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Response {
    if payload.message.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Message must not be empty").into_response();
    }

    let delay = app_state.config.chat.typing_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let generator = &app_state.generator;
    let topic = generator.classify(&payload.message);
    let response = generator.generate_response(&payload.message);
    tracing::info!(topic = ?topic, "Answered chat message");

    Json(ChatResponse { response, topic }).into_response()
}

pub async fn chat_prompts_handler() -> Json<PromptsResponse> {
    Json(PromptsResponse {
        greeting: GREETING,
        prompts: SUGGESTED_PROMPTS,
    })
}

pub async fn posts_handler(State(app_state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(app_state.catalog.posts.clone())
}

pub async fn related_posts_handler(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Response {
    if app_state.catalog.post(&slug).is_none() {
        return (StatusCode::NOT_FOUND, "Post not found").into_response();
    }

    let related: Vec<BlogPost> = app_state
        .catalog
        .related_posts(&slug, RELATED_POSTS_LIMIT)
        .into_iter()
        .cloned()
        .collect();
    Json(related).into_response()
}

pub async fn list_bookmarks_handler(State(app_state): State<AppState>) -> Json<BookmarksResponse> {
    Json(BookmarksResponse {
        bookmarks: app_state.preferences.bookmarks.bookmarks().await,
    })
}

/// Bookmarked posts in catalog order. Slugs that match no post are skipped.
pub async fn bookmarked_posts_handler(State(app_state): State<AppState>) -> Json<Vec<BlogPost>> {
    let bookmarks = app_state.preferences.bookmarks.bookmarks().await;
    let posts = app_state
        .catalog
        .posts
        .iter()
        .filter(|post| bookmarks.contains(&post.slug))
        .cloned()
        .collect();
    Json(posts)
}

pub async fn add_bookmark_handler(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<BookmarkResponse> {
    app_state.preferences.bookmarks.add(&slug).await;
    Json(BookmarkResponse {
        slug,
        bookmarked: true,
    })
}

pub async fn remove_bookmark_handler(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<BookmarkResponse> {
    app_state.preferences.bookmarks.remove(&slug).await;
    Json(BookmarkResponse {
        slug,
        bookmarked: false,
    })
}

pub async fn get_rating_handler(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<RatingLookupResponse> {
    let rating = app_state.preferences.ratings.get_rating(&slug).await;
    Json(RatingLookupResponse {
        post_id: slug,
        rating,
    })
}

pub async fn add_rating_handler(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<RatingRequest>,
) -> Result<Json<Rating>, PreferencesError> {
    let value = payload
        .rating
        .as_u64()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| PreferencesError::InvalidRating(payload.rating.to_string()))?;
    let rating = app_state
        .preferences
        .ratings
        .add_rating(&slug, value)
        .await?;
    Ok(Json(rating))
}

pub async fn list_comments_handler(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<Vec<Comment>> {
    Json(app_state.preferences.comments.comments_for(&slug).await)
}

pub async fn add_comment_handler(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<CommentRequest>,
) -> Result<impl IntoResponse, PreferencesError> {
    let comment = app_state
        .preferences
        .comments
        .add_comment(NewComment {
            post_id: slug,
            name: payload.name,
            content: payload.content,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn delete_comment_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, PreferencesError> {
    if app_state.preferences.comments.delete(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(PreferencesError::CommentNotFound(id))
    }
}
