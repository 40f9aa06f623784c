use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(String),

    #[error("Field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),
}

impl IntoResponse for PreferencesError {
    fn into_response(self) -> Response {
        let status = match self {
            PreferencesError::InvalidRating(_) | PreferencesError::EmptyField(_) => {
                StatusCode::BAD_REQUEST
            }
            PreferencesError::CommentNotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}
