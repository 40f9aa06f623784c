use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub post_id: String,
    pub rating: u8,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub name: String,
    pub content: String,
    /// Day granularity, `M/D/YYYY`.
    pub date: String,
    pub post_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub post_id: String,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct BookmarkState {
    #[serde(default)]
    pub bookmarks: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct RatingState {
    #[serde(default)]
    pub ratings: Vec<Rating>,
}
