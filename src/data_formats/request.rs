use serde::{Deserialize, Serialize};

// ----------------- Article Requests -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct ArticleListQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CreateArticleRequest {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub article_img_url: Option<String>,
}

/// `inc_votes` is kept as a raw JSON value so that a numeric string like
/// "10" can be rejected as a bad delta rather than silently coerced.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct VotePatchRequest {
    pub inc_votes: Option<serde_json::Value>,
}

// ----------------- Comment Requests -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

// ----------------- User Requests -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
