use sqlx::{Sqlite, SqlitePool};

use crate::errors::ApiError;

mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

/// Parses a raw path segment into a surrogate key. Malformed input is
/// rejected here and never reaches a statement.
pub(crate) fn parse_identifier(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidIdentifier)
}

/// A vote delta must be a semantic integer; a numeric string does not count.
pub(crate) fn parse_vote_delta(inc_votes: &Option<serde_json::Value>) -> Result<i64, ApiError> {
    inc_votes
        .as_ref()
        .and_then(|value| value.as_i64())
        .ok_or(ApiError::InvalidVoteDelta)
}

// ----------------- Existence Probes -----------------

async fn article_exists(pool: &SqlitePool, article_id: i64) -> Result<bool, ApiError> {
    let row = sqlx::query_scalar::<Sqlite, i64>("SELECT 1 FROM articles WHERE article_id = $1")
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

async fn topic_exists(pool: &SqlitePool, slug: &str) -> Result<bool, ApiError> {
    let row = sqlx::query_scalar::<Sqlite, i64>("SELECT 1 FROM topics WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

async fn user_exists(pool: &SqlitePool, username: &str) -> Result<bool, ApiError> {
    let row = sqlx::query_scalar::<Sqlite, i64>("SELECT 1 FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
