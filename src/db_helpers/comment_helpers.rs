use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::CreateCommentRequest;
use crate::errors::ApiError;
use crate::models::Comment;

use super::{article_exists, parse_identifier, parse_vote_delta};

const COMMENT_COLUMNS: &str = "comment_id, author, article_id, votes, created_at, body";

/// Most recent first; the ordering is part of the contract.
pub async fn list_comments_by_article(
    pool: &SqlitePool,
    raw_article_id: &str,
) -> Result<Vec<Comment>, ApiError> {
    let article_id = parse_identifier(raw_article_id)?;

    let query = format!(
        "SELECT {} FROM comments WHERE article_id = $1 ORDER BY created_at DESC",
        COMMENT_COLUMNS
    );

    let mut tx = pool.begin().await?;
    let comments = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(article_id)
        .fetch_all(&mut tx)
        .await?;
    tx.commit().await?;

    // No comment rows does not mean the article is missing; probe the
    // article itself before reporting 404.
    if comments.is_empty() && !article_exists(pool, article_id).await? {
        return Err(ApiError::NotFound("Article Not Found"));
    }

    Ok(comments)
}

pub async fn insert_comment(
    pool: &SqlitePool,
    raw_article_id: &str,
    request: &CreateCommentRequest,
) -> Result<Comment, ApiError> {
    let (username, body) = match (&request.username, &request.body) {
        (Some(username), Some(body)) if !username.is_empty() && !body.is_empty() => {
            (username, body)
        }
        _ => return Err(ApiError::MissingFields("Bad Request, Missing required fields")),
    };
    let article_id = parse_identifier(raw_article_id)?;

    // Existence check and insert share one transaction so a concurrent
    // delete cannot slip in between them.
    let mut tx = pool.begin().await?;
    let target =
        sqlx::query_scalar::<Sqlite, i64>("SELECT article_id FROM articles WHERE article_id = $1")
            .bind(article_id)
            .fetch_optional(&mut tx)
            .await?;
    if target.is_none() {
        return Err(ApiError::NotFound("Article Not Found"));
    }

    let query = format!(
        "INSERT INTO comments (author, body, article_id) VALUES ($1, $2, $3) RETURNING {}",
        COMMENT_COLUMNS
    );
    let comment = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(username.as_str())
        .bind(body.as_str())
        .bind(article_id)
        .fetch_one(&mut tx)
        .await?;
    tx.commit().await?;

    Ok(comment)
}

pub async fn update_comment_votes(
    pool: &SqlitePool,
    raw_id: &str,
    inc_votes: &Option<serde_json::Value>,
) -> Result<Comment, ApiError> {
    let delta = parse_vote_delta(inc_votes)?;
    let comment_id = parse_identifier(raw_id)?;

    let query = format!(
        "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 RETURNING {}",
        COMMENT_COLUMNS
    );

    let mut tx = pool.begin().await?;
    let comment = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(delta)
        .bind(comment_id)
        .fetch_optional(&mut tx)
        .await?;
    tx.commit().await?;

    comment.ok_or(ApiError::NotFound("Comment Not Found"))
}

pub async fn delete_comment(pool: &SqlitePool, raw_id: &str) -> Result<(), ApiError> {
    let comment_id = parse_identifier(raw_id)?;

    let mut tx = pool.begin().await?;
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
        .bind(comment_id)
        .execute(&mut tx)
        .await?;
    tx.commit().await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Comment Not Found"));
    }
    Ok(())
}
