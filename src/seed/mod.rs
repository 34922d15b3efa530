//! One-shot rebuild-and-load pipeline: drops and recreates the four entity
//! tables in dependency order, then bulk-inserts the fixture collections.
//! Any stage failure is fatal; the remedy is a full re-run.

pub mod data;

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use sqlx::{Row, SqlitePool};

use crate::authentication::hash_password;
use data::SeedData;

pub async fn rebuild(pool: &SqlitePool, data: &SeedData) -> Result<()> {
    drop_tables(pool).await?;
    create_tables(pool).await?;
    insert_topics(pool, data).await?;
    insert_users(pool, data).await?;
    let article_ids_by_title = insert_articles(pool, data).await?;
    insert_comments(pool, data, &article_ids_by_title).await?;
    Ok(())
}

async fn drop_tables(pool: &SqlitePool) -> Result<()> {
    // Children before parents.
    for table in ["comments", "articles", "topics", "users"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await
            .with_context(|| format!("Failed to drop {}", table))?;
    }
    Ok(())
}

async fn create_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE topics (
            slug        TEXT PRIMARY KEY,
            description TEXT NOT NULL,
            img_url     TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create topics table")?;

    sqlx::query(
        r#"
        CREATE TABLE users (
            username   TEXT PRIMARY KEY,
            name       TEXT NOT NULL,
            avatar_url TEXT,
            password   TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create users table")?;

    sqlx::query(
        r#"
        CREATE TABLE articles (
            article_id      INTEGER PRIMARY KEY AUTOINCREMENT,
            title           TEXT NOT NULL,
            topic           TEXT NOT NULL REFERENCES topics(slug),
            author          TEXT NOT NULL REFERENCES users(username),
            body            TEXT NOT NULL,
            created_at      TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            votes           INTEGER NOT NULL DEFAULT 0,
            article_img_url TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create articles table")?;

    sqlx::query(
        r#"
        CREATE TABLE comments (
            comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
            author     TEXT NOT NULL REFERENCES users(username),
            article_id INTEGER NOT NULL REFERENCES articles(article_id),
            votes      INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            body       TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create comments table")?;

    Ok(())
}

async fn insert_topics(pool: &SqlitePool, data: &SeedData) -> Result<()> {
    if data.topics.is_empty() {
        return Ok(());
    }
    let query = format!(
        "INSERT INTO topics (slug, description, img_url) VALUES {}",
        placeholder_groups(data.topics.len(), 3)
    );
    let mut statement = sqlx::query(&query);
    for topic in &data.topics {
        statement = statement
            .bind(topic.slug)
            .bind(topic.description)
            .bind(topic.img_url);
    }
    statement
        .execute(pool)
        .await
        .context("Failed to insert topics")?;
    Ok(())
}

/// Hashes every fixture password concurrently, then issues one batched
/// insert with the results.
async fn insert_users(pool: &SqlitePool, data: &SeedData) -> Result<()> {
    if data.users.is_empty() {
        return Ok(());
    }

    let hash_tasks: Vec<_> = data
        .users
        .iter()
        .map(|user| tokio::spawn(hash_password(user.password.to_string())))
        .collect();
    let mut hashes = Vec::with_capacity(hash_tasks.len());
    for task in hash_tasks {
        hashes.push(task.await.context("Hashing task panicked")??);
    }

    let query = format!(
        "INSERT INTO users (username, name, avatar_url, password) VALUES {}",
        placeholder_groups(data.users.len(), 4)
    );
    let mut statement = sqlx::query(&query);
    for (user, hash) in data.users.iter().zip(&hashes) {
        statement = statement
            .bind(user.username)
            .bind(user.name)
            .bind(user.avatar_url)
            .bind(hash.as_str());
    }
    statement
        .execute(pool)
        .await
        .context("Failed to insert users")?;
    Ok(())
}

/// Returns the title to generated-id lookup used to resolve comment
/// references in the next stage.
async fn insert_articles(pool: &SqlitePool, data: &SeedData) -> Result<HashMap<String, i64>> {
    if data.articles.is_empty() {
        return Ok(HashMap::new());
    }

    let query = format!(
        "INSERT INTO articles (title, topic, author, body, created_at, votes, article_img_url) \
         VALUES {} RETURNING article_id, title",
        placeholder_groups(data.articles.len(), 7)
    );
    let mut statement = sqlx::query(&query);
    for article in &data.articles {
        statement = statement
            .bind(article.title)
            .bind(article.topic)
            .bind(article.author)
            .bind(article.body)
            .bind(normalize_timestamp(article.created_at)?)
            .bind(article.votes)
            .bind(article.article_img_url);
    }
    let rows = statement
        .fetch_all(pool)
        .await
        .context("Failed to insert articles")?;

    let mut lookup = HashMap::with_capacity(rows.len());
    for row in rows {
        lookup.insert(row.get::<String, _>("title"), row.get::<i64, _>("article_id"));
    }
    Ok(lookup)
}

/// Fixture comments reference articles by title; the surrogate ids only
/// exist after the article insert, so they are resolved here through the
/// lookup built from that insert's returned rows.
async fn insert_comments(
    pool: &SqlitePool,
    data: &SeedData,
    article_ids_by_title: &HashMap<String, i64>,
) -> Result<()> {
    if data.comments.is_empty() {
        return Ok(());
    }

    let mut resolved = Vec::with_capacity(data.comments.len());
    for comment in &data.comments {
        let article_id = *article_ids_by_title.get(comment.article_title).with_context(|| {
            format!(
                "Comment references unknown article title: {}",
                comment.article_title
            )
        })?;
        resolved.push((article_id, comment));
    }

    let query = format!(
        "INSERT INTO comments (article_id, body, votes, author, created_at) VALUES {}",
        placeholder_groups(resolved.len(), 5)
    );
    let mut statement = sqlx::query(&query);
    for (article_id, comment) in &resolved {
        statement = statement
            .bind(*article_id)
            .bind(comment.body)
            .bind(comment.votes)
            .bind(comment.author)
            .bind(normalize_timestamp(comment.created_at)?);
    }
    statement
        .execute(pool)
        .await
        .context("Failed to insert comments")?;
    Ok(())
}

/// Fixture timestamps are epoch milliseconds.
fn normalize_timestamp(millis: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis)
        .map(|timestamp| timestamp.naive_utc())
        .context("Fixture timestamp out of range")
}

fn placeholder_groups(rows: usize, columns: usize) -> String {
    let mut position = 1;
    let mut groups = Vec::with_capacity(rows);
    for _ in 0..rows {
        let group: Vec<String> = (0..columns)
            .map(|offset| format!("${}", position + offset))
            .collect();
        position += columns;
        groups.push(format!("({})", group.join(", ")));
    }
    groups.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_groups_number_across_rows() {
        assert_eq!(placeholder_groups(1, 3), "($1, $2, $3)");
        assert_eq!(placeholder_groups(2, 2), "($1, $2), ($3, $4)");
    }

    #[test]
    fn normalizes_epoch_millis_to_naive_timestamps() {
        let timestamp = normalize_timestamp(1604394720000).unwrap();
        assert_eq!(timestamp.to_string(), "2020-11-03 09:12:00");
    }
}
