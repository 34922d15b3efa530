use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::{ArticleListQuery, CreateArticleRequest};
use crate::errors::ApiError;
use crate::models::{Article, ArticleListing, ArticleWithComments};

use super::{parse_identifier, parse_vote_delta, topic_exists, user_exists};

pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

/// Sort columns that may be spliced into the listing query. The column name
/// is interpolated into the statement text, so anything outside this set is
/// rejected before the statement is built.
const VALID_SORT_COLUMNS: [&str; 8] = [
    "author",
    "title",
    "article_id",
    "topic",
    "created_at",
    "votes",
    "article_img_url",
    "comment_count",
];

const VALID_ORDERS: [&str; 2] = ["asc", "desc"];

const ARTICLE_DETAIL_QUERY: &str = r#"
    SELECT articles.article_id        AS "article_id",
           articles.title             AS "title",
           articles.topic             AS "topic",
           articles.author            AS "author",
           articles.body              AS "body",
           articles.created_at        AS "created_at",
           articles.votes             AS "votes",
           articles.article_img_url   AS "article_img_url",
           COUNT(comments.comment_id) AS "comment_count"
    FROM   articles
           LEFT JOIN comments
                  ON comments.article_id = articles.article_id
    WHERE  articles.article_id = $1
    GROUP  BY articles.article_id
"#;

const ARTICLE_LISTING_SELECT: &str = r#"
    SELECT articles.author            AS "author",
           articles.title             AS "title",
           articles.article_id        AS "article_id",
           articles.topic             AS "topic",
           articles.created_at        AS "created_at",
           articles.votes             AS "votes",
           articles.article_img_url   AS "article_img_url",
           COUNT(comments.comment_id) AS "comment_count"
    FROM   articles
           LEFT JOIN comments
                  ON comments.article_id = articles.article_id
"#;

pub async fn get_article_by_id(
    pool: &SqlitePool,
    raw_id: &str,
) -> Result<ArticleWithComments, ApiError> {
    let article_id = parse_identifier(raw_id)?;
    let mut tx = pool.begin().await?;
    let article = sqlx::query_as::<Sqlite, ArticleWithComments>(ARTICLE_DETAIL_QUERY)
        .bind(article_id)
        .fetch_optional(&mut tx)
        .await?;
    tx.commit().await?;
    article.ok_or(ApiError::NotFound("Article Not Found"))
}

pub async fn list_articles(
    pool: &SqlitePool,
    params: &ArticleListQuery,
) -> Result<Vec<ArticleListing>, ApiError> {
    let sort_by = params.sort_by.as_deref().unwrap_or("created_at");
    let order = params.order.as_deref().unwrap_or("desc");

    if !VALID_SORT_COLUMNS.contains(&sort_by) {
        return Err(ApiError::InvalidSort);
    }
    if !VALID_ORDERS.contains(&order) {
        return Err(ApiError::InvalidOrder);
    }

    // comment_count is an output alias, everything else a table column.
    let sort_column = if sort_by == "comment_count" {
        sort_by.to_string()
    } else {
        format!("articles.{}", sort_by)
    };

    let mut query = String::from(ARTICLE_LISTING_SELECT);
    if params.topic.is_some() {
        query.push_str("WHERE articles.topic = $1 ");
    }
    query.push_str(&format!(
        "GROUP BY articles.article_id ORDER BY {} {}",
        sort_column, order
    ));

    let mut tx = pool.begin().await?;
    let mut statement = sqlx::query_as::<Sqlite, ArticleListing>(&query);
    if let Some(topic) = &params.topic {
        statement = statement.bind(topic.as_str());
    }
    let articles = statement.fetch_all(&mut tx).await?;
    tx.commit().await?;

    // An empty result for a topic filter is only an error when the topic
    // itself is unknown; a known topic with no articles yields an empty list.
    if articles.is_empty() {
        if let Some(topic) = &params.topic {
            if !topic_exists(pool, topic).await? {
                return Err(ApiError::NotFound("Topic Not Found!"));
            }
        }
    }

    Ok(articles)
}

pub async fn list_articles_by_author(
    pool: &SqlitePool,
    username: &str,
) -> Result<Vec<ArticleListing>, ApiError> {
    let query = format!(
        "{} WHERE articles.author = $1 GROUP BY articles.article_id ORDER BY articles.created_at DESC",
        ARTICLE_LISTING_SELECT
    );

    let mut tx = pool.begin().await?;
    let articles = sqlx::query_as::<Sqlite, ArticleListing>(&query)
        .bind(username)
        .fetch_all(&mut tx)
        .await?;
    tx.commit().await?;

    if articles.is_empty() {
        if !user_exists(pool, username).await? {
            return Err(ApiError::NotFound("username not found!"));
        }
        return Err(ApiError::NotFound("No articles"));
    }

    Ok(articles)
}

pub async fn insert_article(
    pool: &SqlitePool,
    request: CreateArticleRequest,
) -> Result<Article, ApiError> {
    let CreateArticleRequest {
        title,
        topic,
        author,
        body,
        article_img_url,
    } = request;

    let article_img_url = match article_img_url {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_ARTICLE_IMG_URL.to_string(),
    };

    let mut tx = pool.begin().await?;
    let article = sqlx::query_as::<Sqlite, Article>(
        r#"
        INSERT INTO articles (title, topic, author, body, article_img_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
        "#,
    )
    .bind(title)
    .bind(topic)
    .bind(author)
    .bind(body)
    .bind(article_img_url)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;

    Ok(article)
}

/// Applies the delta in a single read-modify-write statement so concurrent
/// increments cannot lose updates.
pub async fn update_article_votes(
    pool: &SqlitePool,
    raw_id: &str,
    inc_votes: &Option<serde_json::Value>,
) -> Result<Article, ApiError> {
    let delta = parse_vote_delta(inc_votes)?;
    let article_id = parse_identifier(raw_id)?;

    let mut tx = pool.begin().await?;
    let article = sqlx::query_as::<Sqlite, Article>(
        r#"
        UPDATE articles SET votes = votes + $1
        WHERE article_id = $2
        RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
        "#,
    )
    .bind(delta)
    .bind(article_id)
    .fetch_optional(&mut tx)
    .await?;
    tx.commit().await?;

    article.ok_or(ApiError::NotFound("Article Not Found"))
}
