use chrono::NaiveDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
    pub img_url: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub password: String,
}

/// User row without the credential column. The only user shape that is ever
/// allowed to leave the storage layer for serialization.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PublicUser {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: Option<String>,
}

/// Detail view: full article row plus the derived comment aggregate.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleWithComments {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: Option<String>,
    pub comment_count: i64,
}

/// List view: summary projection, no body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleListing {
    pub author: String,
    pub title: String,
    pub article_id: i64,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: Option<String>,
    pub comment_count: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub author: String,
    pub article_id: i64,
    pub votes: i64,
    pub created_at: NaiveDateTime,
    pub body: String,
}
