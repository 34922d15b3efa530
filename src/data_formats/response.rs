use serde::{Deserialize, Serialize};

use crate::models::{Article, ArticleListing, ArticleWithComments, Comment, PublicUser, Topic, User};

#[derive(Deserialize, Serialize, Debug)]
pub struct TopicResponse {
    pub slug: String,
    pub description: String,
    pub img_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleResponse {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
    pub votes: i64,
    pub article_img_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleDetailResponse {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
    pub votes: i64,
    pub article_img_url: Option<String>,
    pub comment_count: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleListingResponse {
    pub author: String,
    pub title: String,
    pub article_id: i64,
    pub topic: String,
    pub created_at: String,
    pub votes: i64,
    pub article_img_url: Option<String>,
    pub comment_count: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CommentResponse {
    pub comment_id: i64,
    pub author: String,
    pub article_id: i64,
    pub votes: i64,
    pub created_at: String,
    pub body: String,
}

impl From<Topic> for TopicResponse {
    fn from(Topic { slug, description, img_url }: Topic) -> Self {
        TopicResponse {
            slug,
            description,
            img_url,
        }
    }
}

impl From<PublicUser> for UserResponse {
    fn from(
        PublicUser {
            username,
            name,
            avatar_url,
        }: PublicUser,
    ) -> Self {
        UserResponse {
            username,
            name,
            avatar_url,
        }
    }
}

impl From<User> for UserResponse {
    fn from(
        User {
            username,
            name,
            avatar_url,
            ..
        }: User,
    ) -> Self {
        UserResponse {
            username,
            name,
            avatar_url,
        }
    }
}

impl From<Article> for ArticleResponse {
    fn from(
        Article {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            article_img_url,
        }: Article,
    ) -> Self {
        ArticleResponse {
            article_id,
            title,
            topic,
            author,
            body,
            created_at: created_at.to_string(),
            votes,
            article_img_url,
        }
    }
}

impl From<ArticleWithComments> for ArticleDetailResponse {
    fn from(
        ArticleWithComments {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            article_img_url,
            comment_count,
        }: ArticleWithComments,
    ) -> Self {
        ArticleDetailResponse {
            article_id,
            title,
            topic,
            author,
            body,
            created_at: created_at.to_string(),
            votes,
            article_img_url,
            comment_count,
        }
    }
}

impl From<ArticleListing> for ArticleListingResponse {
    fn from(
        ArticleListing {
            author,
            title,
            article_id,
            topic,
            created_at,
            votes,
            article_img_url,
            comment_count,
        }: ArticleListing,
    ) -> Self {
        ArticleListingResponse {
            author,
            title,
            article_id,
            topic,
            created_at: created_at.to_string(),
            votes,
            article_img_url,
            comment_count,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(
        Comment {
            comment_id,
            author,
            article_id,
            votes,
            created_at,
            body,
        }: Comment,
    ) -> Self {
        CommentResponse {
            comment_id,
            author,
            article_id,
            votes,
            created_at: created_at.to_string(),
            body,
        }
    }
}
