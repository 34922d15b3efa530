use serde::Serialize;

use super::response::{CommentResponse, TopicResponse, UserResponse};

#[derive(Serialize, Debug)]
pub struct EndpointsWrapper {
    pub endpoints: serde_json::Value,
}

#[derive(Serialize, Debug)]
pub struct TopicsWrapper {
    pub topics: Vec<TopicResponse>,
}

#[derive(Serialize, Debug)]
pub struct ArticleWrapper<T> {
    pub article: T,
}

#[derive(Serialize, Debug)]
pub struct ArticlesWrapper<T> {
    pub articles: Vec<T>,
}

#[derive(Serialize, Debug)]
pub struct CommentWrapper {
    pub comment: CommentResponse,
}

#[derive(Serialize, Debug)]
pub struct CommentsWrapper {
    pub comments: Vec<CommentResponse>,
}

#[derive(Serialize, Debug)]
pub struct UsersWrapper {
    pub users: Vec<UserResponse>,
}

#[derive(Serialize, Debug)]
pub struct UserWrapper {
    pub user: UserResponse,
}

#[derive(Serialize, Debug)]
pub struct AuthWrapper {
    pub token: String,
    pub user: UserResponse,
}

#[derive(Serialize, Debug)]
pub struct SecureDataWrapper {
    pub data: String,
}
