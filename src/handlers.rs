use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use sqlx::SqlitePool;

use crate::{
    authentication::{hash_password, issue_token, verify_password, AuthUser},
    db_helpers::{
        delete_comment, get_article_by_id, get_user_by_username, get_user_with_password,
        insert_article, insert_comment, insert_user, list_articles, list_articles_by_author,
        list_comments_by_article, list_topics, list_users, update_article_votes,
        update_comment_votes,
    },
    errors::{ApiError, ErrorBody},
    ArticleDetailResponse, ArticleListQuery, ArticleListingResponse, ArticleResponse,
    ArticleWrapper, ArticlesWrapper, AuthWrapper, CommentWrapper, CommentsWrapper,
    CreateArticleRequest, CreateCommentRequest, EndpointsWrapper, JsonResponse, LoginRequest,
    SecureDataWrapper, SignupRequest, TopicsWrapper, UserWrapper, UsersWrapper, VotePatchRequest,
};

const ENDPOINTS_JSON: &str = include_str!("../endpoints.json");

type ApiResult<T> = Result<Json<T>, ApiError>;

// ----------------- Helper Handlers -----------------

pub async fn get_endpoints() -> ApiResult<EndpointsWrapper> {
    let endpoints = serde_json::from_str(ENDPOINTS_JSON).map_err(|_| ApiError::ServerError)?;
    Ok(Json(EndpointsWrapper { endpoints }))
}

pub async fn not_found() -> JsonResponse<ErrorBody> {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not Found!")))
}

// ----------------- Topic Handlers -----------------

pub async fn get_topics(Extension(pool): Extension<Arc<SqlitePool>>) -> ApiResult<TopicsWrapper> {
    let topics = list_topics(&pool).await?;
    Ok(Json(TopicsWrapper {
        topics: topics.into_iter().map(Into::into).collect(),
    }))
}

// ----------------- Article Handlers -----------------

pub async fn get_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> ApiResult<ArticleWrapper<ArticleDetailResponse>> {
    let article = get_article_by_id(&pool, &article_id).await?;
    Ok(Json(ArticleWrapper {
        article: article.into(),
    }))
}

pub async fn get_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Query(params): Query<ArticleListQuery>,
) -> ApiResult<ArticlesWrapper<ArticleListingResponse>> {
    let articles = list_articles(&pool, &params).await?;
    Ok(Json(ArticlesWrapper {
        articles: articles.into_iter().map(Into::into).collect(),
    }))
}

pub async fn post_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(request): Json<CreateArticleRequest>,
) -> Result<JsonResponse<ArticleWrapper<ArticleResponse>>, ApiError> {
    let article = insert_article(&pool, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ArticleWrapper {
            article: article.into(),
        }),
    ))
}

pub async fn patch_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    Json(request): Json<VotePatchRequest>,
) -> ApiResult<ArticleWrapper<ArticleResponse>> {
    let article = update_article_votes(&pool, &article_id, &request.inc_votes).await?;
    Ok(Json(ArticleWrapper {
        article: article.into(),
    }))
}

// ----------------- Comment Handlers -----------------

pub async fn get_comments_by_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> ApiResult<CommentsWrapper> {
    let comments = list_comments_by_article(&pool, &article_id).await?;
    Ok(Json(CommentsWrapper {
        comments: comments.into_iter().map(Into::into).collect(),
    }))
}

pub async fn post_comment_by_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<JsonResponse<CommentWrapper>, ApiError> {
    let comment = insert_comment(&pool, &article_id, &request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentWrapper {
            comment: comment.into(),
        }),
    ))
}

pub async fn patch_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
    Json(request): Json<VotePatchRequest>,
) -> ApiResult<CommentWrapper> {
    let comment = update_comment_votes(&pool, &comment_id, &request.inc_votes).await?;
    Ok(Json(CommentWrapper {
        comment: comment.into(),
    }))
}

pub async fn delete_comment_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    delete_comment(&pool, &comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- User Handlers -----------------

pub async fn get_users(Extension(pool): Extension<Arc<SqlitePool>>) -> ApiResult<UsersWrapper> {
    let users = list_users(&pool).await?;
    Ok(Json(UsersWrapper {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

pub async fn get_user(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(username): Path<String>,
) -> ApiResult<UserWrapper> {
    let user = get_user_by_username(&pool, &username).await?;
    Ok(Json(UserWrapper { user: user.into() }))
}

pub async fn get_articles_by_author(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(username): Path<String>,
) -> ApiResult<ArticlesWrapper<ArticleListingResponse>> {
    let articles = list_articles_by_author(&pool, &username).await?;
    Ok(Json(ArticlesWrapper {
        articles: articles.into_iter().map(Into::into).collect(),
    }))
}

pub async fn register_user(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(request): Json<SignupRequest>,
) -> Result<JsonResponse<AuthWrapper>, ApiError> {
    let (username, name, password) = match (&request.username, &request.name, &request.password) {
        (Some(username), Some(name), Some(password))
            if !username.is_empty() && !name.is_empty() && !password.is_empty() =>
        {
            (username, name, password)
        }
        _ => return Err(ApiError::MissingFields("Missing required fields!")),
    };

    let hashed_password = hash_password(password.clone())
        .await
        .map_err(|_| ApiError::ServerError)?;

    let user = insert_user(
        &pool,
        username,
        name,
        request.avatar_url.as_deref(),
        &hashed_password,
    )
    .await
    .map_err(|e| {
        if let ApiError::DatabaseError(sqlx::Error::Database(db_error)) = &e {
            if db_error.message().contains("UNIQUE constraint failed") {
                return ApiError::AlreadyExists("Username already exists");
            }
        }
        e
    })?;

    let token = issue_token(&user.username).map_err(|_| ApiError::ServerError)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthWrapper {
            token,
            user: user.into(),
        }),
    ))
}

pub async fn login_user(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<AuthWrapper> {
    let user = get_user_with_password(&pool, &request.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let is_password_correct = verify_password(request.password, user.password.clone())
        .await
        .map_err(|_| ApiError::ServerError)?;
    if !is_password_correct {
        return Err(ApiError::InvalidCredentials);
    }

    let token = issue_token(&user.username).map_err(|_| ApiError::ServerError)?;
    Ok(Json(AuthWrapper {
        token,
        user: user.into(),
    }))
}

pub async fn get_secure_data(user: AuthUser) -> Json<SecureDataWrapper> {
    Json(SecureDataWrapper {
        data: format!("Secret stuff for {}", user.username),
    })
}
