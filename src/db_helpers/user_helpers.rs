use sqlx::{Sqlite, SqlitePool};

use crate::errors::ApiError;
use crate::models::{PublicUser, User};

const PUBLIC_USER_COLUMNS: &str = "username, name, avatar_url";

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<PublicUser>, ApiError> {
    let query = format!("SELECT {} FROM users", PUBLIC_USER_COLUMNS);
    let mut tx = pool.begin().await?;
    let users = sqlx::query_as::<Sqlite, PublicUser>(&query)
        .fetch_all(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(users)
}

pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<PublicUser, ApiError> {
    let query = format!("SELECT {} FROM users WHERE username = $1", PUBLIC_USER_COLUMNS);
    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<Sqlite, PublicUser>(&query)
        .bind(username)
        .fetch_optional(&mut tx)
        .await?;
    tx.commit().await?;
    user.ok_or(ApiError::NotFound("username not found!"))
}

/// Full row including the stored credential hash, for login verification
/// only. Never hand this to a serializer.
pub async fn get_user_with_password(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, ApiError> {
    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<Sqlite, User>(
        "SELECT username, name, avatar_url, password FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(user)
}

pub async fn insert_user(
    pool: &SqlitePool,
    username: &str,
    name: &str,
    avatar_url: Option<&str>,
    hashed_password: &str,
) -> Result<PublicUser, ApiError> {
    let query = format!(
        "INSERT INTO users (username, name, avatar_url, password) VALUES ($1, $2, $3, $4) RETURNING {}",
        PUBLIC_USER_COLUMNS
    );
    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<Sqlite, PublicUser>(&query)
        .bind(username)
        .bind(name)
        .bind(avatar_url)
        .bind(hashed_password)
        .fetch_one(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(user)
}
