use crate::errors::ApiError;
use anyhow::{Context, Result};
use argon2::PasswordVerifier;
use argon2::{password_hash::SaltString, Argon2, PasswordHash};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const TOKEN_EXPIRY_DURATION: time::Duration = time::Duration::hours(2);

#[derive(Debug, Serialize, Deserialize)]
struct AuthClaim {
    username: String,
    exp: i64,
}

/// Extractor for routes that require a bearer token. A missing header and a
/// bad token are distinct failures (401 vs 403).
pub struct AuthUser {
    pub username: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync + 'static,
{
    type Rejection = ApiError;
    async fn from_request_parts(
        parts: &mut Parts,
        _: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let header = match parts.headers.get("Authorization") {
            Some(header) => header,
            None => return Err(ApiError::MissingToken),
        };
        let header = header.to_str().map_err(|_| ApiError::InvalidToken)?;

        let token = match header.strip_prefix("Bearer ") {
            Some(token) => token,
            None => return Err(ApiError::InvalidToken),
        };

        let username = verify_token(token)?;

        Ok(AuthUser { username })
    }
}

pub fn issue_token(username: &str) -> Result<String> {
    let jwt_secret = std::env::var("JWT_SECRET").context("Failed to get JWT_SECRET")?;
    let expiry_date = OffsetDateTime::now_utc() + TOKEN_EXPIRY_DURATION;
    let claim = AuthClaim {
        username: username.to_string(),
        exp: expiry_date.unix_timestamp(),
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claim,
        &jsonwebtoken::EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .context("Failed to generate jwt token")
}

pub fn verify_token(token: &str) -> Result<String, ApiError> {
    let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ApiError::ServerError)?;
    let token_data = jsonwebtoken::decode::<AuthClaim>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(jwt_secret.as_ref()),
        &jsonwebtoken::Validation::default(),
    )
    .map_err(|_| ApiError::InvalidToken)?;
    let claim = token_data.claims;
    if claim.exp < OffsetDateTime::now_utc().unix_timestamp() {
        return Err(ApiError::InvalidToken);
    }
    Ok(claim.username)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || {
        let hash = PasswordHash::new(hash.as_str())
            .map_err(|_| anyhow::anyhow!("Failed to verify password"))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok())
    })
    .await
    .context("Failed to verify password")?
}

pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(rand::thread_rng());
        let hash = PasswordHash::generate(Argon2::default(), password, salt.as_salt())
            .map_err(|_| anyhow::anyhow!("Failed to hash password"))?;
        Ok(hash.to_string())
    })
    .await
    .context("Failed to hash password")?
}
