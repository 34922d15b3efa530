mod authentication;
mod data_formats;
mod db_helpers;
mod errors;
mod handlers;
mod models;
pub mod seed;

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use data_formats::*;
use handlers::*;
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool,
};
use std::str::FromStr;
use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};

pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(app: Router, address: SocketAddr) -> Result<()> {
    let db = init_db().await?;
    let app = app.layer(Extension(Arc::new(db)));
    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db() -> Result<SqlitePool> {
    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let fresh = !Sqlite::database_exists(&db_url).await.unwrap_or(false);
    if fresh {
        println!("Creating database {}", db_url);
        Sqlite::create_database(&db_url)
            .await
            .context("Failed to create database")?;
    }
    let pool = connect_pool(&db_url).await?;
    let force_seed = std::env::args().any(|arg| arg == "--seed");
    if fresh || force_seed {
        println!("Rebuilding schema and loading sample data");
        seed::rebuild(&pool, &seed::data::sample_data())
            .await
            .context("Failed to seed database")?;
        println!("Seeding completed");
    }
    Ok(pool)
}

/// Bounded pool shared by all requests; foreign keys are enforced on every
/// connection.
pub async fn connect_pool(db_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub fn get_random_free_port() -> (u16, SocketAddr) {
    let listener = TcpListener::bind("localhost:0").unwrap();
    match listener.local_addr() {
        Ok(addr) => (addr.port(), addr),
        Err(_) => panic!("Could not get a free port"),
    }
}

pub fn make_router() -> Router {
    Router::new()
        .route("/api", get(get_endpoints))
        .route("/api/topics", get(get_topics))
        .route("/api/articles", get(get_articles).post(post_article))
        .route(
            "/api/articles/:article_id",
            get(get_article).patch(patch_article),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_comments_by_article).post(post_comment_by_article),
        )
        .route(
            "/api/comments/:comment_id",
            delete(delete_comment_by_id).patch(patch_comment),
        )
        .route("/api/users", get(get_users).post(register_user))
        .route("/api/users/:username", get(get_user))
        .route("/api/users/:username/articles", get(get_articles_by_author))
        .route("/api/login", post(login_user))
        .route("/api/secure-data", get(get_secure_data))
        .fallback(not_found)
}
