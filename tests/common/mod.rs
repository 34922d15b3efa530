use std::sync::Arc;

use axum::Extension;
use pressroom::{connect_pool, get_random_free_port, make_router, seed};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Boots the app on a random free port against a private, freshly seeded
/// database. Each test gets its own world.
pub async fn spawn_app() -> TestApp {
    std::env::set_var("JWT_SECRET", "test-secret");

    let (port, addr) = get_random_free_port();
    let db_path = std::env::temp_dir().join(format!("pressroom_test_{}.db", port));
    let db_url = format!("sqlite://{}", db_path.display());

    if Sqlite::database_exists(&db_url).await.unwrap_or(false) {
        Sqlite::drop_database(&db_url).await.unwrap();
    }
    Sqlite::create_database(&db_url).await.unwrap();

    let pool = connect_pool(&db_url).await.unwrap();
    seed::rebuild(&pool, &seed::data::sample_data())
        .await
        .unwrap();

    let app = make_router().layer(Extension(Arc::new(pool.clone())));
    let server = axum::Server::bind(&addr).serve(app.into_make_service());
    tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        pool,
        client: reqwest::Client::new(),
    }
}
