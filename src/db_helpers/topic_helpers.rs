use sqlx::{Sqlite, SqlitePool};

use crate::errors::ApiError;
use crate::models::Topic;

pub async fn list_topics(pool: &SqlitePool) -> Result<Vec<Topic>, ApiError> {
    let mut tx = pool.begin().await?;
    let topics = sqlx::query_as::<Sqlite, Topic>("SELECT slug, description, img_url FROM topics")
        .fetch_all(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(topics)
}
