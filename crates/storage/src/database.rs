//! SQLite database storage implementation

use crate::Storage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use common::Post;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// SQLite-backed post storage
///
/// Concurrency control is left to SQLite; no extra locking is layered on
/// top of the connection pool.
pub struct DatabaseStorage {
    pool: SqlitePool,
}

impl DatabaseStorage {
    /// Connect to the database (creating the file if missing) and ensure
    /// the posts table exists
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .context("Invalid SQLite database URL")?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("Failed to connect to SQLite database")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                content TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("Failed to create posts table")?;

        info!("SQLite database storage initialized");
        Ok(Self { pool })
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn create_post(&self, title: &str, content: &str) -> Result<Post> {
        let result = sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
            .bind(title)
            .bind(content)
            .execute(&self.pool)
            .await
            .context("Failed to insert post")?;

        Ok(Post {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        let rows = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, title, content FROM posts ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load posts")?;

        Ok(rows
            .into_iter()
            .map(|(id, title, content)| Post { id, title, content })
            .collect())
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>> {
        let row = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT id, title, content FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load post")?;

        Ok(row.map(|(id, title, content)| Post { id, title, content }))
    }

    async fn update_post(&self, id: i64, title: &str, content: &str) -> Result<Option<Post>> {
        let result = sqlx::query("UPDATE posts SET title = ?, content = ? WHERE id = ?")
            .bind(title)
            .bind(content)
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to update post")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
        }))
    }

    async fn delete_post(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete post")?;

        Ok(result.rows_affected() > 0)
    }
}
