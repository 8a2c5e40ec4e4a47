pub mod backend;
pub mod database;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use common::Post;

pub use backend::StorageBackend;

/// Storage backend trait for post CRUD operations
///
/// "Missing" is a normal outcome, not a failure: lookups return `Option`
/// and deletes report whether anything was removed. `Err` is reserved for
/// backend faults (connectivity, SQL errors).
#[async_trait]
pub trait Storage: Send + Sync {
    /// Insert a new post and return it with its assigned id
    async fn create_post(&self, title: &str, content: &str) -> Result<Post>;

    /// Return a snapshot of all posts in insertion order
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Look up a post by id
    async fn get_post(&self, id: i64) -> Result<Option<Post>>;

    /// Replace a post's title and content in place, keeping its id
    async fn update_post(&self, id: i64, title: &str, content: &str) -> Result<Option<Post>>;

    /// Remove a post by id; returns false if no such post existed
    async fn delete_post(&self, id: i64) -> Result<bool>;
}
