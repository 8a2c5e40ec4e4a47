//! In-memory storage implementation

use crate::Storage;
use anyhow::Result;
use async_trait::async_trait;
use common::Post;
use std::sync::Mutex;

/// In-memory post storage guarded by a single mutex
///
/// Every operation holds the lock for its full duration; there is no
/// reader/writer distinction. Ids come from a counter that only advances
/// on insertion and are never reused after deletion.
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

struct Inner {
    posts: Vec<Post>,
    next_id: i64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_post(&self, title: &str, content: &str) -> Result<Post> {
        let mut inner = self.inner.lock().unwrap();
        let post = Post {
            id: inner.next_id,
            title: title.to_string(),
            content: content.to_string(),
        };
        inner.next_id += 1;
        inner.posts.push(post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.posts.clone())
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update_post(&self, id: i64, title: &str, content: &str) -> Result<Option<Post>> {
        let mut inner = self.inner.lock().unwrap();
        match inner.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.title = title.to_string();
                post.content = content.to_string();
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_post(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        match inner.posts.iter().position(|p| p.id == id) {
            Some(index) => {
                inner.posts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
