use serde::{Deserialize, Serialize};

/// A blog post, the sole domain resource.
///
/// The id is assigned by the storage backend at insertion time and never
/// changes afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Request body for creating or updating a post.
///
/// Fields default to empty strings when absent, and any client-supplied
/// `id` field is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Login request body. Compared against compiled-in constants, never stored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response carrying the bearer token.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub token: String,
}

/// Response from health check endpoint
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String, // "ok" when healthy
}
