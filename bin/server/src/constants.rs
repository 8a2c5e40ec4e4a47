/// Username accepted by the login endpoint
pub const ADMIN_USERNAME: &str = "admin";

/// Password accepted by the login endpoint
pub const ADMIN_PASSWORD: &str = "password";

/// Symmetric secret for signing and verifying JWTs
pub const JWT_SECRET: &[u8] = b"secret_key";

/// Token lifetime in seconds (5 minutes)
pub const TOKEN_TTL_SECONDS: i64 = 300;

/// Default server host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: &str = "8080";

/// Default SQLite database URL for database storage
pub const DEFAULT_DATABASE_URL: &str = "sqlite:posts.db";

/// Default directory served at the site root
pub const DEFAULT_ASSETS_DIR: &str = "templates";

/// Storage type identifier for SQLite
pub const STORAGE_TYPE_DATABASE: &str = "db";

/// Storage type identifier for in-memory (also used as the default storage type)
pub const STORAGE_TYPE_MEMORY: &str = "mem";
