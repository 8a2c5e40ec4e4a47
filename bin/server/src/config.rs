use crate::constants::{
    DEFAULT_ASSETS_DIR, DEFAULT_DATABASE_URL, DEFAULT_HOST, DEFAULT_PORT, STORAGE_TYPE_DATABASE,
    STORAGE_TYPE_MEMORY,
};
use clap::{Arg, Command};
use storage::StorageBackend;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Storage backend type
    pub storage_type: StorageType,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL for database storage
    pub database_url: Option<String>,
    /// Directory of static assets served at the site root
    pub assets_dir: String,
}

/// Storage backend type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    Memory,
    Database,
}

impl ServerConfig {
    pub fn load() -> Result<Self, std::io::Error> {
        let matches = Command::new("server")
            .arg(
                Arg::new("storage")
                    .long("storage")
                    .value_name("TYPE")
                    .help("Storage backend type: 'mem' for in-memory or 'db' for SQLite")
                    .default_value(STORAGE_TYPE_MEMORY),
            )
            .arg(
                Arg::new("database-url")
                    .long("database-url")
                    .value_name("URL")
                    .help("SQLite database URL (can also use DATABASE_URL env var)"),
            )
            .arg(
                Arg::new("port")
                    .long("port")
                    .value_name("PORT")
                    .help("Server port (default: 8080, or SERVER_PORT env var)"),
            )
            .arg(
                Arg::new("host")
                    .long("host")
                    .value_name("HOST")
                    .help("Server host (default: 0.0.0.0, or SERVER_HOST env var)"),
            )
            .arg(
                Arg::new("assets-dir")
                    .long("assets-dir")
                    .value_name("DIR")
                    .help("Directory of static assets served at /")
                    .default_value(DEFAULT_ASSETS_DIR),
            )
            .get_matches();

        let storage_type_str = matches
            .get_one::<String>("storage")
            .map(|s| s.as_str())
            .unwrap_or(STORAGE_TYPE_MEMORY);
        let storage_type = match storage_type_str {
            STORAGE_TYPE_DATABASE => StorageType::Database,
            STORAGE_TYPE_MEMORY => StorageType::Memory,
            _ => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!(
                        "Invalid storage type: {}. Must be '{}' or '{}'",
                        storage_type_str, STORAGE_TYPE_MEMORY, STORAGE_TYPE_DATABASE
                    ),
                ));
            }
        };

        let database_url = if storage_type == StorageType::Database {
            Some(
                matches
                    .get_one::<String>("database-url")
                    .cloned()
                    .or_else(|| std::env::var("DATABASE_URL").ok())
                    .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            )
        } else {
            None
        };

        let env_host = std::env::var("SERVER_HOST").ok();
        let env_port = std::env::var("SERVER_PORT").ok();

        let host = matches
            .get_one::<String>("host")
            .map(|s| s.as_str())
            .or(env_host.as_deref())
            .unwrap_or(DEFAULT_HOST)
            .to_string();

        let port_str = matches
            .get_one::<String>("port")
            .map(|s| s.as_str())
            .or(env_port.as_deref())
            .unwrap_or(DEFAULT_PORT);

        let port = port_str.parse().map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid port number: {}", port_str),
            )
        })?;

        let assets_dir = matches
            .get_one::<String>("assets-dir")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_ASSETS_DIR)
            .to_string();

        Ok(ServerConfig {
            storage_type,
            host,
            port,
            database_url,
            assets_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Storage backend selected by this configuration
    pub fn storage_backend(&self) -> StorageBackend {
        match self.storage_type {
            StorageType::Memory => StorageBackend::Memory,
            StorageType::Database => StorageBackend::Database(
                self.database_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            ),
        }
    }
}
