use std::net::SocketAddr;

use clap::{Args, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Local,
    S3,
}

/// Location of the video collection. Shared by every handler, so the server
/// and the CLI flatten the same arguments.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storage backend: "local" or "s3"
    #[arg(long, env = "STORAGE_BACKEND", default_value = "local")]
    pub storage_backend: StorageBackend,

    /// Local storage path (when using local backend)
    #[arg(long, env = "LOCAL_PATH", default_value = "./data")]
    pub local_path: String,

    /// S3 bucket holding the videos (when using s3 backend)
    #[arg(long, env = "S3_BUCKET", default_value = "")]
    pub s3_bucket: String,

    /// S3 region (when using s3 backend)
    #[arg(long, env = "S3_REGION", default_value = "us-east-1")]
    pub s3_region: String,

    /// S3 endpoint URL (for MinIO or custom S3)
    #[arg(long, env = "S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// S3 access key (for MinIO or explicit credentials)
    #[arg(long, env = "S3_ACCESS_KEY", default_value = "minioadmin")]
    pub s3_access_key: String,

    /// S3 secret key (for MinIO or explicit credentials)
    #[arg(long, env = "S3_SECRET_KEY", default_value = "minioadmin")]
    pub s3_secret_key: String,
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_backend == StorageBackend::S3 && self.s3_bucket.is_empty() {
            return Err(ConfigError::MissingS3Bucket);
        }

        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::Local,
            local_path: "./data".to_string(),
            s3_bucket: "".to_string(),
            s3_region: "us-east-1".to_string(),
            s3_endpoint: None,
            s3_access_key: "minioadmin".to_string(),
            s3_secret_key: "minioadmin".to_string(),
        }
    }
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "video-store")]
#[command(about = "List, retrieve and upload videos in an object store")]
#[command(version)]
pub struct Config {
    /// Server listen address
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen_addr: String,

    #[command(flatten)]
    pub store: StoreConfig,

    /// Largest accepted invocation body in bytes (uploads carry the video inline)
    #[arg(long, env = "MAX_EVENT_BYTES", default_value = "67108864")]
    pub max_event_bytes: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Parse from CLI args and environment
    pub fn parse_args() -> Self {
        Config::parse()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        self.store.validate()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddr(self.listen_addr.clone()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            store: StoreConfig::default(),
            max_event_bytes: 64 * 1024 * 1024,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("S3 bucket name required when using s3 backend")]
    MissingS3Bucket,

    #[error("Invalid listen address: {0}")]
    InvalidListenAddr(String),
}
