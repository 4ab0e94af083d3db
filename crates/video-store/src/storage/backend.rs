use anyhow::{Context, Result};
use bytes::Bytes;
use futures_util::TryStreamExt;
use object_store::{aws::AmazonS3Builder, local::LocalFileSystem, ObjectStore, PutPayload};
use std::sync::Arc;

use super::keys::{object_key, object_path};
use crate::config::{StorageBackend, StoreConfig};

/// Create an ObjectStore instance based on configuration
pub fn create_store(config: &StoreConfig) -> Result<Arc<dyn ObjectStore>> {
    match config.storage_backend {
        StorageBackend::Local => {
            std::fs::create_dir_all(&config.local_path)
                .with_context(|| format!("Failed to create {}", config.local_path))?;
            let store = LocalFileSystem::new_with_prefix(&config.local_path)
                .context("Failed to create local filesystem store")?;
            Ok(Arc::new(store))
        }
        StorageBackend::S3 => {
            let mut builder = AmazonS3Builder::new()
                .with_bucket_name(&config.s3_bucket)
                .with_region(&config.s3_region)
                .with_access_key_id(&config.s3_access_key)
                .with_secret_access_key(&config.s3_secret_key);

            if let Some(endpoint) = &config.s3_endpoint {
                builder = builder.with_endpoint(endpoint);
                // For MinIO and other S3-compatible services
                builder = builder.with_allow_http(true);
            }

            let store = builder.build().context("Failed to create S3 store")?;
            Ok(Arc::new(store))
        }
    }
}

/// List every key in the store, in the order the backend yields them.
pub async fn list_keys(store: &dyn ObjectStore) -> object_store::Result<Vec<String>> {
    store
        .list(None)
        .map_ok(|meta| object_key(&meta.location))
        .try_collect()
        .await
}

/// Fetch entire object from storage
pub async fn fetch_all(store: &dyn ObjectStore, key: &str) -> object_store::Result<Bytes> {
    let path = object_path(key);
    store.get(&path).await?.bytes().await
}

/// Create or overwrite the object at `key`
pub async fn put_object(
    store: &dyn ObjectStore,
    key: &str,
    content: Bytes,
) -> object_store::Result<()> {
    let path = object_path(key);
    store.put(&path, PutPayload::from(content)).await?;
    Ok(())
}
