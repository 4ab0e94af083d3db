use object_store::ObjectStore;
use tracing::info;

use super::respond;
use crate::envelope::{Envelope, ListingEntry};
use crate::error::HandlerError;
use crate::storage;

/// List every video in the collection, in store order.
pub async fn list_videos(store: &dyn ObjectStore) -> Envelope {
    respond(try_list(store).await)
}

async fn try_list(store: &dyn ObjectStore) -> Result<Envelope, HandlerError> {
    let keys = storage::list_keys(store)
        .await
        .map_err(HandlerError::backend("Error fetching video list"))?;

    info!(count = keys.len(), "Listed videos");

    let entries = keys
        .into_iter()
        .map(|file_name| ListingEntry { file_name })
        .collect();
    Ok(Envelope::listing(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EnvelopeBody;
    use bytes::Bytes;
    use object_store::memory::InMemory;

    #[tokio::test]
    async fn test_empty_collection() {
        let store = InMemory::new();

        let envelope = list_videos(&store).await;
        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.body, EnvelopeBody::Listing(Vec::new()));
    }

    #[tokio::test]
    async fn test_lists_every_key() {
        let store = InMemory::new();
        for name in ["a.mp4", "b.mp4", "notes.txt"] {
            storage::put_object(&store, name, Bytes::from_static(b"x"))
                .await
                .unwrap();
        }

        let envelope = list_videos(&store).await;
        let EnvelopeBody::Listing(mut entries) = envelope.body else {
            panic!("expected listing body");
        };
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        let names: Vec<_> = entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, ["a.mp4", "b.mp4", "notes.txt"]);
    }
}
