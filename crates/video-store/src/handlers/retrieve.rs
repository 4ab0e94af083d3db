use object_store::ObjectStore;
use tracing::info;

use super::respond;
use crate::envelope::Envelope;
use crate::error::HandlerError;
use crate::request::RetrieveRequest;
use crate::storage;

/// Fetch one video. The store decides whether the key exists.
pub async fn retrieve_video(store: &dyn ObjectStore, request: RetrieveRequest) -> Envelope {
    respond(try_retrieve(store, request).await)
}

async fn try_retrieve(
    store: &dyn ObjectStore,
    request: RetrieveRequest,
) -> Result<Envelope, HandlerError> {
    let content = storage::fetch_all(store, &request.file_name)
        .await
        .map_err(HandlerError::backend("Error retrieving file"))?;

    info!(file_name = %request.file_name, size = content.len(), "Retrieved video");
    Ok(Envelope::video(&request.file_name, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EnvelopeBody;
    use bytes::Bytes;
    use object_store::memory::InMemory;

    #[tokio::test]
    async fn test_existing_key() {
        let store = InMemory::new();
        storage::put_object(&store, "clip.mp4", Bytes::from_static(b"\x00\x00\x00\x18ftyp"))
            .await
            .unwrap();

        let envelope = retrieve_video(&store, RetrieveRequest::new("clip.mp4")).await;

        assert_eq!(envelope.status_code, 200);
        assert_eq!(
            envelope.body,
            EnvelopeBody::Bytes(Bytes::from_static(b"\x00\x00\x00\x18ftyp"))
        );
        assert_eq!(envelope.header("Content-Type"), Some("video/mp4"));
        assert!(envelope
            .header("Content-Disposition")
            .unwrap()
            .contains("clip.mp4"));
    }

    #[tokio::test]
    async fn test_missing_key_is_backend_error() {
        let store = InMemory::new();

        let envelope = retrieve_video(&store, RetrieveRequest::new("ghost.mp4")).await;

        assert_eq!(envelope.status_code, 500);
        assert!(envelope.headers.is_none());
        let message = envelope.message_text().unwrap();
        assert!(message.starts_with("Error retrieving file: "));
        assert!(message.contains("ghost.mp4"));
    }
}
