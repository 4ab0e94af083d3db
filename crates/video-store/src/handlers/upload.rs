use std::sync::LazyLock;

use object_store::ObjectStore;
use regex::Regex;
use tracing::info;

use super::respond;
use crate::envelope::Envelope;
use crate::error::HandlerError;
use crate::request::UploadRequest;
use crate::storage;

// Suffix match only: empty stems, `..` segments and whitespace all pass.
static MP4_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.mp4$").expect("mp4 suffix pattern is valid"));

/// Whether the uploader accepts `file_name`. Case-sensitive.
pub fn is_accepted_file_name(file_name: &str) -> bool {
    MP4_SUFFIX.is_match(file_name)
}

/// Validate the name, then create or overwrite the object.
///
/// Rejected names never reach the store.
pub async fn upload_video(store: &dyn ObjectStore, request: UploadRequest) -> Envelope {
    respond(try_upload(store, request).await)
}

async fn try_upload(
    store: &dyn ObjectStore,
    request: UploadRequest,
) -> Result<Envelope, HandlerError> {
    let UploadRequest {
        file_name,
        file_content,
    } = request;

    if !is_accepted_file_name(&file_name) {
        return Err(HandlerError::InvalidFileType);
    }

    let size = file_content.len();
    storage::put_object(store, &file_name, file_content)
        .await
        .map_err(HandlerError::backend("Error uploading file"))?;

    info!(file_name = %file_name, size, "Uploaded video");
    Ok(Envelope::message(
        200,
        format!("File {file_name} uploaded successfully."),
    ))
}
