//! The three storage handlers.
//!
//! Each one is independent and stateless: validate, make at most one store
//! call, and fold the outcome into an [`Envelope`]. No error escapes.

mod list;
mod retrieve;
mod upload;

pub use list::list_videos;
pub use retrieve::retrieve_video;
pub use upload::{is_accepted_file_name, upload_video};

use object_store::ObjectStore;
use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::HandlerError;
use crate::request::{RetrieveRequest, UploadRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    ListVideos,
    RetrieveVideo,
    UploadVideo,
}

impl Handler {
    pub const ALL: [Handler; 3] = [Self::ListVideos, Self::RetrieveVideo, Self::UploadVideo];

    pub fn name(self) -> &'static str {
        match self {
            Self::ListVideos => "list-videos",
            Self::RetrieveVideo => "retrieve-video",
            Self::UploadVideo => "upload-video",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|handler| handler.name() == name)
    }
}

/// Run `handler` against a raw JSON event.
pub async fn invoke(handler: Handler, store: &dyn ObjectStore, event: Value) -> Envelope {
    match handler {
        Handler::ListVideos => list_videos(store).await,
        Handler::RetrieveVideo => match RetrieveRequest::from_event(event) {
            Ok(request) => retrieve_video(store, request).await,
            Err(err) => err.into_envelope(),
        },
        Handler::UploadVideo => match UploadRequest::from_event(event) {
            Ok(request) => upload_video(store, request).await,
            Err(err) => err.into_envelope(),
        },
    }
}

fn respond(result: Result<Envelope, HandlerError>) -> Envelope {
    result.unwrap_or_else(HandlerError::into_envelope)
}
