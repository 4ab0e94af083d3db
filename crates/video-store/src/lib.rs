//! Stateless list, retrieve and upload handlers for videos kept in an
//! object store, plus an HTTP host that invokes them.

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod request;
pub mod server;
pub mod storage;

pub use envelope::{Envelope, EnvelopeBody, ListingEntry};
pub use error::HandlerError;
pub use handlers::{invoke, list_videos, retrieve_video, upload_video, Handler};
pub use request::{RetrieveRequest, UploadRequest};
