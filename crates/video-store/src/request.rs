//! Typed invocation events.
//!
//! Events arrive as loose JSON; these types pin down the required fields so a
//! missing `file_name` is a 400 instead of a crash.

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::error::HandlerError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetrieveRequest {
    pub file_name: String,
}

impl RetrieveRequest {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn from_event(event: Value) -> Result<Self, HandlerError> {
        parse_event(event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_name: String,
    pub file_content: Bytes,
}

/// Wire form of an upload. `file_content` is stored as UTF-8 unless the
/// caller marks it base64.
#[derive(Debug, Deserialize)]
struct UploadEvent {
    file_name: String,
    file_content: String,
    #[serde(default)]
    is_base64_encoded: bool,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, file_content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            file_content: file_content.into(),
        }
    }

    pub fn from_event(event: Value) -> Result<Self, HandlerError> {
        let event: UploadEvent = parse_event(event)?;

        let file_content = if event.is_base64_encoded {
            STANDARD.decode(event.file_content.as_bytes()).map_err(|e| {
                HandlerError::InvalidRequest(format!("file_content is not valid base64: {e}"))
            })?
        } else {
            event.file_content.into_bytes()
        };

        Ok(Self::new(event.file_name, file_content))
    }
}

fn parse_event<T: DeserializeOwned>(event: Value) -> Result<T, HandlerError> {
    serde_json::from_value(event).map_err(|e| HandlerError::InvalidRequest(e.to_string()))
}

/// Parse a raw request body into an event. An empty body is a null event.
pub fn event_from_slice(body: &[u8]) -> Result<Value, HandlerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| HandlerError::InvalidRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_retrieve_from_event() {
        let request = RetrieveRequest::from_event(json!({ "file_name": "clip.mp4" })).unwrap();
        assert_eq!(request, RetrieveRequest::new("clip.mp4"));
    }

    #[test]
    fn test_retrieve_missing_file_name() {
        let err = RetrieveRequest::from_event(json!({ "name": "clip.mp4" })).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("file_name"));
    }

    #[test]
    fn test_retrieve_null_event() {
        let err = RetrieveRequest::from_event(Value::Null).unwrap_err();
        assert!(matches!(err, HandlerError::InvalidRequest(_)));
    }

    #[test]
    fn test_upload_plain_content() {
        let request = UploadRequest::from_event(json!({
            "file_name": "clip.mp4",
            "file_content": "raw bytes",
        }))
        .unwrap();
        assert_eq!(request.file_name, "clip.mp4");
        assert_eq!(&request.file_content[..], b"raw bytes");
    }

    #[test]
    fn test_upload_base64_content() {
        let request = UploadRequest::from_event(json!({
            "file_name": "clip.mp4",
            "file_content": STANDARD.encode([0u8, 159, 146, 150]),
            "is_base64_encoded": true,
        }))
        .unwrap();
        assert_eq!(&request.file_content[..], &[0u8, 159, 146, 150]);
    }

    #[test]
    fn test_upload_bad_base64() {
        let err = UploadRequest::from_event(json!({
            "file_name": "clip.mp4",
            "file_content": "not base64!!",
            "is_base64_encoded": true,
        }))
        .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_upload_missing_content() {
        let err = UploadRequest::from_event(json!({ "file_name": "clip.mp4" })).unwrap_err();
        assert!(err.to_string().contains("file_content"));
    }

    #[test]
    fn test_event_from_slice() {
        assert_eq!(event_from_slice(b"").unwrap(), Value::Null);
        assert_eq!(event_from_slice(b" \n").unwrap(), Value::Null);
        assert_eq!(
            event_from_slice(br#"{"file_name":"a.mp4"}"#).unwrap(),
            json!({ "file_name": "a.mp4" })
        );
        assert!(event_from_slice(b"not json").is_err());
    }
}
