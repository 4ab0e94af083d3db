use std::collections::BTreeMap;

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// One stored object as seen by the lister
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingEntry {
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeBody {
    Listing(Vec<ListingEntry>),
    Bytes(Bytes),
    Message(String),
}

/// Result of every handler: status, body and optional headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub status_code: u16,
    pub body: EnvelopeBody,
    pub headers: Option<BTreeMap<String, String>>,
}

impl Envelope {
    pub fn listing(entries: Vec<ListingEntry>) -> Self {
        Self {
            status_code: 200,
            body: EnvelopeBody::Listing(entries),
            headers: None,
        }
    }

    /// Successful download of `file_name`
    pub fn video(file_name: &str, content: Bytes) -> Self {
        let headers = BTreeMap::from([
            ("Content-Type".to_string(), VIDEO_CONTENT_TYPE.to_string()),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename={file_name}"),
            ),
        ]);
        Self {
            status_code: 200,
            body: EnvelopeBody::Bytes(content),
            headers: Some(headers),
        }
    }

    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: EnvelopeBody::Message(message.into()),
            headers: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn message_text(&self) -> Option<&str> {
        match &self.body {
            EnvelopeBody::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Serialize as `{"statusCode", "body", "headers"?}`. Byte bodies are
    /// base64 encoded and flagged with `isBase64Encoded`.
    pub fn to_json(&self) -> Value {
        let mut value = json!({ "statusCode": self.status_code });
        match &self.body {
            EnvelopeBody::Listing(entries) => value["body"] = json!(entries),
            EnvelopeBody::Bytes(bytes) => {
                value["body"] = json!(STANDARD.encode(bytes));
                value["isBase64Encoded"] = json!(true);
            }
            EnvelopeBody::Message(message) => value["body"] = json!(message),
        }
        if let Some(headers) = &self.headers {
            value["headers"] = json!(headers);
        }
        value
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = match self.body {
            EnvelopeBody::Listing(entries) => (status, Json(entries)).into_response(),
            EnvelopeBody::Bytes(bytes) => (status, bytes).into_response(),
            EnvelopeBody::Message(message) => (status, message).into_response(),
        };

        for (name, value) in self.headers.into_iter().flatten() {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => warn!(header = %name, "Dropping header that is not valid HTTP"),
            }
        }

        response
    }
}
