use std::process::ExitCode;

use serde::Serialize;
use video_store::Envelope;

use crate::GlobalOpts;

#[derive(Serialize, Debug)]
#[serde(tag = "status")]
pub enum CommandOutput {
    #[serde(rename = "success")]
    Success {
        data: serde_json::Value,
        #[serde(skip)]
        summary: String,
    },
    #[serde(rename = "error")]
    Error {
        error: String,
        context: Option<String>,
    },
}

impl CommandOutput {
    pub fn success(data: serde_json::Value, summary: impl Into<String>) -> Self {
        Self::Success {
            data,
            summary: summary.into(),
        }
    }

    pub fn error(error: String, context: Option<String>) -> Self {
        Self::Error { error, context }
    }

    /// Report a non-2xx envelope
    pub fn from_failure(envelope: &Envelope) -> Self {
        Self::error(
            envelope
                .message_text()
                .unwrap_or("request failed")
                .to_string(),
            Some(format!("status {}", envelope.status_code)),
        )
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn print(&self, global: &GlobalOpts) {
        if global.json {
            match serde_json::to_string_pretty(self) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Error: failed to serialize output: {e}"),
            }
            return;
        }

        match self {
            Self::Success { summary, .. } => println!("{summary}"),
            Self::Error {
                error,
                context: Some(context),
            } => eprintln!("Error: {error} ({context})"),
            Self::Error { error, .. } => eprintln!("Error: {error}"),
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }
}
