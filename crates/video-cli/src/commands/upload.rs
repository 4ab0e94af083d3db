use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::{Path, PathBuf};
use video_store::{storage::ObjectStore, upload_video, UploadRequest};

use super::output::CommandOutput;
use crate::error::CliError;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Local file to upload
    pub path: PathBuf,

    /// Key to store it under (defaults to the file name)
    #[arg(long)]
    pub name: Option<String>,
}

pub async fn run(store: &dyn ObjectStore, args: UploadArgs) -> Result<CommandOutput> {
    if !args.path.is_file() {
        return Err(CliError::FileNotFound(args.path.display().to_string()).into());
    }

    let file_name = match args.name {
        Some(name) => name,
        None => default_name(&args.path)?,
    };

    let content = tokio::fs::read(&args.path).await.map_err(CliError::from)?;
    let size = content.len();

    let envelope = upload_video(store, UploadRequest::new(file_name.clone(), content)).await;
    if !envelope.is_success() {
        return Ok(CommandOutput::from_failure(&envelope));
    }

    let message = envelope.message_text().unwrap_or_default().to_string();
    Ok(CommandOutput::success(
        json!({ "file_name": file_name, "size": size, "message": message }),
        message,
    ))
}

fn default_name(path: &Path) -> Result<String, CliError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidInput(format!("no file name in {}", path.display())))
}
