use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use std::path::PathBuf;
use video_store::{retrieve_video, storage::ObjectStore, EnvelopeBody, RetrieveRequest};

use super::output::CommandOutput;

#[derive(Args, Debug)]
pub struct RetrieveArgs {
    /// Key of the video in the collection
    pub file_name: String,

    /// Write the video to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn run(store: &dyn ObjectStore, args: RetrieveArgs) -> Result<CommandOutput> {
    let envelope = retrieve_video(store, RetrieveRequest::new(&args.file_name)).await;
    let EnvelopeBody::Bytes(content) = &envelope.body else {
        return Ok(CommandOutput::from_failure(&envelope));
    };

    let Some(path) = args.output else {
        return Ok(CommandOutput::success(
            envelope.to_json(),
            format!(
                "{}: {} bytes (use --output to save)",
                args.file_name,
                content.len()
            ),
        ));
    };

    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(CommandOutput::success(
        json!({
            "file_name": args.file_name,
            "size": content.len(),
            "output": path.display().to_string(),
        }),
        format!(
            "Saved {} ({} bytes) to {}",
            args.file_name,
            content.len(),
            path.display()
        ),
    ))
}
