use serde_json::json;
use video_store::{list_videos, storage::ObjectStore, EnvelopeBody};

use super::output::CommandOutput;

pub async fn run(store: &dyn ObjectStore) -> CommandOutput {
    let envelope = list_videos(store).await;
    let EnvelopeBody::Listing(entries) = &envelope.body else {
        return CommandOutput::from_failure(&envelope);
    };

    let summary = if entries.is_empty() {
        "No videos".to_string()
    } else {
        entries
            .iter()
            .map(|entry| entry.file_name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommandOutput::success(
        json!({ "count": entries.len(), "videos": entries }),
        summary,
    )
}
