use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{error::RouteError, AppState};
use crate::{
    openai::OpenAIClient,
    pipeline::{builder::SummaryPipelineBuilder, TranscriptRequest},
};

/// Inbound payload from the form UI. Field names mirror the form fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub podcast_title: String,
    pub episode_title: String,
    pub transcript: String,
    /// Per-request credential; overrides the process-wide one
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub output: GeneratedOutput,
}

#[derive(Debug, Serialize)]
pub struct GeneratedOutput {
    pub text: String,
}

#[tracing::instrument(skip_all, fields(podcast_title = %request.podcast_title))]
pub(super) async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, RouteError> {
    let api_key = request
        .api_key
        .clone()
        .or_else(|| state.api_key.clone())
        .ok_or(RouteError::MissingCredentials)?;

    let mut client = OpenAIClient::with_client(state.http_client.clone(), api_key);
    if let Some(base_url) = &state.completion_base_url {
        client = client.with_base_url(base_url);
    }

    let pipeline = SummaryPipelineBuilder::new()
        .completion_client(client)
        .config(state.config.clone())
        .build();

    let transcript = TranscriptRequest {
        podcast_title: request.podcast_title,
        episode_title: request.episode_title,
        transcript: request.transcript,
    };

    let output = pipeline.summarize(&transcript).await?;

    Ok(Json(GenerateResponse {
        output: GeneratedOutput { text: output.text },
    }))
}
