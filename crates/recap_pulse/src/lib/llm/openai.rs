use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::llm::completion::{CompletionClient, CompletionError, CompletionRequest};

pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    /// Reuses an existing HTTP client; the server boundary constructs one
    /// `OpenAIClient` per request without paying for a new connection pool.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_completion_request(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let body = serde_json::json!({
            "model": request.model,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "messages": [
                {
                    "role": "user",
                    "content": request.prompt
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))
            .map_err(|e| CompletionError::ServiceUnavailable(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp.text().await.unwrap_or_default();
            return Err(classify_status(status, message));
        }

        resp.json::<CompletionResponse>()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))
    }
}

fn classify_status(status: StatusCode, message: String) -> CompletionError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::InvalidCredentials,
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited,
        _ => CompletionError::ServiceUnavailable(format!("{} - {}", status.as_u16(), message)),
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl CompletionClient for OpenAIClient {
    const DEFAULT_MODEL: &str = "gpt-4o-mini";

    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let response = self
            .send_completion_request(&request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Completion request failed"))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CompletionError::MalformedResponse("no content in response".into()))
    }
}
