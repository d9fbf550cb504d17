use std::{future::Future, time::Duration};

/// One outbound text-completion request. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("completion service rejected the supplied credentials")]
    InvalidCredentials,
    #[error("completion service rate limit hit")]
    RateLimited,
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
    #[error("completion call timed out after {0:?}")]
    Timeout(Duration),
    #[error("completion call cancelled")]
    Cancelled,
}

/// Capability boundary around the external text-completion service.
///
/// One call in, generated text or a classified failure out. Retrying is
/// deliberately not part of this contract; every call is attempted exactly
/// once and failures propagate to the dispatching pipeline.
pub trait CompletionClient {
    const DEFAULT_MODEL: &str;

    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send;
}
