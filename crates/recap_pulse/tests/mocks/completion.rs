use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use recap_pulse::{CompletionClient, CompletionError, CompletionRequest};

#[derive(Clone, Default)]
pub struct MockCompletionClient {
    pub response: String,
    /// When set, respond with the request prompt instead of `response`
    pub echo: bool,
    pub calls: Arc<Mutex<Vec<CompletionRequest>>>,
    /// Fail any call whose prompt contains this needle
    pub fail_when: Option<String>,
    pub fail_all: bool,
    /// Fail every call except the n-th one received (0-based)
    pub succeed_only_call: Option<usize>,
    pub delay: Option<Duration>,
}

impl MockCompletionClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            ..Default::default()
        }
    }

    pub fn echoing() -> Self {
        Self {
            echo: true,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Default::default()
        }
    }

    pub fn failing_when(response: &str, needle: &str) -> Self {
        Self {
            response: response.to_string(),
            fail_when: Some(needle.to_string()),
            ..Default::default()
        }
    }

    pub fn succeeding_only_call(response: &str, call: usize) -> Self {
        Self {
            response: response.to_string(),
            succeed_only_call: Some(call),
            ..Default::default()
        }
    }

    pub fn stalling(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }
}

impl CompletionClient for MockCompletionClient {
    const DEFAULT_MODEL: &str = "mock-model";

    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(request.clone());
            calls.len() - 1
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_all {
            return Err(CompletionError::ServiceUnavailable("mock outage".into()));
        }
        if let Some(only) = self.succeed_only_call {
            if call_index != only {
                return Err(CompletionError::ServiceUnavailable("mock outage".into()));
            }
        }
        if let Some(needle) = &self.fail_when {
            if request.prompt.contains(needle) {
                return Err(CompletionError::RateLimited);
            }
        }

        if self.echo {
            return Ok(request.prompt);
        }
        Ok(self.response.clone())
    }
}
