use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::error::PipelineError;

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no completion service credential was provided")]
    MissingCredentials,

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, code) = match &self {
            Self::MissingCredentials => (StatusCode::BAD_REQUEST, "missing_credentials"),
            Self::Pipeline(PipelineError::EmptyTranscript) => {
                (StatusCode::BAD_REQUEST, "empty_transcript")
            }
            Self::Pipeline(PipelineError::NoUsableInput { .. }) => {
                tracing::error!(error = %message, "no_usable_input");
                (StatusCode::BAD_GATEWAY, "no_usable_input")
            }
            Self::Pipeline(PipelineError::ReduceCallFailure(_)) => {
                tracing::error!(error = %message, "reduce_call_failure");
                (StatusCode::BAD_GATEWAY, "reduce_call_failure")
            }
            Self::Pipeline(PipelineError::Cancelled) => {
                tracing::error!(error = %message, "internal_error");
                sentry::capture_message(&message, sentry::Level::Error);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_server_error")
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetails {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}
