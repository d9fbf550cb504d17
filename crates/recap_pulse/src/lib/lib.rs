mod config;
mod error;
mod llm;
mod pipeline;
pub mod prompt;
pub mod segmenter;
pub mod server;
pub mod tracing;

pub use config::{GenerationParams, PipelineConfig};
pub use error::{PipelineError, SegmentFailure};
pub use llm::completion::{CompletionClient, CompletionError, CompletionRequest};
pub use llm::openai;
pub use pipeline::{
    builder::SummaryPipelineBuilder, PipelineOutput, SummaryPipeline, TranscriptRequest,
};
