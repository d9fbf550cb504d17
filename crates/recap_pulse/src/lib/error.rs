use crate::llm::completion::CompletionError;

/// A dispatched segment call that did not produce a usable partial summary.
#[derive(Debug)]
pub struct SegmentFailure {
    /// 0-based index of the originating segment
    pub index: usize,
    pub error: CompletionError,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("transcript contains no words")]
    EmptyTranscript,
    #[error("no segment produced a usable partial summary ({} call(s) failed)", .failures.len())]
    NoUsableInput { failures: Vec<SegmentFailure> },
    #[error("final reduce call failed: {0}")]
    ReduceCallFailure(#[source] CompletionError),
    #[error("summarization run was cancelled")]
    Cancelled,
}
