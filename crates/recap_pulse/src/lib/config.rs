use std::time::Duration;

/// Sampling parameters for a single completion call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Tunable knobs for one summarization run.
///
/// Segment-level calls get a smaller output budget than the final reduce
/// call, which has to cover the whole episode.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Completion model identifier sent with every request
    pub model: String,
    /// Maximum whitespace-delimited words per transcript segment
    pub max_words_per_segment: usize,
    /// Hard cap on outbound segment-level completion calls per run
    pub max_requests: usize,
    /// Sampling parameters for per-segment calls
    pub segment_params: GenerationParams,
    /// Sampling parameters for the final reduce call
    pub reduce_params: GenerationParams,
    /// Per-call deadline; a stalled call fails instead of stalling the run
    pub call_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            model: "gpt-4o-mini".into(),
            max_words_per_segment: 2000,
            max_requests: 5,
            segment_params: GenerationParams {
                temperature: 0.7,
                max_tokens: 250,
            },
            reduce_params: GenerationParams {
                temperature: 0.7,
                max_tokens: 500,
            },
            call_timeout: Duration::from_secs(60),
        }
    }
}
