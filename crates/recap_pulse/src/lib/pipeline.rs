pub mod builder;

use futures::stream::{self, StreamExt};
use itertools::Itertools;
use tokio_util::sync::CancellationToken;

use crate::{
    config::PipelineConfig,
    error::{PipelineError, SegmentFailure},
    llm::completion::{CompletionClient, CompletionError, CompletionRequest},
    prompt,
    segmenter::{self, Segment},
};

/// One transcript to summarize, plus the title fields used for prompt
/// context. Nothing here outlives a single pipeline run.
#[derive(Debug, Clone)]
pub struct TranscriptRequest {
    pub podcast_title: String,
    pub episode_title: String,
    pub transcript: String,
}

/// The final summary, together with the intermediate state a caller needs
/// to judge how complete it is.
#[derive(Debug)]
pub struct PipelineOutput {
    /// The final summary text
    pub text: String,
    /// Successful partial summaries, in segment order
    pub partials: Vec<String>,
    /// Dispatched calls that failed; the summary covers only the rest
    pub failed_segments: Vec<SegmentFailure>,
    /// Segments beyond the outbound call budget that were never dispatched
    pub dropped_segments: usize,
}

/// The chunk-and-reduce summarization pipeline.
///
/// Oversized transcripts are split into bounded word segments, each segment
/// is summarized by one concurrent completion call, and partial summaries
/// are folded into a final summary by at most one extra call. Outbound
/// calls per run never exceed `max_requests + 1`.
pub struct SummaryPipeline<C>
where
    C: CompletionClient + Send + Sync + 'static,
{
    client: C,
    config: PipelineConfig,
    cancel: CancellationToken,
}

impl<C> SummaryPipeline<C>
where
    C: CompletionClient + Send + Sync + 'static,
{
    fn new(client: C, config: PipelineConfig, cancel: CancellationToken) -> Self {
        SummaryPipeline {
            client,
            config,
            cancel,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the full pipeline for one transcript.
    ///
    /// Fails fast with [`PipelineError::EmptyTranscript`] before dispatching
    /// anything. A failed segment call does not abort its siblings; the run
    /// proceeds over the successful subset and only fails with
    /// [`PipelineError::NoUsableInput`] when that subset is empty.
    #[tracing::instrument(skip_all, fields(podcast_title = %request.podcast_title, episode_title = %request.episode_title))]
    pub async fn summarize(
        &self,
        request: &TranscriptRequest,
    ) -> Result<PipelineOutput, PipelineError> {
        if request.transcript.split_whitespace().next().is_none() {
            return Err(PipelineError::EmptyTranscript);
        }
        if self.cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }

        let mut segments =
            segmenter::segment(&request.transcript, self.config.max_words_per_segment);

        let dropped_segments = segments.len().saturating_sub(self.config.max_requests);
        if dropped_segments > 0 {
            tracing::warn!(
                total_segments = segments.len(),
                max_requests = self.config.max_requests,
                dropped_segments,
                "Transcript exceeds the outbound call budget; trailing segments will not be summarized"
            );
            segments.truncate(self.config.max_requests);
        }

        tracing::info!(count = segments.len(), "Dispatching segment summaries");
        let results = self.dispatch(&segments, request).await;

        if self.cancel.is_cancelled() {
            return Err(PipelineError::Cancelled);
        }

        // read results back in segment order; completion order carries no meaning
        let mut partials = Vec::new();
        let mut failed_segments = Vec::new();
        for (index, result) in results.into_iter().sorted_by_key(|(index, _)| *index) {
            match result {
                Ok(text) => partials.push(text),
                Err(error) => {
                    tracing::warn!(segment = index, error = %error, "Segment call failed");
                    failed_segments.push(SegmentFailure { index, error });
                }
            }
        }

        if partials.is_empty() {
            return Err(PipelineError::NoUsableInput {
                failures: failed_segments,
            });
        }

        let text = if partials.len() == 1 {
            partials[0].clone()
        } else {
            self.reduce(&partials, request).await?
        };

        Ok(PipelineOutput {
            text,
            partials,
            failed_segments,
            dropped_segments,
        })
    }

    /// Fans out one completion call per segment, all concurrent, and waits
    /// for every call to settle. Each branch owns exactly one segment index,
    /// so results need no shared ordering state.
    async fn dispatch(
        &self,
        segments: &[Segment],
        request: &TranscriptRequest,
    ) -> Vec<(usize, Result<String, CompletionError>)> {
        let calls: Vec<_> = segments.iter().map(|seg| {
            let completion = CompletionRequest {
                prompt: prompt::build_segment_prompt(
                    &seg.text,
                    &request.podcast_title,
                    &request.episode_title,
                ),
                model: self.config.model.clone(),
                temperature: self.config.segment_params.temperature,
                max_tokens: self.config.segment_params.max_tokens,
            };
            let index = seg.index;
            async move { (index, self.call_once(completion).await) }
        }).collect();

        stream::iter(calls)
            .buffer_unordered(self.config.max_requests.max(1))
            .collect()
            .await
    }

    #[tracing::instrument(skip_all, fields(partials = partials.len()))]
    async fn reduce(
        &self,
        partials: &[String],
        request: &TranscriptRequest,
    ) -> Result<String, PipelineError> {
        let completion = CompletionRequest {
            prompt: prompt::build_reduce_prompt(
                partials,
                &request.podcast_title,
                &request.episode_title,
            ),
            model: self.config.model.clone(),
            temperature: self.config.reduce_params.temperature,
            max_tokens: self.config.reduce_params.max_tokens,
        };

        self.call_once(completion).await.map_err(|e| match e {
            CompletionError::Cancelled => PipelineError::Cancelled,
            other => PipelineError::ReduceCallFailure(other),
        })
    }

    /// Exactly one attempt per call: no retries, but a deadline and a
    /// cancellation race so one stuck call cannot stall the whole run.
    async fn call_once(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(CompletionError::Cancelled),
            outcome = tokio::time::timeout(self.config.call_timeout, self.client.complete(request)) => {
                match outcome {
                    Ok(result) => result,
                    Err(_) => Err(CompletionError::Timeout(self.config.call_timeout)),
                }
            }
        }
    }
}
