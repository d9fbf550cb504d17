use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::{
    config::{GenerationParams, PipelineConfig},
    CompletionClient, SummaryPipeline,
};

pub struct SummaryPipelineBuilder<C = ()> {
    client: C,
    config: PipelineConfig,
    cancel: CancellationToken,
}

impl SummaryPipelineBuilder {
    pub fn new() -> Self {
        Self {
            client: (),
            config: PipelineConfig::default(),
            cancel: CancellationToken::new(),
        }
    }
}

impl Default for SummaryPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> SummaryPipelineBuilder<C> {
    pub fn completion_client<C2: CompletionClient + Send + Sync + 'static>(
        self,
        client: C2,
    ) -> SummaryPipelineBuilder<C2> {
        SummaryPipelineBuilder {
            client,
            config: self.config,
            cancel: self.cancel,
        }
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn max_words_per_segment(mut self, max_words_per_segment: usize) -> Self {
        self.config.max_words_per_segment = max_words_per_segment;
        self
    }

    pub fn max_requests(mut self, max_requests: usize) -> Self {
        self.config.max_requests = max_requests;
        self
    }

    pub fn segment_params(mut self, params: GenerationParams) -> Self {
        self.config.segment_params = params;
        self
    }

    pub fn reduce_params(mut self, params: GenerationParams) -> Self {
        self.config.reduce_params = params;
        self
    }

    pub fn call_timeout(mut self, call_timeout: Duration) -> Self {
        self.config.call_timeout = call_timeout;
        self
    }

    pub fn cancellation_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }
}

impl<C> SummaryPipelineBuilder<C>
where
    C: CompletionClient + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryPipeline<C> {
        SummaryPipeline::new(self.client, self.config, self.cancel)
    }
}
