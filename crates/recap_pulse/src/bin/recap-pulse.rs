use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{Parser, Subcommand};
use recap_pulse::{
    openai::OpenAIClient,
    server::{self, AppState},
    tracing::init_tracing_subscriber,
    PipelineConfig, SummaryPipelineBuilder, TranscriptRequest,
};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "recap-pulse", about = "Podcast transcript summarizer")]
struct Cli {
    /// OpenAI API key; optional when callers supply one per request
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: Option<String>,

    /// Completion model identifier
    #[arg(long, env = "COMPLETION_MODEL", default_value = "gpt-4o-mini")]
    model: String,

    /// Maximum words per transcript segment
    #[arg(long, default_value = "2000")]
    max_words_per_segment: usize,

    /// Maximum concurrent segment-level completion calls per run
    #[arg(long, default_value = "5")]
    max_requests: usize,

    /// Per-call timeout in seconds
    #[arg(long, default_value = "60")]
    call_timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize one transcript file and print the summary
    Run {
        /// Path to the transcript text file
        transcript: PathBuf,

        #[arg(long)]
        podcast_title: String,

        #[arg(long)]
        episode_title: String,
    },
    /// Start the HTTP summarization service
    Serve {
        /// Address to bind
        #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = PipelineConfig {
        model: cli.model,
        max_words_per_segment: cli.max_words_per_segment,
        max_requests: cli.max_requests,
        call_timeout: Duration::from_secs(cli.call_timeout_secs),
        ..PipelineConfig::default()
    };

    match cli.command {
        Command::Run {
            transcript,
            podcast_title,
            episode_title,
        } => {
            let api_key = cli.openai_key.context("OPENAI_API_KEY not set")?;
            let text = tokio::fs::read_to_string(&transcript)
                .await
                .with_context(|| format!("Failed to read {}", transcript.display()))?;

            let pipeline = SummaryPipelineBuilder::new()
                .completion_client(OpenAIClient::new(api_key))
                .config(config)
                .build();

            let output = pipeline
                .summarize(&TranscriptRequest {
                    podcast_title,
                    episode_title,
                    transcript: text,
                })
                .await?;

            if output.dropped_segments > 0 {
                tracing::warn!(
                    dropped_segments = output.dropped_segments,
                    "Summary omits trailing transcript segments beyond the call budget"
                );
            }
            if !output.failed_segments.is_empty() {
                tracing::warn!(
                    failed_segments = output.failed_segments.len(),
                    "Summary covers only the segments that succeeded"
                );
            }

            println!("{}", output.text);
        }
        Command::Serve { bind } => {
            let shutdown = CancellationToken::new();
            let signal_token = shutdown.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("Shutdown signal received");
                    signal_token.cancel();
                }
            });

            let state = AppState {
                http_client: reqwest::Client::new(),
                api_key: cli.openai_key,
                completion_base_url: None,
                config,
            };

            server::serve(bind, state, shutdown).await?;
        }
    }

    Ok(())
}
