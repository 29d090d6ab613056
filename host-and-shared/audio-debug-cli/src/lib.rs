mod cli;
pub mod sine;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` isn't set
const DEFAULT_LOG_FILTER: &str = "audio_debug_cli=info,audio_debug_device=info";

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the actual output, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli.command.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_parses() {
        let filter = tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        let text = filter.to_string();
        assert!(text.contains("audio_debug_cli=info"), "{text}");
        assert!(text.contains("audio_debug_device=info"), "{text}");
    }
}
