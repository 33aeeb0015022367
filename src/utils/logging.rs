use anyhow::Error;
use tracing::span::Span;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber of the bot.
pub fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("marvin=info")),
        )
        .init();
}

pub trait LogError {
    fn log_error(&self, error: Error);
}

impl LogError for Span {
    fn log_error(&self, error: Error) {
        self.in_scope(|| {
            tracing::error!("Error: {error:?}");
        });
    }
}
