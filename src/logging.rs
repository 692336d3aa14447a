use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

pub fn init_tracing(logging_config: &LoggingConfig) -> Result<()> {
    if logging_config.filter.trim().is_empty() {
        return Err(anyhow!("logging.filter cannot be empty"));
    }

    let env_filter = build_env_filter(&logging_config.filter)?;

    let stderr_layer = if logging_config.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(false)
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(logging_config.ansi)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    tracing::info!(
        target: "logging",
        filter = %logging_config.filter,
        json = logging_config.json,
        "logging_initialized"
    );

    Ok(())
}

fn build_env_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter)
        .with_context(|| format!("failed to parse logging.filter '{}'", filter))
}
