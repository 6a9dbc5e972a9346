use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// Logs go to stderr so the `today` command's stdout stays pure JSON.
/// `RUST_LOG` overrides the configured level when set.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let level = match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => "info",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to initialize tracing subscriber: {err}"))?;

    Ok(())
}
