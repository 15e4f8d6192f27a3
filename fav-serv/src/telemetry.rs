use tracing_subscriber::EnvFilter;

/// Installs the process-wide subscriber for the server binary.
///
/// `RUST_LOG` takes precedence over `default_filter`. Records emitted through
/// the `log` facade (actix's request `Logger` among them) are forwarded into
/// the same subscriber.
pub fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_filter),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install tracing subscriber: {}", e))
}
