use audiotica_core::kernel::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber and route `log` records into it.
///
/// Filter precedence: `--log-level`, then `RUST_LOG`, then the settings file.
pub fn init(cli_level: Option<&str>, settings_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(settings_level)),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;
    tracing::debug!("Logging initialized");
    Ok(())
}
