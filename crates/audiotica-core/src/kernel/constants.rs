/// Application name
pub const APP_NAME: &str = "Audiotica";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "audiotica.toml";

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "RUST_LOG";
