use thiserror::Error;

/// Errors emitted while reading the settings file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
}
