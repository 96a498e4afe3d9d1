//! Error types for the TUI.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_convert() {
        let err = TuiError::from(ConfigError::MissingConfigPath);
        assert!(matches!(err, TuiError::Config(ConfigError::MissingConfigPath)));
        assert!(err.to_string().contains("--config"));
    }

    #[test]
    fn test_io_errors_convert() {
        let err = TuiError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, TuiError::Io(_)));
        assert_eq!(err.to_string(), "IO error: gone");
    }
}
