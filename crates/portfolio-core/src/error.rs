//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio operations
///
/// Controllers never surface these for missing page elements; those are
/// logged and skipped. Errors only come from loading configuration and
/// persisting preferences.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during JSON serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The configured email pattern does not compile
    #[error("Invalid validation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A stored or configured theme name is not recognised
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Configuration is structurally valid JSON but semantically wrong
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::InvalidTheme("sepia".to_string());
        assert_eq!(format!("{}", err), "Invalid theme: sepia");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PortfolioError = json_err.into();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }
}
