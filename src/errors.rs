use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The listing returned a continuation marker that was already followed
    #[error("Pagination did not progress: marker '{marker}' was returned twice")]
    PaginationStalled { marker: String },
}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn test_network_error_display() {
        let err = AppError::NetworkError("Connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_url_error_display() {
        let err = AppError::UrlError("relative URL without a base".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_io_error_display() {
        let err = AppError::IoError("permission denied".to_string());
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_invalid_input_error_display() {
        let err = AppError::InvalidInput("not a number".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_pagination_stalled_display_names_marker() {
        let err = AppError::PaginationStalled {
            marker: "libraries/z.zip".to_string(),
        };

        let error_msg = err.to_string();
        assert!(error_msg.contains("did not progress"));
        assert!(error_msg.contains("libraries/z.zip"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = io_err.into();
        assert!(matches!(err, AppError::IoError(_)));
    }

    #[test]
    fn test_app_error_implements_error_trait() {
        use std::error::Error;
        let err: Box<dyn Error> = Box::new(AppError::NetworkError("test".to_string()));
        assert!(!err.to_string().is_empty());
    }
}
