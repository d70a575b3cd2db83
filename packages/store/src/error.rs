//! Error types shared by every [`crate::Backend`] implementation.

use thiserror::Error;

/// Failure of a call to the backend service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never got a response (offline, DNS, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The backend handle was shut down.
    #[error("backend is closed")]
    Closed,

    /// No backend host is configured.
    #[error("no backend host configured")]
    NoHost,
}

impl BackendError {
    /// Short text suitable for showing next to a form.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            BackendError::Rejected { message, .. } if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            BackendError::Rejected { status, .. } => {
                format!("The server rejected the request ({status}).")
            }
            BackendError::Decode(_) => "The server sent an unexpected response.".to_string(),
            BackendError::Closed => "The connection to the server was closed.".to_string(),
            BackendError::NoHost => "No server is configured.".to_string(),
        }
    }
}

/// Failure while loading [`crate::BackendConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("backend host must start with http:// or https://, got {0:?}")]
    InvalidHost(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = BackendError::Rejected {
            status: 422,
            message: "title must be unique".to_string(),
        };
        assert_eq!(err.user_message(), "title must be unique");

        let err = BackendError::Rejected {
            status: 500,
            message: "  ".to_string(),
        };
        assert_eq!(err.user_message(), "The server rejected the request (500).");
    }

    #[test]
    fn test_display() {
        let err = BackendError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn test_missing_host_is_not_a_closed_backend() {
        assert_eq!(BackendError::NoHost.to_string(), "no backend host configured");
        assert_ne!(BackendError::NoHost.user_message(), BackendError::Closed.user_message());
    }
}
