//! Error types for the back-office client.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Request failures are normalized into a fixed set of categories whose
//! `Display` text is the message shown to the user.

use thiserror::Error;

/// Generic message used when a 400 response carries no server message.
pub const INVALID_DATA_MESSAGE: &str = "Invalid data submitted.";

/// The main error type for the back-office client.
///
/// Every failed request is classified exactly once into one of the
/// request variants; the remaining variants cover configuration loading.
///
/// # Example
///
/// ```
/// use backoffice_client::error::ClientError;
///
/// let error = ClientError::NotFound;
/// assert_eq!(error.to_string(), "The requested resource was not found.");
/// assert_eq!(error.status(), Some(404));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No response reached the client (connection refused, DNS, TLS, decode).
    #[error("Network error: {message}")]
    Transport {
        /// Text of the underlying transport error.
        message: String,
    },

    /// The server rejected the submitted data (HTTP 400).
    #[error("{message}")]
    Validation {
        /// Server-supplied message, or the generic invalid-data message.
        message: String,
    },

    /// The session is no longer valid (HTTP 401).
    #[error("Session expired. Please sign in again.")]
    SessionExpired,

    /// The caller lacks permission (HTTP 403).
    #[error("You do not have permission to perform this action.")]
    Forbidden,

    /// The resource does not exist (HTTP 404).
    #[error("The requested resource was not found.")]
    NotFound,

    /// The server failed internally (HTTP 500).
    #[error("Internal server error. Please try again later.")]
    ServerError,

    /// Any other non-success status.
    #[error("Error {status}: {status_text}")]
    UnclassifiedHttp {
        /// The numeric HTTP status code.
        status: u16,
        /// The status reason phrase.
        status_text: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was present but unusable.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl ClientError {
    /// Returns true if this error came out of a wrapped request rather
    /// than configuration loading.
    pub fn is_request_failure(&self) -> bool {
        !matches!(
            self,
            ClientError::ConfigNotFound { .. }
                | ClientError::ConfigParseError { .. }
                | ClientError::InvalidConfig { .. }
        )
    }

    /// Returns the HTTP status associated with the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Validation { .. } => Some(400),
            ClientError::SessionExpired => Some(401),
            ClientError::Forbidden => Some(403),
            ClientError::NotFound => Some(404),
            ClientError::ServerError => Some(500),
            ClientError::UnclassifiedHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A type alias for Results that return ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_displays_underlying_text() {
        let error = ClientError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Network error: connection refused");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_validation_displays_message_verbatim() {
        let error = ClientError::Validation {
            message: "Employee id is required".to_string(),
        };
        assert_eq!(error.to_string(), "Employee id is required");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            ClientError::SessionExpired.to_string(),
            "Session expired. Please sign in again."
        );
        assert_eq!(
            ClientError::Forbidden.to_string(),
            "You do not have permission to perform this action."
        );
        assert_eq!(
            ClientError::ServerError.to_string(),
            "Internal server error. Please try again later."
        );
    }

    #[test]
    fn test_unclassified_displays_status_and_text() {
        let error = ClientError::UnclassifiedHttp {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "Error 503: Service Unavailable");
        assert_eq!(error.status(), Some(503));
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ClientError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
        assert!(!error.is_request_failure());
    }

    #[test]
    fn test_request_failures_are_flagged() {
        assert!(ClientError::NotFound.is_request_failure());
        assert!(
            ClientError::Transport {
                message: "timeout".to_string()
            }
            .is_request_failure()
        );
        assert!(
            !ClientError::ConfigNotFound {
                path: "/missing".to_string()
            }
            .is_request_failure()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ClientError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_forbidden() -> ClientResult<()> {
            Err(ClientError::Forbidden)
        }

        fn propagates_error() -> ClientResult<()> {
            returns_forbidden()?;
            Ok(())
        }

        assert_eq!(propagates_error(), Err(ClientError::Forbidden));
    }
}
