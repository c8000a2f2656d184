//! Failure classification: maps a transport or status outcome to one
//! user-facing [`ClientError`].

use serde_json::Value;

use crate::error::{ClientError, INVALID_DATA_MESSAGE};

/// How a request failed, as reported by the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestFailure {
    /// No response was received.
    Transport {
        /// Text of the underlying transport error.
        message: String,
    },
    /// The server answered with a non-success status.
    Status {
        /// The HTTP status code.
        status: u16,
        /// The status reason phrase.
        status_text: String,
        /// The response body, if it was JSON.
        body: Option<Value>,
    },
}

impl RequestFailure {
    /// Creates a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        RequestFailure::Transport {
            message: message.into(),
        }
    }

    /// Creates a status failure.
    pub fn status(status: u16, status_text: impl Into<String>, body: Option<Value>) -> Self {
        RequestFailure::Status {
            status,
            status_text: status_text.into(),
            body,
        }
    }
}

/// Classifies a failure into exactly one category.
///
/// Precedence: transport failures first, then 400, 401, 403, 404 and 500,
/// then any other status. A 400 prefers the string `message` field of the
/// response body.
///
/// # Examples
///
/// ```
/// use backoffice_client::error::ClientError;
/// use backoffice_client::pipeline::{classify, RequestFailure};
/// use serde_json::json;
///
/// let failure = RequestFailure::status(400, "Bad Request", Some(json!({"message": "Shift overlaps"})));
/// assert_eq!(classify(&failure).to_string(), "Shift overlaps");
///
/// let failure = RequestFailure::status(401, "Unauthorized", None);
/// assert_eq!(classify(&failure), ClientError::SessionExpired);
/// ```
pub fn classify(failure: &RequestFailure) -> ClientError {
    match failure {
        RequestFailure::Transport { message } => ClientError::Transport {
            message: message.clone(),
        },
        RequestFailure::Status {
            status,
            status_text,
            body,
        } => match status {
            400 => ClientError::Validation {
                message: server_message(body.as_ref())
                    .unwrap_or_else(|| INVALID_DATA_MESSAGE.to_string()),
            },
            401 => ClientError::SessionExpired,
            403 => ClientError::Forbidden,
            404 => ClientError::NotFound,
            500 => ClientError::ServerError,
            _ => ClientError::UnclassifiedHttp {
                status: *status,
                status_text: status_text.clone(),
            },
        },
    }
}

fn server_message(body: Option<&Value>) -> Option<String> {
    body?
        .get("message")?
        .as_str()
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}
