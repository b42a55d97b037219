//! Unified error taxonomy shared by both transports.
//!
//! Every public operation either returns a fully-populated typed result or
//! one of the variants below; partial results are never returned on error
//! paths. Server-side failures keep the server's error code and reason
//! verbatim so callers can distinguish business errors (collection not
//! found, wrong old password) from transport faults.

use milvus_client_proto::common::{ErrorCode, Status};

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Client error taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A client-side parameter invariant was violated before any I/O.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// Connection, TLS, per-call timeout, or other transport-level failure.
    #[error("transport failure in {operation}: {message}")]
    Transport {
        /// Operation label for tracing failures.
        operation: &'static str,
        /// Transport-level failure description.
        message: String,
    },

    /// The server returned a non-success `Status`; code and reason are kept
    /// verbatim. No other response field is interpreted when this is raised.
    #[error("server error {code} in {operation}: {reason}")]
    Server {
        /// Operation label for tracing failures.
        operation: &'static str,
        /// Raw `common.ErrorCode` value from the response status.
        code: i32,
        /// Human-readable reason from the response status.
        reason: String,
    },

    /// The operation is not implemented by the selected transport.
    #[error("{operation} is not supported over the {transport} transport")]
    NotSupported {
        /// Operation label.
        operation: &'static str,
        /// Transport name (`grpc` or `rest`).
        transport: &'static str,
    },

    /// A bounded polling helper exceeded its caller-supplied deadline.
    #[error("timed out waiting for {0}")]
    Timeout(&'static str),

    /// A wire payload could not be converted into the typed client model.
    #[error("failed to decode {context}: {message}")]
    Decode {
        /// What was being decoded (field name, response kind).
        context: String,
        /// Decode failure description.
        message: String,
    },

    /// The request context was cancelled before or during the call.
    #[error("operation cancelled during {0}")]
    Cancelled(&'static str),
}

impl Error {
    /// Builds a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Builds a transport error for the given operation.
    pub fn transport(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    /// Builds a decode error.
    pub fn decode(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Builds a not-supported error for a transport/operation pair.
    #[must_use]
    pub const fn not_supported(operation: &'static str, transport: &'static str) -> Self {
        Self::NotSupported {
            operation,
            transport,
        }
    }

    /// Returns the server error code when this is a `Server` error and the
    /// code is a known `common.ErrorCode` value.
    #[must_use]
    pub fn server_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Server { code, .. } => ErrorCode::try_from(*code).ok(),
            _ => None,
        }
    }

    /// Returns true when the error came from cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

/// Checks a response status and translates non-success into `Error::Server`.
///
/// An absent status is treated as success; some RPC responses omit it on
/// the happy path.
pub fn check_status(status: Option<&Status>, operation: &'static str) -> Result<()> {
    let Some(status) = status else {
        return Ok(());
    };
    if status.error_code == ErrorCode::Success as i32 {
        return Ok(());
    }
    tracing::debug!(
        operation,
        code = status.error_code,
        reason = %status.reason,
        "milvus returned non-success status"
    );
    Err(Error::Server {
        operation,
        code: status.error_code,
        reason: status.reason.clone(),
    })
}

/// Maps a tonic transport status into the client taxonomy.
pub fn map_grpc_status(status: &tonic::Status, operation: &'static str) -> Error {
    if status.code() == tonic::Code::Cancelled {
        return Error::Cancelled(operation);
    }
    Error::transport(
        operation,
        format!("{}: {}", status.code(), status.message()),
    )
}

/// Maps a reqwest transport error into the client taxonomy.
pub fn map_rest_transport(error: &reqwest::Error, operation: &'static str) -> Error {
    if error.is_timeout() {
        return Error::transport(operation, format!("request timed out: {error}"));
    }
    if error.is_connect() {
        return Error::transport(operation, format!("connection failed: {error}"));
    }
    Error::transport(operation, error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_never_errors() {
        let status = Status {
            error_code: ErrorCode::Success as i32,
            reason: String::new(),
        };
        assert!(check_status(Some(&status), "test.op").is_ok());
        assert!(check_status(None, "test.op").is_ok());
    }

    #[test]
    fn non_success_status_keeps_code_and_reason() {
        let status = Status {
            error_code: ErrorCode::CollectionNotExists as i32,
            reason: "collection Books does not exist".to_owned(),
        };
        let error = match check_status(Some(&status), "test.op") {
            Err(error) => error,
            Ok(()) => {
                assert!(false, "expected a server error");
                return;
            },
        };
        match error {
            Error::Server {
                code,
                reason,
                operation,
            } => {
                assert_eq!(code, ErrorCode::CollectionNotExists as i32);
                assert_eq!(reason, "collection Books does not exist");
                assert_eq!(operation, "test.op");
            },
            other => assert!(false, "expected Server variant, got {other:?}"),
        }
    }

    #[test]
    fn cancelled_grpc_status_maps_to_cancelled() {
        let status = tonic::Status::cancelled("client hung up");
        assert!(map_grpc_status(&status, "test.op").is_cancelled());
    }
}
