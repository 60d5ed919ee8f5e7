//! Uniform error type for film API operations

use serde_json::{json, Value};
use thiserror::Error;

/// Errors surfaced by `FilmClient` operations
///
/// Every failure collapses into one of three kinds: the call never reached
/// a server (`Unreachable`), a failure response arrived whose body is not
/// valid JSON (`UnparsableResponse`), or the server reported a failure with
/// a JSON diagnostic (`Server`, propagated verbatim). Log-in is the one
/// exception: its server rejection is narrowed to the `message` field of
/// the error body (`Rejected`).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Cannot communicate with the server.")]
    Unreachable,

    #[error("Cannot parse server response.")]
    UnparsableResponse,

    #[error("server reported a failure: {0}")]
    Server(Value),

    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Render the error as the JSON value the wire contract defines
    ///
    /// The two client-synthesized kinds become `{"error": "<text>"}`; a
    /// server diagnostic is returned verbatim; a log-in rejection is the
    /// bare message string.
    pub fn to_value(&self) -> Value {
        match self {
            ApiError::Unreachable | ApiError::UnparsableResponse => {
                json!({ "error": self.to_string() })
            }
            ApiError::Server(body) => body.clone(),
            ApiError::Rejected(message) => Value::String(message.clone()),
        }
    }
}
