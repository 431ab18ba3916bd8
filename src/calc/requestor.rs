//! The transport seam of the calculation round trip.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`, sent without a body.
    Get,
    /// `POST`, sent with a JSON body.
    Post,
}

impl Method {
    /// The method as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Errors raised by a [`Requestor`] before a response body is available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },
    /// The server refused the request signature.
    #[error("request signature was rejected")]
    SignatureRejected,
    /// The request never reached the server.
    #[error("connection failed: {0}")]
    Connection(String),
}

/// Makes authenticated JSON requests of the calculation service.
///
/// Implementations own the connection, the service root and the request
/// signing; callers only supply a path relative to the root.
///
/// # Example Implementation
///
/// ```
/// use opening_optics::calc::{Method, Requestor, TransportError};
/// use serde_json::Value;
///
/// struct Offline;
///
/// impl Requestor for Offline {
///     async fn request(
///         &self,
///         _path: &str,
///         _method: Method,
///         _body: Option<Value>,
///     ) -> Result<String, TransportError> {
///         Err(TransportError::Connection("offline".to_string()))
///     }
/// }
/// ```
pub trait Requestor: Send + Sync {
    /// Sends `body` to `path` and returns the raw response text.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no successful response arrives.
    fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}
