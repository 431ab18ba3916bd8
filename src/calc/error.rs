//! Errors of the calculation round trip.

use thiserror::Error;

use super::message::Message;
use super::requestor::TransportError;
use crate::validate::ValidationErrors;

/// Errors that can occur while calculating.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The request could not be serialized.
    #[error("failed to encode the request: {0}")]
    Encode(#[source] serde_json::Error),
    /// The transport failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response is not JSON.
    #[error("response is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    /// The response does not have the expected shape.
    #[error("response failed validation: {0}")]
    Invalid(#[from] ValidationErrors),
    /// The service returned a different number of drawings than requested.
    #[error("expected {expected} drawings, received {received}")]
    DrawingCount {
        /// Number of drawings requested.
        expected: usize,
        /// Number of drawings returned.
        received: usize,
        /// Messages returned with the response.
        messages: Vec<Message>,
    },
}
