//! The calculation round trip.
//!
//! A calculation request is a JSON object whose slots are [`Want`]s: the
//! service fills in every slot the client asks for and may attach
//! [`Message`]s. Transport is delegated to a [`Requestor`], so the round trip
//! can run against any HTTP client, or an in-memory double in tests.
//!
//! # Example
//!
//! ```
//! use opening_optics::calc::{calc, CalcConfig, Method, Requestor, TransportError, Want, want};
//! use opening_optics::validate::{primitives, Validator};
//! use serde_json::{json, Value};
//!
//! struct Echo;
//!
//! impl Requestor for Echo {
//!     async fn request(
//!         &self,
//!         _path: &str,
//!         _method: Method,
//!         _body: Option<Value>,
//!     ) -> Result<String, TransportError> {
//!         Ok(json!({ "price": 120, "messages": [] }).to_string())
//!     }
//! }
//!
//! # tokio_test(async {
//! let price = Validator::object("Price", |object| {
//!     object.field("price", &want(primitives::boolean(), primitives::number()))
//! });
//! let calculated = calc(&Echo, &CalcConfig::default(), &json!({ "price": true }), &price)
//!     .await
//!     .unwrap();
//! assert_eq!(calculated.value, Want::Resolved(120.0));
//! # });
//! # fn tokio_test<F: std::future::Future>(future: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(future)
//! # }
//! ```

mod config;
mod drawings;
mod error;
mod message;
mod projection;
mod requestor;
mod want;

pub use config::{CalcConfig, ConfigError, CALC_PATH_VAR};
pub use drawings::{draw, get_drawings, get_drawings_response, Draw, Drawings, GetDrawings, RulerDirection};
pub use error::CalcError;
pub use message::{message, Level, Message};
pub use projection::{projection, Projection};
pub use requestor::{Method, Requestor, TransportError};
pub use want::{want, Want};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::validate::{FieldPath, Validated, Validator};

/// A calculated response, with the messages returned alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculated<T> {
    /// The validated response.
    pub value: T,
    /// Messages returned by the service, in order.
    pub messages: Vec<Message>,
}

/// Sends `wants` to the calculation service and validates the response.
///
/// The response must match `validator`, and its optional `messages` field
/// must be an array of [`Message`]s. Messages of level `warn` or `error` are
/// logged and returned; they do not fail the calculation.
///
/// # Errors
///
/// - [`CalcError::Encode`] if `wants` cannot be serialized
/// - [`CalcError::Transport`] if the requestor fails
/// - [`CalcError::Malformed`] if the response is not JSON
/// - [`CalcError::Invalid`] with every mismatch if the response has the wrong shape
pub async fn calc<R, W, T>(
    requestor: &R,
    config: &CalcConfig,
    wants: &W,
    validator: &Validator<T>,
) -> Result<Calculated<T>, CalcError>
where
    R: Requestor,
    W: Serialize + ?Sized,
    T: 'static,
{
    let body = serde_json::to_value(wants).map_err(CalcError::Encode)?;
    debug!(path = %config.calc_path, shape = validator.name(), "sending calculation");

    let text = requestor
        .request(&config.calc_path, Method::Post, Some(body))
        .await?;
    debug!(path = %config.calc_path, bytes = text.len(), "received calculation");

    let response: Value = serde_json::from_str(&text).map_err(CalcError::Malformed)?;
    let calculated = validator
        .validate(&response)
        .map2(messages(&response), |value, messages| Calculated { value, messages })
        .to_result()?;

    for message in &calculated.messages {
        if message.level >= Level::Warn {
            warn!(level = ?message.level, text = %message.text, "calculation message");
        }
    }
    Ok(calculated)
}

fn messages(response: &Value) -> Validated<Vec<Message>> {
    match response.get("messages") {
        Some(found) => message()
            .array()
            .validate_at(found, &FieldPath::root().field("messages")),
        None => Validated::valid(Vec::new()),
    }
}
