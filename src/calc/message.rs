//! Messages returned alongside a calculation.

use serde::Serialize;

use crate::validate::{primitives, Validator};

/// Urgency of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Informational.
    Info,
    /// Something the user should look at.
    Warn,
    /// The calculation could not be completed as requested.
    Error,
}

impl Level {
    /// Wire names of the levels.
    pub const NAMES: &'static [(&'static str, Self)] =
        &[("info", Self::Info), ("warn", Self::Warn), ("error", Self::Error)];
}

/// A message from the calculation service, possibly to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Urgency of the message.
    pub level: Level,
    /// The message text.
    pub text: String,
}

/// Accepts a message object.
#[must_use]
pub fn message() -> Validator<Message> {
    let level = primitives::keyword("Level", Level::NAMES);
    Validator::object("Message", move |object| {
        object
            .field("level", &level)
            .map2(object.field("text", &primitives::string()), |level, text| {
                Message { level, text }
            })
    })
}
