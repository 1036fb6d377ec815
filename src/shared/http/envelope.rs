// Structured response envelope shared by every inbound HTTP adapter.
//
// `{success: true, data}` | `{success: true, message}` | `{success: false, error}`,
// rendered as bare JSON or wrapped as `callback(<json>)` for script-tag consumers.
// Failures are envelopes too: the status code is always 200.

use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use std::fmt::Display;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const SCRIPT_CONTENT_TYPE: &str = "application/javascript; charset=utf-8";

const MAX_CALLBACK_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<T> {
    Data(T),
    Message(String),
    Failure(String),
}

impl Envelope<()> {
    pub fn failure(error: impl Display) -> Self {
        Envelope::Failure(error.to_string())
    }

    pub fn message(message: impl Into<String>) -> Self {
        Envelope::Message(message.into())
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        match self {
            Envelope::Data(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Envelope::Message(message) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("message", message)?;
            }
            Envelope::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// A dotted JavaScript identifier such as `cb` or `jQuery.handlers._42`.
pub fn is_valid_callback(name: &str) -> bool {
    name.len() <= MAX_CALLBACK_LEN
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => chars
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
                _ => false,
            }
        })
}

/// Renders an envelope, wrapped in `callback(...)` when a non-empty callback is given.
pub fn render<T: Serialize>(envelope: &Envelope<T>, callback: Option<&str>) -> Response {
    let body = match serde_json::to_string(envelope) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialise response envelope");
            return render(&Envelope::failure(e), callback);
        }
    };

    match callback.filter(|c| !c.is_empty()) {
        None => ([(CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response(),
        Some(callback) if is_valid_callback(callback) => (
            [(CONTENT_TYPE, SCRIPT_CONTENT_TYPE)],
            format!("{callback}({body})"),
        )
            .into_response(),
        Some(callback) => {
            tracing::warn!(callback, "refusing to wrap response in invalid callback");
            render(&Envelope::failure("invalid callback"), None)
        }
    }
}
