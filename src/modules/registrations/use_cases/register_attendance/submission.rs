use crate::modules::registrations::core::attendees::coerce_attendees;
use crate::modules::registrations::core::registration::AttendeeCount;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required fields")]
    MissingRequiredFields,
}

/// Submission payload as received. Extra fields are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub email: Option<Value>,
    pub date: Option<Value>,
    pub attendees: Option<Value>,
}

impl Submission {
    /// Anything other than a JSON object yields a submission with every field absent.
    pub fn from_value(value: &Value) -> Self {
        Self {
            email: value.get("email").cloned(),
            date: value.get("date").cloned(),
            attendees: value.get("attendees").cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub email: String,
    pub date: String,
    /// Attendee value as the user typed it, for echoing back in the confirmation.
    pub attendees_display: String,
    pub attendees: AttendeeCount,
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn required(value: &Option<Value>) -> Result<&Value, ValidationError> {
    value
        .as_ref()
        .filter(|v| !is_falsy(v))
        .ok_or(ValidationError::MissingRequiredFields)
}

/// Presence check plus attendee coercion. A non-numeric attendee value is not an error
/// here; it is kept verbatim and left out of the statistics later.
pub fn validate(submission: &Submission) -> Result<ValidSubmission, ValidationError> {
    let email = required(&submission.email)?;
    let date = required(&submission.date)?;
    let attendees = required(&submission.attendees)?;

    let attendees_display = as_text(attendees);
    let attendees = match coerce_attendees(attendees) {
        Some(n) => AttendeeCount::Parsed(n),
        None => AttendeeCount::Unparsed(attendees_display.clone()),
    };

    Ok(ValidSubmission {
        email: as_text(email),
        date: as_text(date),
        attendees_display,
        attendees,
    })
}
