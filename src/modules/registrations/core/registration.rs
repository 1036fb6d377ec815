use crate::shared::infrastructure::row_store::{CellValue, Row};
use chrono::{DateTime, Utc};

pub const REGISTRATION_HEADER: [&str; 5] =
    ["Timestamp", "Email", "AttendeeCount", "Date", "StatusLabel"];

pub const ATTENDEES_COLUMN: usize = 2;
pub const DATE_COLUMN: usize = 3;

/// Attendee value as it will be stored: the coerced integer, or the raw text when the
/// submission did not carry a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendeeCount {
    Parsed(i64),
    Unparsed(String),
}

impl AttendeeCount {
    pub fn to_cell(&self) -> CellValue {
        match self {
            AttendeeCount::Parsed(n) => CellValue::Integer(*n),
            AttendeeCount::Unparsed(raw) => CellValue::text(raw.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub timestamp: DateTime<Utc>,
    pub email: String,
    pub attendee_count: AttendeeCount,
    pub preferred_date: String,
    pub preferred_date_label: String,
}

impl Registration {
    pub fn to_row(&self) -> Row {
        vec![
            CellValue::Timestamp(self.timestamp),
            CellValue::text(self.email.clone()),
            self.attendee_count.to_cell(),
            CellValue::text(self.preferred_date.clone()),
            CellValue::text(self.preferred_date_label.clone()),
        ]
    }
}
