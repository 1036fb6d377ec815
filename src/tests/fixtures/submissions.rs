// Shared builder for RegisterAttendance commands.

use crate::modules::registrations::use_cases::register_attendance::command::RegisterAttendance;
use crate::modules::registrations::use_cases::register_attendance::submission::Submission;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

pub struct RegisterAttendanceBuilder {
    inner: RegisterAttendance,
}

impl Default for RegisterAttendanceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterAttendanceBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterAttendance {
                submission: Submission {
                    email: Some(Value::from("a@b.com")),
                    date: Some(Value::from("2025-11-13")),
                    attendees: Some(Value::from("2")),
                },
                received_at: Utc.with_ymd_and_hms(2025, 11, 1, 18, 0, 0).unwrap(),
            },
        }
    }

    pub fn email(mut self, v: impl Into<Value>) -> Self {
        self.inner.submission.email = Some(v.into());
        self
    }

    pub fn date(mut self, v: impl Into<Value>) -> Self {
        self.inner.submission.date = Some(v.into());
        self
    }

    pub fn attendees(mut self, v: impl Into<Value>) -> Self {
        self.inner.submission.attendees = Some(v.into());
        self
    }

    pub fn without_email(mut self) -> Self {
        self.inner.submission.email = None;
        self
    }

    pub fn received_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.received_at = v;
        self
    }

    pub fn build(self) -> RegisterAttendance {
        self.inner
    }
}

#[cfg(test)]
mod register_attendance_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_defaults() {
        let received_at = Utc.with_ymd_and_hms(2025, 11, 10, 8, 0, 0).unwrap();
        let command = RegisterAttendanceBuilder::default()
            .email("c@d.com")
            .date("2025-11-18")
            .attendees(3)
            .received_at(received_at)
            .build();

        assert_eq!(command.submission.email, Some(Value::from("c@d.com")));
        assert_eq!(command.submission.date, Some(Value::from("2025-11-18")));
        assert_eq!(command.submission.attendees, Some(Value::from(3)));
        assert_eq!(command.received_at, received_at);
    }
}
