use crate::modules::registrations::use_cases::register_attendance::submission::Submission;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterAttendance {
    pub submission: Submission,
    pub received_at: DateTime<Utc>,
}
