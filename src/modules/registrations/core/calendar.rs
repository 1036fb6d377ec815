// The fixed set of workshop dates on offer, in the order they are presented.
//
// Built once at startup and shared read-only by the ingest path (display labels)
// and the statistics path (snapshot key set).

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("workshop calendar needs at least one offered date")]
    Empty,

    #[error("offered date `{0}` is not a YYYY-MM-DD date")]
    InvalidDate(String),

    #[error("offered date `{0}` is listed twice")]
    Duplicate(String),

    #[error("entry `{0}` is not of the form YYYY-MM-DD=Label")]
    MalformedEntry(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferedDate {
    pub iso_date: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkshopCalendar {
    dates: Vec<OfferedDate>,
}

impl WorkshopCalendar {
    pub fn new(dates: Vec<OfferedDate>) -> Result<Self, CalendarError> {
        if dates.is_empty() {
            return Err(CalendarError::Empty);
        }
        let mut seen: Vec<&str> = Vec::with_capacity(dates.len());
        for date in &dates {
            if NaiveDate::parse_from_str(&date.iso_date, "%Y-%m-%d").is_err()
                || date.iso_date.len() != 10
            {
                return Err(CalendarError::InvalidDate(date.iso_date.clone()));
            }
            if seen.contains(&date.iso_date.as_str()) {
                return Err(CalendarError::Duplicate(date.iso_date.clone()));
            }
            seen.push(&date.iso_date);
        }
        Ok(Self { dates })
    }

    /// Parses `YYYY-MM-DD=Label` entries separated by `|`.
    ///
    /// Labels may contain `=`, only the first one splits key from label.
    pub fn parse(spec: &str) -> Result<Self, CalendarError> {
        let dates = spec
            .split('|')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| -> Result<OfferedDate, CalendarError> {
                let (iso_date, label) = entry
                    .split_once('=')
                    .ok_or_else(|| CalendarError::MalformedEntry(entry.to_string()))?;
                let label = label.trim();
                if label.is_empty() {
                    return Err(CalendarError::MalformedEntry(entry.to_string()));
                }
                Ok(OfferedDate {
                    iso_date: iso_date.trim().to_string(),
                    label: label.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(dates)
    }

    pub fn dates(&self) -> &[OfferedDate] {
        &self.dates
    }

    pub fn is_offered(&self, iso_date: &str) -> bool {
        self.dates.iter().any(|d| d.iso_date == iso_date)
    }

    /// Human readable label for a submitted date, or the raw value when it is not on offer.
    pub fn label_for(&self, iso_date: &str) -> String {
        self.dates
            .iter()
            .find(|d| d.iso_date == iso_date)
            .map(|d| d.label.clone())
            .unwrap_or_else(|| iso_date.to_string())
    }
}

impl Default for WorkshopCalendar {
    fn default() -> Self {
        let dates = [
            ("2025-11-11", "11. November 2025 (Dienstag, 19:00 Uhr)"),
            ("2025-11-13", "13. November 2025 (Donnerstag, 19:00 Uhr)"),
            ("2025-11-18", "18. November 2025 (Dienstag, 19:00 Uhr)"),
        ]
        .into_iter()
        .map(|(iso_date, label)| OfferedDate {
            iso_date: iso_date.to_string(),
            label: label.to_string(),
        })
        .collect();
        Self { dates }
    }
}
