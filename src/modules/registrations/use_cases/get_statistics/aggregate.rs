use crate::modules::registrations::core::attendees::parse_leading_integer;
use crate::modules::registrations::core::calendar::WorkshopCalendar;
use crate::modules::registrations::core::registration::{ATTENDEES_COLUMN, DATE_COLUMN};
use crate::modules::registrations::core::statistics::StatisticsSnapshot;
use crate::shared::infrastructure::row_store::{CellValue, Row};
use chrono::FixedOffset;

/// Canonical `YYYY-MM-DD` form of a stored date cell.
pub fn normalize_date(cell: &CellValue, offset: &FixedOffset) -> String {
    match cell {
        CellValue::Timestamp(ts) => ts.with_timezone(offset).format("%Y-%m-%d").to_string(),
        CellValue::Text(s) => s.trim().to_string(),
        CellValue::Integer(n) => n.to_string(),
        CellValue::Empty => String::new(),
    }
}

pub fn stored_attendees(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Integer(n) => Some(*n),
        CellValue::Text(s) => parse_leading_integer(s),
        CellValue::Timestamp(_) | CellValue::Empty => None,
    }
}

/// Recomputes the snapshot from every stored row. Row 0 is the header.
///
/// A row counts only when its date is on offer and its attendee value is a positive
/// integer. Anything else is skipped without touching the row.
pub fn compute_statistics(
    calendar: &WorkshopCalendar,
    rows: &[Row],
    offset: &FixedOffset,
) -> StatisticsSnapshot {
    let mut snapshot = StatisticsSnapshot::zeroed(calendar);
    let empty = CellValue::Empty;

    for (index, row) in rows.iter().enumerate().skip(1) {
        let date = normalize_date(row.get(DATE_COLUMN).unwrap_or(&empty), offset);
        if !calendar.is_offered(&date) {
            tracing::debug!(row = index, %date, "row skipped: date not on offer");
            continue;
        }
        match stored_attendees(row.get(ATTENDEES_COLUMN).unwrap_or(&empty)) {
            Some(attendees) if attendees > 0 => {
                snapshot.record(&date, attendees.unsigned_abs());
            }
            _ => tracing::debug!(row = index, %date, "row skipped: attendees not a positive integer"),
        }
    }

    snapshot
}
