use crate::modules::registrations::core::calendar::WorkshopCalendar;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTally {
    pub registration_count: u64,
    pub attendee_total: u64,
}

/// Per-date tallies keyed by the offered dates, in calendar order.
///
/// Serialises as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsSnapshot {
    entries: Vec<(String, DateTally)>,
}

impl StatisticsSnapshot {
    pub fn zeroed(calendar: &WorkshopCalendar) -> Self {
        Self {
            entries: calendar
                .dates()
                .iter()
                .map(|d| (d.iso_date.clone(), DateTally::default()))
                .collect(),
        }
    }

    pub fn get(&self, iso_date: &str) -> Option<&DateTally> {
        self.entries
            .iter()
            .find(|(date, _)| date == iso_date)
            .map(|(_, tally)| tally)
    }

    /// Counts one registration. Returns `false` and changes nothing for a date that
    /// is not in the snapshot. Counters saturate at `u64::MAX`.
    pub fn record(&mut self, iso_date: &str, attendees: u64) -> bool {
        match self.entries.iter_mut().find(|(date, _)| date == iso_date) {
            Some((_, tally)) => {
                tally.registration_count = tally.registration_count.saturating_add(1);
                tally.attendee_total = tally.attendee_total.saturating_add(attendees);
                true
            }
            None => false,
        }
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(date, _)| date.as_str())
    }

    pub fn total_attendees(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |total, (_, t)| total.saturating_add(t.attendee_total))
    }
}

impl Serialize for StatisticsSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, tally) in &self.entries {
            map.serialize_entry(date, tally)?;
        }
        map.end()
    }
}
