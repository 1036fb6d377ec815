use crate::modules::registrations::core::calendar::WorkshopCalendar;
use crate::modules::registrations::core::statistics::StatisticsSnapshot;
use crate::modules::registrations::use_cases::get_statistics::aggregate::compute_statistics;
use crate::shared::infrastructure::row_store::{RowStore, RowStoreError};
use chrono::FixedOffset;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatisticsError {
    #[error(transparent)]
    Store(#[from] RowStoreError),
}

pub struct GetStatisticsHandler<TStore>
where
    TStore: RowStore + ?Sized + 'static,
{
    calendar: Arc<WorkshopCalendar>,
    offset: FixedOffset,
    store: Arc<TStore>,
}

impl<TStore> GetStatisticsHandler<TStore>
where
    TStore: RowStore + ?Sized + 'static,
{
    pub fn new(calendar: Arc<WorkshopCalendar>, offset: FixedOffset, store: Arc<TStore>) -> Self {
        Self {
            calendar,
            offset,
            store,
        }
    }

    pub async fn handle(&self) -> Result<StatisticsSnapshot, StatisticsError> {
        let rows = self.store.read_all_records().await?;
        let snapshot = compute_statistics(&self.calendar, &rows, &self.offset);
        tracing::info!(
            rows = rows.len().saturating_sub(1),
            attendees = snapshot.total_attendees(),
            "statistics computed"
        );
        Ok(snapshot)
    }
}
