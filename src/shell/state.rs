use crate::modules::registrations::core::calendar::WorkshopCalendar;
use crate::modules::registrations::use_cases::get_statistics::handler::GetStatisticsHandler;
use crate::modules::registrations::use_cases::register_attendance::confirmation::ConfirmationTemplate;
use crate::modules::registrations::use_cases::register_attendance::handler::RegisterAttendanceHandler;
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::row_store::RowStore;
use chrono::FixedOffset;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub register_handler: Arc<RegisterAttendanceHandler<dyn RowStore, dyn Notifier>>,
    pub statistics_handler: Arc<GetStatisticsHandler<dyn RowStore>>,
}

impl AppState {
    /// Both handlers share one calendar and one store.
    pub fn new(
        calendar: WorkshopCalendar,
        utc_offset: FixedOffset,
        confirmation: ConfirmationTemplate,
        store: Arc<dyn RowStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let calendar = Arc::new(calendar);
        Self {
            register_handler: Arc::new(RegisterAttendanceHandler::new(
                calendar.clone(),
                confirmation,
                store.clone(),
                notifier,
            )),
            statistics_handler: Arc::new(GetStatisticsHandler::new(calendar, utc_offset, store)),
        }
    }
}
