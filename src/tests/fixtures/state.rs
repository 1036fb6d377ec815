// AppState over in-memory adapters, with handles kept for assertions.

use crate::modules::registrations::core::calendar::WorkshopCalendar;
use crate::modules::registrations::core::registration::REGISTRATION_HEADER;
use crate::modules::registrations::use_cases::register_attendance::confirmation::ConfirmationTemplate;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::row_store::in_memory::InMemoryRowStore;
use crate::shell::state::AppState;
use chrono::FixedOffset;
use std::sync::Arc;

pub struct TestState {
    pub store: Arc<InMemoryRowStore>,
    pub notifier: Arc<InMemoryNotifier>,
}

#[allow(dead_code)]
impl TestState {
    pub fn new() -> Self {
        Self::build(false, false)
    }

    pub fn with_offline_store() -> Self {
        Self::build(true, false)
    }

    pub fn with_offline_notifier() -> Self {
        Self::build(false, true)
    }

    fn build(store_offline: bool, notifier_offline: bool) -> Self {
        let mut store = InMemoryRowStore::new(&REGISTRATION_HEADER);
        if store_offline {
            store.toggle_offline();
        }
        let mut notifier = InMemoryNotifier::new();
        if notifier_offline {
            notifier.toggle_offline();
        }
        Self {
            store: Arc::new(store),
            notifier: Arc::new(notifier),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(
            WorkshopCalendar::default(),
            FixedOffset::east_opt(3600).unwrap(),
            ConfirmationTemplate::default(),
            self.store.clone(),
            self.notifier.clone(),
        )
    }
}
