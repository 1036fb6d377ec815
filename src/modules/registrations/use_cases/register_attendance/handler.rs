use crate::modules::registrations::core::calendar::WorkshopCalendar;
use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::register_attendance::command::RegisterAttendance;
use crate::modules::registrations::use_cases::register_attendance::confirmation::ConfirmationTemplate;
use crate::modules::registrations::use_cases::register_attendance::submission::{
    ValidSubmission, ValidationError, validate,
};
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::row_store::{RowStore, RowStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] RowStoreError),
}

/// Outcome of the confirmation mail. Never decides the outcome of the registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub registration: Registration,
    pub notification: NotificationOutcome,
}

pub struct RegisterAttendanceHandler<TStore, TNotifier>
where
    TStore: RowStore + ?Sized + 'static,
    TNotifier: Notifier + ?Sized + 'static,
{
    calendar: Arc<WorkshopCalendar>,
    confirmation: ConfirmationTemplate,
    store: Arc<TStore>,
    notifier: Arc<TNotifier>,
}

impl<TStore, TNotifier> RegisterAttendanceHandler<TStore, TNotifier>
where
    TStore: RowStore + ?Sized + 'static,
    TNotifier: Notifier + ?Sized + 'static,
{
    pub fn new(
        calendar: Arc<WorkshopCalendar>,
        confirmation: ConfirmationTemplate,
        store: Arc<TStore>,
        notifier: Arc<TNotifier>,
    ) -> Self {
        Self {
            calendar,
            confirmation,
            store,
            notifier,
        }
    }

    /// Validates, appends the row, then attempts the confirmation mail.
    ///
    /// Nothing is written when validation fails. Once the row is appended the call
    /// succeeds whatever the notifier does.
    pub async fn handle(
        &self,
        command: RegisterAttendance,
    ) -> Result<RegistrationOutcome, ApplicationError> {
        let submission = validate(&command.submission)?;
        let registration = Registration {
            timestamp: command.received_at,
            email: submission.email.clone(),
            attendee_count: submission.attendees.clone(),
            preferred_date: submission.date.clone(),
            preferred_date_label: self.calendar.label_for(&submission.date),
        };

        self.store.append_record(registration.to_row()).await?;
        tracing::info!(
            date = %registration.preferred_date,
            offered = self.calendar.is_offered(&registration.preferred_date),
            "registration stored"
        );

        let notification = self.notify(&registration, &submission).await;
        if let NotificationOutcome::Failed(reason) = &notification {
            tracing::warn!(%reason, "confirmation email failed, registration kept");
        }

        Ok(RegistrationOutcome {
            registration,
            notification,
        })
    }

    async fn notify(
        &self,
        registration: &Registration,
        submission: &ValidSubmission,
    ) -> NotificationOutcome {
        let email = match self.confirmation.render(
            &registration.email,
            &registration.preferred_date_label,
            &submission.attendees_display,
        ) {
            Ok(email) => email,
            Err(e) => return NotificationOutcome::Failed(e.to_string()),
        };
        match self.notifier.send(email).await {
            Ok(()) => NotificationOutcome::Sent,
            Err(e) => NotificationOutcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod register_attendance_handler_tests {
    use super::*;
    use crate::modules::registrations::core::registration::{AttendeeCount, REGISTRATION_HEADER};
    use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
    use crate::shared::infrastructure::row_store::CellValue;
    use crate::shared::infrastructure::row_store::in_memory::InMemoryRowStore;
    use crate::tests::fixtures::submissions::RegisterAttendanceBuilder;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (InMemoryRowStore, InMemoryNotifier);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        (
            InMemoryRowStore::new(&REGISTRATION_HEADER),
            InMemoryNotifier::new(),
        )
    }

    fn handler(
        store: Arc<InMemoryRowStore>,
        notifier: Arc<InMemoryNotifier>,
    ) -> RegisterAttendanceHandler<InMemoryRowStore, InMemoryNotifier> {
        RegisterAttendanceHandler::new(
            Arc::new(WorkshopCalendar::default()),
            ConfirmationTemplate::default(),
            store,
            notifier,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_appends_the_row_and_sends_the_confirmation(
        before_each: BeforeEachReturn,
    ) {
        let (store, notifier) = before_each;
        let store = Arc::new(store);
        let notifier = Arc::new(notifier);
        let command = RegisterAttendanceBuilder::new().build();
        let received_at = command.received_at;

        let outcome = handler(store.clone(), notifier.clone())
            .handle(command)
            .await
            .expect("handle failed");

        assert_eq!(outcome.notification, NotificationOutcome::Sent);
        let rows = store.read_all_records().await.expect("read failed");
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            vec![
                CellValue::Timestamp(received_at),
                CellValue::text("a@b.com"),
                CellValue::Integer(2),
                CellValue::text("2025-11-13"),
                CellValue::text("13. November 2025 (Donnerstag, 19:00 Uhr)"),
            ]
        );
        let sent = notifier.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "a@b.com");
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_succeeds_when_the_notifier_fails(before_each: BeforeEachReturn) {
        let (store, mut notifier) = before_each;
        notifier.toggle_offline();
        let store = Arc::new(store);

        let outcome = handler(store.clone(), Arc::new(notifier))
            .handle(RegisterAttendanceBuilder::new().build())
            .await
            .expect("handle failed");

        assert!(matches!(outcome.notification, NotificationOutcome::Failed(_)));
        assert_eq!(store.read_all_records().await.unwrap().len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_writes_nothing_when_fields_are_missing(
        before_each: BeforeEachReturn,
    ) {
        let (store, notifier) = before_each;
        let store = Arc::new(store);
        let notifier = Arc::new(notifier);
        let command = RegisterAttendanceBuilder::new().without_email().build();

        let result = handler(store.clone(), notifier.clone()).handle(command).await;

        assert!(matches!(
            result,
            Err(ApplicationError::Validation(ValidationError::MissingRequiredFields))
        ));
        assert_eq!(store.read_all_records().await.unwrap().len(), 1);
        assert_eq!(notifier.sent_count().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_keeps_unrecognised_dates_and_labels_them_raw(
        before_each: BeforeEachReturn,
    ) {
        let (store, notifier) = before_each;
        let command = RegisterAttendanceBuilder::new()
            .date("2026-01-01")
            .attendees("x")
            .build();

        let outcome = handler(Arc::new(store), Arc::new(notifier))
            .handle(command)
            .await
            .expect("handle failed");

        assert_eq!(outcome.registration.preferred_date_label, "2026-01-01");
        assert_eq!(
            outcome.registration.attendee_count,
            AttendeeCount::Unparsed("x".into())
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_fails_if_the_row_store_is_offline(before_each: BeforeEachReturn) {
        let (mut store, notifier) = before_each;
        store.toggle_offline();
        let notifier = Arc::new(notifier);

        let result = handler(Arc::new(store), notifier.clone())
            .handle(RegisterAttendanceBuilder::new().build())
            .await;

        assert_eq!(
            result.unwrap_err().to_string(),
            RowStoreError::Backend("Row store offline".into()).to_string()
        );
        assert_eq!(notifier.sent_count().await, 0);
    }
}
