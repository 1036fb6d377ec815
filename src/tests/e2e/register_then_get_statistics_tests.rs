use crate::modules::registrations::core::statistics::DateTally;
use crate::tests::fixtures::state::TestState;
use crate::tests::fixtures::submissions::RegisterAttendanceBuilder;

#[tokio::test]
async fn registrations_show_up_in_the_statistics() {
    let test_state = TestState::new();
    let state = test_state.app_state();

    let commands = vec![
        RegisterAttendanceBuilder::new().date("2025-11-18").attendees("3").build(),
        RegisterAttendanceBuilder::new().date("2025-11-18").attendees("x").build(),
        RegisterAttendanceBuilder::new().date("2025-11-13").attendees(2).build(),
        RegisterAttendanceBuilder::new().date("2025-12-01").attendees(5).build(),
        RegisterAttendanceBuilder::new().date("2025-11-11").attendees("0").build(),
    ];
    for command in commands {
        state.register_handler.handle(command).await.unwrap();
    }

    let snapshot = state.statistics_handler.handle().await.unwrap();

    assert_eq!(
        snapshot.get("2025-11-18"),
        Some(&DateTally {
            registration_count: 1,
            attendee_total: 3
        })
    );
    assert_eq!(
        snapshot.get("2025-11-13"),
        Some(&DateTally {
            registration_count: 1,
            attendee_total: 2
        })
    );
    assert_eq!(snapshot.get("2025-11-11"), Some(&DateTally::default()));
    assert_eq!(snapshot.dates().count(), 3);
    assert_eq!(test_state.notifier.sent_count().await, 5);
}

#[tokio::test]
async fn statistics_are_recomputed_on_every_call() {
    let test_state = TestState::new();
    let state = test_state.app_state();

    let before = state.statistics_handler.handle().await.unwrap();
    state
        .register_handler
        .handle(RegisterAttendanceBuilder::new().build())
        .await
        .unwrap();
    let after = state.statistics_handler.handle().await.unwrap();
    let again = state.statistics_handler.handle().await.unwrap();

    assert_eq!(before.total_attendees(), 0);
    assert_eq!(after.total_attendees(), 2);
    assert_eq!(after, again);
}
