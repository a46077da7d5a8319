use calendra_common::models::{Attendee, Booking, BookingStatus, EventType};
use calendra_common::services::RepositoryFactory;
use calendra_db::{DbClient, DbRepositoryFactory};
use chrono::{TimeZone, Utc};

async fn factory() -> DbRepositoryFactory {
    let client = DbClient::from_url("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    DbRepositoryFactory::new(client).await.expect("schema")
}

fn booking(uid: &str, hour: u32) -> Booking {
    Booking {
        uid: uid.to_string(),
        event_type_id: Some(1),
        start_time: Utc.with_ymd_and_hms(2025, 5, 5, hour, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2025, 5, 5, hour, 30, 0).unwrap(),
        status: BookingStatus::Accepted,
        attendees: vec![Attendee {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }],
    }
}

#[tokio::test]
async fn event_type_crud_round_trip() {
    let repos = factory().await;
    let event_types = repos.event_types();

    let mut intro = EventType::new(0, "Intro call", "intro-call", 30);
    intro.seats_per_time_slot = Some(4);
    intro.seats_per_time_slot_enabled = true;
    let created = event_types.create(intro).await.unwrap();
    assert!(created.id > 0);

    let found = event_types.find_by_slug("intro-call").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.seats(), Some(4));

    let mut renamed = found.clone();
    renamed.title = "Intro".to_string();
    let updated = event_types.update(renamed).await.unwrap().unwrap();
    assert_eq!(updated.title, "Intro");
    assert_eq!(
        event_types.find_by_id(created.id).await.unwrap().unwrap().title,
        "Intro"
    );

    assert!(event_types.delete(created.id).await.unwrap());
    assert!(event_types.find_by_id(created.id).await.unwrap().is_none());
    assert!(event_types.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_slug_is_reported_as_such() {
    let repos = factory().await;
    let event_types = repos.event_types();
    event_types
        .create(EventType::new(0, "Intro", "intro", 30))
        .await
        .unwrap();
    let err = event_types
        .create(EventType::new(0, "Intro again", "intro", 15))
        .await
        .unwrap_err();
    assert_eq!(err.duplicate_slug(), Some("intro"));
    assert_eq!(event_types.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn explicit_event_type_id_is_kept() {
    let repos = factory().await;
    let created = repos
        .event_types()
        .create(EventType::new(42, "Fixed", "fixed", 15))
        .await
        .unwrap();
    assert_eq!(created.id, 42);
    assert_eq!(
        repos.event_types().find_by_id(42).await.unwrap().unwrap().slug,
        "fixed"
    );
}

#[tokio::test]
async fn bookings_are_found_by_overlap() {
    let repos = factory().await;
    let bookings = repos.bookings();
    bookings.create(booking("b-9", 9)).await.unwrap();
    bookings.create(booking("b-11", 11)).await.unwrap();

    let window_start = Utc.with_ymd_and_hms(2025, 5, 5, 9, 15, 0).unwrap();
    let window_end = Utc.with_ymd_and_hms(2025, 5, 5, 11, 0, 0).unwrap();
    let found = bookings.find_in_range(window_start, window_end).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].uid, "b-9");
    assert_eq!(found[0].attendees[0].email, "ada@example.com");
}

#[tokio::test]
async fn booking_update_adds_attendee() {
    let repos = factory().await;
    let bookings = repos.bookings();
    let mut stored = bookings.create(booking("seated", 10)).await.unwrap();
    stored.attendees.push(Attendee {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
    });
    bookings.update(stored).await.unwrap().unwrap();

    let reloaded = bookings.find_by_uid("seated").await.unwrap().unwrap();
    assert_eq!(reloaded.attendees.len(), 2);
    assert_eq!(reloaded.status, BookingStatus::Accepted);
    assert!(bookings
        .update(booking("missing", 12))
        .await
        .unwrap()
        .is_none());
}
