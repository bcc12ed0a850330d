use chrono::NaiveDate;
use daybook_core::datastore::EventStore;
use daybook_core::event::Event;
use tempfile::tempdir;
use uuid::Uuid;

fn event_on(day: (i32, u32, u32), start: u32, end: u32, title: &str) -> Event {
    Event::new(
        title.to_string(),
        start,
        end,
        NaiveDate::from_ymd_opt(day.0, day.1, day.2).expect("valid date"),
        "#3b82f6".to_string(),
        "user-1".to_string(),
    )
}

#[test]
fn store_roundtrip_orders_by_date_then_start() {
    let temp = tempdir().expect("tempdir");
    let store = EventStore::open(temp.path()).expect("open event store");

    let later = event_on((2024, 3, 16), 600, 660, "Planning");
    let early = event_on((2024, 3, 15), 540, 570, "Standup");
    let same_day = event_on((2024, 3, 15), 510, 540, "Coffee");

    store.insert(later.clone()).expect("insert later");
    store.insert(early.clone()).expect("insert early");
    store.insert(same_day.clone()).expect("insert same day");

    let listed = store.list_for_user("user-1").expect("list events");
    let titles: Vec<&str> = listed.iter().map(|event| event.title.as_str()).collect();
    assert_eq!(titles, vec!["Coffee", "Standup", "Planning"]);
}

#[test]
fn list_is_scoped_to_the_user() {
    let temp = tempdir().expect("tempdir");
    let store = EventStore::open(temp.path()).expect("open event store");

    let mut foreign = event_on((2024, 3, 15), 540, 570, "Someone else");
    foreign.user_id = "user-2".to_string();

    store.insert(foreign).expect("insert foreign");
    store
        .insert(event_on((2024, 3, 15), 600, 630, "Mine"))
        .expect("insert own");

    let listed = store.list_for_user("user-1").expect("list events");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Mine");
}

#[test]
fn update_is_a_full_replacement_keyed_by_id() {
    let temp = tempdir().expect("tempdir");
    let store = EventStore::open(temp.path()).expect("open event store");

    let original = store
        .insert(event_on((2024, 3, 15), 540, 570, "Standup"))
        .expect("insert");

    let replacement = event_on((2024, 3, 18), 615, 675, "Retro");
    let updated = store
        .update(original.id, replacement.clone())
        .expect("update");

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, "Retro");
    assert_eq!(updated.start_time, 615);

    let listed = store.list_for_user("user-1").expect("list events");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Retro");
}

#[test]
fn delete_removes_and_unknown_ids_error() {
    let temp = tempdir().expect("tempdir");
    let store = EventStore::open(temp.path()).expect("open event store");

    let event = store
        .insert(event_on((2024, 3, 15), 540, 570, "Standup"))
        .expect("insert");

    store.delete(event.id).expect("delete existing");
    assert!(store.list_for_user("user-1").expect("list").is_empty());

    let missing = store.delete(Uuid::new_v4());
    assert!(missing.is_err());
}

#[test]
fn store_survives_reopen() {
    let temp = tempdir().expect("tempdir");

    {
        let store = EventStore::open(temp.path()).expect("open event store");
        store
            .insert(event_on((2024, 3, 15), 540, 570, "Standup"))
            .expect("insert");
    }

    let reopened = EventStore::open(temp.path()).expect("reopen event store");
    let listed = reopened.list_for_user("user-1").expect("list events");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Standup");
}
