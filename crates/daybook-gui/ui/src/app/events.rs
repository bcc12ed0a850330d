/// A wire record resolved for
/// rendering: calendar day plus
/// minute offsets.
#[derive(Clone, PartialEq)]
struct DayEvent {
  record:        EventRecord,
  day:           NaiveDate,
  start_minutes: u32,
  end_minutes:   u32
}

/// Accepts full ISO 8601 date-times
/// as well as bare dates; only the
/// calendar day is kept.
fn parse_event_day(
  raw: &str
) -> Option<NaiveDate> {
  let trimmed = raw.trim();

  if let Ok(parsed) =
    chrono::DateTime::parse_from_rfc3339(
      trimmed
    )
  {
    return Some(parsed.date_naive());
  }
  if let Ok(parsed) =
    chrono::NaiveDateTime::parse_from_str(
      trimmed,
      "%Y-%m-%dT%H:%M:%S"
    )
  {
    return Some(parsed.date());
  }
  NaiveDate::parse_from_str(
    trimmed,
    "%Y-%m-%d"
  )
  .ok()
}

fn collect_day_events(
  records: &[EventRecord]
) -> Vec<DayEvent> {
  let mut entries = records
    .iter()
    .filter_map(|record| {
      let Some(day) = parse_event_day(
        &record.date
      ) else {
        tracing::warn!(
          id = %record.id,
          date = %record.date,
          "skipping event with \
           unreadable date"
        );
        return None;
      };
      let start_minutes =
        time_to_offset_minutes(
          &record.start_time
        )?;
      let end_minutes =
        time_to_offset_minutes(
          &record.end_time
        )?;
      Some(DayEvent {
        record: record.clone(),
        day,
        start_minutes,
        end_minutes
      })
    })
    .collect::<Vec<_>>();

  entries.sort_by_key(|entry| {
    (entry.day, entry.start_minutes)
  });

  tracing::debug!(
    total = records.len(),
    resolved = entries.len(),
    "collected calendar events"
  );
  entries
}

/// Calendar-day equality, nothing
/// about the time of day.
fn events_for_day<'a>(
  entries: &'a [DayEvent],
  day: NaiveDate
) -> Vec<&'a DayEvent> {
  entries
    .iter()
    .filter(|entry| entry.day == day)
    .collect()
}

const MONTH_CELL_EVENT_LIMIT: usize =
  2;

/// Month cells show at most two
/// events inline and fold the rest
/// into a `+N more` count.
fn month_cell_summary<'a>(
  entries: &'a [DayEvent],
  day: NaiveDate
) -> (Vec<&'a DayEvent>, usize) {
  let matching =
    events_for_day(entries, day);
  let overflow = matching
    .len()
    .saturating_sub(
      MONTH_CELL_EVENT_LIMIT
    );
  let visible = matching
    .into_iter()
    .take(MONTH_CELL_EVENT_LIMIT)
    .collect();
  (visible, overflow)
}

#[cfg(test)]
mod event_tests {
  use super::*;

  fn record(
    date: &str,
    start: &str,
    end: &str,
    title: &str
  ) -> EventRecord {
    EventRecord {
      id:         Uuid::new_v4(),
      title:      title.to_string(),
      start_time: start.to_string(),
      end_time:   end.to_string(),
      date:       date.to_string(),
      color:      "#3b82f6"
        .to_string(),
      user_id:    "user-1"
        .to_string()
    }
  }

  fn march_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(
      2024, 3, 15
    )
    .expect("valid date")
  }

  #[test]
  fn day_matching_ignores_time_of_day()
  {
    let records = vec![
      record(
        "2024-03-15T00:00:00Z",
        "09:00",
        "09:30",
        "Standup"
      ),
      record(
        "2024-03-15T21:45:00+05:00",
        "14:00",
        "15:00",
        "Review"
      ),
      record(
        "2024-03-16T00:00:00Z",
        "09:00",
        "09:30",
        "Other day"
      ),
    ];

    let entries =
      collect_day_events(&records);
    let matching = events_for_day(
      &entries,
      march_15()
    );
    assert_eq!(matching.len(), 2);
    assert!(matching.iter().all(
      |entry| entry.day == march_15()
    ));
  }

  #[test]
  fn entries_sort_by_day_then_start()
  {
    let records = vec![
      record(
        "2024-03-15T00:00:00Z",
        "14:00",
        "15:00",
        "Afternoon"
      ),
      record(
        "2024-03-15T00:00:00Z",
        "09:00",
        "09:30",
        "Morning"
      ),
    ];

    let entries =
      collect_day_events(&records);
    assert_eq!(
      entries[0].record.title,
      "Morning"
    );
    assert_eq!(
      entries[1].record.title,
      "Afternoon"
    );
  }

  #[test]
  fn unreadable_records_are_skipped()
  {
    let records = vec![
      record(
        "not a date",
        "09:00",
        "09:30",
        "Broken date"
      ),
      record(
        "2024-03-15T00:00:00Z",
        "9am",
        "10am",
        "Broken times"
      ),
      record(
        "2024-03-15T00:00:00Z",
        "09:00",
        "09:30",
        "Fine"
      ),
    ];

    let entries =
      collect_day_events(&records);
    assert_eq!(entries.len(), 1);
    assert_eq!(
      entries[0].record.title,
      "Fine"
    );
  }

  #[test]
  fn month_cells_fold_overflow() {
    let records = (0..4)
      .map(|idx| {
        record(
          "2024-03-15T00:00:00Z",
          "09:00",
          "09:30",
          &format!("Event {idx}")
        )
      })
      .collect::<Vec<_>>();

    let entries =
      collect_day_events(&records);
    let (visible, overflow) =
      month_cell_summary(
        &entries,
        march_15()
      );
    assert_eq!(visible.len(), 2);
    assert_eq!(overflow, 2);
  }

  #[test]
  fn wire_json_resolves_to_a_day() {
    let raw = r#"{
      "id": "7b9f8e4a-5f2d-4f6a-9c3b-2d1e0f9a8b7c",
      "title": "Imported",
      "start_time": "10:00",
      "end_time": "11:00",
      "date": "2024-03-15T00:00:00Z",
      "color": "#10b981",
      "user_id": "user-1"
    }"#;
    let imported: EventRecord =
      serde_json::from_str(raw)
        .expect("parse wire record");
    assert_eq!(
      parse_event_day(&imported.date),
      Some(march_15())
    );
  }
}
