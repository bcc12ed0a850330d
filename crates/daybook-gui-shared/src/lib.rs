use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// An event as it crosses the invoke
/// bridge. Field names match the
/// event store interface: times are
/// 24h `"HH:MM"` strings, `date` is
/// an ISO 8601 date-time string
/// whose time-of-day part carries no
/// meaning.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct EventRecord {
  pub id:         Uuid,
  #[serde(default)]
  pub title:      String,
  pub start_time: String,
  pub end_time:   String,
  pub date:       String,
  #[serde(default)]
  pub color:      String,
  #[serde(default)]
  pub user_id:    String
}

/// Payload for creating an event;
/// the backend assigns the id and
/// the session user.
#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct EventDraft {
  pub title:      String,
  pub start_time: String,
  pub end_time:   String,
  pub date:       String,
  pub color:      String
}

/// Invoke payloads are keyed by the
/// backend command's parameter
/// names, so the wrappers spell
/// those out.
#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct EventInsertArgs {
  pub draft: EventDraft
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct EventUpdateArgs {
  pub id:    Uuid,
  pub draft: EventDraft
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct EventIdArg {
  pub id: Uuid
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct SessionDto {
  pub user_id:      String,
  pub display_name: Option<String>
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct UiLogArgs {
  pub event:  String,
  pub detail: String
}

#[cfg(test)]
mod tests {
  use uuid::Uuid;

  use super::EventRecord;

  #[test]
  fn wire_field_names_are_stable() {
    let record = EventRecord {
      id:         Uuid::nil(),
      title:      "Standup"
        .to_string(),
      start_time: "09:00"
        .to_string(),
      end_time:   "09:30"
        .to_string(),
      date:
        "2024-03-15T00:00:00Z"
          .to_string(),
      color:      "#3b82f6"
        .to_string(),
      user_id:    "user-1"
        .to_string()
    };

    let json =
      serde_json::to_value(&record)
        .expect("serialize record");
    for field in [
      "id",
      "title",
      "start_time",
      "end_time",
      "date",
      "color",
      "user_id"
    ] {
      assert!(
        json.get(field).is_some(),
        "missing field {field}"
      );
    }
  }
}
