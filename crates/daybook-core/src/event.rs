use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar event as stored on disk.
///
/// `start_time`/`end_time` are minutes since midnight and serialize as
/// `"HH:MM"`. `date` carries day granularity only; the serialized form is
/// an ISO 8601 date-time whose time-of-day component is discarded on read.
/// `start_time < end_time` is not enforced anywhere; inverted ranges are
/// stored verbatim and only clamped at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: Uuid,

    pub title: String,

    #[serde(with = "clock_serde")]
    pub start_time: u32,

    #[serde(with = "clock_serde")]
    pub end_time: u32,

    #[serde(with = "calendar_date_serde")]
    pub date: NaiveDate,

    pub color: String,

    pub user_id: String,
}

impl Event {
    pub fn new(
        title: String,
        start_time: u32,
        end_time: u32,
        date: NaiveDate,
        color: String,
        user_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            start_time,
            end_time,
            date,
            color,
            user_id,
        }
    }

    /// Calendar-day match: year/month/day equality, nothing else.
    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.date == day
    }
}

pub mod clock_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::clock;

    pub fn serialize<S>(minutes: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&clock::format_clock(*minutes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        clock::parse_clock(&raw).map_err(serde::de::Error::custom)
    }
}

pub mod calendar_date_serde {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%dT00:00:00Z").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid calendar date: {raw:?}"))
        })
    }

    /// Accepts full ISO 8601 date-times (with or without an offset) as
    /// well as bare dates, keeping the calendar day only.
    pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(parsed.date_naive());
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
            return Some(parsed.date());
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::Event;
    use super::calendar_date_serde::parse_calendar_date;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
    }

    #[test]
    fn date_parsing_discards_time_of_day() {
        for raw in [
            "2024-03-15T00:00:00Z",
            "2024-03-15T18:45:12+02:00",
            "2024-03-15T23:59:59",
            "2024-03-15",
        ] {
            assert_eq!(parse_calendar_date(raw), Some(march_15()), "{raw}");
        }
    }

    #[test]
    fn event_roundtrips_through_json() {
        let event = Event::new(
            "Standup".to_string(),
            540,
            570,
            march_15(),
            "#3b82f6".to_string(),
            "user-1".to_string(),
        );

        let json = serde_json::to_string(&event).expect("serialize event");
        assert!(json.contains("\"start_time\":\"09:00\""));
        assert!(json.contains("\"end_time\":\"09:30\""));
        assert!(json.contains("\"date\":\"2024-03-15T00:00:00Z\""));

        let parsed: Event = serde_json::from_str(&json).expect("parse event");
        assert_eq!(parsed, event);
    }

    #[test]
    fn day_matching_ignores_nothing_but_the_day() {
        let event = Event::new(
            "Review".to_string(),
            840,
            900,
            march_15(),
            "#10b981".to_string(),
            "user-1".to_string(),
        );

        assert!(event.falls_on(march_15()));
        assert!(!event.falls_on(NaiveDate::from_ymd_opt(2024, 3, 16).expect("valid date")));
    }
}
