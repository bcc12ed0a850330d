/// The week/day timeline is a
/// 1440-minute track at one pixel
/// per minute (60 px per hour), so
/// minute offsets double as pixel
/// offsets.
const TRACK_MINUTES: u32 = 1_440;
const SNAP_MINUTES: u32 = 15;
const DAY_VIEW_MIN_EVENT_PX: i64 = 40;
const WEEK_VIEW_MIN_EVENT_PX: i64 = 30;
const DRAFT_DURATION_MINUTES: u32 = 60;
const SCROLL_LEAD_MINUTES: u32 = 180;
const TRACK_VIEWPORT_PX: u32 = 600;

/// Parses a 24h `"HH:MM"` string
/// into minutes since midnight.
fn time_to_offset_minutes(
  raw: &str
) -> Option<u32> {
  let (hours_raw, minutes_raw) =
    raw.trim().split_once(':')?;
  let hours =
    hours_raw.parse::<u32>().ok()?;
  let minutes =
    minutes_raw.parse::<u32>().ok()?;
  if hours > 23
    || minutes_raw.len() != 2
    || minutes > 59
  {
    return None;
  }
  Some(hours * 60 + minutes)
}

fn format_minutes(
  minutes: u32
) -> String {
  let wrapped =
    minutes % TRACK_MINUTES;
  format!(
    "{:02}:{:02}",
    wrapped / 60,
    wrapped % 60
  )
}

/// Rendered block height. The raw
/// span is floored at the view's
/// minimum so short events stay
/// clickable; inverted ranges land
/// on the floor as well. Stored
/// times are never touched.
fn event_height(
  start_minutes: u32,
  end_minutes: u32,
  min_px: i64
) -> i64 {
  (i64::from(end_minutes)
    - i64::from(start_minutes))
  .max(min_px)
}

/// Maps a pointer position on the
/// track back to the nearest
/// quarter-hour, clamped to the
/// track; the 24:00 edge wraps to
/// `"00:00"`.
fn pointer_to_snapped_time(
  pixel_y: f64,
  scroll_offset: f64
) -> String {
  let clamped = (pixel_y
    + scroll_offset)
    .clamp(0.0, f64::from(TRACK_MINUTES));
  let minutes = clamped.round() as u32;
  let snapped = (minutes
    + SNAP_MINUTES / 2)
    / SNAP_MINUTES
    * SNAP_MINUTES;
  format_minutes(snapped)
}

/// Draft end time: one hour after
/// the start, wrapping past
/// midnight to `00:MM`.
fn draft_end_time(
  start_minutes: u32
) -> String {
  format_minutes(
    start_minutes
      + DRAFT_DURATION_MINUTES
  )
}

/// Default draft times: now rounded
/// up to the next quarter hour, for
/// one hour.
fn draft_default_times(
  now_minute: u32
) -> (String, String) {
  let start = now_minute
    .div_ceil(SNAP_MINUTES)
    * SNAP_MINUTES
    % TRACK_MINUTES;
  (format_minutes(start), draft_end_time(start))
}

fn current_minute_of_day(
  timezone: Tz
) -> u32 {
  use chrono::Timelike;

  let now =
    Utc::now().with_timezone(&timezone);
  now.hour() * 60 + now.minute()
}

/// The live time marker for one day
/// column; only today carries one.
fn indicator_offset(
  day: NaiveDate,
  today: NaiveDate,
  now_minute: u32
) -> Option<u32> {
  (day == today).then_some(now_minute)
}

/// Scroll target when entering a
/// timeline view: a little above
/// now, clamped so the 600 px
/// viewport never runs past the
/// track end.
fn auto_scroll_target(
  now_minute: u32
) -> u32 {
  now_minute
    .saturating_sub(
      SCROLL_LEAD_MINUTES
    )
    .min(
      TRACK_MINUTES
        - TRACK_VIEWPORT_PX
    )
}

#[cfg(test)]
mod timeline_tests {
  use super::{
    auto_scroll_target,
    draft_default_times,
    draft_end_time,
    event_height,
    pointer_to_snapped_time,
    time_to_offset_minutes,
    DAY_VIEW_MIN_EVENT_PX,
    WEEK_VIEW_MIN_EVENT_PX
  };

  #[test]
  fn offsets_are_monotonic() {
    let samples = [
      "00:00", "00:15", "07:30",
      "09:00", "12:05", "21:45",
      "23:59"
    ];
    let offsets = samples
      .iter()
      .map(|raw| {
        time_to_offset_minutes(raw)
          .expect("valid sample")
      })
      .collect::<Vec<_>>();
    assert!(
      offsets.windows(2).all(
        |pair| pair[0] < pair[1]
      )
    );
  }

  #[test]
  fn offsets_reject_junk() {
    for raw in [
      "24:00", "12:60", "12",
      "12:5", "", "ab:cd"
    ] {
      assert_eq!(
        time_to_offset_minutes(raw),
        None,
        "{raw:?}"
      );
    }
  }

  #[test]
  fn short_events_floor_at_the_view_minimum()
  {
    // 09:00-09:30 spans 30 raw px
    // but renders at the 40 px day
    // view floor.
    let start =
      time_to_offset_minutes("09:00")
        .expect("start");
    let end =
      time_to_offset_minutes("09:30")
        .expect("end");
    assert_eq!(start, 540);
    assert_eq!(
      event_height(
        start,
        end,
        DAY_VIEW_MIN_EVENT_PX
      ),
      40
    );
    assert_eq!(
      event_height(
        start,
        end,
        WEEK_VIEW_MIN_EVENT_PX
      ),
      30
    );
  }

  #[test]
  fn long_events_keep_their_raw_span()
  {
    assert_eq!(
      event_height(
        540,
        660,
        DAY_VIEW_MIN_EVENT_PX
      ),
      120
    );
  }

  #[test]
  fn inverted_ranges_land_on_the_floor()
  {
    assert_eq!(
      event_height(
        840,
        540,
        DAY_VIEW_MIN_EVENT_PX
      ),
      40
    );
  }

  #[test]
  fn pointer_snaps_to_quarter_hours()
  {
    assert_eq!(
      pointer_to_snapped_time(
        725.0, 0.0
      ),
      "12:00"
    );
    assert_eq!(
      pointer_to_snapped_time(
        728.0, 0.0
      ),
      "12:15"
    );
    assert_eq!(
      pointer_to_snapped_time(
        100.0, 625.0
      ),
      "12:00"
    );
  }

  #[test]
  fn pointer_clamps_to_the_track() {
    assert_eq!(
      pointer_to_snapped_time(
        -50.0, 0.0
      ),
      "00:00"
    );
    assert_eq!(
      pointer_to_snapped_time(
        5_000.0, 0.0
      ),
      "00:00"
    );
  }

  #[test]
  fn pointer_output_is_always_on_the_grid()
  {
    for raw in (0..=1_500).step_by(7)
    {
      let snapped =
        pointer_to_snapped_time(
          f64::from(raw),
          0.0
        );
      let minutes =
        time_to_offset_minutes(
          &snapped
        )
        .expect("snapped parses");
      assert_eq!(minutes % 15, 0);
      assert!(minutes < 1_440);
    }
  }

  #[test]
  fn draft_end_wraps_past_midnight()
  {
    assert_eq!(
      draft_end_time(1_410),
      "00:30"
    );
    assert_eq!(
      draft_end_time(540),
      "10:00"
    );
  }

  #[test]
  fn draft_defaults_round_up() {
    let (start, end) =
      draft_default_times(541);
    assert_eq!(start, "09:15");
    assert_eq!(end, "10:15");

    let (start, end) =
      draft_default_times(540);
    assert_eq!(start, "09:00");
    assert_eq!(end, "10:00");
  }

  #[test]
  fn scroll_target_leads_now_and_clamps()
  {
    assert_eq!(
      auto_scroll_target(60),
      0
    );
    assert_eq!(
      auto_scroll_target(540),
      360
    );
    assert_eq!(
      auto_scroll_target(1_430),
      840
    );
  }
}
