use std::sync::OnceLock;

use anyhow::anyhow;
use chrono::Timelike;
use regex::Regex;

/// Minutes in a full day; clock
/// values live in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 1_440;

/// Snapping granularity for drafts
/// and pointer input.
pub const SNAP_MINUTES: u32 = 15;

fn clock_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> =
    OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(
      r"^([01]?\d|2[0-3]):([0-5]\d)$"
    )
    .expect("valid clock pattern")
  })
}

/// Parses a 24h `"HH:MM"` string
/// into minutes since midnight.
pub fn parse_clock(
  raw: &str
) -> anyhow::Result<u32> {
  let trimmed = raw.trim();
  let captures = clock_pattern()
    .captures(trimmed)
    .ok_or_else(|| {
      anyhow!(
        "invalid clock time: {raw:?}"
      )
    })?;

  let hours = captures[1]
    .parse::<u32>()
    .map_err(|err| {
      anyhow!(
        "invalid hours in {raw:?}: \
         {err}"
      )
    })?;
  let minutes = captures[2]
    .parse::<u32>()
    .map_err(|err| {
      anyhow!(
        "invalid minutes in {raw:?}: \
         {err}"
      )
    })?;

  Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as
/// zero-padded `"HH:MM"`. Values are
/// taken modulo one day.
pub fn format_clock(
  minutes: u32
) -> String {
  let wrapped =
    minutes % MINUTES_PER_DAY;
  format!(
    "{:02}:{:02}",
    wrapped / 60,
    wrapped % 60
  )
}

/// Rounds to the nearest quarter
/// hour, wrapping 24:00 to 00:00.
pub fn snap_to_quarter(
  minutes: u32
) -> u32 {
  let snapped = (minutes
    + SNAP_MINUTES / 2)
    / SNAP_MINUTES
    * SNAP_MINUTES;
  snapped % MINUTES_PER_DAY
}

/// The next quarter-hour boundary at
/// or after the given wall-clock
/// time; used as the default draft
/// start.
pub fn next_quarter(
  now: chrono::NaiveTime
) -> u32 {
  let minute_of_day = now.hour() * 60
    + now.minute();
  let rounded = minute_of_day
    .div_ceil(SNAP_MINUTES)
    * SNAP_MINUTES;
  rounded % MINUTES_PER_DAY
}

#[cfg(test)]
mod tests {
  use chrono::NaiveTime;

  use super::{
    format_clock,
    next_quarter,
    parse_clock,
    snap_to_quarter
  };

  #[test]
  fn parses_valid_clock_times() {
    assert_eq!(
      parse_clock("00:00")
        .expect("midnight"),
      0
    );
    assert_eq!(
      parse_clock("09:00")
        .expect("morning"),
      540
    );
    assert_eq!(
      parse_clock("23:59")
        .expect("end of day"),
      1_439
    );
  }

  #[test]
  fn rejects_malformed_clock_times() {
    for raw in [
      "24:00", "9:5", "12-30", "",
      "aa:bb", "12:60"
    ] {
      assert!(
        parse_clock(raw).is_err(),
        "{raw:?} should not parse"
      );
    }
  }

  #[test]
  fn parse_is_monotonic() {
    let samples = [
      "00:00", "00:15", "06:30",
      "09:00", "12:05", "18:45",
      "23:59"
    ];
    let offsets = samples
      .iter()
      .map(|raw| {
        parse_clock(raw)
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
  fn formats_zero_padded() {
    assert_eq!(
      format_clock(5),
      "00:05"
    );
    assert_eq!(
      format_clock(725),
      "12:05"
    );
    assert_eq!(
      format_clock(1_440),
      "00:00"
    );
  }

  #[test]
  fn snaps_to_quarter_boundaries() {
    assert_eq!(snap_to_quarter(725), 720);
    assert_eq!(snap_to_quarter(728), 735);
    assert_eq!(
      snap_to_quarter(1_433),
      0
    );
  }

  #[test]
  fn next_quarter_rounds_up() {
    let time =
      NaiveTime::from_hms_opt(
        9, 1, 30
      )
      .expect("valid time");
    assert_eq!(
      next_quarter(time),
      555
    );

    let exact =
      NaiveTime::from_hms_opt(
        9, 15, 0
      )
      .expect("valid time");
    assert_eq!(
      next_quarter(exact),
      555
    );

    let late =
      NaiveTime::from_hms_opt(
        23, 50, 0
      )
      .expect("valid time");
    assert_eq!(next_quarter(late), 0);
  }
}
