const CALENDAR_CONFIG_TOML: &str =
  include_str!(
    "../../assets/calendar.toml"
  );

fn calendar_default_week_start()
-> String {
  "sunday".to_string()
}

fn load_calendar_config()
-> CalendarConfig {
  match toml::from_str::<CalendarConfig>(
    CALENDAR_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        version = config.version,
        timezone = ?config.timezone,
        week_start = %config.week_start,
        "loaded calendar config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing calendar config; using defaults");
      CalendarConfig::default()
    }
  }
}

fn calendar_week_start_day(
  raw: &str
) -> Weekday {
  if raw
    .trim()
    .eq_ignore_ascii_case("monday")
  {
    Weekday::Mon
  } else {
    Weekday::Sun
  }
}

fn resolve_calendar_timezone(
  config: &CalendarConfig
) -> Tz {
  if let Some(raw) =
    config.timezone.as_ref()
  {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      match trimmed.parse::<Tz>() {
        | Ok(tz) => return tz,
        | Err(error) => {
          tracing::error!(
            timezone = %trimmed,
            error = %error,
            "invalid timezone id"
          );
        }
      }
    }
  }

  DEFAULT_CALENDAR_TIMEZONE
    .parse::<Tz>()
    .unwrap_or(chrono_tz::UTC)
}

fn today_in_timezone(
  timezone: Tz
) -> NaiveDate {
  Utc::now()
    .with_timezone(&timezone)
    .date_naive()
}

fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

/// Whole weeks covering the focus
/// month: from the start of the week
/// holding the 1st through the end
/// of the week holding the last day.
/// Always 35 or 42 cells.
fn month_grid_days(
  focus: NaiveDate,
  week_start: Weekday
) -> Vec<NaiveDate> {
  let first = first_day_of_month(
    focus.year(),
    focus.month()
  );
  let last = last_day_of_month(
    focus.year(),
    focus.month()
  );
  let grid_start =
    start_of_week(first, week_start);
  let grid_end = add_days(
    start_of_week(last, week_start),
    6
  );

  let mut days = Vec::new();
  let mut day = grid_start;
  while day <= grid_end {
    days.push(day);
    day = add_days(day, 1);
  }
  days
}

fn week_days(
  focus: NaiveDate,
  week_start: Weekday
) -> Vec<NaiveDate> {
  let start =
    start_of_week(focus, week_start);
  (0_i64..7_i64)
    .map(|offset| {
      add_days(start, offset)
    })
    .collect()
}

fn shift_calendar_focus(
  current: NaiveDate,
  view: CalendarViewMode,
  step: i64
) -> NaiveDate {
  match view {
    | CalendarViewMode::Month => {
      shift_months(current, step as i32)
    }
    | CalendarViewMode::Week => {
      add_days(current, step * 7)
    }
    | CalendarViewMode::Day => {
      add_days(current, step)
    }
  }
}

fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let mut year = date.year();
  let mut month =
    date.month() as i32 + months;

  while month < 1 {
    month += 12;
    year = year.saturating_sub(1);
  }
  while month > 12 {
    month -= 12;
    year = year.saturating_add(1);
  }

  let month = month as u32;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

fn calendar_title(
  focus: NaiveDate,
  view: CalendarViewMode,
  week_start: Weekday
) -> String {
  match view {
    | CalendarViewMode::Month => {
      focus
        .format("%B %Y")
        .to_string()
    }
    | CalendarViewMode::Week => {
      let start = start_of_week(
        focus, week_start
      );
      let end = add_days(start, 6);
      format!(
        "{} - {}",
        start.format("%b %d"),
        end.format("%b %d")
      )
    }
    | CalendarViewMode::Day => {
      focus
        .format("%A, %B %d, %Y")
        .to_string()
    }
  }
}

include!("calendar_views/render_calendar_view.rs");
include!("calendar_views/render_calendar_month_view.rs");
include!("calendar_views/render_calendar_week_view.rs");
include!("calendar_views/render_calendar_day_view.rs");
include!("calendar_views/render_day_column.rs");
include!("calendar_views/weekday_labels.rs");

#[cfg(test)]
mod grid_tests {
  use super::*;

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  #[test]
  fn month_grid_is_whole_weeks() {
    // July 2024 starts on a Monday
    // and has 31 days: exactly five
    // Monday-start weeks.
    let days = month_grid_days(
      date(2024, 7, 15),
      Weekday::Mon
    );
    assert_eq!(days.len(), 35);
    assert_eq!(
      days[0],
      date(2024, 7, 1)
    );
    assert_eq!(
      days[34],
      date(2024, 8, 4)
    );
  }

  #[test]
  fn month_grid_stretches_to_six_weeks()
  {
    // December 2024 under a Monday
    // week start spills into six
    // rows.
    let days = month_grid_days(
      date(2024, 12, 10),
      Weekday::Mon
    );
    assert_eq!(days.len(), 42);
    assert_eq!(
      days[0],
      date(2024, 11, 25)
    );
    assert_eq!(
      days[41],
      date(2025, 1, 5)
    );
  }

  #[test]
  fn month_grid_cell_count_is_35_or_42()
  {
    for month in 1_u32..=12 {
      for week_start in
        [Weekday::Sun, Weekday::Mon]
      {
        let days = month_grid_days(
          date(2024, month, 5),
          week_start
        );
        assert!(
          days.len() == 35
            || days.len() == 42,
          "{month} -> {}",
          days.len()
        );
        assert_eq!(
          days.len() % 7,
          0
        );
      }
    }
  }

  #[test]
  fn week_navigation_steps_seven_days()
  {
    let mut focus = date(2024, 1, 1);
    for step in 1..=4 {
      focus = shift_calendar_focus(
        focus,
        CalendarViewMode::Week,
        1
      );
      assert_eq!(
        focus,
        date(2024, 1, 1 + 7 * step)
      );
    }
  }

  #[test]
  fn month_navigation_clamps_short_months()
  {
    let focus = shift_calendar_focus(
      date(2024, 1, 31),
      CalendarViewMode::Month,
      1
    );
    assert_eq!(
      focus,
      date(2024, 2, 29)
    );
  }

  #[test]
  fn day_navigation_crosses_month_edges()
  {
    let focus = shift_calendar_focus(
      date(2024, 2, 29),
      CalendarViewMode::Day,
      1
    );
    assert_eq!(focus, date(2024, 3, 1));
  }

  #[test]
  fn week_starts_respect_the_config()
  {
    let wednesday =
      date(2024, 7, 10);
    assert_eq!(
      start_of_week(
        wednesday,
        Weekday::Mon
      ),
      date(2024, 7, 8)
    );
    assert_eq!(
      start_of_week(
        wednesday,
        Weekday::Sun
      ),
      date(2024, 7, 7)
    );
  }
}
