fn render_calendar_month_view(
  focus: NaiveDate,
  selected: NaiveDate,
  today: NaiveDate,
  week_start: Weekday,
  entries: &[DayEvent],
  on_select_date: Callback<NaiveDate>
) -> Html {
  let labels =
    weekday_labels(week_start);
  let days = month_grid_days(
    focus, week_start
  );

  html! {
      <>
          <div class="calendar-weekday-row">
              {
                  for labels.into_iter().map(|label| html! {
                      <div class="calendar-weekday">{ label }</div>
                  })
              }
          </div>
          <div class="calendar-grid calendar-month-grid">
              {
                  for days.into_iter().map(|day| {
                      let outside = day.month() != focus.month();
                      let is_selected = day == selected;
                      let is_today = day == today;
                      let (visible, overflow) = month_cell_summary(entries, day);
                      let on_select_date = on_select_date.clone();

                      html! {
                          <button
                              type="button"
                              class={classes!(
                                  "calendar-day-cell",
                                  outside.then_some("outside"),
                                  is_selected.then_some("selected"),
                                  is_today.then_some("today")
                              )}
                              onclick={Callback::from(move |_| on_select_date.emit(day))}
                          >
                              <div class="calendar-day-label">{ day.day() }</div>
                              <div class="calendar-day-events">
                                  {
                                      for visible.into_iter().map(|entry| {
                                          let color = entry.record.color.as_str();
                                          html! {
                                              <div
                                                  class="calendar-event-chip"
                                                  style={format!("background:{color}22;color:{color};")}
                                              >
                                                  { format!("{} {}", entry.record.start_time, entry.record.title) }
                                              </div>
                                          }
                                      })
                                  }
                                  {
                                      if overflow > 0 {
                                          html! { <div class="calendar-event-more">{ format!("+{overflow} more") }</div> }
                                      } else {
                                          html! {}
                                      }
                                  }
                              </div>
                          </button>
                      }
                  })
              }
          </div>
      </>
  }
}
