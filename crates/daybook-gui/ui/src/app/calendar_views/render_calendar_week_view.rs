fn render_calendar_week_view(
  focus: NaiveDate,
  today: NaiveDate,
  week_start: Weekday,
  now_minute: u32,
  entries: &[DayEvent],
  track_ref: &NodeRef,
  menu_open: Option<Uuid>,
  on_track_click: Callback<(
    NaiveDate,
    MouseEvent
  )>,
  on_event_menu: Callback<Uuid>,
  on_event_edit: Callback<Uuid>,
  on_event_delete: Callback<Uuid>
) -> Html {
  let days =
    week_days(focus, week_start);

  html! {
      <div class="calendar-timeline calendar-week-timeline">
          <div class="timeline-head">
              <div class="timeline-head-spacer"></div>
              {
                  for days.iter().map(|day| html! {
                      <div class={classes!("timeline-head-day", (*day == today).then_some("today"))}>
                          { day.format("%a %d").to_string() }
                      </div>
                  })
              }
          </div>
          <div class="timeline-scroll" ref={track_ref.clone()}>
              { render_hour_labels() }
              {
                  for days.into_iter().map(|day| {
                      render_day_column(
                          day,
                          today,
                          now_minute,
                          entries,
                          WEEK_VIEW_MIN_EVENT_PX,
                          menu_open,
                          on_track_click.clone(),
                          on_event_menu.clone(),
                          on_event_edit.clone(),
                          on_event_delete.clone()
                      )
                  })
              }
          </div>
      </div>
  }
}
