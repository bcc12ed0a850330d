fn render_calendar_day_view(
  focus: NaiveDate,
  today: NaiveDate,
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
  html! {
      <div class="calendar-timeline calendar-day-timeline">
          <div class="timeline-head">
              <div class="timeline-head-spacer"></div>
              <div class={classes!("timeline-head-day", (focus == today).then_some("today"))}>
                  { focus.format("%A %d").to_string() }
              </div>
          </div>
          <div class="timeline-scroll" ref={track_ref.clone()}>
              { render_hour_labels() }
              {
                  render_day_column(
                      focus,
                      today,
                      now_minute,
                      entries,
                      DAY_VIEW_MIN_EVENT_PX,
                      menu_open,
                      on_track_click,
                      on_event_menu,
                      on_event_edit,
                      on_event_delete
                  )
              }
          </div>
      </div>
  }
}
