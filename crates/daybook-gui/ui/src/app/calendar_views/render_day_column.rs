fn render_hour_labels() -> Html {
  html! {
      <div class="timeline-hours">
          {
              for (0_u32..24_u32).map(|hour| html! {
                  <div class="timeline-hour-label">{ format!("{hour:02}:00") }</div>
              })
          }
      </div>
  }
}

/// One 1440 px day column: hour
/// slots, positioned event blocks,
/// and the live time marker when the
/// column is today. Clicks on empty
/// track space prefill a draft at
/// the snapped time; event blocks
/// swallow their clicks.
fn render_day_column(
  day: NaiveDate,
  today: NaiveDate,
  now_minute: u32,
  entries: &[DayEvent],
  min_px: i64,
  menu_open: Option<Uuid>,
  on_track_click: Callback<(
    NaiveDate,
    MouseEvent
  )>,
  on_event_menu: Callback<Uuid>,
  on_event_edit: Callback<Uuid>,
  on_event_delete: Callback<Uuid>
) -> Html {
  let day_events =
    events_for_day(entries, day);
  let track_click = {
    let on_track_click =
      on_track_click.clone();
    Callback::from(
      move |event: MouseEvent| {
        on_track_click
          .emit((day, event));
      }
    )
  };

  html! {
      <div class="day-column" onclick={track_click}>
          {
              for (0_u32..24_u32).map(|_| html! {
                  <div class="timeline-hour-slot"></div>
              })
          }
          {
              for day_events.into_iter().map(|entry| {
                  let id = entry.record.id;
                  let color = entry.record.color.as_str();
                  let top = entry.start_minutes;
                  let height = event_height(
                      entry.start_minutes,
                      entry.end_minutes,
                      min_px
                  );
                  let open = menu_open == Some(id);
                  let on_menu = on_event_menu.clone();
                  let on_edit = on_event_edit.clone();
                  let on_delete = on_event_delete.clone();

                  html! {
                      <div
                          class={classes!("timeline-event", open.then_some("menu-open"))}
                          style={format!("top:{top}px;height:{height}px;background:{color};")}
                          onclick={Callback::from(move |event: MouseEvent| {
                              event.stop_propagation();
                              on_menu.emit(id);
                          })}
                      >
                          <div class="timeline-event-title">{ &entry.record.title }</div>
                          <div class="timeline-event-times">
                              { format!("{} - {}", entry.record.start_time, entry.record.end_time) }
                          </div>
                          {
                              if open {
                                  html! {
                                      <div class="timeline-event-menu">
                                          <button
                                              type="button"
                                              class="btn"
                                              onclick={Callback::from(move |event: MouseEvent| {
                                                  event.stop_propagation();
                                                  on_edit.emit(id);
                                              })}
                                          >
                                              { "Edit" }
                                          </button>
                                          <button
                                              type="button"
                                              class="btn danger"
                                              onclick={Callback::from(move |event: MouseEvent| {
                                                  event.stop_propagation();
                                                  on_delete.emit(id);
                                              })}
                                          >
                                              { "Delete" }
                                          </button>
                                      </div>
                                  }
                              } else {
                                  html! {}
                              }
                          }
                      </div>
                  }
              })
          }
          {
              if let Some(offset) = indicator_offset(day, today, now_minute) {
                  html! { <div class="timeline-now-line" style={format!("top:{offset}px;")}></div> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
