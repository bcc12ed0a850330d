/// The per-day detail list under the
/// month grid, fed by the selected
/// date rather than the navigation
/// focus.
fn render_selected_day_panel(
  selected: NaiveDate,
  entries: &[DayEvent],
  on_event_edit: Callback<Uuid>,
  on_event_delete: Callback<Uuid>
) -> Html {
  let day_events =
    events_for_day(entries, selected);
  if day_events.is_empty() {
    return html! {};
  }

  html! {
      <div class="selected-day-panel">
          <div class="selected-day-title">
              { format!("Events for {}", selected.format("%B %d, %Y")) }
          </div>
          <div class="selected-day-list">
              {
                  for day_events.into_iter().map(|entry| {
                      let id = entry.record.id;
                      let on_edit = on_event_edit.clone();
                      let on_delete = on_event_delete.clone();
                      html! {
                          <div class="selected-day-event">
                              <span
                                  class="event-dot"
                                  style={format!("background:{};", entry.record.color)}
                              ></span>
                              <div class="selected-day-event-body">
                                  <div class="selected-day-event-title">{ &entry.record.title }</div>
                                  <div class="selected-day-event-times">
                                      { format!("{} - {}", entry.record.start_time, entry.record.end_time) }
                                  </div>
                              </div>
                              <button
                                  type="button"
                                  class="btn"
                                  onclick={Callback::from(move |_| on_edit.emit(id))}
                              >
                                  { "Edit" }
                              </button>
                              <button
                                  type="button"
                                  class="btn danger"
                                  onclick={Callback::from(move |_| on_delete.emit(id))}
                              >
                                  { "Delete" }
                              </button>
                          </div>
                      }
                  })
              }
          </div>
      </div>
  }
}
