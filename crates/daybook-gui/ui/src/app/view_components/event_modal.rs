fn render_event_modal(
  state: &EventModalState,
  busy: bool,
  on_title: Callback<web_sys::InputEvent>,
  on_start: Callback<web_sys::InputEvent>,
  on_end: Callback<web_sys::InputEvent>,
  on_color: Callback<String>,
  on_save: Callback<MouseEvent>,
  on_cancel: Callback<MouseEvent>
) -> Html {
  let heading = match state.mode {
    | EventModalMode::Add => {
      "Add Event"
    }
    | EventModalMode::Edit(_) => {
      "Edit Event"
    }
  };

  html! {
      <div class="modal-backdrop" onclick={on_cancel.clone()}>
          <div class="modal" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
              <div class="modal-title">{ heading }</div>
              <div class="modal-subtitle">{ state.day.format("%A, %B %d, %Y").to_string() }</div>
              <div class="field">
                  <label>{ "Title" }</label>
                  <input
                      type="text"
                      placeholder="Event title"
                      value={state.draft_title.clone()}
                      oninput={on_title}
                  />
              </div>
              <div class="field-row">
                  <div class="field">
                      <label>{ "Start" }</label>
                      <input
                          type="time"
                          step="900"
                          value={state.draft_start.clone()}
                          oninput={on_start}
                      />
                  </div>
                  <div class="field">
                      <label>{ "End" }</label>
                      <input
                          type="time"
                          step="900"
                          value={state.draft_end.clone()}
                          oninput={on_end}
                      />
                  </div>
              </div>
              <div class="field">
                  <label>{ "Color" }</label>
                  <div class="color-row">
                      {
                          for EVENT_COLOR_CHOICES.iter().map(|color| {
                              let value = (*color).to_string();
                              let is_active = state.draft_color == *color;
                              let on_color = on_color.clone();
                              html! {
                                  <button
                                      type="button"
                                      class={classes!("color-swatch", is_active.then_some("active"))}
                                      style={format!("background:{color};")}
                                      onclick={Callback::from(move |_| on_color.emit(value.clone()))}
                                  >
                                  </button>
                              }
                          })
                      }
                  </div>
              </div>
              {
                  if let Some(error) = state.error.as_ref() {
                      html! { <div class="modal-error">{ error.clone() }</div> }
                  } else {
                      html! {}
                  }
              }
              <div class="footer">
                  <button type="button" class="btn" onclick={on_cancel} disabled={busy}>{ "Cancel" }</button>
                  <button type="button" class="btn primary" onclick={on_save} disabled={busy}>
                      { if busy { "Saving..." } else { "Save" } }
                  </button>
              </div>
          </div>
      </div>
  }
}
