#[derive(Properties, PartialEq)]
struct NotesWorkspaceProps {
  notes:            Vec<NoteItem>,
  selected:         Option<Uuid>,
  editing:          bool,
  edit_title:       String,
  edit_content:     String,
  new_note_open:    bool,
  new_title:        String,
  new_content:      String,
  on_select:        Callback<Uuid>,
  on_delete:        Callback<Uuid>,
  on_edit_start:    Callback<MouseEvent>,
  on_edit_title:
    Callback<web_sys::InputEvent>,
  on_edit_content:
    Callback<web_sys::InputEvent>,
  on_edit_save:     Callback<MouseEvent>,
  on_edit_cancel:   Callback<MouseEvent>,
  on_new_open:      Callback<MouseEvent>,
  on_new_title:
    Callback<web_sys::InputEvent>,
  on_new_content:
    Callback<web_sys::InputEvent>,
  on_new_create:    Callback<MouseEvent>,
  on_new_cancel:    Callback<MouseEvent>
}

#[function_component(NotesWorkspace)]
fn notes_workspace(
  props: &NotesWorkspaceProps
) -> Html {
  let selected_note =
    props.selected.and_then(|id| {
      props
        .notes
        .iter()
        .find(|note| note.id == id)
    });

  html! {
      <div class="panel notes-workspace">
          <div class="panel-head">
              <div class="panel-title">{ "Notes" }</div>
              <button class="btn primary" onclick={props.on_new_open.clone()}>{ "New Note" }</button>
          </div>
          <div class="notes-split">
              <div class="notes-list">
                  {
                      for props.notes.iter().map(|note| {
                          let id = note.id;
                          let is_selected = props.selected == Some(id);
                          let on_select = props.on_select.clone();
                          let on_delete = props.on_delete.clone();
                          html! {
                              <div
                                  class={classes!("note-card", is_selected.then_some("selected"))}
                                  onclick={Callback::from(move |_| on_select.emit(id))}
                              >
                                  <div class="note-card-head">
                                      <div class="note-card-title">{ &note.title }</div>
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
                                  <div class="note-card-preview">
                                      { if note.content.is_empty() { "No content" } else { note.content.as_str() } }
                                  </div>
                                  <div class="note-card-date">
                                      { note.updated_on.format("%Y-%m-%d").to_string() }
                                  </div>
                              </div>
                          }
                      })
                  }
              </div>
              <div class="note-editor">
                  {
                      if let Some(note) = selected_note {
                          html! {
                              <>
                                  <div class="note-editor-head">
                                      {
                                          if props.editing {
                                              html! {
                                                  <input
                                                      type="text"
                                                      class="note-title-input"
                                                      value={props.edit_title.clone()}
                                                      oninput={props.on_edit_title.clone()}
                                                  />
                                              }
                                          } else {
                                              html! {
                                                  <div>
                                                      <div class="note-editor-title">{ &note.title }</div>
                                                      <div class="note-editor-date">
                                                          { format!("Created {}", note.created_on.format("%Y-%m-%d")) }
                                                      </div>
                                                  </div>
                                              }
                                          }
                                      }
                                      <div class="actions">
                                          {
                                              if props.editing {
                                                  html! {
                                                      <>
                                                          <button class="btn primary" onclick={props.on_edit_save.clone()}>{ "Save" }</button>
                                                          <button class="btn" onclick={props.on_edit_cancel.clone()}>{ "Cancel" }</button>
                                                      </>
                                                  }
                                              } else {
                                                  html! {
                                                      <button class="btn" onclick={props.on_edit_start.clone()}>{ "Edit" }</button>
                                                  }
                                              }
                                          }
                                      </div>
                                  </div>
                                  {
                                      if props.editing {
                                          html! {
                                              <textarea
                                                  class="note-content-input"
                                                  placeholder="Start writing..."
                                                  value={props.edit_content.clone()}
                                                  oninput={props.on_edit_content.clone()}
                                              >
                                              </textarea>
                                          }
                                      } else {
                                          html! {
                                              <div class="note-content">
                                                  { if note.content.is_empty() { "No content" } else { note.content.as_str() } }
                                              </div>
                                          }
                                      }
                                  }
                              </>
                          }
                      } else {
                          html! {
                              <div class="note-empty">{ "Select a note to view or create a new one" }</div>
                          }
                      }
                  }
              </div>
          </div>
          {
              if props.new_note_open {
                  html! {
                      <div class="modal-backdrop" onclick={props.on_new_cancel.clone()}>
                          <div class="modal" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                              <div class="modal-title">{ "New Note" }</div>
                              <div class="field">
                                  <label>{ "Title" }</label>
                                  <input
                                      type="text"
                                      placeholder="Note title"
                                      value={props.new_title.clone()}
                                      oninput={props.on_new_title.clone()}
                                  />
                              </div>
                              <div class="field">
                                  <label>{ "Content" }</label>
                                  <textarea
                                      placeholder="Note content"
                                      value={props.new_content.clone()}
                                      oninput={props.on_new_content.clone()}
                                  >
                                  </textarea>
                              </div>
                              <div class="footer">
                                  <button class="btn" onclick={props.on_new_cancel.clone()}>{ "Cancel" }</button>
                                  <button class="btn primary" onclick={props.on_new_create.clone()}>{ "Create" }</button>
                              </div>
                          </div>
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
