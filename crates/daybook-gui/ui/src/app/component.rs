include!("view_components/calendar_workspace.rs");
include!("view_components/calendar_nav_actions.rs");
include!("view_components/calendar_view_switch.rs");
include!("view_components/event_modal.rs");
include!("view_components/selected_day_panel.rs");
include!("view_components/todos_workspace.rs");
include!("view_components/notes_workspace.rs");
include!("view_components/assistant_workspace.rs");

#[function_component(App)]
pub fn app() -> Html {
  let theme =
    use_state(load_theme_mode);
  let active_tab =
    use_state(load_workspace_tab);
  let calendar_config =
    use_state(load_calendar_config);
  let calendar_view =
    use_state(load_calendar_view_mode);

  let timezone =
    resolve_calendar_timezone(
      &calendar_config
    );
  let week_start =
    calendar_week_start_day(
      &calendar_config.week_start
    );
  let today =
    today_in_timezone(timezone);

  let focus_date = use_state(move || {
    today_in_timezone(timezone)
  });
  let selected_date =
    use_state(move || {
      today_in_timezone(timezone)
    });
  let now_minute =
    use_state(move || {
      current_minute_of_day(timezone)
    });

  let session =
    use_state(|| None::<SessionDto>);
  let events = use_state(
    Vec::<EventRecord>::new
  );
  let events_loading =
    use_state(|| true);
  let event_menu =
    use_state(|| None::<Uuid>);
  let modal_state = use_state(|| {
    None::<EventModalState>
  });
  let modal_busy = use_state(|| false);
  let track_ref = use_node_ref();

  let todos = use_state(seed_todos);
  let todo_input =
    use_state(String::new);
  let show_suggestions =
    use_state(|| false);

  let notes = use_state(move || {
    seed_notes(today)
  });
  let selected_note =
    use_state(|| None::<Uuid>);
  let note_editing =
    use_state(|| false);
  let note_edit_title =
    use_state(String::new);
  let note_edit_content =
    use_state(String::new);
  let note_modal_open =
    use_state(|| false);
  let note_new_title =
    use_state(String::new);
  let note_new_content =
    use_state(String::new);

  let chat_messages =
    use_state(|| {
      vec![chat_message(
        ChatRole::Assistant,
        ASSISTANT_GREETING
      )]
    });
  let chat_input =
    use_state(String::new);
  let chat_busy = use_state(|| false);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  {
    let theme = theme.clone();
    use_effect_with(
      *theme,
      move |mode| {
        save_theme_mode(*mode);
        tracing::debug!(
          theme = mode.storage_value(),
          "persisted theme"
        );
        || ()
      }
    );
  }

  {
    let active_tab = active_tab.clone();
    use_effect_with(
      (*active_tab).clone(),
      move |tab| {
        save_workspace_tab(tab);
        tracing::debug!(
          tab = %tab,
          "persisted workspace tab"
        );
        || ()
      }
    );
  }

  {
    let calendar_view =
      calendar_view.clone();
    use_effect_with(
      *calendar_view,
      move |view| {
        save_calendar_view_mode(*view);
        tracing::debug!(
          view = %view.as_key(),
          "persisted calendar view mode"
        );
        || ()
      }
    );
  }

  {
    let session = session.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          match invoke_backend_no_args::<
            Option<SessionDto>
          >("session_get")
          .await
          {
            | Ok(value) => {
              tracing::info!(
                has_session =
                  value.is_some(),
                "session resolved"
              );
              session.set(value);
            }
            | Err(err) => tracing::error!(error = %err, "session_get failed")
          }
        }
      );
      || ()
    });
  }

  {
    let events = events.clone();
    let events_loading =
      events_loading.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(
        async move {
          match invoke_backend_no_args::<
            Vec<EventRecord>
          >("events_list")
          .await
          {
            | Ok(list) => {
              tracing::info!(
                count = list.len(),
                "events loaded"
              );
              events.set(list);
            }
            | Err(err) => tracing::error!(error = %err, "events_list failed")
          }
          events_loading.set(false);
        }
      );
      || ()
    });
  }

  {
    let now_minute = now_minute.clone();
    use_effect_with((), move |_| {
      let interval = Interval::new(
        60_000,
        move || {
          now_minute.set(
            current_minute_of_day(
              timezone
            )
          );
        }
      );
      move || drop(interval)
    });
  }

  {
    let track_ref = track_ref.clone();
    let minute_snapshot = *now_minute;
    use_effect_with(
      *calendar_view,
      move |view| {
        if view.uses_timeline() {
          wasm_bindgen_futures::spawn_local(async move {
                        TimeoutFuture::new(100).await;
                        if let Some(element) = track_ref.cast::<web_sys::Element>() {
                            let target = auto_scroll_target(minute_snapshot);
                            element.set_scroll_top(target as i32);
                        }
                    });
        }
        || ()
      }
    );
  }

  let on_toggle_theme = {
    let theme = theme.clone();
    Callback::from(move |_| {
      theme.set(theme.next());
    })
  };

  let nav_tab = |key: &'static str| {
    let active_tab = active_tab.clone();
    Callback::from(
      move |_: MouseEvent| {
        active_tab
          .set(key.to_string());
      }
    )
  };

  let on_set_view = {
    let calendar_view =
      calendar_view.clone();
    Callback::from(
      move |view: CalendarViewMode| {
        calendar_view.set(view);
      }
    )
  };

  let on_prev = {
    let focus_date = focus_date.clone();
    let calendar_view =
      calendar_view.clone();
    Callback::from(move |_| {
      focus_date.set(
        shift_calendar_focus(
          *focus_date,
          *calendar_view,
          -1
        )
      );
    })
  };

  let on_next = {
    let focus_date = focus_date.clone();
    let calendar_view =
      calendar_view.clone();
    Callback::from(move |_| {
      focus_date.set(
        shift_calendar_focus(
          *focus_date,
          *calendar_view,
          1
        )
      );
    })
  };

  let on_today = {
    let focus_date = focus_date.clone();
    let selected_date =
      selected_date.clone();
    Callback::from(move |_| {
      let today =
        today_in_timezone(timezone);
      focus_date.set(today);
      selected_date.set(today);
    })
  };

  let on_select_date = {
    let selected_date =
      selected_date.clone();
    Callback::from(
      move |day: NaiveDate| {
        selected_date.set(day);
      }
    )
  };

  let on_open_add = {
    let modal_state =
      modal_state.clone();
    let selected_date =
      selected_date.clone();
    Callback::from(move |_| {
      let (start, end) =
        draft_default_times(
          current_minute_of_day(
            timezone
          )
        );
      modal_state.set(Some(
        EventModalState {
          mode: EventModalMode::Add,
          day: *selected_date,
          draft_title: String::new(),
          draft_start: start,
          draft_end: end,
          draft_color:
            DEFAULT_EVENT_COLOR
              .to_string(),
          error: None
        }
      ));
    })
  };

  let on_track_click = {
    let modal_state =
      modal_state.clone();
    let event_menu = event_menu.clone();
    Callback::from(
      move |(day, event): (
        NaiveDate,
        MouseEvent
      )| {
        if event_menu.is_some() {
          event_menu.set(None);
          return;
        }
        let Some(target) = event
          .current_target()
          .and_then(|target| {
            target
              .dyn_into::<web_sys::Element>()
              .ok()
          })
        else {
          return;
        };
        let rect = target
          .get_bounding_client_rect();
        let offset = f64::from(
          event.client_y()
        ) - rect.top();
        let start =
          pointer_to_snapped_time(
            offset, 0.0
          );
        let start_minutes =
          time_to_offset_minutes(
            &start
          )
          .unwrap_or(0);
        modal_state.set(Some(
          EventModalState {
            mode:
              EventModalMode::Add,
            day,
            draft_title:
              String::new(),
            draft_start: start,
            draft_end:
              draft_end_time(
                start_minutes
              ),
            draft_color:
              DEFAULT_EVENT_COLOR
                .to_string(),
            error: None
          }
        ));
      }
    )
  };

  let on_event_menu = {
    let event_menu = event_menu.clone();
    Callback::from(move |id: Uuid| {
      if *event_menu == Some(id) {
        event_menu.set(None);
      } else {
        event_menu.set(Some(id));
      }
    })
  };

  let on_event_edit = {
    let modal_state =
      modal_state.clone();
    let event_menu = event_menu.clone();
    let events = events.clone();
    Callback::from(move |id: Uuid| {
      let Some(record) = events
        .iter()
        .find(|record| record.id == id)
        .cloned()
      else {
        return;
      };
      let day = parse_event_day(
        &record.date
      )
      .unwrap_or_else(|| {
        today_in_timezone(timezone)
      });
      event_menu.set(None);
      modal_state.set(Some(
        EventModalState {
          mode: EventModalMode::Edit(
            id
          ),
          day,
          draft_title: record.title,
          draft_start:
            record.start_time,
          draft_end: record.end_time,
          draft_color: record.color,
          error: None
        }
      ));
    })
  };

  let on_event_delete = {
    let events = events.clone();
    let event_menu = event_menu.clone();
    Callback::from(move |id: Uuid| {
      let events = events.clone();
      let event_menu =
        event_menu.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match invoke_backend::<(), _>(
            "event_delete",
            &EventIdArg { id }
          )
          .await
          {
            | Ok(()) => {
              let mut next =
                (*events).clone();
              next.retain(|record| {
                record.id != id
              });
              events.set(next);
              event_menu.set(None);
            }
            | Err(err) => {
              tracing::error!(error = %err, "event_delete failed");
              alert_user(
                "Could not delete \
                 the event. Please \
                 try again."
              );
            }
          }
        }
      );
    })
  };

  let on_modal_title = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        if let Some(input) = event
          .target_dyn_into::<web_sys::HtmlInputElement>()
          && let Some(mut current) =
            (*modal_state).clone()
        {
          current.draft_title =
            input.value();
          current.error = None;
          modal_state
            .set(Some(current));
        }
      }
    )
  };

  let on_modal_start = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        if let Some(input) = event
          .target_dyn_into::<web_sys::HtmlInputElement>()
          && let Some(mut current) =
            (*modal_state).clone()
        {
          current.draft_start =
            input.value();
          current.error = None;
          modal_state
            .set(Some(current));
        }
      }
    )
  };

  let on_modal_end = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        if let Some(input) = event
          .target_dyn_into::<web_sys::HtmlInputElement>()
          && let Some(mut current) =
            (*modal_state).clone()
        {
          current.draft_end =
            input.value();
          current.error = None;
          modal_state
            .set(Some(current));
        }
      }
    )
  };

  let on_modal_color = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |color: String| {
        if let Some(mut current) =
          (*modal_state).clone()
        {
          current.draft_color = color;
          modal_state
            .set(Some(current));
        }
      }
    )
  };

  let on_modal_cancel = {
    let modal_state =
      modal_state.clone();
    Callback::from(move |_| {
      modal_state.set(None);
    })
  };

  let on_modal_save = {
    let modal_state =
      modal_state.clone();
    let modal_busy = modal_busy.clone();
    let events = events.clone();
    let session = session.clone();
    Callback::from(move |_| {
      let Some(state) =
        (*modal_state).clone()
      else {
        return;
      };
      if state
        .draft_title
        .trim()
        .is_empty()
      {
        let mut next = state.clone();
        next.error = Some(
          "Title is required"
            .to_string()
        );
        modal_state.set(Some(next));
        return;
      }
      if session.is_none() {
        alert_user(
          "No active session. Add a \
           [user] section to \
           daybook.toml to save \
           events."
        );
        return;
      }

      let draft = EventDraft {
        title:      state
          .draft_title
          .trim()
          .to_string(),
        start_time: state
          .draft_start
          .clone(),
        end_time:   state
          .draft_end
          .clone(),
        date:       state
          .day
          .format(
            "%Y-%m-%dT00:00:00Z"
          )
          .to_string(),
        color:      normalize_hex_color(
          &state.draft_color
        )
      };

      modal_busy.set(true);
      let modal_state =
        modal_state.clone();
      let modal_busy =
        modal_busy.clone();
      let events = events.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match state.mode {
            | EventModalMode::Add => {
              match invoke_backend::<
                EventRecord,
                _
              >(
                "event_insert",
                &EventInsertArgs {
                  draft
                }
              )
              .await
              {
                | Ok(record) => {
                  let mut next =
                    (*events).clone();
                  next.push(record);
                  events.set(next);
                  modal_state
                    .set(None);
                }
                | Err(err) => {
                  tracing::error!(error = %err, "event_insert failed");
                  alert_user(
                    "Could not save \
                     the event. \
                     Please try \
                     again."
                  );
                }
              }
            }
            | EventModalMode::Edit(
              id
            ) => {
              match invoke_backend::<
                EventRecord,
                _
              >(
                "event_update",
                &EventUpdateArgs {
                  id,
                  draft
                }
              )
              .await
              {
                | Ok(record) => {
                  let mut next =
                    (*events).clone();
                  if let Some(slot) =
                    next
                      .iter_mut()
                      .find(|item| {
                        item.id == id
                      })
                  {
                    *slot = record;
                  }
                  events.set(next);
                  modal_state
                    .set(None);
                }
                | Err(err) => {
                  tracing::error!(error = %err, "event_update failed");
                  alert_user(
                    "Could not save \
                     the event. \
                     Please try \
                     again."
                  );
                }
              }
            }
          }
          modal_busy.set(false);
        }
      );
    })
  };

  let commit_todo = {
    let todos = todos.clone();
    let todo_input = todo_input.clone();
    move || {
      let text =
        (*todo_input).clone();
      if text.trim().is_empty() {
        return;
      }
      let mut next = (*todos).clone();
      next.push(new_todo_item(
        &text, false
      ));
      todos.set(next);
      todo_input.set(String::new());
    }
  };

  let on_todo_add = {
    let commit_todo = commit_todo.clone();
    Callback::from(move |_| {
      commit_todo();
    })
  };

  let on_todo_keydown = {
    Callback::from(
      move |event: KeyboardEvent| {
        if event.key() == "Enter" {
          commit_todo();
        }
      }
    )
  };

  let on_todo_input = {
    let todo_input = todo_input.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        if let Some(input) = event
          .target_dyn_into::<web_sys::HtmlInputElement>()
        {
          todo_input
            .set(input.value());
        }
      }
    )
  };

  let on_todo_toggle = {
    let todos = todos.clone();
    Callback::from(move |id: Uuid| {
      let next = todos
        .iter()
        .cloned()
        .map(|mut todo| {
          if todo.id == id {
            todo.completed =
              !todo.completed;
          }
          todo
        })
        .collect::<Vec<_>>();
      todos.set(next);
    })
  };

  let on_todo_delete = {
    let todos = todos.clone();
    Callback::from(move |id: Uuid| {
      let mut next = (*todos).clone();
      next.retain(|todo| {
        todo.id != id
      });
      todos.set(next);
    })
  };

  let on_toggle_suggestions = {
    let show_suggestions =
      show_suggestions.clone();
    Callback::from(move |_| {
      show_suggestions
        .set(!*show_suggestions);
    })
  };

  let on_accept_suggestion = {
    let todos = todos.clone();
    Callback::from(
      move |text: String| {
        let mut next =
          (*todos).clone();
        next.push(new_todo_item(
          &text, true
        ));
        todos.set(next);
      }
    )
  };

  let on_note_select = {
    let notes = notes.clone();
    let selected_note =
      selected_note.clone();
    let note_editing =
      note_editing.clone();
    let note_edit_title =
      note_edit_title.clone();
    let note_edit_content =
      note_edit_content.clone();
    Callback::from(move |id: Uuid| {
      let Some(note) = notes
        .iter()
        .find(|note| note.id == id)
      else {
        return;
      };
      note_edit_title
        .set(note.title.clone());
      note_edit_content
        .set(note.content.clone());
      note_editing.set(false);
      selected_note.set(Some(id));
    })
  };

  let on_note_delete = {
    let notes = notes.clone();
    let selected_note =
      selected_note.clone();
    Callback::from(move |id: Uuid| {
      let mut next = (*notes).clone();
      next.retain(|note| {
        note.id != id
      });
      notes.set(next);
      if *selected_note == Some(id) {
        selected_note.set(None);
      }
    })
  };

  let on_note_edit_start = {
    let note_editing =
      note_editing.clone();
    Callback::from(move |_| {
      note_editing.set(true);
    })
  };

  let on_note_edit_title = {
    let note_edit_title =
      note_edit_title.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        if let Some(input) = event
          .target_dyn_into::<web_sys::HtmlInputElement>()
        {
          note_edit_title
            .set(input.value());
        }
      }
    )
  };

  let on_note_edit_content = {
    let note_edit_content =
      note_edit_content.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        if let Some(input) = event
          .target_dyn_into::<web_sys::HtmlTextAreaElement>()
        {
          note_edit_content
            .set(input.value());
        }
      }
    )
  };

  let on_note_edit_save = {
    let notes = notes.clone();
    let selected_note =
      selected_note.clone();
    let note_editing =
      note_editing.clone();
    let note_edit_title =
      note_edit_title.clone();
    let note_edit_content =
      note_edit_content.clone();
    Callback::from(move |_| {
      let Some(id) = *selected_note
      else {
        return;
      };
      let today =
        today_in_timezone(timezone);
      let next = notes
        .iter()
        .cloned()
        .map(|mut note| {
          if note.id == id {
            note.title =
              (*note_edit_title)
                .clone();
            note.content =
              (*note_edit_content)
                .clone();
            note.updated_on = today;
          }
          note
        })
        .collect::<Vec<_>>();
      notes.set(next);
      note_editing.set(false);
    })
  };

  let on_note_edit_cancel = {
    let notes = notes.clone();
    let selected_note =
      selected_note.clone();
    let note_editing =
      note_editing.clone();
    let note_edit_title =
      note_edit_title.clone();
    let note_edit_content =
      note_edit_content.clone();
    Callback::from(move |_| {
      if let Some(note) =
        selected_note
          .and_then(|id| {
            notes.iter().find(
              |note| note.id == id
            )
          })
      {
        note_edit_title
          .set(note.title.clone());
        note_edit_content
          .set(note.content.clone());
      }
      note_editing.set(false);
    })
  };

  let on_note_new_open = {
    let note_modal_open =
      note_modal_open.clone();
    Callback::from(move |_| {
      note_modal_open.set(true);
    })
  };

  let on_note_new_cancel = {
    let note_modal_open =
      note_modal_open.clone();
    let note_new_title =
      note_new_title.clone();
    let note_new_content =
      note_new_content.clone();
    Callback::from(move |_| {
      note_modal_open.set(false);
      note_new_title
        .set(String::new());
      note_new_content
        .set(String::new());
    })
  };

  let on_note_new_title = {
    let note_new_title =
      note_new_title.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        if let Some(input) = event
          .target_dyn_into::<web_sys::HtmlInputElement>()
        {
          note_new_title
            .set(input.value());
        }
      }
    )
  };

  let on_note_new_content = {
    let note_new_content =
      note_new_content.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        if let Some(input) = event
          .target_dyn_into::<web_sys::HtmlTextAreaElement>()
        {
          note_new_content
            .set(input.value());
        }
      }
    )
  };

  let on_note_new_create = {
    let notes = notes.clone();
    let selected_note =
      selected_note.clone();
    let note_modal_open =
      note_modal_open.clone();
    let note_new_title =
      note_new_title.clone();
    let note_new_content =
      note_new_content.clone();
    let note_editing =
      note_editing.clone();
    let note_edit_title =
      note_edit_title.clone();
    let note_edit_content =
      note_edit_content.clone();
    Callback::from(move |_| {
      let title =
        (*note_new_title).clone();
      let content =
        (*note_new_content).clone();
      if title.trim().is_empty()
        && content.trim().is_empty()
      {
        return;
      }
      let today =
        today_in_timezone(timezone);
      let note = new_note_item(
        &title, &content, today
      );
      let mut next = vec![note.clone()];
      next.extend(
        (*notes).iter().cloned()
      );
      notes.set(next);
      note_edit_title
        .set(note.title.clone());
      note_edit_content
        .set(note.content.clone());
      note_editing.set(false);
      selected_note
        .set(Some(note.id));
      note_modal_open.set(false);
      note_new_title
        .set(String::new());
      note_new_content
        .set(String::new());
    })
  };

  let send_chat = {
    let chat_messages =
      chat_messages.clone();
    let chat_busy = chat_busy.clone();
    move |text: String| -> bool {
      let trimmed =
        text.trim().to_string();
      if trimmed.is_empty()
        || *chat_busy
      {
        return false;
      }

      let mut next =
        (*chat_messages).clone();
      next.push(chat_message(
        ChatRole::User,
        &trimmed
      ));
      chat_messages
        .set(next.clone());
      chat_busy.set(true);

      let chat_messages =
        chat_messages.clone();
      let chat_busy =
        chat_busy.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          TimeoutFuture::new(900)
            .await;
          let mut after = next;
          after.push(chat_message(
            ChatRole::Assistant,
            scripted_reply(&trimmed)
          ));
          chat_messages.set(after);
          chat_busy.set(false);
        }
      );
      true
    }
  };

  let on_chat_send = {
    let send_chat = send_chat.clone();
    let chat_input = chat_input.clone();
    Callback::from(move |_| {
      if send_chat(
        (*chat_input).clone()
      ) {
        chat_input.set(String::new());
      }
    })
  };

  let on_chat_keydown = {
    let send_chat = send_chat.clone();
    let chat_input = chat_input.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        if event.key() == "Enter"
          && send_chat(
            (*chat_input).clone()
          )
        {
          chat_input
            .set(String::new());
        }
      }
    )
  };

  let on_chat_input = {
    let chat_input = chat_input.clone();
    Callback::from(
      move |event: web_sys::InputEvent| {
        if let Some(input) = event
          .target_dyn_into::<web_sys::HtmlInputElement>()
        {
          chat_input
            .set(input.value());
        }
      }
    )
  };

  let on_quick_prompt = {
    Callback::from(
      move |prompt: String| {
        let _ = send_chat(prompt);
      }
    )
  };

  let on_window_minimize =
    window_command_callback(
      "window_minimize"
    );
  let on_window_toggle_maximize =
    window_command_callback(
      "window_toggle_maximize"
    );
  let on_window_close =
    window_command_callback(
      "window_close"
    );

  let entries =
    collect_day_events(&events);

  let workspace =
    match (*active_tab).as_str() {
      | "todos" => html! {
        <TodosWorkspace
            todos={(*todos).clone()}
            todo_input={(*todo_input).clone()}
            show_suggestions={*show_suggestions}
            on_input={on_todo_input}
            on_keydown={on_todo_keydown}
            on_add={on_todo_add}
            on_toggle={on_todo_toggle}
            on_delete={on_todo_delete}
            on_toggle_suggestions={on_toggle_suggestions}
            on_accept_suggestion={on_accept_suggestion}
        />
      },
      | "notes" => html! {
        <NotesWorkspace
            notes={(*notes).clone()}
            selected={*selected_note}
            editing={*note_editing}
            edit_title={(*note_edit_title).clone()}
            edit_content={(*note_edit_content).clone()}
            new_note_open={*note_modal_open}
            new_title={(*note_new_title).clone()}
            new_content={(*note_new_content).clone()}
            on_select={on_note_select}
            on_delete={on_note_delete}
            on_edit_start={on_note_edit_start}
            on_edit_title={on_note_edit_title}
            on_edit_content={on_note_edit_content}
            on_edit_save={on_note_edit_save}
            on_edit_cancel={on_note_edit_cancel}
            on_new_open={on_note_new_open}
            on_new_title={on_note_new_title}
            on_new_content={on_note_new_content}
            on_new_create={on_note_new_create}
            on_new_cancel={on_note_new_cancel}
        />
      },
      | "assistant" => html! {
        <AssistantWorkspace
            messages={(*chat_messages).clone()}
            chat_input={(*chat_input).clone()}
            busy={*chat_busy}
            on_input={on_chat_input}
            on_keydown={on_chat_keydown}
            on_send={on_chat_send}
            on_quick={on_quick_prompt}
        />
      },
      | _ => html! {
        <CalendarWorkspace
            view={*calendar_view}
            focus={*focus_date}
            selected={*selected_date}
            today={today}
            week_start={week_start}
            now_minute={*now_minute}
            entries={entries}
            loading={*events_loading}
            menu_open={*event_menu}
            track_ref={track_ref.clone()}
            modal={(*modal_state).clone()}
            modal_busy={*modal_busy}
            on_prev={on_prev}
            on_today={on_today}
            on_next={on_next}
            on_set_view={on_set_view}
            on_open_add={on_open_add}
            on_select_date={on_select_date}
            on_track_click={on_track_click}
            on_event_menu={on_event_menu}
            on_event_edit={on_event_edit}
            on_event_delete={on_event_delete}
            on_modal_title={on_modal_title}
            on_modal_start={on_modal_start}
            on_modal_end={on_modal_end}
            on_modal_color={on_modal_color}
            on_modal_save={on_modal_save}
            on_modal_cancel={on_modal_cancel}
        />
      }
    };

  html! {
      <div class={classes!("app-shell", theme.as_class())}>
          <WindowChrome
              title="Daybook"
              on_window_minimize={on_window_minimize}
              on_window_toggle_maximize={on_window_toggle_maximize}
              on_window_close={on_window_close}
          />
          <header class="app-header">
              <div class="app-brand">
                  <div class="app-name">{ "Daybook" }</div>
                  <div class="app-tagline">{ "Your personal organizer" }</div>
              </div>
              <WorkspaceTabs
                  active_tab={(*active_tab).clone()}
                  on_select_calendar_tab={nav_tab("calendar")}
                  on_select_todos_tab={nav_tab("todos")}
                  on_select_notes_tab={nav_tab("notes")}
                  on_select_assistant_tab={nav_tab("assistant")}
                  on_toggle_theme={on_toggle_theme}
                  theme_toggle_label={theme.toggle_label().to_string()}
              />
          </header>
          <main class="workspace">
              { workspace }
          </main>
      </div>
  }
}

fn window_command_callback(
  cmd: &'static str
) -> Callback<MouseEvent> {
  Callback::from(move |_| {
    wasm_bindgen_futures::spawn_local(
      async move {
        if let Err(err) =
          invoke_backend_no_args::<()>(
            cmd
          )
          .await
        {
          tracing::error!(
            cmd,
            error = %err,
            "window command failed"
          );
        }
      }
    );
  })
}

fn alert_user(message: &str) {
  if let Some(window) =
    web_sys::window()
  {
    let _ = window
      .alert_with_message(message);
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));

  let args = UiLogArgs {
    event:  event.to_string(),
    detail: detail.to_string()
  };
  wasm_bindgen_futures::spawn_local(
    async move {
      let _ = invoke_backend::<(), _>(
        "ui_log", &args
      )
      .await;
    }
  );
}
