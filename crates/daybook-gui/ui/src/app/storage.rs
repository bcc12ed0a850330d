fn load_theme_mode() -> ThemeMode {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
    });

  match stored.as_deref() {
    | Some("night") => ThemeMode::Night,
    | Some("day") => ThemeMode::Day,
    | _ => system_theme_mode()
  }
}

/// OS preference fallback for first
/// launch, before anything has been
/// persisted.
fn system_theme_mode() -> ThemeMode {
  let prefers_dark = web_sys::window()
    .and_then(|window| {
      window
        .match_media(
          "(prefers-color-scheme: \
           dark)"
        )
        .ok()
        .flatten()
    })
    .map(|query| query.matches())
    .unwrap_or(false);

  if prefers_dark {
    ThemeMode::Night
  } else {
    ThemeMode::Day
  }
}

fn save_theme_mode(theme: ThemeMode) {
  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
  {
    let _ = storage.set_item(
      THEME_STORAGE_KEY,
      theme.storage_value()
    );
  }
}

fn load_workspace_tab() -> String {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(
          WORKSPACE_TAB_STORAGE_KEY
        )
        .ok()
        .flatten()
    });

  match stored.as_deref() {
    | Some("todos") => {
      "todos".to_string()
    }
    | Some("notes") => {
      "notes".to_string()
    }
    | Some("assistant") => {
      "assistant".to_string()
    }
    | _ => "calendar".to_string()
  }
}

fn save_workspace_tab(tab: &str) {
  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
  {
    let _ = storage.set_item(
      WORKSPACE_TAB_STORAGE_KEY,
      tab
    );
  }
}

fn load_calendar_view_mode()
-> CalendarViewMode {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(
          CALENDAR_VIEW_STORAGE_KEY
        )
        .ok()
        .flatten()
    });

  stored
    .as_deref()
    .and_then(
      CalendarViewMode::from_key
    )
    .unwrap_or(CalendarViewMode::Month)
}

fn save_calendar_view_mode(
  view: CalendarViewMode
) {
  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
  {
    let _ = storage.set_item(
      CALENDAR_VIEW_STORAGE_KEY,
      view.as_key()
    );
  }
}

fn normalize_hex_color(
  value: &str
) -> String {
  let raw = value
    .trim()
    .trim_start_matches('#');

  if raw.len() == 3
    && raw
      .chars()
      .all(|ch| ch.is_ascii_hexdigit())
  {
    let mut expanded =
      String::with_capacity(7);
    expanded.push('#');
    for ch in raw.chars() {
      expanded.push(ch);
      expanded.push(ch);
    }
    return expanded
      .to_ascii_lowercase();
  }

  if raw.len() == 6
    && raw
      .chars()
      .all(|ch| ch.is_ascii_hexdigit())
  {
    return format!(
      "#{}",
      raw.to_ascii_lowercase()
    );
  }

  DEFAULT_EVENT_COLOR.to_string()
}
