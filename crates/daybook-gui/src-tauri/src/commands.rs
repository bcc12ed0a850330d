use daybook_gui_shared::{EventDraft, EventRecord, SessionDto};
use tauri::State;
use tracing::instrument;
use uuid::Uuid;

use crate::state::AppState;

fn err_to_string(err: anyhow::Error) -> String {
    err.to_string()
}

#[tauri::command]
#[instrument(skip(state))]
pub async fn session_get(state: State<'_, AppState>) -> Result<Option<SessionDto>, String> {
    Ok(state.session())
}

#[tauri::command]
#[instrument(skip(state))]
pub async fn events_list(state: State<'_, AppState>) -> Result<Vec<EventRecord>, String> {
    state.list().map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state, draft), fields(title_len = draft.title.len()))]
pub async fn event_insert(
    state: State<'_, AppState>,
    draft: EventDraft,
) -> Result<EventRecord, String> {
    state.insert(draft).map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state, draft), fields(id = %id))]
pub async fn event_update(
    state: State<'_, AppState>,
    id: Uuid,
    draft: EventDraft,
) -> Result<EventRecord, String> {
    state.update(id, draft).map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state), fields(id = %id))]
pub async fn event_delete(state: State<'_, AppState>, id: Uuid) -> Result<(), String> {
    state.delete(id).map_err(err_to_string)
}

#[tauri::command]
pub async fn ui_log(event: String, detail: String) -> Result<(), String> {
    tracing::debug!(event, detail, "frontend log");
    Ok(())
}

#[tauri::command]
pub async fn window_minimize(window: tauri::Window) -> Result<(), String> {
    window.minimize().map_err(|err| err.to_string())
}

#[tauri::command]
pub async fn window_toggle_maximize(window: tauri::Window) -> Result<(), String> {
    let is_maximized = window.is_maximized().map_err(|err| err.to_string())?;
    if is_maximized {
        window.unmaximize().map_err(|err| err.to_string())
    } else {
        window.maximize().map_err(|err| err.to_string())
    }
}

#[tauri::command]
pub async fn window_close(window: tauri::Window) -> Result<(), String> {
    window.close().map_err(|err| err.to_string())
}
