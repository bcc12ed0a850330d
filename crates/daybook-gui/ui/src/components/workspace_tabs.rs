use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::WorkspaceTabButton;

#[derive(Properties, PartialEq)]
pub struct WorkspaceTabsProps {
  pub active_tab:              String,
  pub on_select_calendar_tab:
    Callback<MouseEvent>,
  pub on_select_todos_tab:
    Callback<MouseEvent>,
  pub on_select_notes_tab:
    Callback<MouseEvent>,
  pub on_select_assistant_tab:
    Callback<MouseEvent>,
  pub on_toggle_theme:
    Callback<MouseEvent>,
  pub theme_toggle_label:      String
}

#[function_component(WorkspaceTabs)]
pub fn workspace_tabs(
  props: &WorkspaceTabsProps
) -> Html {
  html! {
      <div class="workspace-tabs">
          <div class="workspace-tab-list">
              <WorkspaceTabButton
                  label="Calendar"
                  is_active={props.active_tab == "calendar"}
                  onclick={props.on_select_calendar_tab.clone()}
              />
              <WorkspaceTabButton
                  label="Todos"
                  is_active={props.active_tab == "todos"}
                  onclick={props.on_select_todos_tab.clone()}
              />
              <WorkspaceTabButton
                  label="Notes"
                  is_active={props.active_tab == "notes"}
                  onclick={props.on_select_notes_tab.clone()}
              />
              <WorkspaceTabButton
                  label="Assistant"
                  is_active={props.active_tab == "assistant"}
                  onclick={props.on_select_assistant_tab.clone()}
              />
          </div>
          <button class="btn theme-toggle" onclick={props.on_toggle_theme.clone()}>
              { props.theme_toggle_label.clone() }
          </button>
      </div>
  }
}
