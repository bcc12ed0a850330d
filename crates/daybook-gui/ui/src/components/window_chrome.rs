use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::WindowControls;

#[derive(Properties, PartialEq)]
pub struct WindowChromeProps {
  pub title:                     String,
  pub on_window_minimize:
    Callback<MouseEvent>,
  pub on_window_toggle_maximize:
    Callback<MouseEvent>,
  pub on_window_close:
    Callback<MouseEvent>
}

#[function_component(WindowChrome)]
pub fn window_chrome(
  props: &WindowChromeProps
) -> Html {
  html! {
      <div class="window-chrome" data-tauri-drag-region="true">
          <div class="window-title">{ props.title.clone() }</div>
          <WindowControls
              on_window_minimize={props.on_window_minimize.clone()}
              on_window_toggle_maximize={props.on_window_toggle_maximize.clone()}
              on_window_close={props.on_window_close.clone()}
          />
      </div>
  }
}
