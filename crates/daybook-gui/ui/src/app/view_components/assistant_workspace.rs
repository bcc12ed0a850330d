#[derive(Properties, PartialEq)]
struct AssistantWorkspaceProps {
  messages:   Vec<ChatMessage>,
  chat_input: String,
  busy:       bool,
  on_input:
    Callback<web_sys::InputEvent>,
  on_keydown:
    Callback<KeyboardEvent>,
  on_send:    Callback<MouseEvent>,
  on_quick:   Callback<String>
}

#[function_component(
  AssistantWorkspace
)]
fn assistant_workspace(
  props: &AssistantWorkspaceProps
) -> Html {
  html! {
      <div class="panel assistant-workspace">
          <div class="panel-head">
              <div>
                  <div class="panel-title">{ "Assistant" }</div>
                  <div class="panel-subtitle">{ "Your productivity companion" }</div>
              </div>
              <div class="quick-actions">
                  {
                      for QUICK_ACTIONS.iter().map(|(label, prompt)| {
                          let prompt = (*prompt).to_string();
                          let on_quick = props.on_quick.clone();
                          html! {
                              <button
                                  type="button"
                                  class="btn"
                                  onclick={Callback::from(move |_| on_quick.emit(prompt.clone()))}
                              >
                                  { *label }
                              </button>
                          }
                      })
                  }
              </div>
          </div>
          <div class="chat-scroll">
              {
                  for props.messages.iter().map(|message| {
                      let from_user = message.role == ChatRole::User;
                      html! {
                          <div
                              key={message.id.to_string()}
                              class={classes!("chat-row", from_user.then_some("from-user"))}
                          >
                              <div class="chat-bubble">
                                  <div class="chat-text">{ &message.text }</div>
                                  <div class="chat-stamp">{ &message.stamp }</div>
                              </div>
                          </div>
                      }
                  })
              }
              {
                  if props.busy {
                      html! {
                          <div class="chat-row">
                              <div class="chat-bubble typing">{ "..." }</div>
                          </div>
                      }
                  } else {
                      html! {}
                  }
              }
          </div>
          <div class="chat-input-row">
              <input
                  type="text"
                  placeholder="Ask me anything about productivity..."
                  value={props.chat_input.clone()}
                  oninput={props.on_input.clone()}
                  onkeydown={props.on_keydown.clone()}
              />
              <button
                  class="btn primary"
                  onclick={props.on_send.clone()}
                  disabled={props.busy || props.chat_input.trim().is_empty()}
              >
                  { "Send" }
              </button>
          </div>
      </div>
  }
}
