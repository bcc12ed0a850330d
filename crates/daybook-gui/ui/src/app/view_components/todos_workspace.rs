#[derive(Properties, PartialEq)]
struct TodosWorkspaceProps {
  todos:            Vec<TodoItem>,
  todo_input:       String,
  show_suggestions: bool,
  on_input:
    Callback<web_sys::InputEvent>,
  on_keydown:
    Callback<KeyboardEvent>,
  on_add:           Callback<MouseEvent>,
  on_toggle:        Callback<Uuid>,
  on_delete:        Callback<Uuid>,
  on_toggle_suggestions:
    Callback<MouseEvent>,
  on_accept_suggestion:
    Callback<String>
}

#[function_component(TodosWorkspace)]
fn todos_workspace(
  props: &TodosWorkspaceProps
) -> Html {
  let ordered =
    sorted_todos(&props.todos);

  html! {
      <div class="panel todos-workspace">
          <div class="panel-head">
              <div class="panel-title">{ "Todo List" }</div>
              <button class="btn" onclick={props.on_toggle_suggestions.clone()}>
                  { if props.show_suggestions { "Hide Suggestions" } else { "Suggestions" } }
              </button>
          </div>
          {
              if props.show_suggestions {
                  html! {
                      <div class="suggestion-panel">
                          <div class="suggestion-title">{ "Suggested tasks" }</div>
                          {
                              for TODO_SUGGESTIONS.iter().map(|suggestion| {
                                  let text = (*suggestion).to_string();
                                  let on_accept = props.on_accept_suggestion.clone();
                                  html! {
                                      <button
                                          type="button"
                                          class="suggestion-item"
                                          onclick={Callback::from(move |_| on_accept.emit(text.clone()))}
                                      >
                                          { *suggestion }
                                      </button>
                                  }
                              })
                          }
                      </div>
                  }
              } else {
                  html! {}
              }
          }
          <div class="todo-input-row">
              <input
                  type="text"
                  placeholder="Add a new task..."
                  value={props.todo_input.clone()}
                  oninput={props.on_input.clone()}
                  onkeydown={props.on_keydown.clone()}
              />
              <button class="btn primary" onclick={props.on_add.clone()}>{ "Add" }</button>
          </div>
          <div class="todo-list">
              {
                  for ordered.into_iter().map(|todo| {
                      let id = todo.id;
                      let on_toggle = props.on_toggle.clone();
                      let on_delete = props.on_delete.clone();
                      html! {
                          <div class={classes!("todo-row", todo.completed.then_some("completed"))}>
                              <button
                                  type="button"
                                  class={classes!("todo-check", todo.completed.then_some("checked"))}
                                  onclick={Callback::from(move |_| on_toggle.emit(id))}
                              >
                                  { if todo.completed { "\u{2713}" } else { "" } }
                              </button>
                              <div class="todo-body">
                                  <div class="todo-text">{ &todo.text }</div>
                                  <div class="todo-meta">
                                      <span class={classes!("badge", "priority", todo.priority.label())}>
                                          { todo.priority.label() }
                                      </span>
                                      {
                                          if todo.suggested {
                                              html! { <span class="badge suggested">{ "suggested" }</span> }
                                          } else {
                                              html! {}
                                          }
                                      }
                                  </div>
                              </div>
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
          <div class="todo-stats">
              <span>{ format!("{} remaining", remaining_count(&props.todos)) }</span>
              <span>{ format!("{} completed", completed_count(&props.todos)) }</span>
          </div>
      </div>
  }
}
