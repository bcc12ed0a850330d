const TODO_SUGGESTIONS: [&str; 4] = [
  "Prepare presentation slides",
  "Follow up with client",
  "Update project documentation",
  "Review budget allocation"
];

fn seed_todos() -> Vec<TodoItem> {
  vec![
    TodoItem {
      id:        Uuid::new_v4(),
      text:      "Complete project \
                  proposal"
        .to_string(),
      completed: false,
      priority:  TodoPriority::High,
      suggested: true
    },
    TodoItem {
      id:        Uuid::new_v4(),
      text:      "Schedule team \
                  meeting"
        .to_string(),
      completed: false,
      priority:
        TodoPriority::Medium,
      suggested: false
    },
    TodoItem {
      id:        Uuid::new_v4(),
      text:      "Review code changes"
        .to_string(),
      completed: true,
      priority:  TodoPriority::Low,
      suggested: false
    },
  ]
}

fn new_todo_item(
  text: &str,
  suggested: bool
) -> TodoItem {
  TodoItem {
    id: Uuid::new_v4(),
    text: text.trim().to_string(),
    completed: false,
    priority: TodoPriority::Medium,
    suggested
  }
}

/// Display order: open items before
/// completed ones, higher priority
/// first, insertion order otherwise.
fn sorted_todos(
  todos: &[TodoItem]
) -> Vec<TodoItem> {
  let mut out = todos.to_vec();
  out.sort_by_key(|todo| {
    (
      todo.completed,
      Reverse(todo.priority.rank())
    )
  });
  out
}

fn remaining_count(
  todos: &[TodoItem]
) -> usize {
  todos
    .iter()
    .filter(|todo| !todo.completed)
    .count()
}

fn completed_count(
  todos: &[TodoItem]
) -> usize {
  todos
    .iter()
    .filter(|todo| todo.completed)
    .count()
}

#[cfg(test)]
mod todo_tests {
  use super::*;

  fn todo(
    text: &str,
    completed: bool,
    priority: TodoPriority
  ) -> TodoItem {
    TodoItem {
      id: Uuid::new_v4(),
      text: text.to_string(),
      completed,
      priority,
      suggested: false
    }
  }

  #[test]
  fn open_items_sort_before_completed()
  {
    let todos = vec![
      todo(
        "done",
        true,
        TodoPriority::High
      ),
      todo(
        "open",
        false,
        TodoPriority::Low
      ),
    ];

    let sorted = sorted_todos(&todos);
    assert_eq!(sorted[0].text, "open");
    assert_eq!(sorted[1].text, "done");
  }

  #[test]
  fn priority_orders_within_a_group()
  {
    let todos = vec![
      todo(
        "low",
        false,
        TodoPriority::Low
      ),
      todo(
        "high",
        false,
        TodoPriority::High
      ),
      todo(
        "medium",
        false,
        TodoPriority::Medium
      ),
    ];

    let sorted = sorted_todos(&todos);
    let texts = sorted
      .iter()
      .map(|todo| todo.text.as_str())
      .collect::<Vec<_>>();
    assert_eq!(
      texts,
      vec!["high", "medium", "low"]
    );
  }

  #[test]
  fn equal_items_keep_insertion_order()
  {
    let todos = vec![
      todo(
        "first",
        false,
        TodoPriority::Medium
      ),
      todo(
        "second",
        false,
        TodoPriority::Medium
      ),
    ];

    let sorted = sorted_todos(&todos);
    assert_eq!(
      sorted[0].text,
      "first"
    );
    assert_eq!(
      sorted[1].text,
      "second"
    );
  }

  #[test]
  fn counts_split_by_completion() {
    let todos = vec![
      todo(
        "a",
        false,
        TodoPriority::Low
      ),
      todo(
        "b",
        true,
        TodoPriority::Low
      ),
      todo(
        "c",
        false,
        TodoPriority::Low
      ),
    ];

    assert_eq!(
      remaining_count(&todos),
      2
    );
    assert_eq!(
      completed_count(&todos),
      1
    );
  }
}
