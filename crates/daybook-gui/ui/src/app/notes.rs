fn seed_notes(
  today: NaiveDate
) -> Vec<NoteItem> {
  vec![
    NoteItem {
      id:         Uuid::new_v4(),
      title:      "Project ideas"
        .to_string(),
      content:    "Brainstorm new \
                   features for the \
                   organizer."
        .to_string(),
      created_on: today,
      updated_on: today
    },
    NoteItem {
      id:         Uuid::new_v4(),
      title:      "Meeting notes"
        .to_string(),
      content:    "Discussed timeline \
                   and deliverables."
        .to_string(),
      created_on: today,
      updated_on: today
    },
  ]
}

/// New notes land at the front of
/// the list; an empty title falls
/// back to "Untitled".
fn new_note_item(
  title: &str,
  content: &str,
  today: NaiveDate
) -> NoteItem {
  let title = title.trim();
  NoteItem {
    id:         Uuid::new_v4(),
    title:      if title.is_empty() {
      "Untitled".to_string()
    } else {
      title.to_string()
    },
    content:    content.to_string(),
    created_on: today,
    updated_on: today
  }
}

#[cfg(test)]
mod note_tests {
  use super::*;

  #[test]
  fn blank_titles_become_untitled() {
    let today =
      NaiveDate::from_ymd_opt(
        2024, 3, 15
      )
      .expect("valid date");
    let note = new_note_item(
      "   ",
      "body",
      today
    );
    assert_eq!(
      note.title,
      "Untitled"
    );
    assert_eq!(note.content, "body");
  }
}
