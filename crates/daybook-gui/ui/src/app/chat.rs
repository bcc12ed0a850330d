const ASSISTANT_GREETING: &str =
  "Hi! I'm your productivity \
   assistant. I can help you set \
   goals, organize your calendar, \
   and keep your tasks moving. What \
   would you like to do today?";

/// Keyword table for the scripted
/// assistant. The order is the
/// precedence: the first keyword
/// found in the input wins.
const SCRIPTED_REPLIES: &[(
  &str,
  &str
)] = &[
  (
    "goal",
    "Great! Let's set some goals. \
     What would you like to \
     achieve? I can help break it \
     down into tasks and put them \
     on your calendar."
  ),
  (
    "calendar",
    "I can help you organize your \
     calendar. Would you like time \
     blocks suggested around your \
     goals, or help scheduling a \
     specific event?"
  ),
  (
    "task",
    "Let's get your tasks in order. \
     Tell me what you're working \
     on and I'll help you plan and \
     schedule it."
  ),
  (
    "email",
    "Email automation is coming \
     soon. For now I can help with \
     reminders tied to your \
     calendar and tasks."
  ),
  (
    "recommendation",
    "Happy to make recommendations. \
     Tell me about your current \
     projects and I'll tailor \
     suggestions to them."
  ),
];

const FALLBACK_REPLY: &str =
  "I understand! Can you share a \
   few more details so I can help \
   you better?";

const QUICK_ACTIONS: [(&str, &str);
  4] = [
  (
    "Set goals",
    "I want to set some goals"
  ),
  (
    "Organize calendar",
    "Help me organize my calendar"
  ),
  (
    "Plan tasks",
    "I want to plan my tasks"
  ),
  (
    "Get recommendations",
    "Give me personalized \
     recommendations"
  )
];

/// First-match-wins over the
/// ordered keyword table; the
/// fallback answers everything
/// else.
fn scripted_reply(
  input: &str
) -> &'static str {
  let lowered =
    input.to_ascii_lowercase();
  SCRIPTED_REPLIES
    .iter()
    .find(|(keyword, _)| {
      lowered.contains(keyword)
    })
    .map(|(_, reply)| *reply)
    .unwrap_or(FALLBACK_REPLY)
}

fn chat_stamp() -> String {
  let now = js_sys::Date::new_0();
  format!(
    "{:02}:{:02}",
    now.get_hours(),
    now.get_minutes()
  )
}

fn chat_message(
  role: ChatRole,
  text: &str
) -> ChatMessage {
  ChatMessage {
    id: Uuid::new_v4(),
    role,
    text: text.to_string(),
    stamp: chat_stamp()
  }
}

#[cfg(test)]
mod chat_tests {
  use super::{
    FALLBACK_REPLY,
    SCRIPTED_REPLIES,
    scripted_reply
  };

  #[test]
  fn keyword_matching_is_case_insensitive()
  {
    assert_eq!(
      scripted_reply(
        "Help me with my CALENDAR"
      ),
      SCRIPTED_REPLIES[1].1
    );
  }

  #[test]
  fn earlier_keywords_take_precedence()
  {
    // Both "goal" and "task" occur;
    // the table order decides.
    assert_eq!(
      scripted_reply(
        "turn this task into a goal"
      ),
      SCRIPTED_REPLIES[0].1
    );
  }

  #[test]
  fn unmatched_input_gets_the_fallback()
  {
    assert_eq!(
      scripted_reply("hello there"),
      FALLBACK_REPLY
    );
  }
}
