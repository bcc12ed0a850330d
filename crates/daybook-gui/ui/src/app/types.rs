const THEME_STORAGE_KEY: &str =
  "daybook.theme";
const WORKSPACE_TAB_STORAGE_KEY:
  &str = "daybook.workspace-tab";
const CALENDAR_VIEW_STORAGE_KEY:
  &str = "daybook.calendar-view";

const DEFAULT_EVENT_COLOR: &str =
  "#3b82f6";
const EVENT_COLOR_CHOICES: [&str; 6] = [
  "#3b82f6", "#10b981", "#f59e0b",
  "#ef4444", "#8b5cf6", "#ec4899"
];
const DEFAULT_CALENDAR_TIMEZONE:
  &str = "UTC";

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum ThemeMode {
  Day,
  Night
}

impl ThemeMode {
  fn as_class(self) -> &'static str {
    match self {
      | Self::Day => "theme-day",
      | Self::Night => "theme-night"
    }
  }

  fn next(self) -> Self {
    match self {
      | Self::Day => Self::Night,
      | Self::Night => Self::Day
    }
  }

  fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "day",
      | Self::Night => "night"
    }
  }

  fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "Night",
      | Self::Night => "Day"
    }
  }
}

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum CalendarViewMode {
  Month,
  Week,
  Day
}

impl CalendarViewMode {
  fn all() -> [Self; 3] {
    [Self::Month, Self::Week, Self::Day]
  }

  fn as_key(self) -> &'static str {
    match self {
      | Self::Month => "month",
      | Self::Week => "week",
      | Self::Day => "day"
    }
  }

  fn label(self) -> &'static str {
    match self {
      | Self::Month => "Month",
      | Self::Week => "Week",
      | Self::Day => "Day"
    }
  }

  fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "month" => Some(Self::Month),
      | "week" => Some(Self::Week),
      | "day" => Some(Self::Day),
      | _ => None
    }
  }

  fn uses_timeline(self) -> bool {
    matches!(
      self,
      Self::Week | Self::Day
    )
  }
}

#[derive(Clone, PartialEq)]
struct EventModalState {
  mode:        EventModalMode,
  day:         NaiveDate,
  draft_title: String,
  draft_start: String,
  draft_end:   String,
  draft_color: String,
  error:       Option<String>
}

#[derive(Clone, PartialEq)]
enum EventModalMode {
  Add,
  Edit(Uuid)
}

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum TodoPriority {
  Low,
  Medium,
  High
}

impl TodoPriority {
  fn rank(self) -> u8 {
    match self {
      | Self::Low => 1,
      | Self::Medium => 2,
      | Self::High => 3
    }
  }

  fn label(self) -> &'static str {
    match self {
      | Self::Low => "low",
      | Self::Medium => "medium",
      | Self::High => "high"
    }
  }
}

#[derive(Clone, PartialEq)]
struct TodoItem {
  id:        Uuid,
  text:      String,
  completed: bool,
  priority:  TodoPriority,
  suggested: bool
}

#[derive(Clone, PartialEq)]
struct NoteItem {
  id:         Uuid,
  title:      String,
  content:    String,
  created_on: NaiveDate,
  updated_on: NaiveDate
}

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum ChatRole {
  User,
  Assistant
}

#[derive(Clone, PartialEq)]
struct ChatMessage {
  id:    Uuid,
  role:  ChatRole,
  text:  String,
  stamp: String
}

#[derive(
  Clone, PartialEq, Deserialize,
)]
struct CalendarConfig {
  #[serde(default)]
  version:    u32,
  timezone:   Option<String>,
  #[serde(
    default = "calendar_default_week_start"
  )]
  week_start: String
}

impl Default for CalendarConfig {
  fn default() -> Self {
    Self {
      version:    1,
      timezone:   None,
      week_start:
        calendar_default_week_start()
    }
  }
}
