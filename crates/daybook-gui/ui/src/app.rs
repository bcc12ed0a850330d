use std::cmp::Reverse;

use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Utc,
  Weekday
};
use chrono_tz::Tz;
use daybook_gui_shared::{
  EventDraft,
  EventIdArg,
  EventInsertArgs,
  EventRecord,
  EventUpdateArgs,
  SessionDto,
  UiLogArgs
};
use gloo::console::log;
use gloo::timers::callback::Interval;
use gloo::timers::future::TimeoutFuture;
use serde::Deserialize;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  MouseEvent,
  NodeRef,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_state
};

use crate::api::{
  invoke_backend,
  invoke_backend_no_args
};
use crate::components::{
  WindowChrome,
  WorkspaceTabs
};

include!("app/types.rs");
include!("app/storage.rs");
include!("app/timeline.rs");
include!("app/calendar.rs");
include!("app/events.rs");
include!("app/todos.rs");
include!("app/notes.rs");
include!("app/chat.rs");
include!("app/component.rs");
