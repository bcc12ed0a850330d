use anyhow::{Context, anyhow};
use daybook_core::clock;
use daybook_core::config::{Config, Session};
use daybook_core::datastore::EventStore;
use daybook_core::event::{Event, calendar_date_serde};
use daybook_gui_shared::{EventDraft, EventRecord, SessionDto};
use parking_lot::Mutex;
use tracing::{debug, instrument};
use uuid::Uuid;

pub struct AppState {
    store: Mutex<EventStore>,
    session: Option<Session>,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load(None).context("failed to load configuration")?;
        let session = config.session();
        debug!(has_session = session.is_some(), "resolved session");

        let data_dir = daybook_core::config::resolve_data_dir();
        let store = EventStore::open(&data_dir)
            .with_context(|| format!("failed to open event store at {}", data_dir.display()))?;

        Ok(Self {
            store: Mutex::new(store),
            session,
        })
    }

    pub fn session(&self) -> Option<SessionDto> {
        self.session.as_ref().map(|session| SessionDto {
            user_id: session.user_id.clone(),
            display_name: session.display_name.clone(),
        })
    }

    /// The read path is deliberately silent about a missing session: it
    /// yields an empty list instead of an error.
    #[instrument(skip(self))]
    pub fn list(&self) -> anyhow::Result<Vec<EventRecord>> {
        let Some(session) = self.session.as_ref() else {
            return Ok(vec![]);
        };

        let store = self.store.lock();
        let events = store.list_for_user(&session.user_id)?;
        Ok(events.into_iter().map(event_to_record).collect())
    }

    #[instrument(skip(self, draft), fields(title_len = draft.title.len()))]
    pub fn insert(&self, draft: EventDraft) -> anyhow::Result<EventRecord> {
        let session = self.require_session()?;
        let store = self.store.lock();

        let (start_time, end_time, date) = parse_draft(&draft)?;
        let event = Event::new(
            draft.title,
            start_time,
            end_time,
            date,
            draft.color,
            session.user_id.clone(),
        );

        let inserted = store.insert(event)?;
        Ok(event_to_record(inserted))
    }

    #[instrument(skip(self, draft), fields(id = %id))]
    pub fn update(&self, id: Uuid, draft: EventDraft) -> anyhow::Result<EventRecord> {
        let session = self.require_session()?;
        let store = self.store.lock();

        let (start_time, end_time, date) = parse_draft(&draft)?;
        let replacement = Event::new(
            draft.title,
            start_time,
            end_time,
            date,
            draft.color,
            session.user_id.clone(),
        );

        let updated = store.update(id, replacement)?;
        Ok(event_to_record(updated))
    }

    #[instrument(skip(self), fields(id = %id))]
    pub fn delete(&self, id: Uuid) -> anyhow::Result<()> {
        let store = self.store.lock();
        store.delete(id)
    }

    fn require_session(&self) -> anyhow::Result<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| anyhow!("no active session"))
    }
}

/// Times and the date must parse; their ordering is not checked, matching
/// the storage contract.
fn parse_draft(draft: &EventDraft) -> anyhow::Result<(u32, u32, chrono::NaiveDate)> {
    let start_time = clock::parse_clock(&draft.start_time)
        .with_context(|| format!("invalid start_time {:?}", draft.start_time))?;
    let end_time = clock::parse_clock(&draft.end_time)
        .with_context(|| format!("invalid end_time {:?}", draft.end_time))?;
    let date = calendar_date_serde::parse_calendar_date(&draft.date)
        .ok_or_else(|| anyhow!("invalid date {:?}", draft.date))?;
    Ok((start_time, end_time, date))
}

fn event_to_record(event: Event) -> EventRecord {
    EventRecord {
        id: event.id,
        title: event.title,
        start_time: clock::format_clock(event.start_time),
        end_time: clock::format_clock(event.end_time),
        date: event.date.format("%Y-%m-%dT00:00:00Z").to_string(),
        color: event.color,
        user_id: event.user_id,
    }
}
