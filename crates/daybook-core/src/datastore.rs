use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use uuid::Uuid;

use crate::event::Event;

/// The on-disk event store: one JSONL file, one event per line, replaced
/// atomically on every write.
#[derive(Debug)]
pub struct EventStore {
    pub data_dir: PathBuf,
    pub events_path: PathBuf,
}

impl EventStore {
    #[tracing::instrument(skip(data_dir))]
    pub fn open(data_dir: &Path) -> anyhow::Result<Self> {
        let data_dir = data_dir.to_path_buf();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create {}", data_dir.display()))?;

        let events_path = data_dir.join("events.data");
        if !events_path.exists() {
            fs::write(&events_path, "")?;
        }

        info!(
            data_dir = %data_dir.display(),
            events = %events_path.display(),
            "opened event store"
        );

        Ok(Self {
            data_dir,
            events_path,
        })
    }

    #[tracing::instrument(skip(self))]
    pub fn load(&self) -> anyhow::Result<Vec<Event>> {
        load_jsonl(&self.events_path).context("failed to load events.data")
    }

    /// Events for one user, ordered by date ascending, then start time.
    #[tracing::instrument(skip(self))]
    pub fn list_for_user(&self, user_id: &str) -> anyhow::Result<Vec<Event>> {
        let mut events: Vec<Event> = self
            .load()?
            .into_iter()
            .filter(|event| event.user_id == user_id)
            .collect();
        events.sort_by_key(|event| (event.date, event.start_time));
        Ok(events)
    }

    #[tracing::instrument(skip(self, event), fields(id = %event.id))]
    pub fn insert(&self, event: Event) -> anyhow::Result<Event> {
        let mut events = self.load()?;
        events.push(event.clone());
        self.save(&events)?;
        Ok(event)
    }

    /// Full replacement keyed by id; every field of the stored event is
    /// overwritten except the id itself.
    #[tracing::instrument(skip(self, replacement), fields(id = %id))]
    pub fn update(&self, id: Uuid, replacement: Event) -> anyhow::Result<Event> {
        let mut events = self.load()?;
        let slot = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| anyhow!("event not found: {id}"))?;

        *slot = Event { id, ..replacement };
        let updated = slot.clone();
        self.save(&events)?;
        Ok(updated)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn delete(&self, id: Uuid) -> anyhow::Result<()> {
        let mut events = self.load()?;
        let before = events.len();
        events.retain(|event| event.id != id);
        if events.len() == before {
            return Err(anyhow!("event not found: {id}"));
        }
        self.save(&events)?;
        Ok(())
    }

    #[tracing::instrument(skip(self, events))]
    fn save(&self, events: &[Event]) -> anyhow::Result<()> {
        save_jsonl_atomic(&self.events_path, events).context("failed to save events.data")
    }
}

#[tracing::instrument(skip(path))]
fn load_jsonl(path: &Path) -> anyhow::Result<Vec<Event>> {
    debug!(file = %path.display(), "loading jsonl");
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let event: Event = serde_json::from_str(trimmed)
            .with_context(|| format!("failed parsing {} line {}", path.display(), idx + 1))?;
        out.push(event);
    }

    debug!(count = out.len(), "loaded events from jsonl");
    Ok(out)
}

#[tracing::instrument(skip(path, events))]
fn save_jsonl_atomic(path: &Path, events: &[Event]) -> anyhow::Result<()> {
    debug!(file = %path.display(), count = events.len(), "saving jsonl atomically");

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    for event in events {
        let serialized = serde_json::to_string(event)?;
        writeln!(temp, "{serialized}")?;
    }
    temp.flush()?;

    temp.persist(path)
        .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;

    Ok(())
}
