//! Calendar state: a flat event list queried by day.

use serde::{Deserialize, Serialize};
use wos_store::{keys, BlobStore, BlobStoreExt};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    /// Whole days since the Unix epoch
    pub date: i64,
    /// Free-form clock string, e.g. "14:30"
    pub time: String,
    pub description: String,
}

#[derive(Clone, Debug, Default)]
pub struct CalendarState {
    events: Vec<CalendarEvent>,
}

impl CalendarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: BlobStore + ?Sized>(store: &S, user_id: &str) -> Self {
        Self {
            events: store
                .get_json(&keys::calendar_events(user_id))
                .unwrap_or_default(),
        }
    }

    pub fn save<S: BlobStore + ?Sized>(&self, store: &S, user_id: &str) {
        store.set_json(&keys::calendar_events(user_id), &self.events);
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Add an event. A blank title is rejected.
    pub fn add(
        &mut self,
        title: &str,
        date: i64,
        time: &str,
        description: &str,
        now_ms: u64,
    ) -> Option<String> {
        if title.trim().is_empty() {
            return None;
        }

        let mut id = format!("event-{now_ms}");
        let mut bump = 1u64;
        while self.events.iter().any(|e| e.id == id) {
            id = format!("event-{now_ms}-{bump}");
            bump += 1;
        }

        self.events.push(CalendarEvent {
            id: id.clone(),
            title: title.to_string(),
            date,
            time: time.to_string(),
            description: description.to_string(),
        });
        Some(id)
    }

    pub fn delete(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }

    /// Events falling on one day, sorted by their time string.
    pub fn events_on(&self, date: i64) -> Vec<&CalendarEvent> {
        let mut day: Vec<_> = self.events.iter().filter(|e| e.date == date).collect();
        day.sort_by(|a, b| a.time.cmp(&b.time));
        day
    }
}
