//! Notes state: newest-first note list with search and JSON export.

use serde::{Deserialize, Serialize};
use wos_store::{keys, BlobStore, BlobStoreExt};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Milliseconds since the epoch
    pub created_at: u64,
    pub updated_at: u64,
}

#[derive(Clone, Debug, Default)]
pub struct NotesState {
    notes: Vec<Note>,
}

impl NotesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: BlobStore + ?Sized>(store: &S, user_id: &str) -> Self {
        Self {
            notes: store.get_json(&keys::notes(user_id)).unwrap_or_default(),
        }
    }

    pub fn save<S: BlobStore + ?Sized>(&self, store: &S, user_id: &str) {
        store.set_json(&keys::notes(user_id), &self.notes);
    }

    /// Newest-first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Create a note at the front of the list. A blank title is rejected.
    pub fn create(&mut self, title: &str, content: &str, now_ms: u64) -> Option<String> {
        if title.trim().is_empty() {
            return None;
        }

        let mut id = format!("note-{now_ms}");
        let mut bump = 1u64;
        while self.notes.iter().any(|n| n.id == id) {
            id = format!("note-{now_ms}-{bump}");
            bump += 1;
        }

        self.notes.insert(
            0,
            Note {
                id: id.clone(),
                title: title.to_string(),
                content: content.to_string(),
                created_at: now_ms,
                updated_at: now_ms,
            },
        );
        Some(id)
    }

    /// Rewrite a note's title and content, bumping `updated_at`.
    /// Unknown ids are ignored.
    pub fn update(&mut self, id: &str, title: &str, content: &str, now_ms: u64) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.title = title.to_string();
            note.content = content.to_string();
            note.updated_at = now_ms;
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.notes.retain(|n| n.id != id);
    }

    /// Case-insensitive substring match over title and content.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let query = query.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&query)
                    || n.content.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.notes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Replace the note list with an exported blob.
    pub fn import_json(&mut self, json: &str) -> Result<usize, serde_json::Error> {
        let notes: Vec<Note> = serde_json::from_str(json)?;
        let count = notes.len();
        self.notes = notes;
        Ok(count)
    }
}
