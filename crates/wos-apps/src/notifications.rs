//! Notification center state: newest-first feed with read tracking.

use serde::{Deserialize, Serialize};
use wos_store::{keys, BlobStore, BlobStoreExt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    /// Milliseconds since the epoch
    pub timestamp: u64,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    items: Vec<Notification>,
}

impl NotificationsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: BlobStore + ?Sized>(store: &S, user_id: &str) -> Self {
        Self {
            items: store
                .get_json(&keys::notifications(user_id))
                .unwrap_or_default(),
        }
    }

    pub fn save<S: BlobStore + ?Sized>(&self, store: &S, user_id: &str) {
        store.set_json(&keys::notifications(user_id), &self.items);
    }

    /// Newest-first
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn push(&mut self, title: &str, message: &str, kind: NotificationKind, now_ms: u64) {
        let mut id = format!("notif-{now_ms}");
        let mut bump = 1u64;
        while self.items.iter().any(|n| n.id == id) {
            id = format!("notif-{now_ms}-{bump}");
            bump += 1;
        }

        self.items.insert(
            0,
            Notification {
                id,
                title: title.to_string(),
                message: message.to_string(),
                kind,
                read: false,
                timestamp: now_ms,
            },
        );
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }
}
