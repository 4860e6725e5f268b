//! Snapshot serialization for desktop state

use serde::{Deserialize, Serialize};

use crate::app::AppType;
use crate::math::{Size, Vec2};
use crate::window::{Window, WindowId};

/// One persisted window record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedWindow {
    pub id: WindowId,
    pub app: AppType,
    pub title: String,
    pub position: Vec2,
    pub size: Size,
    pub minimized: bool,
    pub maximized: bool,
    /// Restore geometry remembered before maximize
    pub restore_rect: Option<(Vec2, Size)>,
}

impl From<&Window> for PersistedWindow {
    fn from(window: &Window) -> Self {
        Self {
            id: window.id,
            app: window.app,
            title: window.title.clone(),
            position: window.position,
            size: window.size,
            minimized: window.minimized,
            maximized: window.maximized,
            restore_rect: window.restore_rect,
        }
    }
}

impl From<PersistedWindow> for Window {
    fn from(persisted: PersistedWindow) -> Self {
        Window {
            id: persisted.id,
            app: persisted.app,
            title: persisted.title,
            position: persisted.position,
            size: persisted.size,
            minimized: persisted.minimized,
            maximized: persisted.maximized,
            restore_rect: persisted.restore_rect,
        }
    }
}

/// Snapshot of desktop state for persistence
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version for migration support
    pub version: u32,
    /// Windows in z-order, back to front
    pub windows: Vec<PersistedWindow>,
    /// Active window id, if any
    pub active: Option<WindowId>,
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(windows: Vec<PersistedWindow>, active: Option<WindowId>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            windows,
            active,
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Add migration logic as versions increase
        self.version = Self::CURRENT_VERSION;
    }
}
