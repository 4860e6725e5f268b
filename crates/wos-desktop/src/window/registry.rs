//! Window registry: lifecycle, focus, and z-order
//!
//! Single source of truth for all open windows. The list order is the
//! z-order: windows paint back to front, topmost last. Operations on
//! unknown ids are silent no-ops, matching a GUI shell's tolerance of
//! stale callbacks.

use super::{Window, WindowId};
use crate::app::AppType;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE, MIN_WINDOW_SIZE};

/// Window registry handling window lifecycle, z-order, and focus
pub struct WindowRegistry {
    /// All windows, back to front
    windows: Vec<Window>,
    /// Currently active (focused) window, if any
    active: Option<WindowId>,
    /// Next window ID; ids are never reused
    next_id: u64,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Open a new window for an application.
    ///
    /// The window is appended at the top of the z-order, cascaded from the
    /// desktop origin so successive windows do not fully overlap, and made
    /// active. Never fails.
    pub fn open(&mut self, app: AppType) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let cascade = self.windows.len() as f32 * FRAME_STYLE.cascade_step;
        let window = Window {
            id,
            app,
            title: app.title().to_string(),
            position: Vec2::new(
                FRAME_STYLE.cascade_origin_x + cascade,
                FRAME_STYLE.cascade_origin_y + cascade,
            ),
            size: app.default_size(),
            minimized: false,
            maximized: false,
            restore_rect: None,
        };

        self.windows.push(window);
        self.active = Some(id);
        id
    }

    /// Close a window.
    ///
    /// If it was active, the new active window is the top-most remaining
    /// non-minimized window, or none.
    pub fn close(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            return;
        }
        if self.active == Some(id) {
            self.active = self.topmost_visible();
        }
    }

    /// Toggle the minimized flag.
    ///
    /// Minimizing the active window leaves no window active; restoring a
    /// window does not automatically re-focus it.
    pub fn minimize_toggle(&mut self, id: WindowId) {
        let now_minimized = match self.get_mut(id) {
            Some(window) => {
                window.minimized = !window.minimized;
                window.minimized
            }
            None => return,
        };
        if now_minimized && self.active == Some(id) {
            self.active = None;
        }
    }

    /// Toggle the maximized flag.
    ///
    /// Entering maximize snapshots the current geometry and fills the work
    /// area; exiting restores the snapshot, or falls back to the app's
    /// default size at the origin if no snapshot exists.
    pub fn maximize_toggle(&mut self, id: WindowId, work_area: Rect) {
        let Some(window) = self.get_mut(id) else {
            return;
        };

        if window.maximized {
            window.maximized = false;
            match window.restore_rect.take() {
                Some((pos, size)) => {
                    window.position = pos;
                    window.size = size;
                }
                None => {
                    window.position = Vec2::ZERO;
                    window.size = window.app.default_size();
                }
            }
        } else {
            window.restore_rect = Some((window.position, window.size));
            window.maximized = true;
            window.position = work_area.position();
            window.size = work_area.size();
        }
    }

    /// Focus a window: mark it active and raise it to the top of the
    /// z-order. No-op if the id is unknown or the window is minimized.
    pub fn focus(&mut self, id: WindowId) {
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            return;
        };
        if self.windows[index].minimized {
            return;
        }
        let window = self.windows.remove(index);
        self.windows.push(window);
        self.active = Some(id);
    }

    /// Set a window's position. Ignored while maximized.
    pub fn move_to(&mut self, id: WindowId, position: Vec2) {
        if !position.is_finite() {
            return;
        }
        if let Some(window) = self.get_mut(id) {
            if window.maximized {
                return;
            }
            window.position = position;
        }
    }

    /// Set a window's size, clamped to the minimum floor. Ignored while
    /// maximized.
    pub fn resize(&mut self, id: WindowId, size: Size) {
        if !size.is_finite() {
            return;
        }
        if let Some(window) = self.get_mut(id) {
            if window.maximized {
                return;
            }
            window.size = size.max(MIN_WINDOW_SIZE);
        }
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Get a mutable window by ID
    pub(crate) fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// The currently active window ID, if any
    #[inline]
    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    /// All windows in z-order, back to front
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Visible (non-minimized) windows in z-order, back to front
    pub fn visible(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    /// Number of open windows
    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether the registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Top-most non-minimized window, if any
    fn topmost_visible(&self) -> Option<WindowId> {
        self.windows.iter().rev().find(|w| w.is_visible()).map(|w| w.id)
    }

    /// Rebuild the registry from persisted windows.
    ///
    /// Records with duplicate ids or non-finite geometry are dropped;
    /// out-of-range geometry in surviving records is clamped back to a
    /// non-negative position and the minimum size floor (snapshot blobs
    /// can arrive hand-edited). The active id is kept only if it names an
    /// existing non-minimized window; the id counter resumes past the
    /// highest restored id so ids are never reused.
    pub(crate) fn rehydrate(&mut self, windows: Vec<Window>, active: Option<WindowId>) {
        self.windows.clear();
        for mut window in windows {
            if self.get(window.id).is_some() {
                continue;
            }
            if !window.position.is_finite() || !window.size.is_finite() {
                continue;
            }
            window.position = window.position.max(Vec2::ZERO);
            window.size = window.size.max(MIN_WINDOW_SIZE);
            self.windows.push(window);
        }
        self.next_id = self
            .windows
            .iter()
            .map(|w| w.id + 1)
            .max()
            .unwrap_or(1)
            .max(self.next_id);
        self.active = active.filter(|&id| self.get(id).is_some_and(|w| w.is_visible()));
    }
}
