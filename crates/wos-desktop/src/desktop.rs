//! Desktop shell coordinating windows, input, and the viewport
//!
//! Host shells drive this through the lifecycle operations and the pointer
//! handlers; content hosts read `visible_windows` each frame and render one
//! opaque pane per record, topmost last.

use crate::app::AppType;
use crate::input::{DragController, DragState, PointerTarget};
use crate::math::{Size, Vec2};
use crate::persistence::{PersistedWindow, Snapshot};
use crate::viewport::Viewport;
use crate::window::{Window, WindowId, WindowRegistry};

/// The desktop: window registry, drag controller, and viewport
pub struct Desktop {
    /// Window registry
    pub windows: WindowRegistry,
    /// Pointer drag controller
    pub drag: DragController,
    /// Screen viewport
    pub viewport: Viewport,
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

impl Desktop {
    /// Create a desktop for the given screen size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            windows: WindowRegistry::new(),
            drag: DragController::new(),
            viewport: Viewport::new(width, height),
        }
    }

    /// Resize the screen viewport
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    // =========================================================================
    // Window lifecycle
    // =========================================================================

    /// Open a window hosting the given application
    pub fn open_app(&mut self, app: AppType) -> WindowId {
        self.windows.open(app)
    }

    /// Close a window
    pub fn close_window(&mut self, id: WindowId) {
        self.windows.close(id);
    }

    /// Toggle a window's minimized flag
    pub fn minimize_window(&mut self, id: WindowId) {
        self.windows.minimize_toggle(id);
    }

    /// Toggle a window between maximized and its restore geometry
    pub fn maximize_window(&mut self, id: WindowId) {
        let work_area = self.viewport.work_area();
        self.windows.maximize_toggle(id, work_area);
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.focus(id);
    }

    /// Move a window, clamped to the viewport
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) {
        let Some(size) = self.windows.get(id).map(|w| w.size) else {
            return;
        };
        let pos = self.viewport.clamp_position(Vec2::new(x, y), size);
        self.windows.move_to(id, pos);
    }

    /// Resize a window, clamped to the minimum floor
    pub fn resize_window(&mut self, id: WindowId, width: f32, height: f32) {
        self.windows.resize(id, Size::new(width, height));
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Handle a pointer press, classified by the input source.
    ///
    /// Returns whether the press started a gesture.
    pub fn pointer_down(&mut self, x: f32, y: f32, target: PointerTarget) -> bool {
        let pointer = Vec2::new(x, y);
        match target {
            PointerTarget::Header(id) => self.drag.begin_move(&mut self.windows, id, pointer),
            PointerTarget::Handle(id, handle) => {
                self.drag.begin_resize(&mut self.windows, id, handle, pointer)
            }
            PointerTarget::Desktop => false,
        }
    }

    /// Handle a pointer move. Returns whether the event was consumed by a
    /// gesture.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.drag
            .pointer_move(&mut self.windows, &self.viewport, Vec2::new(x, y))
    }

    /// Handle a pointer release. Ends any gesture; the last computed
    /// geometry remains applied.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.pointer_up()
    }

    /// Current gesture, if any
    pub fn gesture(&self) -> Option<&DragState> {
        self.drag.gesture()
    }

    // =========================================================================
    // Content host boundary
    // =========================================================================

    /// Visible windows in paint order, topmost last. The content host
    /// renders one pane per record from its `app` tag and `id`.
    pub fn visible_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.visible()
    }

    /// All windows in z-order, including minimized ones (for the taskbar)
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.windows()
    }

    /// The active window id, if any
    pub fn active_window(&self) -> Option<WindowId> {
        self.windows.active()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Export the current window set as a snapshot
    pub fn snapshot(&self) -> Snapshot {
        let windows = self.windows.windows().map(PersistedWindow::from).collect();
        Snapshot::new(windows, self.windows.active())
    }

    /// Rebuild the window set from a snapshot, dropping records that
    /// violate registry invariants
    pub fn restore(&mut self, mut snapshot: Snapshot) {
        if snapshot.needs_migration() {
            snapshot.migrate();
        }
        let windows: Vec<Window> = snapshot.windows.into_iter().map(Window::from).collect();
        self.windows.rehydrate(windows, snapshot.active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ResizeHandle;

    fn create_desktop() -> Desktop {
        Desktop::new(1024.0, 768.0)
    }

    #[test]
    fn test_open_close_round_trip() {
        let mut desktop = create_desktop();
        let id = desktop.open_app(AppType::Terminal);

        assert_eq!(desktop.active_window(), Some(id));
        assert_eq!(desktop.visible_windows().count(), 1);

        desktop.close_window(id);
        assert_eq!(desktop.active_window(), None);
        assert_eq!(desktop.visible_windows().count(), 0);
    }

    #[test]
    fn test_move_window_clamps() {
        let mut desktop = create_desktop();
        let id = desktop.open_app(AppType::Settings);

        desktop.move_window(id, -50.0, -50.0);

        let window = desktop.windows.get(id).unwrap();
        assert_eq!(window.position, Vec2::ZERO);
    }

    #[test]
    fn test_maximize_uses_work_area() {
        let mut desktop = create_desktop();
        let id = desktop.open_app(AppType::FileExplorer);
        desktop.move_window(id, 50.0, 50.0);

        desktop.maximize_window(id);
        let window = desktop.windows.get(id).unwrap();
        assert_eq!(window.position, Vec2::ZERO);
        assert_eq!(window.size, Size::new(1024.0, 728.0));

        desktop.maximize_window(id);
        let window = desktop.windows.get(id).unwrap();
        assert_eq!(window.position, Vec2::new(50.0, 50.0));
        assert_eq!(window.size, Size::new(700.0, 500.0));
    }

    #[test]
    fn test_pointer_down_on_desktop_starts_nothing() {
        let mut desktop = create_desktop();
        desktop.open_app(AppType::Notes);

        assert!(!desktop.pointer_down(500.0, 500.0, PointerTarget::Desktop));
        assert!(desktop.gesture().is_none());
    }

    #[test]
    fn test_pointer_drag_sequence() {
        let mut desktop = create_desktop();
        let id = desktop.open_app(AppType::Terminal);
        desktop.move_window(id, 100.0, 100.0);

        assert!(desktop.pointer_down(120.0, 120.0, PointerTarget::Header(id)));
        desktop.pointer_move(300.0, 300.0);
        desktop.pointer_up();

        let window = desktop.windows.get(id).unwrap();
        assert_eq!(window.position, Vec2::new(280.0, 280.0));
    }

    #[test]
    fn test_pointer_resize_sequence() {
        let mut desktop = create_desktop();
        let id = desktop.open_app(AppType::Terminal);
        desktop.move_window(id, 100.0, 100.0);

        let press = PointerTarget::Handle(id, ResizeHandle::Se);
        assert!(desktop.pointer_down(800.0, 600.0, press));
        desktop.pointer_move(700.0, 500.0);
        desktop.pointer_up();

        let window = desktop.windows.get(id).unwrap();
        assert_eq!(window.size, Size::new(600.0, 400.0));
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut desktop = create_desktop();
        let a = desktop.open_app(AppType::Notes);
        let b = desktop.open_app(AppType::Terminal);
        desktop.move_window(a, 200.0, 150.0);
        desktop.minimize_window(b);

        let snapshot = desktop.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();

        let mut other = create_desktop();
        other.restore(serde_json::from_str(&json).unwrap());

        let restored = other.windows.get(a).unwrap();
        assert_eq!(restored.position, Vec2::new(200.0, 150.0));
        assert!(other.windows.get(b).unwrap().minimized);
        // b was minimized and could not stay active
        assert_eq!(other.active_window(), None);

        // New ids continue past the restored ones
        let c = other.open_app(AppType::Calendar);
        assert!(c > b);
    }

    #[test]
    fn test_restore_drops_duplicate_ids() {
        let mut desktop = create_desktop();
        let id = desktop.open_app(AppType::Notes);
        let mut snapshot = desktop.snapshot();
        let dup = snapshot.windows[0].clone();
        snapshot.windows.push(dup);

        let mut other = create_desktop();
        other.restore(snapshot);

        assert_eq!(other.all_windows().count(), 1);
        assert_eq!(other.active_window(), Some(id));
    }
}
