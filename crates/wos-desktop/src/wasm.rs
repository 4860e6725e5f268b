//! WASM exports for the desktop core
//!
//! Wraps [`Desktop`] with a JS-friendly API so the browser shell can drive
//! the window manager directly.

use wasm_bindgen::prelude::*;

use crate::app::AppType;
use crate::desktop::Desktop;
use crate::input::PointerTarget;
use crate::persistence::Snapshot;

/// Desktop controller for WASM - wraps Desktop with a JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    desktop: Desktop,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller for the given screen size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            desktop: Desktop::new(width, height),
        }
    }

    /// Resize the desktop viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.desktop.resize_viewport(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a window for an app tag (e.g. "notes"); returns 0 for an
    /// unknown tag
    pub fn open_app(&mut self, app: &str) -> u64 {
        match app.parse::<AppType>() {
            Ok(app) => self.desktop.open_app(app),
            Err(()) => 0,
        }
    }

    /// Close a window
    pub fn close_window(&mut self, id: u64) {
        self.desktop.close_window(id);
    }

    /// Toggle a window's minimized flag
    pub fn minimize_window(&mut self, id: u64) {
        self.desktop.minimize_window(id);
    }

    /// Toggle a window between maximized and restored
    pub fn maximize_window(&mut self, id: u64) {
        self.desktop.maximize_window(id);
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: u64) {
        self.desktop.focus_window(id);
    }

    /// The active window id, or 0 if none
    pub fn active_window(&self) -> u64 {
        self.desktop.active_window().unwrap_or(0)
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Pointer press on a window header
    pub fn pointer_down_header(&mut self, id: u64, x: f32, y: f32) -> bool {
        self.desktop.pointer_down(x, y, PointerTarget::Header(id))
    }

    /// Pointer press on a resize handle ("n", "se", ...); unknown handles
    /// start no gesture
    pub fn pointer_down_handle(&mut self, id: u64, handle: &str, x: f32, y: f32) -> bool {
        match handle.parse() {
            Ok(handle) => self
                .desktop
                .pointer_down(x, y, PointerTarget::Handle(id, handle)),
            Err(()) => false,
        }
    }

    /// Pointer move
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.desktop.pointer_move(x, y)
    }

    /// Pointer release
    pub fn pointer_up(&mut self) -> bool {
        self.desktop.pointer_up()
    }

    // =========================================================================
    // State
    // =========================================================================

    /// All windows in paint order as JSON, for the shell to render
    pub fn windows_json(&self) -> String {
        let windows: Vec<_> = self.desktop.all_windows().collect();
        serde_json::to_string(&windows).unwrap_or_else(|_| "[]".to_string())
    }

    /// Export the desktop state as a snapshot JSON blob
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.desktop.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Restore desktop state from a snapshot JSON blob; returns whether the
    /// blob parsed
    pub fn restore_json(&mut self, json: &str) -> bool {
        match serde_json::from_str::<Snapshot>(json) {
            Ok(snapshot) => {
                self.desktop.restore(snapshot);
                true
            }
            Err(_) => false,
        }
    }
}
