//! Window manager core for WebOS
//!
//! This crate provides the in-memory state machine behind the desktop:
//! window lifecycle (open/close/minimize/maximize/focus), z-order, and
//! pointer-driven move/resize gestures.
//!
//! ## Architecture
//!
//! - [`math`]: geometry types (`Vec2`, `Size`, `Rect`) and chrome metrics
//! - [`window`]: the window registry — single source of truth for all open
//!   windows and which one is focused
//! - [`input`]: the drag controller — converts pointer press/move/release
//!   streams into geometry updates, one gesture at a time
//! - [`persistence`]: snapshot export/import for the local store
//!
//! ## Example
//!
//! ```rust
//! use wos_desktop::{AppType, Desktop, PointerTarget};
//!
//! let mut desktop = Desktop::new(1024.0, 768.0);
//! let id = desktop.open_app(AppType::Notes);
//!
//! desktop.pointer_down(60.0, 60.0, PointerTarget::Header(id));
//! desktop.pointer_move(200.0, 200.0);
//! desktop.pointer_up();
//! ```
//!
//! All state management is pure Rust and testable without a browser; the
//! optional `wasm` feature adds the bindings a host shell needs.

pub mod input;
pub mod math;
pub mod persistence;
pub mod window;

mod app;
mod desktop;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use app::AppType;
pub use desktop::Desktop;
pub use input::{DragController, DragState, PointerTarget, ResizeHandle};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE, MIN_WINDOW_SIZE};
pub use persistence::{PersistedWindow, Snapshot};
pub use viewport::Viewport;
pub use window::{Window, WindowId, WindowRegistry};
