//! Core geometry types for the desktop environment
//!
//! These types provide basic 2D math operations for positioning
//! and sizing windows.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE, MIN_WINDOW_SIZE};
pub use vec2::Vec2;
