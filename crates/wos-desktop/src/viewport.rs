//! Screen viewport and desktop work area

use crate::math::{Rect, Size, Vec2, FRAME_STYLE};

/// The screen area the desktop renders into.
///
/// Plain screen coordinates; the desktop origin is the top-left corner of
/// the screen and the menu bar reserves a fixed strip of height.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Screen size in pixels
    pub screen_size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            screen_size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given screen size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            screen_size: Size::new(width, height),
        }
    }

    /// The area a maximized window fills: the full screen minus the
    /// reserved menu bar height.
    pub fn work_area(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.screen_size.width,
            (self.screen_size.height - FRAME_STYLE.menu_bar_height).max(0.0),
        )
    }

    /// Clamp a window position so the window stays on the desktop.
    ///
    /// X is kept in `[0, screen_width - window_width]`; Y is kept in
    /// `[0, screen_height - menu_bar_height]`. Degenerate ranges clamp to 0.
    pub fn clamp_position(&self, pos: Vec2, window_size: Size) -> Vec2 {
        let max_x = (self.screen_size.width - window_size.width).max(0.0);
        let max_y = (self.screen_size.height - FRAME_STYLE.menu_bar_height).max(0.0);
        pos.clamp(Vec2::ZERO, Vec2::new(max_x, max_y))
    }
}
