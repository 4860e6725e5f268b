//! Window record

use serde::{Deserialize, Serialize};

use super::WindowId;
use crate::app::AppType;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};

/// A window on the desktop
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Window {
    /// Unique identifier, stable for the window's lifetime
    pub id: WindowId,
    /// Hosted application
    pub app: AppType,
    /// Window title, derived from the app at creation
    pub title: String,
    /// Top-left corner in screen coordinates
    pub position: Vec2,
    /// Window size including frame
    pub size: Size,
    /// Excluded from rendering, but retained in the registry
    pub minimized: bool,
    /// Geometry overridden to fill the work area
    pub maximized: bool,
    /// Position/size remembered before entering maximized state
    pub(crate) restore_rect: Option<(Vec2, Size)>,
}

impl Window {
    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Whether the window is drawn this frame
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_window() -> Window {
        Window {
            id: 1,
            app: AppType::Terminal,
            title: AppType::Terminal.title().to_string(),
            position: Vec2::new(100.0, 100.0),
            size: Size::new(700.0, 500.0),
            minimized: false,
            maximized: false,
            restore_rect: None,
        }
    }

    #[test]
    fn test_window_rect() {
        let w = create_test_window();
        let r = w.rect();
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.y - 100.0).abs() < 0.001);
        assert!((r.width - 700.0).abs() < 0.001);
        assert!((r.height - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_window_title_bar_rect() {
        let w = create_test_window();
        let r = w.title_bar_rect();
        assert!((r.width - 700.0).abs() < 0.001);
        assert!((r.height - FRAME_STYLE.title_bar_height).abs() < 0.001);
    }

    #[test]
    fn test_window_visibility() {
        let mut w = create_test_window();
        assert!(w.is_visible());
        w.minimized = true;
        assert!(!w.is_visible());
    }
}
