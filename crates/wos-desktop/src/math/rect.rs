//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};

use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Zero rectangle at origin
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(100.0, 100.0, 700.0, 500.0);
        assert!((r.right() - 800.0).abs() < 0.001);
        assert!((r.bottom() - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Vec2::new(50.0, 50.0)));
        assert!(r.contains(Vec2::ZERO));
        assert!(!r.contains(Vec2::new(100.0, 100.0)));
        assert!(!r.contains(Vec2::new(-1.0, 50.0)));
    }

    #[test]
    fn test_rect_from_pos_size() {
        let r = Rect::from_pos_size(Vec2::new(50.0, 50.0), Size::new(700.0, 500.0));
        assert!((r.x - 50.0).abs() < 0.001);
        assert!((r.width - 700.0).abs() < 0.001);
        assert_eq!(r.position(), Vec2::new(50.0, 50.0));
        assert_eq!(r.size(), Size::new(700.0, 500.0));
    }
}
