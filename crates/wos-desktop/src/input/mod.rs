//! Pointer input module
//!
//! Translates pointer press/move/release streams into window geometry
//! updates via a single-gesture drag state machine.

mod controller;
mod drag;

pub use controller::DragController;
pub use drag::{DragState, PointerTarget, ResizeHandle};

use crate::math::{Size, Vec2, MIN_WINDOW_SIZE};

/// Compute the new window rectangle for a resize gesture.
///
/// `delta` is the pointer travel since gesture start. The minimum-size
/// floor applies to every handle; when a north or west edge hits the floor
/// the opposite edge stays anchored, so the window does not slide with a
/// clamped resize. The origin never goes negative: a north or west edge
/// dragged past the desktop origin pins at zero and growth continues
/// from there, still anchored on the far edge.
pub fn calculate_resize(
    handle: ResizeHandle,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
) -> (Vec2, Size) {
    let mut new_pos = start_pos;
    let mut new_size = start_size;

    if handle.touches_east() {
        new_size.width = (start_size.width + delta.x).max(MIN_WINDOW_SIZE.width);
    } else if handle.touches_west() {
        let right = start_pos.x + start_size.width;
        new_size.width = (start_size.width - delta.x).max(MIN_WINDOW_SIZE.width);
        new_pos.x = right - new_size.width;
        if new_pos.x < 0.0 {
            new_pos.x = 0.0;
            new_size.width = right;
        }
    }

    if handle.touches_south() {
        new_size.height = (start_size.height + delta.y).max(MIN_WINDOW_SIZE.height);
    } else if handle.touches_north() {
        let bottom = start_pos.y + start_size.height;
        new_size.height = (start_size.height - delta.y).max(MIN_WINDOW_SIZE.height);
        new_pos.y = bottom - new_size.height;
        if new_pos.y < 0.0 {
            new_pos.y = 0.0;
            new_size.height = bottom;
        }
    }

    (new_pos, new_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_south_grows() {
        let (pos, size) = calculate_resize(
            ResizeHandle::S,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(0.0, 50.0),
        );
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert_eq!(size, Size::new(400.0, 350.0));
    }

    #[test]
    fn test_resize_north_moves_origin() {
        let (pos, size) = calculate_resize(
            ResizeHandle::N,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(0.0, -50.0),
        );
        assert_eq!(pos, Vec2::new(100.0, 50.0));
        assert_eq!(size, Size::new(400.0, 350.0));
    }

    #[test]
    fn test_resize_west_clamp_anchors_right_edge() {
        // Dragging the west handle far past the minimum width must leave
        // the right edge where it was.
        let (pos, size) = calculate_resize(
            ResizeHandle::W,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(350.0, 0.0),
        );
        assert_eq!(size.width, MIN_WINDOW_SIZE.width);
        assert!((pos.x + size.width - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_clamp_anchors_bottom_edge() {
        let (pos, size) = calculate_resize(
            ResizeHandle::Nw,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(0.0, 280.0),
        );
        assert_eq!(size.height, MIN_WINDOW_SIZE.height);
        assert!((pos.y + size.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_north_pins_origin_at_zero() {
        // Dragging the top edge above the desktop origin pins the window
        // at y=0 and keeps the bottom edge anchored.
        let (pos, size) = calculate_resize(
            ResizeHandle::N,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(0.0, -350.0),
        );
        assert_eq!(pos, Vec2::new(100.0, 0.0));
        assert_eq!(size, Size::new(400.0, 400.0));
    }

    #[test]
    fn test_resize_west_pins_origin_at_zero() {
        let (pos, size) = calculate_resize(
            ResizeHandle::Sw,
            Vec2::new(50.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(-200.0, 0.0),
        );
        assert_eq!(pos.x, 0.0);
        // right edge stays at 450
        assert_eq!(size.width, 450.0);
    }

    #[test]
    fn test_resize_corner_both_axes() {
        let (pos, size) = calculate_resize(
            ResizeHandle::Se,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(60.0, 40.0),
        );
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert_eq!(size, Size::new(460.0, 340.0));
    }

    #[test]
    fn test_resize_floor_applies_to_all_handles() {
        let handles = [
            ResizeHandle::N,
            ResizeHandle::S,
            ResizeHandle::E,
            ResizeHandle::W,
            ResizeHandle::Ne,
            ResizeHandle::Nw,
            ResizeHandle::Se,
            ResizeHandle::Sw,
        ];
        for handle in handles {
            let (_, size) = calculate_resize(
                handle,
                Vec2::new(100.0, 100.0),
                Size::new(400.0, 300.0),
                Vec2::new(-1000.0, -1000.0),
            );
            assert!(size.width >= MIN_WINDOW_SIZE.width, "{:?}", handle);
            assert!(size.height >= MIN_WINDOW_SIZE.height, "{:?}", handle);

            let (_, size) = calculate_resize(
                handle,
                Vec2::new(100.0, 100.0),
                Size::new(400.0, 300.0),
                Vec2::new(1000.0, 1000.0),
            );
            assert!(size.width >= MIN_WINDOW_SIZE.width, "{:?}", handle);
            assert!(size.height >= MIN_WINDOW_SIZE.height, "{:?}", handle);
        }
    }
}
