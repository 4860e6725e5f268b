//! Pointer drag controller
//!
//! Converts a pointer event stream into move/resize updates on the window
//! registry, for exactly one window at a time. A single gesture is active
//! system-wide: a gesture-start request while another gesture is active is
//! rejected, never queued or stacked.

use super::drag::{DragState, ResizeHandle};
use super::calculate_resize;
use crate::math::Vec2;
use crate::viewport::Viewport;
use crate::window::{WindowId, WindowRegistry};

/// Drag controller managing the current gesture
pub struct DragController {
    /// Current gesture, if any
    gesture: Option<DragState>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    /// Create a new idle controller
    pub fn new() -> Self {
        Self { gesture: None }
    }

    /// Current gesture state
    #[inline]
    pub fn gesture(&self) -> Option<&DragState> {
        self.gesture.as_ref()
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Begin a move gesture from a press on a window's header.
    ///
    /// Focuses the window, then records the pointer-to-origin offset.
    /// Rejected while another gesture is active, while the window is
    /// maximized, or when the id is stale. Returns whether a gesture began.
    pub fn begin_move(
        &mut self,
        windows: &mut WindowRegistry,
        id: WindowId,
        pointer: Vec2,
    ) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        let Some(window) = windows.get(id) else {
            return false;
        };
        if window.maximized || window.minimized {
            return false;
        }

        windows.focus(id);
        let origin = windows.get(id).map(|w| w.position).unwrap_or(Vec2::ZERO);
        self.gesture = Some(DragState::Move {
            window_id: id,
            offset: pointer - origin,
        });
        true
    }

    /// Begin a resize gesture from a press on one of a window's handles.
    ///
    /// Same rejection rules as [`begin_move`](Self::begin_move).
    pub fn begin_resize(
        &mut self,
        windows: &mut WindowRegistry,
        id: WindowId,
        handle: ResizeHandle,
        pointer: Vec2,
    ) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        let Some(window) = windows.get(id) else {
            return false;
        };
        if window.maximized || window.minimized {
            return false;
        }

        windows.focus(id);
        let window = match windows.get(id) {
            Some(w) => w,
            None => return false,
        };
        self.gesture = Some(DragState::Resize {
            window_id: id,
            handle,
            start_pos: window.position,
            start_size: window.size,
            start_pointer: pointer,
        });
        true
    }

    /// Apply a pointer move to the current gesture.
    ///
    /// Move gestures clamp the window to the viewport; resize gestures
    /// enforce the minimum-size floor on every handle. Returns whether the
    /// event was consumed.
    pub fn pointer_move(
        &mut self,
        windows: &mut WindowRegistry,
        viewport: &Viewport,
        pointer: Vec2,
    ) -> bool {
        let Some(gesture) = &self.gesture else {
            return false;
        };

        match *gesture {
            DragState::Move { window_id, offset } => {
                let Some(size) = windows.get(window_id).map(|w| w.size) else {
                    return true;
                };
                let new_pos = viewport.clamp_position(pointer - offset, size);
                windows.move_to(window_id, new_pos);
            }
            DragState::Resize {
                window_id,
                handle,
                start_pos,
                start_size,
                start_pointer,
            } => {
                let delta = pointer - start_pointer;
                let (new_pos, new_size) =
                    calculate_resize(handle, start_pos, start_size, delta);
                windows.move_to(window_id, new_pos);
                windows.resize(window_id, new_size);
            }
        }
        true
    }

    /// End the current gesture. The last computed geometry remains applied;
    /// there is no rollback. Returns whether a gesture was ended.
    pub fn pointer_up(&mut self) -> bool {
        self.gesture.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppType;
    use crate::math::Size;

    fn setup() -> (WindowRegistry, Viewport, DragController) {
        (
            WindowRegistry::new(),
            Viewport::new(1920.0, 1080.0),
            DragController::new(),
        )
    }

    #[test]
    fn test_move_gesture_applies_offset() {
        let (mut reg, vp, mut drag) = setup();
        let id = reg.open(AppType::Terminal);
        reg.move_to(id, Vec2::new(100.0, 100.0));

        assert!(drag.begin_move(&mut reg, id, Vec2::new(120.0, 120.0)));
        drag.pointer_move(&mut reg, &vp, Vec2::new(300.0, 300.0));

        assert_eq!(reg.get(id).unwrap().position, Vec2::new(280.0, 280.0));

        assert!(drag.pointer_up());
        assert!(!drag.is_active());
        // Geometry stays where the gesture left it
        assert_eq!(reg.get(id).unwrap().position, Vec2::new(280.0, 280.0));
    }

    #[test]
    fn test_move_gesture_clamps_to_viewport() {
        let (mut reg, _, mut drag) = setup();
        let vp = Viewport::new(800.0, 600.0);
        let id = reg.open(AppType::Settings);
        reg.resize(id, Size::new(300.0, 200.0));

        let origin = reg.get(id).unwrap().position;
        drag.begin_move(&mut reg, id, origin);
        drag.pointer_move(&mut reg, &vp, Vec2::new(-500.0, -500.0));

        assert_eq!(reg.get(id).unwrap().position, Vec2::ZERO);
    }

    #[test]
    fn test_gesture_start_focuses_window() {
        let (mut reg, _, mut drag) = setup();
        let w1 = reg.open(AppType::Terminal);
        let _w2 = reg.open(AppType::Notes);

        drag.begin_move(&mut reg, w1, Vec2::new(60.0, 60.0));

        assert_eq!(reg.active(), Some(w1));
        assert_eq!(reg.windows().last().unwrap().id, w1);
    }

    #[test]
    fn test_second_gesture_rejected_while_active() {
        let (mut reg, _, mut drag) = setup();
        let w1 = reg.open(AppType::Terminal);
        let w2 = reg.open(AppType::Notes);

        assert!(drag.begin_move(&mut reg, w1, Vec2::new(60.0, 60.0)));
        assert!(!drag.begin_move(&mut reg, w2, Vec2::new(80.0, 80.0)));
        assert!(!drag.begin_resize(&mut reg, w2, ResizeHandle::Se, Vec2::new(80.0, 80.0)));
        assert_eq!(drag.gesture().unwrap().window_id(), w1);
    }

    #[test]
    fn test_gesture_rejected_on_maximized_window() {
        let (mut reg, vp, mut drag) = setup();
        let id = reg.open(AppType::Notes);
        reg.maximize_toggle(id, vp.work_area());

        assert!(!drag.begin_move(&mut reg, id, Vec2::new(10.0, 10.0)));
        assert!(!drag.begin_resize(&mut reg, id, ResizeHandle::E, Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_gesture_rejected_on_stale_id() {
        let (mut reg, _, mut drag) = setup();
        let id = reg.open(AppType::Notes);
        reg.close(id);

        assert!(!drag.begin_move(&mut reg, id, Vec2::new(10.0, 10.0)));
        assert!(!drag.is_active());
    }

    #[test]
    fn test_resize_gesture_applies_delta() {
        let (mut reg, vp, mut drag) = setup();
        let id = reg.open(AppType::Terminal);
        reg.move_to(id, Vec2::new(100.0, 100.0));

        drag.begin_resize(&mut reg, id, ResizeHandle::Se, Vec2::new(800.0, 600.0));
        drag.pointer_move(&mut reg, &vp, Vec2::new(850.0, 640.0));

        let window = reg.get(id).unwrap();
        assert_eq!(window.position, Vec2::new(100.0, 100.0));
        assert_eq!(window.size, Size::new(750.0, 540.0));
    }

    #[test]
    fn test_pointer_move_while_idle_unconsumed() {
        let (mut reg, vp, mut drag) = setup();
        reg.open(AppType::Terminal);

        assert!(!drag.pointer_move(&mut reg, &vp, Vec2::new(500.0, 500.0)));
        assert!(!drag.pointer_up());
    }

    #[test]
    fn test_gesture_survives_target_close() {
        // Closing the dragged window mid-gesture leaves the controller
        // consuming moves as no-ops until release.
        let (mut reg, vp, mut drag) = setup();
        let id = reg.open(AppType::Terminal);

        drag.begin_move(&mut reg, id, Vec2::new(60.0, 60.0));
        reg.close(id);

        assert!(drag.pointer_move(&mut reg, &vp, Vec2::new(500.0, 500.0)));
        assert!(drag.pointer_up());
    }
}
