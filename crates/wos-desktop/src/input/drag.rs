//! Drag gesture state

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// One of the eight resize handles on a window's edges and corners
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeHandle {
    /// Whether this handle moves the window's top edge
    #[inline]
    pub fn touches_north(self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::Ne | ResizeHandle::Nw)
    }

    /// Whether this handle moves the window's bottom edge
    #[inline]
    pub fn touches_south(self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::Se | ResizeHandle::Sw)
    }

    /// Whether this handle moves the window's right edge
    #[inline]
    pub fn touches_east(self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::Ne | ResizeHandle::Se)
    }

    /// Whether this handle moves the window's left edge
    #[inline]
    pub fn touches_west(self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::Nw | ResizeHandle::Sw)
    }

    /// CSS cursor style for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeHandle::N | ResizeHandle::S => "ns-resize",
            ResizeHandle::E | ResizeHandle::W => "ew-resize",
            ResizeHandle::Ne | ResizeHandle::Sw => "nesw-resize",
            ResizeHandle::Nw | ResizeHandle::Se => "nwse-resize",
        }
    }
}

impl core::str::FromStr for ResizeHandle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(ResizeHandle::N),
            "s" => Ok(ResizeHandle::S),
            "e" => Ok(ResizeHandle::E),
            "w" => Ok(ResizeHandle::W),
            "ne" => Ok(ResizeHandle::Ne),
            "nw" => Ok(ResizeHandle::Nw),
            "se" => Ok(ResizeHandle::Se),
            "sw" => Ok(ResizeHandle::Sw),
            _ => Err(()),
        }
    }
}

/// Where a pointer press landed, as classified by the input source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// A window's header (title bar) region
    Header(WindowId),
    /// One of a window's eight resize handles
    Handle(WindowId, ResizeHandle),
    /// The bare desktop, or a region that starts no gesture
    Desktop,
}

/// Current drag gesture state
#[derive(Clone, Debug)]
pub enum DragState {
    /// Moving a window
    Move {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to the pointer at gesture start
        offset: Vec2,
    },
    /// Resizing a window
    Resize {
        /// Window being resized
        window_id: WindowId,
        /// Which resize handle
        handle: ResizeHandle,
        /// Window position at gesture start
        start_pos: Vec2,
        /// Window size at gesture start
        start_size: Size,
        /// Pointer position at gesture start
        start_pointer: Vec2,
    },
}

impl DragState {
    /// The window this gesture targets
    pub fn window_id(&self) -> WindowId {
        match self {
            DragState::Move { window_id, .. } => *window_id,
            DragState::Resize { window_id, .. } => *window_id,
        }
    }

    /// Check if this is a window move gesture
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::Move { .. })
    }

    /// Check if this is a window resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::Resize { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_state() {
        let state = DragState::Move {
            window_id: 42,
            offset: Vec2::new(20.0, 20.0),
        };
        assert!(state.is_move());
        assert!(!state.is_resize());
        assert_eq!(state.window_id(), 42);
    }

    #[test]
    fn test_resize_state() {
        let state = DragState::Resize {
            window_id: 7,
            handle: ResizeHandle::Se,
            start_pos: Vec2::new(100.0, 100.0),
            start_size: Size::new(700.0, 500.0),
            start_pointer: Vec2::new(800.0, 600.0),
        };
        assert!(state.is_resize());
        assert_eq!(state.window_id(), 7);
    }

    #[test]
    fn test_handle_edges() {
        assert!(ResizeHandle::Nw.touches_north());
        assert!(ResizeHandle::Nw.touches_west());
        assert!(!ResizeHandle::Nw.touches_south());
        assert!(ResizeHandle::Se.touches_south());
        assert!(ResizeHandle::Se.touches_east());
    }

    #[test]
    fn test_handle_from_str() {
        assert_eq!("ne".parse(), Ok(ResizeHandle::Ne));
        assert!("diagonal".parse::<ResizeHandle>().is_err());
    }
}
