//! Desktop chrome constants

use super::Size;

/// Fixed metrics for window chrome and desktop furniture
pub struct FrameStyle {
    /// Height of the window title bar
    pub title_bar_height: f32,
    /// Height reserved at the top of the screen for the menu bar;
    /// windows never move or maximize into this strip's worth of space
    pub menu_bar_height: f32,
    /// Horizontal/vertical step between successive cascaded windows
    pub cascade_step: f32,
    /// Top-left origin of the window cascade
    pub cascade_origin_x: f32,
    pub cascade_origin_y: f32,
}

/// Default frame style matching the UI design
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 28.0,
    menu_bar_height: 40.0,
    cascade_step: 20.0,
    cascade_origin_x: 50.0,
    cascade_origin_y: 50.0,
};

/// Minimum usable window size; resize never drops below this floor
pub const MIN_WINDOW_SIZE: Size = Size {
    width: 200.0,
    height: 150.0,
};
