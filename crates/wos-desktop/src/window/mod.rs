//! Window management module
//!
//! Provides window lifecycle, focus management, and z-order.

#[allow(clippy::module_inception)]
mod window;
mod registry;

pub use registry::WindowRegistry;
pub use window::Window;

/// Unique window identifier
pub type WindowId = u64;
