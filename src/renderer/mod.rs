//! Software rendering module
//!
//! Composes each frame on the CPU into an RGBA buffer; presenting it is up
//! to the display shell.

pub mod compositor;
pub mod frame;

pub use compositor::Compositor;
pub use frame::{Frame, Painter};
