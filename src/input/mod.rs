//! Input handling: platform-agnostic events and the pointer accumulator
//! that turns them into per-frame samples for the rig.

/// Platform-agnostic input events.
pub mod event;
/// Event accumulator implementing [`PointerInput`](crate::host::PointerInput).
mod pointer;
/// winit event conversion and cursor adapter.
#[cfg(feature = "viewer")]
pub mod platform;

pub use event::{InputEvent, MouseButton};
pub use pointer::PointerState;
