//! winit adapters: event conversion and a window-backed cursor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::window::{CursorGrabMode, Window};

use super::event::{InputEvent, MouseButton};
use crate::host::CursorControl;

/// Pixels of trackpad scroll per wheel line.
const PIXELS_PER_LINE: f64 = 100.0;

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}

/// Scroll amount in wheel lines, positive away from the user.
fn scroll_lines(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
    }
}

impl InputEvent {
    /// Translate the window events the rig cares about.
    #[must_use]
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(Self::Scroll {
                delta: scroll_lines(delta),
            }),
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }

    /// Translate raw device motion. Works while the pointer is locked.
    #[must_use]
    pub fn from_device_event(event: &DeviceEvent) -> Option<Self> {
        match event {
            DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                Some(Self::PointerMotion {
                    dx: *dx as f32,
                    dy: *dy as f32,
                })
            }
            _ => None,
        }
    }
}

/// Cursor lock and visibility for a winit window.
///
/// Grab failures are logged and otherwise ignored; the rig keeps working
/// with a free cursor.
pub struct WinitCursor {
    window: Arc<Window>,
    visible: AtomicBool,
}

impl WinitCursor {
    /// Drive the cursor of `window`, which starts out visible.
    #[must_use]
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            visible: AtomicBool::new(true),
        }
    }
}

impl CursorControl for WinitCursor {
    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    fn lock_and_hide(&self) {
        // Not every platform supports Locked; Confined is the fallback.
        let grabbed = self
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("cursor grab failed: {e}");
        }
        self.window.set_cursor_visible(false);
        self.visible.store(false, Ordering::Relaxed);
    }

    fn unlock_and_show(&self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("cursor release failed: {e}");
        }
        self.window.set_cursor_visible(true);
        self.visible.store(true, Ordering::Relaxed);
    }
}
