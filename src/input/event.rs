/// Platform-agnostic input events.
///
/// These are fed into a [`PointerState`](super::PointerState), which folds
/// them into the per-frame [`PointerSample`](crate::host::PointerSample)
/// the rig reads.
///
/// Feed either raw [`PointerMotion`](Self::PointerMotion) or absolute
/// [`CursorMoved`](Self::CursorMoved) events, not both; each one adds to the
/// frame's motion. Raw motion keeps flowing while the pointer is locked.
///
/// # Example
///
/// ```ignore
/// pointer.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// pointer.handle_event(InputEvent::PointerMotion { dx: 4.0, dy: -1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Relative pointer motion in screen orientation (y down).
    PointerMotion {
        /// Horizontal motion.
        dx: f32,
        /// Vertical motion, positive toward the bottom of the screen.
        dy: f32,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = away from the user, zooms in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// The window lost focus; any held buttons are released.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button (back, forward, extra thumb buttons). Never drags.
    Other,
}
