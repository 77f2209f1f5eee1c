use glam::Vec2;
use parking_lot::Mutex;

use super::event::{InputEvent, MouseButton};
use crate::host::{PointerInput, PointerSample};

/// Accumulates input events between rig ticks.
///
/// Button state persists across samples; motion and scroll are summed
/// until the next [`sample`](PointerInput::sample) and then cleared.
#[derive(Debug, Default)]
pub struct PointerState {
    inner: Mutex<Accumulator>,
}

#[derive(Debug, Default)]
struct Accumulator {
    primary: bool,
    secondary: bool,
    delta: Vec2,
    scroll: f32,
    last_cursor: Option<Vec2>,
}

impl PointerState {
    /// No buttons held, no motion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the pending sample.
    pub fn handle_event(&self, event: InputEvent) {
        let mut acc = self.inner.lock();
        match event {
            InputEvent::PointerMotion { dx, dy } => {
                acc.delta += Vec2::new(dx, -dy);
            }
            InputEvent::CursorMoved { x, y } => {
                let current = Vec2::new(x, y);
                if let Some(last) = acc.last_cursor {
                    let moved = current - last;
                    acc.delta += Vec2::new(moved.x, -moved.y);
                }
                acc.last_cursor = Some(current);
            }
            InputEvent::MouseButton { button, pressed } => match button {
                MouseButton::Left => acc.primary = pressed,
                MouseButton::Right => acc.secondary = pressed,
                MouseButton::Middle | MouseButton::Other => {}
            },
            InputEvent::Scroll { delta } => acc.scroll += delta,
            InputEvent::FocusLost => {
                acc.primary = false;
                acc.secondary = false;
                acc.last_cursor = None;
            }
        }
    }
}

impl PointerInput for PointerState {
    fn sample(&self) -> PointerSample {
        let mut acc = self.inner.lock();
        let sample = PointerSample {
            primary: acc.primary,
            secondary: acc.secondary,
            delta: acc.delta,
            scroll: acc.scroll,
        };
        acc.delta = Vec2::ZERO;
        acc.scroll = 0.0;
        sample
    }
}
