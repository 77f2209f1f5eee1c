use parking_lot::Mutex;
use web_time::Instant;

use super::FrameClock;

/// Wall-clock frame timer with a smoothed FPS readout.
///
/// Call [`advance`](Self::advance) once at the start of every frame; the
/// rig then reads the measured delta through [`FrameClock`].
pub struct SystemClock {
    inner: Mutex<ClockState>,
    /// Smoothing factor for the FPS average (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

struct ClockState {
    last_frame: Instant,
    delta: f32,
    smoothed_fps: f32,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Start timing from now. The first frame reports a zero delta.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ClockState {
                last_frame: Instant::now(),
                delta: 0.0,
                smoothed_fps: 60.0, // Start with reasonable default
            }),
            smoothing: 0.05,
        }
    }

    /// Mark the start of a new frame and measure the time since the last.
    pub fn advance(&self) {
        let now = Instant::now();
        let mut state = self.inner.lock();
        let frame_time = now.duration_since(state.last_frame).as_secs_f32();
        state.last_frame = now;
        state.delta = frame_time;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            state.smoothed_fps = state.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.inner.lock().smoothed_fps
    }
}

impl FrameClock for SystemClock {
    fn delta_seconds(&self) -> f32 {
        self.inner.lock().delta
    }
}

/// Clock driven by the host, for fixed-step loops and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    delta: Mutex<f32>,
}

impl ManualClock {
    /// Clock reporting `delta` seconds per frame until changed.
    #[must_use]
    pub fn fixed(delta: f32) -> Self {
        Self {
            delta: Mutex::new(delta),
        }
    }

    /// Change the reported frame delta.
    pub fn set_delta(&self, delta: f32) {
        *self.delta.lock() = delta;
    }
}

impl FrameClock for ManualClock {
    fn delta_seconds(&self) -> f32 {
        *self.delta.lock()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn manual_clock_reports_what_it_is_told() {
        let clock = ManualClock::fixed(0.016);
        assert_eq!(clock.delta_seconds(), 0.016);
        clock.set_delta(0.5);
        assert_eq!(clock.delta_seconds(), 0.5);
    }

    #[test]
    fn system_clock_measures_elapsed_time() {
        let clock = SystemClock::new();
        assert_eq!(clock.delta_seconds(), 0.0);
        std::thread::sleep(Duration::from_millis(5));
        clock.advance();
        assert!(clock.delta_seconds() >= 0.005);
        assert!(clock.fps() > 0.0);
    }
}
