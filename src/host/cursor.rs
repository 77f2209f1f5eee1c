use parking_lot::Mutex;

use super::CursorControl;

/// In-memory cursor for headless hosts and tests.
///
/// Tracks visibility and lock state and counts how many times each was
/// toggled, so callers can check that repeated requests are no-ops.
#[derive(Debug)]
pub struct CursorState {
    inner: Mutex<CursorInner>,
}

#[derive(Debug, Clone, Copy)]
struct CursorInner {
    visible: bool,
    locked: bool,
    lock_count: u32,
    unlock_count: u32,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            inner: Mutex::new(CursorInner {
                visible: true,
                locked: false,
                lock_count: 0,
                unlock_count: 0,
            }),
        }
    }
}

impl CursorState {
    /// Visible, unlocked cursor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer is locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.inner.lock().locked
    }

    /// Number of lock requests that reached this cursor.
    #[must_use]
    pub fn lock_count(&self) -> u32 {
        self.inner.lock().lock_count
    }

    /// Number of unlock requests that reached this cursor.
    #[must_use]
    pub fn unlock_count(&self) -> u32 {
        self.inner.lock().unlock_count
    }
}

impl CursorControl for CursorState {
    fn is_visible(&self) -> bool {
        self.inner.lock().visible
    }

    fn lock_and_hide(&self) {
        let mut inner = self.inner.lock();
        inner.locked = true;
        inner.visible = false;
        inner.lock_count += 1;
    }

    fn unlock_and_show(&self) {
        let mut inner = self.inner.lock();
        inner.locked = false;
        inner.visible = true;
        inner.unlock_count += 1;
    }
}
