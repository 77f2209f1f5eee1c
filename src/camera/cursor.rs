use crate::host::CursorControl;

/// Lock and hide the pointer while `engaged`, release and show it
/// otherwise. Both directions check visibility first, so repeating a
/// request is a no-op.
pub(crate) fn sync_cursor(cursor: &dyn CursorControl, engaged: bool) {
    if engaged {
        if cursor.is_visible() {
            log::trace!("locking cursor for drag");
            cursor.lock_and_hide();
        }
    } else if !cursor.is_visible() {
        log::trace!("releasing cursor");
        cursor.unlock_and_show();
    }
}
