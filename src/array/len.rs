// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::BoundedArray;

impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// Sets the logical length to `len` without touching storage.
    ///
    /// This is how code that bulk-writes raw storage (through
    /// [`storage_mut`](Self::storage_mut), [`spare_storage_mut`](Self::spare_storage_mut)
    /// or [`as_mut_ptr`](Self::as_mut_ptr)) publishes how many slots are live.
    /// Growing exposes whatever the slots currently hold; shrinking leaves the
    /// dropped slots as stale storage.
    ///
    /// The caller must ensure `len <= N`. This is checked by a debug assertion
    /// only; the value is never clamped. In release builds an oversized length
    /// makes the next access to the logical prefix panic.
    #[inline]
    pub fn set_len(&mut self, len: usize) {
        debug_assert!(len <= N, "set_len: len (which is {len}) > capacity (which is {N})");
        self.len = len;
    }

    /// Shrinks to `len` if `len < self.len()`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Sets `len = 0` without altering the underlying values.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}
