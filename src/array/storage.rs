// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::BoundedArray;

// Core imports
use core::ops::Range;

// Logical views
impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// Returns the live prefix as a shared slice (`&self.storage()[..len]`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Returns the live prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf[..len]
    }

    /// Returns the pointer range `begin..end` of the live prefix.
    ///
    /// `start` is always the address of slot `0` and `end` the address of slot
    /// `len`, so an empty array yields an empty range. Calling this twice
    /// without mutating the array yields equal ranges.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Returns the slots past the logical end, `[len..N)`.
    ///
    /// Write into these and then call [`set_len`](Self::set_len) to publish
    /// them.
    #[inline]
    pub fn spare_storage_mut(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf[len..]
    }
}

// Whole-storage operations; `len` plays no part in any of these.
impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// Returns all `N` backing slots.
    #[inline]
    pub const fn storage(&self) -> &[T; N] {
        &self.buf
    }

    /// Returns all `N` backing slots mutably. Writing here never changes `len`.
    #[inline]
    pub fn storage_mut(&mut self) -> &mut [T; N] {
        &mut self.buf
    }

    /// Consumes the array and returns its backing storage, tail included.
    #[inline]
    pub fn into_storage(self) -> [T; N] {
        self.buf
    }

    /// Returns a raw pointer to slot `0` of the backing storage.
    ///
    /// All `N` slots behind the pointer are initialized, but only the first
    /// `len` are part of the logical contents.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to slot `0` of the backing storage.
    ///
    /// Writes through this pointer do **not** update `len`; follow them with
    /// [`set_len`](Self::set_len).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Writes `value` into all `N` slots. `len` is unchanged.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.buf.fill(value);
    }

    /// Swaps all `N` slots with `other`. Both lengths are unchanged.
    ///
    /// To swap whole arrays, lengths included, use [`core::mem::swap`].
    #[inline]
    pub fn swap_storage(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.buf, &mut other.buf);
    }

    /// Compares all `N` slots, ignoring both lengths.
    ///
    /// Unlike `==`, this sees the unspecified tail.
    #[inline]
    pub fn storage_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.buf == other.buf
    }
}
