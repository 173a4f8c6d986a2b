// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::BoundedArray;

impl<T: Copy + Default, const N: usize> Default for BoundedArray<T, N> {
    fn default() -> Self {
        Self::new_with(T::default())
    }
}

impl<T: Copy + Default, const N: usize> BoundedArray<T, N> {
    /// Constructs an empty array with every slot set to `Default::default()`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// Constructs an empty array with the backing storage filled with `fill`.
    ///
    /// Note: the initial **length** is `0`. The filled values only become
    /// visible through [`set_len`](Self::set_len) or raw indexing.
    #[inline]
    pub const fn new_with(fill: T) -> Self {
        Self {
            buf: [fill; N],
            len: 0,
        }
    }
}
