// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundedArray`](crate::BoundedArray).
//!
//! Every iterator stops at the logical end (slot `len`), never at `N`.
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&BoundedArray` and `&mut BoundedArray` iterate as slices; reverse
//!   traversal is `.rev()` on either.

// Crate imports
use crate::array::BoundedArray;

// Core imports
use core::iter::FusedIterator;

impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

/// Owned iterator returned by `BoundedArray::into_iter()`.
///
/// Yields the live elements by value from front to back and supports
/// double-ended iteration via [`DoubleEndedIterator`].
#[derive(Clone, Debug)]
pub struct IntoIter<T: Copy, const N: usize> {
    pub(crate) buf: [T; N],
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T: Copy, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(self.buf[i])
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            return None;
        }
        let i = self.front + n;
        self.front = i + 1;
        Some(self.buf[i])
    }
}

impl<T: Copy, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.buf[self.back])
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        if n >= rem {
            self.front = self.back;
            None
        } else {
            self.back -= n + 1;
            Some(self.buf[self.back])
        }
    }
}
impl<T: Copy, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T: Copy, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a BoundedArray<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T: Copy, const N: usize> IntoIterator for &'a mut BoundedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T: Copy, const N: usize> IntoIterator for BoundedArray<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buf: self.buf,
            front: 0,
            back: self.len,
        }
    }
}
