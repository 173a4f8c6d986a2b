// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`BoundedArray`](crate::BoundedArray).
//!
//! `Index` and `IndexMut` are the backing array's raw indexing:
//! - any position in `[0..N)` is valid, regardless of the logical length;
//! - positions in `[len..N)` yield stale but initialized storage;
//! - panics only when the index or range exceeds `N`, like `[T; N]`.
//!
//! Use [`BoundedArray::at`](crate::BoundedArray::at) or
//! [`BoundedArray::get`](crate::BoundedArray::get) for access checked against
//! the logical length, or index [`as_slice`](crate::BoundedArray::as_slice).

// Crate imports
use crate::array::BoundedArray;

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T: Copy, const N: usize> Index<usize> for BoundedArray<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.buf[i]
    }
}

// Read-only ranges
impl<T: Copy, const N: usize> Index<Range<usize>> for BoundedArray<T, N> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.buf[r]
    }
}
impl<T: Copy, const N: usize> Index<RangeFrom<usize>> for BoundedArray<T, N> {
    type Output = [T];
    fn index(&self, r: RangeFrom<usize>) -> &Self::Output {
        &self.buf[r]
    }
}
impl<T: Copy, const N: usize> Index<RangeTo<usize>> for BoundedArray<T, N> {
    type Output = [T];
    fn index(&self, r: RangeTo<usize>) -> &Self::Output {
        &self.buf[r]
    }
}
impl<T: Copy, const N: usize> Index<RangeToInclusive<usize>> for BoundedArray<T, N> {
    type Output = [T];
    fn index(&self, r: RangeToInclusive<usize>) -> &Self::Output {
        &self.buf[r]
    }
}
impl<T: Copy, const N: usize> Index<RangeInclusive<usize>> for BoundedArray<T, N> {
    type Output = [T];
    fn index(&self, r: RangeInclusive<usize>) -> &Self::Output {
        &self.buf[r]
    }
}
impl<T: Copy, const N: usize> Index<RangeFull> for BoundedArray<T, N> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        &self.buf
    }
}

// Mutable ranges
impl<T: Copy, const N: usize> IndexMut<usize> for BoundedArray<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.buf[i]
    }
}
impl<T: Copy, const N: usize> IndexMut<Range<usize>> for BoundedArray<T, N> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.buf[r]
    }
}
impl<T: Copy, const N: usize> IndexMut<RangeFrom<usize>> for BoundedArray<T, N> {
    fn index_mut(&mut self, r: RangeFrom<usize>) -> &mut Self::Output {
        &mut self.buf[r]
    }
}
impl<T: Copy, const N: usize> IndexMut<RangeTo<usize>> for BoundedArray<T, N> {
    fn index_mut(&mut self, r: RangeTo<usize>) -> &mut Self::Output {
        &mut self.buf[r]
    }
}
impl<T: Copy, const N: usize> IndexMut<RangeToInclusive<usize>> for BoundedArray<T, N> {
    fn index_mut(&mut self, r: RangeToInclusive<usize>) -> &mut Self::Output {
        &mut self.buf[r]
    }
}
impl<T: Copy, const N: usize> IndexMut<RangeInclusive<usize>> for BoundedArray<T, N> {
    fn index_mut(&mut self, r: RangeInclusive<usize>) -> &mut Self::Output {
        &mut self.buf[r]
    }
}
impl<T: Copy, const N: usize> IndexMut<RangeFull> for BoundedArray<T, N> {
    fn index_mut(&mut self, _: RangeFull) -> &mut Self::Output {
        &mut self.buf
    }
}
