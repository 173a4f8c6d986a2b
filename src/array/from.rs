// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::BoundedArray, error::Error};

impl<T: Copy + Default, const N: usize> BoundedArray<T, N> {
    /// Constructs from `src`, or returns [`Error::CapacityExceeded`] if
    /// `src.len() > N`.
    ///
    /// Slots `[src.len()..N)` hold `T::default()`.
    #[inline]
    pub fn try_from_slice(src: &[T]) -> Result<Self, Error> {
        let mut a = Self::default();
        a.assign(src)?;
        Ok(a)
    }

    /// Constructs from an array of any length `M`, or returns
    /// [`Error::CapacityExceeded`] if `M > N`.
    #[inline]
    pub fn from_array<const M: usize>(src: [T; M]) -> Result<Self, Error> {
        Self::try_from_slice(&src)
    }

    /// Constructs from an iterator whose length is known before the first
    /// element is written.
    ///
    /// Semantics:
    /// - `iter.len() > N` returns [`Error::CapacityExceeded`] without consuming
    ///   any element.
    /// - Otherwise the elements are written in order and `len` is set to the
    ///   number of elements actually yielded.
    ///
    /// Iterators of unknown length are not accepted: capacity must be checked
    /// up front.
    #[inline]
    pub fn try_from_exact_iter<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut a = Self::default();
        a.assign_iter(iter)?;
        Ok(a)
    }
}

impl<T: Copy + Default, const N: usize> TryFrom<&[T]> for BoundedArray<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        Self::try_from_slice(src)
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for BoundedArray<T, N> {
    fn from(buf: [T; N]) -> Self {
        Self { buf, len: N }
    }
}

impl<T: Copy, const N: usize> From<&[T; N]> for BoundedArray<T, N> {
    fn from(src: &[T; N]) -> Self {
        (*src).into()
    }
}
