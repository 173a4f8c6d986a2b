// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::array::BoundedArray;
#[cfg(feature = "host")]
use crate::error::Error;

#[cfg(feature = "host")]
impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// Returns a reference to the element at `pos`, checked against the
    /// logical length.
    ///
    /// Returns [`Error::IndexOutOfRange`] when `pos >= len`, even if `pos < N`.
    ///
    /// Only available with the `host` feature.
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, Error> {
        self.check_index(pos)?;
        Ok(&self.buf[pos])
    }

    /// Mutable counterpart of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        self.check_index(pos)?;
        Ok(&mut self.buf[pos])
    }

    fn check_index(&self, pos: usize) -> Result<(), Error> {
        if pos >= self.len {
            crate::logging::debug!(
                "checked access at {} rejected, logical length is {}",
                pos,
                self.len
            );
            return Err(Error::IndexOutOfRange {
                index: pos,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns a reference to the last live element.
    ///
    /// When the array is empty this does **not** fail: it returns a reference
    /// to the end-of-range position, which is slot `0`. Use
    /// [`last`](Self::last) for an `Option`.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`, since there is no slot to refer to.
    #[inline]
    pub fn back(&self) -> &T {
        &self.buf[self.len.saturating_sub(1)]
    }

    /// Mutable counterpart of [`back`](Self::back), with the same empty-array
    /// behavior.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        let i = self.len.saturating_sub(1);
        &mut self.buf[i]
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }
}
