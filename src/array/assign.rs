// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array::BoundedArray, error::Error};

impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// Replaces the logical contents with `src`.
    ///
    /// - Returns [`Error::CapacityExceeded`] if `src.len() > N`; `self` is left
    ///   unchanged.
    /// - Otherwise overwrites slots `[0..src.len())` and sets `len = src.len()`.
    ///   Slots past the new length keep whatever they held before.
    #[inline]
    pub fn assign(&mut self, src: &[T]) -> Result<(), Error> {
        Self::check_capacity(src.len())?;
        self.buf[..src.len()].copy_from_slice(src);
        self.len = src.len();
        Ok(())
    }

    /// Replaces the logical contents with the items of an exact-size iterator.
    ///
    /// Same contract as [`assign`](Self::assign). The capacity check uses the
    /// reported length, so nothing is consumed on error. If the iterator
    /// yields fewer items than it reported, `len` is the number written.
    #[inline]
    pub fn assign_iter<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        let expected = iter.len();
        Self::check_capacity(expected)?;

        let mut written = 0;
        for (slot, item) in self.buf.iter_mut().zip(iter.take(expected)) {
            *slot = item;
            written += 1;
        }
        self.len = written;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{BoundedArray, Error};

    #[test]
    fn test_assign_keeps_stale_tail() {
        let mut a: BoundedArray<i32, 4> = BoundedArray::from([1, 2, 3, 4]);
        a.assign(&[9]).unwrap();
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(a.storage(), &[9, 2, 3, 4]);
    }

    #[test]
    fn test_assign_err_is_noop() {
        let mut a: BoundedArray<i32, 3> = BoundedArray::try_from_slice(&[1, 2]).unwrap();
        let before = *a.storage();
        assert_eq!(
            a.assign(&[5, 6, 7, 8]),
            Err(Error::CapacityExceeded {
                requested: 4,
                capacity: 3
            })
        );
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(a.storage(), &before);
    }

    #[test]
    fn test_assign_grow_and_empty() {
        let mut a: BoundedArray<i32, 4> = BoundedArray::try_from_slice(&[1]).unwrap();
        a.assign(&[4, 3, 2, 1]).unwrap();
        assert!(a.is_full());
        a.assign(&[]).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.storage(), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_assign_iter() {
        let mut a: BoundedArray<i32, 4> = BoundedArray::new();
        a.assign_iter([5, 6, 7]).unwrap();
        assert_eq!(a.as_slice(), &[5, 6, 7]);

        a.assign_iter(a.as_slice().iter().rev().copied().collect::<alloc::vec::Vec<_>>())
            .unwrap();
        assert_eq!(a.as_slice(), &[7, 6, 5]);

        assert_eq!(
            a.assign_iter(0..10),
            Err(Error::CapacityExceeded {
                requested: 10,
                capacity: 4
            })
        );
        assert_eq!(a.as_slice(), &[7, 6, 5]);
    }

    #[test]
    fn test_assign_iter_short_iterator_sets_written_len() {
        // Reports 3 items but only yields 1.
        struct Liar(u8);
        impl Iterator for Liar {
            type Item = i32;
            fn next(&mut self) -> Option<i32> {
                if self.0 == 0 {
                    return None;
                }
                self.0 -= 1;
                Some(11)
            }
            fn size_hint(&self) -> (usize, Option<usize>) {
                (3, Some(3))
            }
        }
        impl ExactSizeIterator for Liar {}

        let mut a: BoundedArray<i32, 4> = BoundedArray::from([1, 2, 3, 4]);
        a.assign_iter(Liar(1)).unwrap();
        assert_eq!(a.as_slice(), &[11]);
    }
}
