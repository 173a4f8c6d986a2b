// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedArray` type and its inherent API.
//!
//! `BoundedArray<T, N>` wraps a `[T; N]` and a logical length. Operations whose
//! meaning depends on "how many elements are valid" are restricted to the
//! prefix `[0..len)`; everything else forwards to the backing array.
//!
//! No heap allocations are performed.

mod access;
mod assign;
mod from;
mod len;
mod new;
mod storage;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A fixed-capacity, stack-allocated array with a runtime logical length.
///
/// `BoundedArray<T, N>` stores `N` slots inline and tracks a length
/// `len ∈ 0..=N`. Slots `[0..len)` are the *live* elements; slots `[len..N)` are
/// initialized but unspecified (the construction fill value or stale data from
/// before a truncation or reassignment).
///
/// # Length-dependent operations
///
/// These only see `[0..len)`:
///
/// - [`len`](Self::len), [`as_slice`](Self::as_slice), [`iter`](Self::iter),
///   `Deref<Target = [T]>`, `IntoIterator`;
/// - [`at`](Self::at) / [`get`](Self::get) (checked against `len`, not `N`);
/// - [`back`](Self::back);
/// - `PartialEq`, `Ord`, `Hash`, `Debug`.
///
/// # Length-independent operations
///
/// These keep plain `[T; N]` semantics over all `N` slots:
///
/// - `array[i]` and range indexing (valid for any `i < N`);
/// - [`capacity`](Self::capacity), [`as_ptr`](Self::as_ptr),
///   [`storage`](Self::storage), [`fill`](Self::fill),
///   [`swap_storage`](Self::swap_storage), [`storage_eq`](Self::storage_eq).
///
/// Note that `array[i]` and `array.as_slice()[i]` differ for `len <= i < N`:
/// the former reads stale storage, the latter panics.
///
/// # Complexity
///
/// - The type size is roughly `N * size_of::<T>() + size_of::<usize>()`.
/// - Moving or copying a `BoundedArray` copies all `N` slots.
/// - Length changes are O(1); construction or assignment from `k` elements
///   is O(k) plus the O(N) initial fill.
///
/// # Examples
///
/// ```rust
/// use bounded_array::BoundedArray;
///
/// let a: BoundedArray<i32, 4> = BoundedArray::try_from_slice(&[42, 1337]).unwrap();
/// assert_eq!(a.len(), 2);
/// assert_eq!(a.capacity(), 4);
/// assert_eq!(a.iter().rev().copied().collect::<Vec<_>>(), [1337, 42]);
/// ```
pub struct BoundedArray<T: Copy, const N: usize> {
    pub(crate) buf: [T; N],
    pub(crate) len: usize,
}

impl<T: Copy, const N: usize> BoundedArray<T, N> {
    /// The fixed capacity of this array.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this array (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of slots past the logical end.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    // Shared by every sequence constructor/assignment: the length is checked
    // before the first write.
    #[inline]
    pub(crate) fn check_capacity(requested: usize) -> Result<(), crate::Error> {
        if requested > N {
            crate::logging::debug!(
                "rejected sequence of {} elements for capacity {}",
                requested,
                N
            );
            return Err(crate::Error::CapacityExceeded {
                requested,
                capacity: N,
            });
        }
        Ok(())
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for BoundedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedArray")
            .field("len", &self.len)
            .field("capacity", &N)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for BoundedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Copy + Eq, const N: usize> Eq for BoundedArray<T, N> {}
impl<T: Copy + Ord, const N: usize> Ord for BoundedArray<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Copy + PartialOrd, const N: usize> PartialOrd for BoundedArray<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Copy + Hash, const N: usize> Hash for BoundedArray<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for BoundedArray<T, N> {}
impl<T: Copy, const N: usize> Clone for BoundedArray<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, const N: usize> Deref for BoundedArray<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T: Copy, const N: usize> DerefMut for BoundedArray<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Copy, const N: usize> AsRef<[T]> for BoundedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy, const N: usize> AsMut<[T]> for BoundedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as the logical slice)
impl<T: Copy, const N: usize> Borrow<[T]> for BoundedArray<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy, const N: usize> BorrowMut<[T]> for BoundedArray<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}


#[cfg(test)]
mod proptests {
    use super::BoundedArray;
    use crate::Error;
    use proptest::prelude::*;

    const TEST_CAPACITY: usize = 16;

    proptest! {
        /// Property: any sequence of k <= N elements round-trips through the logical view
        #[test]
        fn construct_within_capacity(values in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY)) {
            let arr: BoundedArray<u32, TEST_CAPACITY> = BoundedArray::try_from_slice(&values).unwrap();
            prop_assert_eq!(arr.len(), values.len());
            prop_assert_eq!(arr.iter().copied().collect::<Vec<_>>(), values);
        }

        /// Property: any sequence of k > N elements is rejected by construction and assignment
        #[test]
        fn construct_over_capacity_fails(values in prop::collection::vec(any::<u32>(), TEST_CAPACITY + 1..TEST_CAPACITY * 2)) {
            let expected = Error::CapacityExceeded { requested: values.len(), capacity: TEST_CAPACITY };
            prop_assert_eq!(
                BoundedArray::<u32, TEST_CAPACITY>::try_from_slice(&values).unwrap_err(),
                expected
            );

            let mut arr: BoundedArray<u32, TEST_CAPACITY> = BoundedArray::try_from_slice(&[1, 2]).unwrap();
            prop_assert_eq!(arr.assign(&values), Err(expected));
            prop_assert_eq!(arr.as_slice(), &[1, 2]);
        }

        /// Property: checked access agrees with raw indexing below len, and fails at or past len
        #[cfg(feature = "host")]
        #[test]
        fn at_matches_index_or_fails(
            values in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY),
            pos in 0..TEST_CAPACITY * 2,
        ) {
            let arr: BoundedArray<u32, TEST_CAPACITY> = BoundedArray::try_from_slice(&values).unwrap();
            if pos < arr.len() {
                prop_assert_eq!(*arr.at(pos).unwrap(), arr[pos]);
            } else {
                prop_assert_eq!(arr.at(pos), Err(Error::IndexOutOfRange { index: pos, len: arr.len() }));
            }
        }

        /// Property: set_len keeps the common prefix intact
        #[test]
        fn set_len_preserves_prefix(
            values in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY),
            new_len in 0..=TEST_CAPACITY,
        ) {
            let mut arr: BoundedArray<u32, TEST_CAPACITY> = BoundedArray::try_from_slice(&values).unwrap();
            let keep = values.len().min(new_len);
            arr.set_len(new_len);
            prop_assert_eq!(arr.len(), new_len);
            prop_assert_eq!(&arr.as_slice()[..keep], &values[..keep]);
        }

        /// Property: the end of the logical range is stable without mutation
        #[test]
        fn end_is_idempotent(values in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY)) {
            let arr: BoundedArray<u32, TEST_CAPACITY> = BoundedArray::try_from_slice(&values).unwrap();
            let first = arr.as_ptr_range();
            let second = arr.as_ptr_range();
            prop_assert_eq!(first.clone(), second);
            prop_assert_eq!(first.start, arr.as_ptr());
            prop_assert_eq!(first.end, arr.as_ptr().wrapping_add(values.len()));
        }

        /// Property: equality only depends on the logical prefix
        #[test]
        fn equality_ignores_tail(
            values in prop::collection::vec(any::<u32>(), 0..=TEST_CAPACITY),
            fill_a in any::<u32>(),
            fill_b in any::<u32>(),
        ) {
            let mut a: BoundedArray<u32, TEST_CAPACITY> = BoundedArray::new_with(fill_a);
            let mut b: BoundedArray<u32, TEST_CAPACITY> = BoundedArray::new_with(fill_b);
            a.assign(&values).unwrap();
            b.assign(&values).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
