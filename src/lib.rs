// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-array`
//!
//! A `no_std`, fixed-capacity array for `Copy` elements that tracks a
//! **logical length** separately from its **physical capacity**, with no
//! `unsafe` code.
//!
//! [`BoundedArray<T, N>`] owns a `[T; N]` inline and a length `len ∈ 0..=N`.
//! Iteration, size queries and checked access only see the prefix `[0..len)`;
//! raw indexing, the data pointer, `fill` and friends keep plain array
//! semantics over all `N` slots.
//!
//! ```text
//!                              -------------------------
//! BoundedArray<i32, 4>         | 42 | 1337 | xxx | xxx |
//!   from [42, 1337]            -------------------------
//!                                           ^ len == 2
//! ```
//!
//! Iterating the array above yields `42` and `1337`. The `xxx` slots are
//! initialized (fill value or stale data) but are not part of the logical view.
//!
//! ## When to use this crate
//!
//! - Heap allocation is unavailable or too expensive (compute kernels,
//!   embedded targets, hot loops).
//! - The maximum number of elements is known at compile time, but the number
//!   of valid elements is only known at runtime.
//! - Code writes directly into raw storage and then reports how many slots it
//!   used ([`BoundedArray::storage_mut`] followed by [`BoundedArray::set_len`]).
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`BoundedArray::<T, N>::CAPACITY == N`).
//! - Construction and assignment from a sequence check the length **before**
//!   writing anything and fail with [`Error::CapacityExceeded`] if it exceeds
//!   `N`. Only sequences whose length is known up front are accepted (slices,
//!   arrays and [`ExactSizeIterator`]s).
//! - [`BoundedArray::at`] fails with [`Error::IndexOutOfRange`] when
//!   `pos >= len`. Capacity plays no part in the check.
//! - `array[i]` is raw array indexing: valid for any `i < N`, regardless of
//!   `len`.
//! - [`BoundedArray::set_len`] is an O(1) metadata update. Out-of-range values
//!   are caught by a debug assertion and are otherwise the caller's bug.
//! - Equality, ordering, hashing and `Debug` only look at the logical prefix.
//!
//! ## Features
//!
//! - `host` *(default)*
//!   - Enables the reporting accessors [`BoundedArray::at`] and
//!     [`BoundedArray::at_mut`].
//!   - Kernel builds use `default-features = false`; every other operation
//!     remains available there.
//! - `serde`
//!   - Serializes the logical prefix as a sequence; deserializes any sequence
//!     of at most `N` elements (`T: Deserialize<'de> + Copy + Default`).
//! - `log`
//!   - Emits `debug`-level records (target `bounded_array`) through the `log`
//!     facade when an operation is rejected.
//!
//! ## Example
//!
//! ```rust
//! use bounded_array::{BoundedArray, Error};
//!
//! let mut a: BoundedArray<i32, 4> = BoundedArray::try_from_slice(&[42, 1337]).unwrap();
//! assert_eq!(a.len(), 2);
//! assert_eq!(a.capacity(), 4);
//! assert_eq!(a.as_slice(), &[42, 1337]);
//! assert_eq!(a.get(2), None);
//!
//! // A kernel fills raw storage and then publishes how much it wrote.
//! a.storage_mut()[2] = 7;
//! a.set_len(3);
//! assert_eq!(a.iter().copied().collect::<Vec<_>>(), [42, 1337, 7]);
//!
//! assert_eq!(
//!     a.assign(&[1, 2, 3, 4, 5]),
//!     Err(Error::CapacityExceeded { requested: 5, capacity: 4 })
//! );
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs, missing_debug_implementations)]

#[cfg(test)]
extern crate alloc;

// Modules
mod array;
mod error;
mod index;
mod iter;
mod logging;
#[cfg(feature = "serde")]
mod serde;

// Public exports (crate API surface)
pub use array::BoundedArray;
pub use error::Error;
pub use iter::IntoIter;
