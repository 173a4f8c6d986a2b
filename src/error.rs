// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `BoundedArray`.
//!
//! Both variants carry the numbers needed to diagnose the failure.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`BoundedArray`](crate::BoundedArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A sequence of `requested` elements does not fit in `capacity` slots.
    ///
    /// Returned by construction and assignment from a sequence. Nothing is
    /// written when this is returned.
    CapacityExceeded {
        /// Length of the rejected sequence.
        requested: usize,
        /// The fixed capacity `N`.
        capacity: usize,
    },
    /// A checked access asked for a position at or past the logical length.
    IndexOutOfRange {
        /// The position that was requested.
        index: usize,
        /// The logical length at the time of the access.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "capacity exceeded: {requested} elements > capacity {capacity}"
            ),
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "index out of range: index (which is {index}) >= len (which is {len})"
            ),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::IndexOutOfRange { index: 2, len: 2 });
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_display_carries_diagnostics() {
        let e = Error::CapacityExceeded {
            requested: 5,
            capacity: 4,
        };
        assert_eq!(e.to_string(), "capacity exceeded: 5 elements > capacity 4");

        let e = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            e.to_string(),
            "index out of range: index (which is 7) >= len (which is 3)"
        );
    }
}
