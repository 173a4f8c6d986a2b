// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic logging through the `log` facade.
//!
//! With the `log` feature disabled the macros expand to nothing, so kernel
//! builds carry no logging code.

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)+) => {
        ::log::debug!(target: "bounded_array", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)+) => {{}};
}

pub(crate) use debug;
