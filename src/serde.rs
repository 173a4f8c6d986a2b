// This file is part of bounded-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`BoundedArray`](crate::BoundedArray).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`). The
//!   unspecified tail is never serialized.
//! - **Deserialize**: from any sequence of at most `N` elements; longer
//!   sequences fail with a custom error naming the capacity.
//!
//! Deserialization requires `T: Deserialize<'de> + Copy + Default`, since the
//! backing `[T; N]` is filled with `T::default()` before elements arrive.

// Crate imports
use crate::array::BoundedArray;

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Copy + Serialize, const N: usize> Serialize for BoundedArray<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor<T, const N: usize>(core::marker::PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for ArrayVisitor<T, N>
where
    T: Deserialize<'de> + Copy + Default,
{
    type Value = BoundedArray<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = BoundedArray::<T, N>::default();
        while let Some(elem) = a.next_element::<T>()? {
            if out.is_full() {
                crate::logging::debug!("deserialized sequence exceeds capacity {}", N);
                return Err(de::Error::custom(format_args!(
                    "too many elements (capacity {N})"
                )));
            }
            let len = out.len();
            out.storage_mut()[len] = elem;
            out.set_len(len + 1);
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for BoundedArray<T, N>
where
    T: Deserialize<'de> + Copy + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor::<T, N>(core::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::BoundedArray;

    #[test]
    fn test_serde_roundtrip_json() {
        let a: BoundedArray<i32, 5> = BoundedArray::try_from_slice(&[1, 2, 3]).unwrap();
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: BoundedArray<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_serialize_skips_stale_tail() {
        let mut a: BoundedArray<i32, 4> = BoundedArray::from([9, 9, 9, 9]);
        a.truncate(1);
        assert_eq!(serde_json::to_string(&a).unwrap(), "[9]");
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let err = serde_json::from_str::<BoundedArray<i32, 3>>("[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too many elements (capacity 3)"), "msg: {msg}");
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let a: BoundedArray<i32, 4> = BoundedArray::default();
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, "[]");
        let back: BoundedArray<i32, 4> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err =
            serde_json::from_str::<BoundedArray<i32, 4>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }
}
