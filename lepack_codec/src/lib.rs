//! # Serialization format
//!
//! Every supported type belongs to exactly one [`Shape`], fixed at compile time by its
//! [`Ser`] impl. The wire format is the plain concatenation described below; there is no
//! header, magic number or version tag, and the reader must know the static type.
//!
//! All multi-byte integers, floats, counts and union indexes are little-endian.
//!
//! ```text
//! Primitive           [u8; size_of::<T>()]            // bool: 1 byte; char: as u32;
//!                                                     // usize/isize: as u64/i64
//! [T; N]              T, T, ... (N times)             // no count
//! Sequence<T>         count: u64, T, T, ...
//! Sequence<bool>      count: u64, [u8; ceil(count / 8)]
//!                     // Bit (i % 64) of 64-bit group (i / 64) is element i.
//!                     // Each group is written as its low ceil(group_len / 8) bytes.
//! Map<K, V>           count: u64, (K, V), (K, V), ...
//! Option<T>           is_some: u8, T if is_some
//! Union               index: u64, payload unless the alternative is a unit
//! (A, B, ...)         A, B, ...                       // (): zero bytes
//! Complex<T>          re: T, im: T
//! Ticks<R, P>         count: R                        // period P is not written
//! TimePoint<C, R, P>  since_epoch: Ticks<R, P>
//! Custom              whatever the type's CustomCodec writes
//! ```
//!
//! The cursor is any [`std::io::Write`] or [`std::io::Read`]. Passing `&mut &mut [u8]`
//! or `&mut &[u8]` advances the slice itself by exactly the number of bytes processed.

mod error;
mod io_utils;
pub mod lengths;
mod serializable;
mod shape;

pub mod bits;
pub mod collections;
pub mod complex;
pub mod composite;
pub mod custom;
pub mod primitive;
pub mod raw;
pub mod slice;
pub mod time;

pub use anyhow::Result;
pub use complex::Complex;
pub use custom::CustomCodec;
pub use error::DecodeError;
pub use lengths::WriteLen;
pub use primitive::Primitive;
pub use raw::{deser_raw, deser_raw_slice, raw_len, raw_slice_len, ser_raw, ser_raw_slice, Pod};
pub use serializable::*;
pub use shape::*;
pub use slice::{deser_n, deser_slice, ser_slice, ser_slice_len};
pub use time::{Clock, Period, Ticks, TimePoint};

use std::any;
use std::io::{Read, Write};

/// Byte length of `value`'s encoding.
pub fn ser_len<T: Ser + ?Sized>(value: &T) -> usize {
    value.ser_len()
}

/// Writes `value` and advances `w` by exactly [`ser_len`] bytes.
pub fn ser<W: Write, T: Ser + ?Sized>(w: &mut W, value: &T) -> Result<WriteLen> {
    value.ser(w)
}

/// Reads a `T` and advances `r` past it.
pub fn deser<T: Deser, R: Read>(r: &mut R) -> Result<T> {
    T::deser(r).map_err(|e| log_decode_failure::<T>(e))
}

/// Reads a `T` over `dst`, reusing its storage where the shape allows.
pub fn deser_into<R: Read, T: Deser>(r: &mut R, dst: &mut T) -> Result<()> {
    T::deser_into(r, dst).map_err(|e| log_decode_failure::<T>(e))
}

pub fn to_vec<T: Ser + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(value.ser_len());
    value.ser(&mut buf)?;
    Ok(buf)
}

/// Decodes a `T` that must span the whole of `buf`.
pub fn from_slice<T: Deser>(buf: &[u8]) -> Result<T> {
    let mut r = buf;
    let moi = deser::<T, _>(&mut r)?;
    if !r.is_empty() {
        return Err(DecodeError::TrailingBytes(r.len()).into());
    }
    Ok(moi)
}

fn log_decode_failure<T>(e: anyhow::Error) -> anyhow::Error {
    if let Some(dec_err) = e.downcast_ref::<DecodeError>() {
        log::debug!("Failed to decode {}: {}", any::type_name::<T>(), dec_err);
    }
    e
}
