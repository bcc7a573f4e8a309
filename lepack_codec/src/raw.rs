//! Byte-for-byte copies of plain in-memory values.
//!
//! These bypass [`Shape`](crate::Shape) framing and endianness normalization entirely:
//! the bytes written are the host's in-memory representation. Only meaningful between
//! hosts that share byte order and layout.

use crate::io_utils::{read_exact, write_all};
use crate::lengths::WriteLen;
use anyhow::Result;
use std::io::{Read, Write};
use std::mem::{self, MaybeUninit};
use std::slice;

/// Types whose in-memory bytes are their whole value.
///
/// # Safety
///
/// Implementors must have no padding bytes, no pointers, and must accept every bit
/// pattern of their size as a valid value.
pub unsafe trait Pod: Copy + 'static {}

macro_rules! impl_pod {
    ($($ty:ty),+ $(,)?) => {
        $(
            // SAFETY: fixed-width numbers have no padding and no invalid bit patterns.
            unsafe impl Pod for $ty {}
        )+
    };
}

impl_pod!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

// SAFETY: arrays are laid out contiguously with no padding between elements.
unsafe impl<T: Pod, const N: usize> Pod for [T; N] {}

fn bytes_of<T: Pod>(items: &[T]) -> &[u8] {
    // SAFETY: `T: Pod` has no padding, so every byte in the slice is initialized.
    unsafe { slice::from_raw_parts(items.as_ptr().cast::<u8>(), mem::size_of_val(items)) }
}

fn bytes_of_mut<T: Pod>(items: &mut [T]) -> &mut [u8] {
    // SAFETY: `T: Pod` accepts any bit pattern, so arbitrary writes leave valid values.
    unsafe { slice::from_raw_parts_mut(items.as_mut_ptr().cast::<u8>(), mem::size_of_val(items)) }
}

pub const fn raw_len<T: Pod>() -> usize {
    mem::size_of::<T>()
}

pub fn raw_slice_len<T: Pod>(items: &[T]) -> usize {
    mem::size_of_val(items)
}

pub fn ser_raw<W: Write, T: Pod>(w: &mut W, value: &T) -> Result<WriteLen> {
    write_all(w, bytes_of(slice::from_ref(value)))
}

pub fn ser_raw_slice<W: Write, T: Pod>(w: &mut W, items: &[T]) -> Result<WriteLen> {
    write_all(w, bytes_of(items))
}

pub fn deser_raw<T: Pod, R: Read>(r: &mut R) -> Result<T> {
    let mut value = MaybeUninit::<T>::zeroed();
    // SAFETY: all-zero bytes are a valid `T: Pod`.
    let value = unsafe { value.assume_init_mut() };
    read_exact(r, bytes_of_mut(slice::from_mut(value)))?;
    Ok(*value)
}

/// Fills `dst` from exactly `raw_slice_len(dst)` bytes.
pub fn deser_raw_slice<R: Read, T: Pod>(r: &mut R, dst: &mut [T]) -> Result<()> {
    read_exact(r, bytes_of_mut(dst))
}
