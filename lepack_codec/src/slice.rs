//! Runs of values with no count prefix.
//!
//! Unlike a [`Shape::Sequence`](crate::Shape::Sequence), nothing here writes a count:
//! the reader must know how many elements follow. Elements are always encoded one at
//! a time, so `bool`s take one byte each.

use crate::lengths::{WriteLen, MAX_PREALLOC_ELEMS};
use crate::{Deser, Ser};
use anyhow::Result;
use std::io::{Read, Write};

pub fn ser_slice_len<T: Ser>(items: &[T]) -> usize {
    items.iter().map(Ser::ser_len).sum()
}

pub fn ser_slice<W: Write, T: Ser>(w: &mut W, items: &[T]) -> Result<WriteLen> {
    let mut w_len = WriteLen::default();
    for item in items {
        w_len += item.ser(w)?;
    }
    Ok(w_len)
}

/// Decodes `dst.len()` elements over the existing ones.
pub fn deser_slice<R: Read, T: Deser>(r: &mut R, dst: &mut [T]) -> Result<()> {
    for slot in dst {
        T::deser_into(r, slot)?;
    }
    Ok(())
}

pub fn deser_n<T: Deser, R: Read>(r: &mut R, n: usize) -> Result<Vec<T>> {
    let mut items = Vec::with_capacity(n.min(MAX_PREALLOC_ELEMS));
    for _ in 0..n {
        items.push(T::deser(r)?);
    }
    Ok(items)
}
