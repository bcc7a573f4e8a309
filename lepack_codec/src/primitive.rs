//! Fixed-width numbers, `bool` and `char`.
//!
//! Everything is little-endian on the wire, floats included, so an encoding made
//! on one host decodes identically on any other.

use crate::bits;
use crate::io_utils::{read_array, write_all};
use crate::lengths::WriteLen;
use crate::{DecodeError, Deser, Ser, Shape};
use anyhow::Result;
use std::io::{Read, Write};
use std::mem;

/// Types encoded as a single fixed-width value.
pub trait Primitive: Ser + Deser + Copy {
    const WIDTH: usize;
}

macro_rules! impl_primitive {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Ser for $ty {
                const SHAPE: Shape = Shape::Primitive;

                fn ser_len(&self) -> usize {
                    mem::size_of::<$ty>()
                }
                fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
                    write_all(w, &self.to_le_bytes())
                }
            }
            impl Deser for $ty {
                fn deser<R: Read>(r: &mut R) -> Result<Self> {
                    Ok(<$ty>::from_le_bytes(read_array(r)?))
                }
            }
            impl Primitive for $ty {
                const WIDTH: usize = mem::size_of::<$ty>();
            }
        )+
    };
}

impl_primitive!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

/* Pointer-sized integers travel as 64 bits. */
impl Ser for usize {
    const SHAPE: Shape = Shape::Primitive;

    fn ser_len(&self) -> usize {
        mem::size_of::<u64>()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        (*self as u64).ser(w)
    }
}
impl Deser for usize {
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        let int = u64::deser(r)?;
        usize::try_from(int).map_err(|_| DecodeError::LengthOverflow(int).into())
    }
}
impl Primitive for usize {
    const WIDTH: usize = mem::size_of::<u64>();
}

impl Ser for isize {
    const SHAPE: Shape = Shape::Primitive;

    fn ser_len(&self) -> usize {
        mem::size_of::<i64>()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        (*self as i64).ser(w)
    }
}
impl Deser for isize {
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        let int = i64::deser(r)?;
        isize::try_from(int).map_err(|_| DecodeError::LengthOverflow(int as u64).into())
    }
}
impl Primitive for isize {
    const WIDTH: usize = mem::size_of::<i64>();
}

/* bool is one byte on its own, one bit inside a sequence. */
impl Ser for bool {
    const SHAPE: Shape = Shape::Primitive;

    fn ser_len(&self) -> usize {
        mem::size_of::<u8>()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        (*self as u8).ser(w)
    }

    fn ser_seq_len<'a, I>(items: I) -> usize
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
        I::IntoIter: ExactSizeIterator,
    {
        bits::packed_len(items.into_iter().len())
    }
    fn ser_seq<'a, W, I>(w: &mut W, items: I) -> Result<WriteLen>
    where
        Self: 'a,
        W: Write,
        I: IntoIterator<Item = &'a Self>,
        I::IntoIter: ExactSizeIterator,
    {
        bits::ser_packed(w, items)
    }
}
impl Deser for bool {
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        Ok(u8::deser(r)? != 0)
    }

    fn deser_seq<R: Read>(r: &mut R, count: usize) -> Result<Vec<Self>> {
        bits::deser_packed(r, count)
    }
}
impl Primitive for bool {
    const WIDTH: usize = mem::size_of::<u8>();
}

impl Ser for char {
    const SHAPE: Shape = Shape::Primitive;

    fn ser_len(&self) -> usize {
        mem::size_of::<u32>()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        u32::from(*self).ser(w)
    }
}
impl Deser for char {
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        let int = u32::deser(r)?;
        char::from_u32(int).ok_or_else(|| DecodeError::InvalidChar(int).into())
    }
}
impl Primitive for char {
    const WIDTH: usize = mem::size_of::<u32>();
}
