use crate::lengths::{ElemCount, WriteLen, COUNT_LEN, MAX_PREALLOC_ELEMS};
use crate::Shape;
use anyhow::Result;
use std::io::{Read, Write};

pub trait Ser {
    const SHAPE: Shape;

    fn ser_len(&self) -> usize;

    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen>;

    /// Length of a counted sequence of `items`, count included.
    ///
    /// Sequences and sets route through here so that an element type may choose
    /// a denser layout for runs of itself; `bool` packs bits.
    fn ser_seq_len<'a, I>(items: I) -> usize
    where
        Self: Sized + 'a,
        I: IntoIterator<Item = &'a Self>,
        I::IntoIter: ExactSizeIterator,
    {
        COUNT_LEN + items.into_iter().map(Ser::ser_len).sum::<usize>()
    }

    /// Writes the element count, then `items`.
    fn ser_seq<'a, W, I>(w: &mut W, items: I) -> Result<WriteLen>
    where
        Self: Sized + 'a,
        W: Write,
        I: IntoIterator<Item = &'a Self>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let mut w_len = ElemCount::from_len(items.len()).ser(w)?;
        for item in items {
            w_len += item.ser(w)?;
        }
        Ok(w_len)
    }
}

pub trait Deser: Sized {
    fn deser<R: Read>(r: &mut R) -> Result<Self>;

    /// Decodes over an existing value. The old contents are dropped or reused.
    fn deser_into<R: Read>(r: &mut R, dst: &mut Self) -> Result<()> {
        *dst = Self::deser(r)?;
        Ok(())
    }

    /// Decodes `count` sequence elements (the count itself is already consumed)
    /// into a scratch buffer, from which the caller moves them into its collection.
    fn deser_seq<R: Read>(r: &mut R, count: usize) -> Result<Vec<Self>> {
        let mut scratch = Vec::with_capacity(count.min(MAX_PREALLOC_ELEMS));
        for _ in 0..count {
            scratch.push(Self::deser(r)?);
        }
        Ok(scratch)
    }
}

/* Blanket impls */
/// A reference encodes exactly like its referent, including inside sequences,
/// so `Vec<&bool>` and `Vec<bool>` share one layout.
impl<'b, T> Ser for &'b T
where
    T: Ser,
{
    const SHAPE: Shape = T::SHAPE;

    fn ser_len(&self) -> usize {
        (**self).ser_len()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        (**self).ser(w)
    }
    fn ser_seq_len<'a, I>(items: I) -> usize
    where
        Self: Sized + 'a,
        I: IntoIterator<Item = &'a Self>,
        I::IntoIter: ExactSizeIterator,
    {
        T::ser_seq_len(items.into_iter().map(|item| *item))
    }
    fn ser_seq<'a, W, I>(w: &mut W, items: I) -> Result<WriteLen>
    where
        Self: Sized + 'a,
        W: Write,
        I: IntoIterator<Item = &'a Self>,
        I::IntoIter: ExactSizeIterator,
    {
        T::ser_seq(w, items.into_iter().map(|item| *item))
    }
}
