use crate::lengths::WriteLen;
use crate::{DecodeError, Deser, Ser, Shape};
use anyhow::Result;
use std::io::{Read, Write};

/* [T; N] carries no count; N is part of the type. */
impl<T, const N: usize> Ser for [T; N]
where
    T: Ser,
{
    const SHAPE: Shape = Shape::FixedArray;

    fn ser_len(&self) -> usize {
        self.iter().map(Ser::ser_len).sum()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        let mut w_len = WriteLen::default();
        for elem in self {
            w_len += elem.ser(w)?;
        }
        Ok(w_len)
    }
}
impl<T, const N: usize> Deser for [T; N]
where
    T: Deser,
{
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        // Element-wise, never through `deser_seq`: a `[bool; N]` is N bytes, not packed.
        let mut scratch = Vec::with_capacity(N);
        for _ in 0..N {
            scratch.push(T::deser(r)?);
        }
        Self::try_from(scratch).map_err(|scratch: Vec<T>| {
            DecodeError::ArrayLength {
                expected: N,
                actual: scratch.len(),
            }
            .into()
        })
    }

    fn deser_into<R: Read>(r: &mut R, dst: &mut Self) -> Result<()> {
        for slot in dst.iter_mut() {
            T::deser_into(r, slot)?;
        }
        Ok(())
    }
}
