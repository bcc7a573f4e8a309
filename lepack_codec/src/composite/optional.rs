use crate::lengths::{WriteLen, FLAG_LEN};
use crate::{Deser, Ser, Shape};
use anyhow::Result;
use std::io::{Read, Write};

impl<T> Ser for Option<T>
where
    T: Ser,
{
    const SHAPE: Shape = Shape::Optional;

    fn ser_len(&self) -> usize {
        FLAG_LEN + self.as_ref().map_or(0, Ser::ser_len)
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        match self {
            None => false.ser(w),
            Some(t) => {
                let mut w_len = true.ser(w)?;
                w_len += t.ser(w)?;
                Ok(w_len)
            }
        }
    }
}
impl<T> Deser for Option<T>
where
    T: Deser,
{
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        if bool::deser(r)? {
            Ok(Some(T::deser(r)?))
        } else {
            Ok(None)
        }
    }

    fn deser_into<R: Read>(r: &mut R, dst: &mut Self) -> Result<()> {
        if !bool::deser(r)? {
            *dst = None;
            return Ok(());
        }
        match dst {
            Some(t) => T::deser_into(r, t),
            None => {
                *dst = Some(T::deser(r)?);
                Ok(())
            }
        }
    }
}
