use crate::lengths::WriteLen;
use crate::{Deser, Primitive, Ser, Shape};
use anyhow::Result;
use derive_more::{From, Into};
use num_traits::Num;
use std::io::{Read, Write};
use std::ops::Neg;

/// A complex number, encoded as its real then imaginary component.
#[derive(From, Into, PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T> Complex<T>
where
    T: Num + Copy,
{
    /// `re² + im²`
    pub fn norm_sqr(&self) -> T {
        self.re * self.re + self.im * self.im
    }

    pub fn conj(&self) -> Self
    where
        T: Neg<Output = T>,
    {
        Self::new(self.re, -self.im)
    }
}

impl<T> Ser for Complex<T>
where
    T: Primitive,
{
    const SHAPE: Shape = Shape::Complex;

    fn ser_len(&self) -> usize {
        2 * T::WIDTH
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        let mut w_len = self.re.ser(w)?;
        w_len += self.im.ser(w)?;
        Ok(w_len)
    }
}
impl<T> Deser for Complex<T>
where
    T: Primitive,
{
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        let re = T::deser(r)?;
        let im = T::deser(r)?;
        Ok(Self { re, im })
    }
}
