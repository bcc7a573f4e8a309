//! Types that bring their own encoding.
//!
//! Implement [`CustomCodec`], then register the type with
//! [`custom_codec!`](crate::custom_codec). Registration gives the type its one and only
//! [`Ser`](crate::Ser) / [`Deser`](crate::Deser) impl, with shape
//! [`Shape::Custom`](crate::Shape::Custom), so structural framing never applies to it,
//! even when its fields would suggest one (a two-field struct is not a pair).

use crate::lengths::WriteLen;
use anyhow::{bail, Result};
use std::any;
use std::io::{self, Read, Write};

pub trait CustomCodec: Sized {
    /// Byte length [`CustomCodec::serialize`] will write.
    fn serialized_size(&self) -> usize;

    fn serialize<W: Write>(&self, w: &mut W) -> Result<()>;

    fn deserialize<R: Read>(r: &mut R) -> Result<Self>;

    fn deserialize_into<R: Read>(r: &mut R, dst: &mut Self) -> Result<()> {
        *dst = Self::deserialize(r)?;
        Ok(())
    }
}

/// Implements `Ser` and `Deser` for types that implement [`CustomCodec`].
///
/// ```
/// use lepack_codec::{custom_codec, CustomCodec, Result};
/// use std::io::{Read, Write};
///
/// /// Stored as a single byte of tenths.
/// #[derive(PartialEq, Debug)]
/// struct Tenths(f32);
///
/// impl CustomCodec for Tenths {
///     fn serialized_size(&self) -> usize {
///         1
///     }
///     fn serialize<W: Write>(&self, w: &mut W) -> Result<()> {
///         w.write_all(&[(self.0 * 10.0).round() as u8])?;
///         Ok(())
///     }
///     fn deserialize<R: Read>(r: &mut R) -> Result<Self> {
///         let mut buf = [0u8; 1];
///         r.read_exact(&mut buf)?;
///         Ok(Tenths(f32::from(buf[0]) / 10.0))
///     }
/// }
/// custom_codec!(Tenths);
///
/// let buf = lepack_codec::to_vec(&Tenths(0.5)).unwrap();
/// assert_eq!(buf, [5]);
/// ```
#[macro_export]
macro_rules! custom_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Ser for $ty {
                const SHAPE: $crate::Shape = $crate::Shape::Custom;

                fn ser_len(&self) -> usize {
                    $crate::CustomCodec::serialized_size(self)
                }
                fn ser<W: ::std::io::Write>(&self, w: &mut W) -> $crate::Result<$crate::WriteLen> {
                    $crate::custom::ser_custom(self, w)
                }
            }
            impl $crate::Deser for $ty {
                fn deser<R: ::std::io::Read>(r: &mut R) -> $crate::Result<Self> {
                    <$ty as $crate::CustomCodec>::deserialize(r)
                }
                fn deser_into<R: ::std::io::Read>(r: &mut R, dst: &mut Self) -> $crate::Result<()> {
                    <$ty as $crate::CustomCodec>::deserialize_into(r, dst)
                }
            }
        )+
    };
}

/// Runs a custom serializer and holds it to its own reported size.
///
/// A size mismatch is only detected after the serializer returns, so on that error
/// `w` has already received the bytes it wrote.
#[doc(hidden)]
pub fn ser_custom<T, W>(value: &T, w: &mut W) -> Result<WriteLen>
where
    T: CustomCodec,
    W: Write,
{
    let mut counting = CountingWriter { w, count: 0 };
    value.serialize(&mut counting)?;

    let expected = value.serialized_size();
    if counting.count != expected {
        bail!(
            "{} reported a serialized size of {} but wrote {} bytes",
            any::type_name::<T>(),
            expected,
            counting.count
        );
    }
    Ok(WriteLen::new_manual(counting.count))
}

struct CountingWriter<'w, W> {
    w: &'w mut W,
    count: usize,
}
impl<'w, W: Write> Write for CountingWriter<'w, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.w.write(buf)?;
        self.count += n;
        Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.w.flush()
    }
}
