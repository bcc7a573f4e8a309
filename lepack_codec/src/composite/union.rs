//! Tagged unions.
//!
//! ```text
//! index:   u64            // position of the active alternative in declaration order
//! payload: alternative    // absent for a unit alternative
//! ```
//!
//! On decode, alternatives are scanned in declaration order. An index matching none
//! of them (including [`UNION_SENTINEL`](crate::lengths::UNION_SENTINEL)) decodes to
//! the first unit alternative if the union declares one, and fails with
//! [`DecodeError::UnionIndexOutOfRange`] otherwise.
//!
//! Enums become unions through [`tagged_union!`](crate::tagged_union).
//! `Result<T, E>` is built in, with `Ok` at index 0 and `Err` at index 1.

use crate::lengths::{UnionIndex, WriteLen, UNION_INDEX_LEN};
use crate::{DecodeError, Deser, Ser, Shape};
use anyhow::Result;
use std::io::{Read, Write};

/// Declares an enum and makes it a tagged union.
///
/// Each alternative is either a tuple variant with exactly one payload type or a unit
/// variant. Indexes follow declaration order.
///
/// ```
/// lepack_codec::tagged_union! {
///     #[derive(PartialEq, Debug)]
///     pub enum Reading {
///         Celsius(f32),
///         Label(String),
///         Missing,
///     }
/// }
///
/// let buf = lepack_codec::to_vec(&Reading::Missing).unwrap();
/// assert_eq!(buf, 2u64.to_le_bytes());
/// ```
#[macro_export]
macro_rules! tagged_union {
    (@pat $name:ident :: $variant:ident, $bind:ident, $payload:ty) => {
        $name::$variant($bind)
    };
    (@pat $name:ident :: $variant:ident, $bind:ident) => {
        $name::$variant
    };

    (@len $bind:ident, $payload:ty) => {
        $crate::Ser::ser_len($bind)
    };
    (@len $bind:ident) => {
        0
    };

    (@ser $w:ident, $bind:ident, $payload:ty) => {
        $crate::Ser::ser($bind, $w)?
    };
    (@ser $w:ident, $bind:ident) => {
        $crate::WriteLen::default()
    };

    (@deser $r:ident, $name:ident :: $variant:ident, $payload:ty) => {
        $name::$variant(<$payload as $crate::Deser>::deser($r)?)
    };
    (@deser $r:ident, $name:ident :: $variant:ident) => {
        $name::$variant
    };

    (@fallback $index:ident, $name:ident :: $variant:ident, $payload:ty) => {};
    (@fallback $index:ident, $name:ident :: $variant:ident) => {{
        $crate::composite::union::trace_unit_fallback(
            ::std::any::type_name::<$name>(),
            $index,
            stringify!($variant),
        );
        return Ok($name::$variant);
    }};

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(($payload:ty))?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $(($payload))?
            ),+
        }

        impl $name {
            /// Count of declared alternatives.
            pub const ALTERNATIVES: u64 = [$(stringify!($variant)),+].len() as u64;

            /// Wire index of the active alternative.
            pub fn alternative_index(&self) -> u64 {
                let mut index = 0u64;
                $(
                    if let $crate::tagged_union!(@pat $name::$variant, _payload $(, $payload)?) = self {
                        return index;
                    }
                    index += 1;
                )+
                index
            }
        }

        impl $crate::Ser for $name {
            const SHAPE: $crate::Shape = $crate::Shape::Union;

            fn ser_len(&self) -> usize {
                let payload_len = match self {
                    $(
                        $crate::tagged_union!(@pat $name::$variant, payload $(, $payload)?) =>
                            $crate::tagged_union!(@len payload $(, $payload)?),
                    )+
                };
                $crate::lengths::UNION_INDEX_LEN + payload_len
            }

            fn ser<W: ::std::io::Write>(&self, w: &mut W) -> $crate::Result<$crate::WriteLen> {
                let index = $crate::lengths::UnionIndex::from(self.alternative_index());
                let mut w_len = index.ser(w)?;
                w_len += match self {
                    $(
                        $crate::tagged_union!(@pat $name::$variant, payload $(, $payload)?) =>
                            $crate::tagged_union!(@ser w, payload $(, $payload)?),
                    )+
                };
                Ok(w_len)
            }
        }

        impl $crate::Deser for $name {
            #[allow(unused_assignments, unreachable_code)]
            fn deser<R: ::std::io::Read>(r: &mut R) -> $crate::Result<Self> {
                let index = *$crate::lengths::UnionIndex::deser(r)?;

                let mut candidate = 0u64;
                $(
                    if index == candidate {
                        return Ok($crate::tagged_union!(@deser r, $name::$variant $(, $payload)?));
                    }
                    candidate += 1;
                )+

                $(
                    $crate::tagged_union!(@fallback index, $name::$variant $(, $payload)?);
                )+

                Err($crate::DecodeError::UnionIndexOutOfRange {
                    index,
                    alternatives: Self::ALTERNATIVES,
                }
                .into())
            }
        }
    };
}

#[doc(hidden)]
pub fn trace_unit_fallback(type_name: &str, index: u64, unit: &str) {
    log::trace!("{type_name}: index {index} is out of range; decoding as {unit}");
}

impl<T, E> Ser for Result<T, E>
where
    T: Ser,
    E: Ser,
{
    const SHAPE: Shape = Shape::Union;

    fn ser_len(&self) -> usize {
        let payload_len = match self {
            Ok(t) => t.ser_len(),
            Err(e) => e.ser_len(),
        };
        UNION_INDEX_LEN + payload_len
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        let mut w_len;
        match self {
            Ok(t) => {
                w_len = UnionIndex::from(0).ser(w)?;
                w_len += t.ser(w)?;
            }
            Err(e) => {
                w_len = UnionIndex::from(1).ser(w)?;
                w_len += e.ser(w)?;
            }
        }
        Ok(w_len)
    }
}
impl<T, E> Deser for Result<T, E>
where
    T: Deser,
    E: Deser,
{
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        match *UnionIndex::deser(r)? {
            0 => Ok(Ok(T::deser(r)?)),
            1 => Ok(Err(E::deser(r)?)),
            index => Err(DecodeError::UnionIndexOutOfRange {
                index,
                alternatives: 2,
            }
            .into()),
        }
    }
}
