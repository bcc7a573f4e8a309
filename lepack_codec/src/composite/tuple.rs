use crate::lengths::WriteLen;
use crate::{Deser, Ser, Shape};
use anyhow::Result;
use std::io::{Read, Write};

macro_rules! impl_tuple {
    ($shape:ident; $($name:ident . $idx:tt),*) => {
        impl<$($name),*> Ser for ($($name,)*)
        where
            $($name: Ser,)*
        {
            const SHAPE: Shape = Shape::$shape;

            fn ser_len(&self) -> usize {
                0 $(+ self.$idx.ser_len())*
            }
            #[allow(unused_variables, unused_mut)]
            fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
                let mut w_len = WriteLen::default();
                $(w_len += self.$idx.ser(w)?;)*
                Ok(w_len)
            }
        }
        impl<$($name),*> Deser for ($($name,)*)
        where
            $($name: Deser,)*
        {
            #[allow(unused_variables)]
            fn deser<R: Read>(r: &mut R) -> Result<Self> {
                Ok(($($name::deser(r)?,)*))
            }

            #[allow(unused_variables)]
            fn deser_into<R: Read>(r: &mut R, dst: &mut Self) -> Result<()> {
                $($name::deser_into(r, &mut dst.$idx)?;)*
                Ok(())
            }
        }
    };
}

impl_tuple!(Tuple;);
impl_tuple!(Tuple; A.0);
impl_tuple!(Pair; A.0, B.1);
impl_tuple!(Tuple; A.0, B.1, C.2);
impl_tuple!(Tuple; A.0, B.1, C.2, D.3);
impl_tuple!(Tuple; A.0, B.1, C.2, D.3, E.4);
impl_tuple!(Tuple; A.0, B.1, C.2, D.3, E.4, F.5);
impl_tuple!(Tuple; A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_tuple!(Tuple; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_tuple!(Tuple; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_tuple!(Tuple; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_tuple!(Tuple; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_tuple!(Tuple; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);
