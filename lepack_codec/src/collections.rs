//! Counted sequences, sets and maps.
//!
//! Elements are written in iteration order. For hash-based containers that order is
//! unspecified, so equal sets may encode to different bytes; use an ordered container
//! when the bytes themselves must be reproducible.

use crate::io_utils::{read_vec, write_all};
use crate::lengths::{ElemCount, WriteLen, COUNT_LEN};
use crate::{DecodeError, Deser, Ser, Shape};
use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::io::{Read, Write};

macro_rules! impl_sequence {
    ($coll:ident<T $(, $extra:ident)*>, deser: [$($deser_bounds:tt)*]) => {
        impl<T $(, $extra)*> Ser for $coll<T $(, $extra)*>
        where
            T: Ser,
        {
            const SHAPE: Shape = Shape::Sequence;

            fn ser_len(&self) -> usize {
                T::ser_seq_len(self.iter())
            }
            fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
                T::ser_seq(w, self.iter())
            }
        }
        impl<T $(, $extra)*> Deser for $coll<T $(, $extra)*>
        where
            T: Deser,
            $($deser_bounds)*
        {
            fn deser<R: Read>(r: &mut R) -> Result<Self> {
                let count = ElemCount::deser(r)?.to_usize()?;
                let scratch = T::deser_seq(r, count)?;
                Ok(scratch.into_iter().collect())
            }
        }
    };
}

impl_sequence!(Vec<T>, deser: []);
impl_sequence!(VecDeque<T>, deser: []);
impl_sequence!(LinkedList<T>, deser: []);
impl_sequence!(BTreeSet<T>, deser: [T: Ord]);
impl_sequence!(BinaryHeap<T>, deser: [T: Ord]);
impl_sequence!(HashSet<T, S>, deser: [T: Eq + Hash, S: BuildHasher + Default]);

impl<T> Ser for Box<[T]>
where
    T: Ser,
{
    const SHAPE: Shape = Shape::Sequence;

    fn ser_len(&self) -> usize {
        T::ser_seq_len(self.iter())
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        T::ser_seq(w, self.iter())
    }
}
impl<T> Deser for Box<[T]>
where
    T: Deser,
{
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        Vec::<T>::deser(r).map(Vec::into_boxed_slice)
    }
}

/* A String is its UTF-8 bytes as a Sequence<u8>. */
impl Ser for String {
    const SHAPE: Shape = Shape::Sequence;

    fn ser_len(&self) -> usize {
        COUNT_LEN + self.len()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        let mut w_len = ElemCount::from_len(self.len()).ser(w)?;
        w_len += write_all(w, self.as_bytes())?;
        Ok(w_len)
    }
}
impl Deser for String {
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        let len = ElemCount::deser(r)?.to_usize()?;
        let buf = read_vec(r, len)?;
        String::from_utf8(buf).map_err(|_| DecodeError::InvalidUtf8.into())
    }

    fn deser_into<R: Read>(r: &mut R, dst: &mut Self) -> Result<()> {
        let len = ElemCount::deser(r)?.to_usize()?;
        let buf = read_vec(r, len)?;
        let s = std::str::from_utf8(&buf).map_err(|_| DecodeError::InvalidUtf8)?;
        dst.clear();
        dst.push_str(s);
        Ok(())
    }
}

macro_rules! impl_map {
    ($map:ident<K, V $(, $extra:ident)*>, deser: [$($deser_bounds:tt)*]) => {
        impl<K, V $(, $extra)*> Ser for $map<K, V $(, $extra)*>
        where
            K: Ser,
            V: Ser,
        {
            const SHAPE: Shape = Shape::Map;

            fn ser_len(&self) -> usize {
                let pairs_len = self
                    .iter()
                    .map(|(k, v)| k.ser_len() + v.ser_len())
                    .sum::<usize>();
                COUNT_LEN + pairs_len
            }
            fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
                let mut w_len = ElemCount::from_len(self.len()).ser(w)?;
                for (k, v) in self.iter() {
                    w_len += k.ser(w)?;
                    w_len += v.ser(w)?;
                }
                Ok(w_len)
            }
        }
        impl<K, V $(, $extra)*> Deser for $map<K, V $(, $extra)*>
        where
            K: Deser,
            V: Deser,
            $($deser_bounds)*
        {
            fn deser<R: Read>(r: &mut R) -> Result<Self> {
                let count = ElemCount::deser(r)?.to_usize()?;
                let scratch = <(K, V)>::deser_seq(r, count)?;
                Ok(scratch.into_iter().collect())
            }
        }
    };
}

impl_map!(BTreeMap<K, V>, deser: [K: Ord]);
impl_map!(HashMap<K, V, S>, deser: [K: Eq + Hash, S: BuildHasher + Default]);
