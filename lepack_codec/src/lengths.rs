//! Framing lengths and the small integers that make up the framing.

use crate::io_utils::{read_array, write_all};
use crate::DecodeError;
use anyhow::Result;
use derive_more::{Add, AddAssign, Deref, From};
use std::io::{Read, Write};
use std::mem;

/// Length of a sequence or map element count.
pub const COUNT_LEN: usize = mem::size_of::<u64>();

/// Length of a union's alternative index.
pub const UNION_INDEX_LEN: usize = mem::size_of::<u64>();

/// Length of an optional's presence flag.
pub const FLAG_LEN: usize = mem::size_of::<u8>();

/// Booleans per packed group.
pub const BOOL_GROUP: usize = u64::BITS as usize;

/// Upper bound on elements reserved up front when decoding a collection.
/// Larger collections still decode; they grow as elements arrive.
pub const MAX_PREALLOC_ELEMS: usize = 1 << 16;

/// Reserved union index. Never written; read back as the unit alternative, if any.
pub const UNION_SENTINEL: u64 = u64::MAX;

#[derive(Deref, Add, AddAssign, PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(len: usize) -> Self {
        Self(len)
    }
}

#[derive(Deref, Clone, Copy, Debug)]
pub struct ElemCount(u64);
impl ElemCount {
    pub fn from_len(len: usize) -> Self {
        Self(len as u64)
    }
    pub fn ser(self, w: &mut impl Write) -> Result<WriteLen> {
        write_all(w, &self.0.to_le_bytes())
    }
    pub fn deser(r: &mut impl Read) -> Result<Self> {
        let int = u64::from_le_bytes(read_array(r)?);
        Ok(Self(int))
    }
    pub fn to_usize(self) -> Result<usize> {
        usize::try_from(self.0).map_err(|_| DecodeError::LengthOverflow(self.0).into())
    }
}

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct UnionIndex(u64);
impl UnionIndex {
    pub fn ser(self, w: &mut impl Write) -> Result<WriteLen> {
        write_all(w, &self.0.to_le_bytes())
    }
    pub fn deser(r: &mut impl Read) -> Result<Self> {
        let int = u64::from_le_bytes(read_array(r)?);
        Ok(Self(int))
    }
}
