//! Bit-packed boolean sequences.
//!
//! ```text
//! count:  u64
//! groups: for each run of up to 64 booleans, the low ceil(run_len / 8) bytes of
//!         the little-endian u64 whose bit k is the run's k-th boolean
//! ```
//!
//! The body is always `ceil(count / 8)` bytes, whatever the values.

use crate::io_utils::{read_exact, write_all};
use crate::lengths::{ElemCount, WriteLen, BOOL_GROUP, COUNT_LEN, MAX_PREALLOC_ELEMS};
use anyhow::Result;
use itertools::Itertools;
use std::io::{Read, Write};

/// Encoded length of `count` packed booleans, count included.
pub fn packed_len(count: usize) -> usize {
    COUNT_LEN + count.div_ceil(8)
}

pub fn ser_packed<'a, W, I>(w: &mut W, bools: I) -> Result<WriteLen>
where
    W: Write,
    I: IntoIterator<Item = &'a bool>,
    I::IntoIter: ExactSizeIterator,
{
    let bools = bools.into_iter();
    let mut w_len = ElemCount::from_len(bools.len()).ser(w)?;

    for group in &bools.chunks(BOOL_GROUP) {
        let mut mask = 0u64;
        let mut group_len = 0;
        for (k, &b) in group.enumerate() {
            if b {
                mask |= 1u64 << k;
            }
            group_len = k + 1;
        }
        let word = mask.to_le_bytes();
        w_len += write_all(w, &word[..group_len.div_ceil(8)])?;
    }

    Ok(w_len)
}

/// Reads `count` packed booleans. The count itself must already be consumed.
pub fn deser_packed<R: Read>(r: &mut R, count: usize) -> Result<Vec<bool>> {
    let mut bools = Vec::with_capacity(count.min(MAX_PREALLOC_ELEMS));
    let mut remaining = count;
    while remaining > 0 {
        let group_len = remaining.min(BOOL_GROUP);
        let mut word = [0u8; 8];
        read_exact(r, &mut word[..group_len.div_ceil(8)])?;
        let mask = u64::from_le_bytes(word);
        bools.extend((0..group_len).map(|k| mask & (1u64 << k) != 0));
        remaining -= group_len;
    }
    Ok(bools)
}
