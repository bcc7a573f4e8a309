use crate::{DecodeError, WriteLen};
use anyhow::{anyhow, Result};
use std::io::{ErrorKind, Read, Write};

pub fn write_all(w: &mut impl Write, buf: &[u8]) -> Result<WriteLen> {
    w.write_all(buf)?;
    Ok(WriteLen::new_manual(buf.len()))
}

pub fn read_exact(r: &mut impl Read, buf: &mut [u8]) -> Result<()> {
    match r.read_exact(buf) {
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(DecodeError::UnexpectedEof {
            requested: buf.len(),
        }
        .into()),
        Err(e) => Err(anyhow!(e)),
        Ok(()) => Ok(()),
    }
}

pub fn read_array<const N: usize>(r: &mut impl Read) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    read_exact(r, &mut buf)?;
    Ok(buf)
}

/// Reads exactly `len` bytes without trusting `len` for the initial allocation.
pub fn read_vec(r: &mut impl Read, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(crate::lengths::MAX_PREALLOC_ELEMS));
    r.take(len as u64).read_to_end(&mut buf)?;
    if buf.len() < len {
        return Err(DecodeError::UnexpectedEof { requested: len }.into());
    }
    Ok(buf)
}
