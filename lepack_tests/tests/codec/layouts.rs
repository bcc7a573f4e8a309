//! Byte-exact layouts of representative values.

use anyhow::Result;
use lepack_codec::lengths::UNION_SENTINEL;
use lepack_codec::{deser, from_slice, ser, ser_len, to_vec, DecodeError};
use std::collections::{HashMap, HashSet};

lepack_codec::tagged_union! {
    #[derive(PartialEq, Debug)]
    enum Payload {
        Int(u32),
        Text(String),
        Empty,
    }
}

#[test]
fn single_integer() -> Result<()> {
    let value = 24523485222452345u64;
    let buf = to_vec(&value)?;
    assert_eq!(buf, value.to_le_bytes());
    assert_eq!(buf.len(), 8);
    assert_eq!(from_slice::<u64>(&buf)?, value);
    Ok(())
}

#[test]
fn hash_set_of_three() -> Result<()> {
    let set = HashSet::from([3u64, 4, 4523425934582345]);
    let buf = to_vec(&set)?;
    assert_eq!(buf.len(), 32);
    assert_eq!(&buf[..8], &3u64.to_le_bytes());

    let mut elems = buf[8..]
        .chunks(8)
        .map(|chunk| from_slice::<u64>(chunk))
        .collect::<Result<Vec<_>>>()?;
    elems.sort();
    assert_eq!(elems, [3, 4, 4523425934582345]);

    assert_eq!(from_slice::<HashSet<u64>>(&buf)?, set);
    Ok(())
}

#[test]
fn absent_option_then_packed_bools() -> Result<()> {
    let value: (Option<i32>, Vec<bool>) = (None, vec![true, false, true]);
    let buf = to_vec(&value)?;
    assert_eq!(buf, [0, 3, 0, 0, 0, 0, 0, 0, 0, 0b101]);
    assert_eq!(ser_len(&value), 1 + 9);
    assert_eq!(from_slice::<(Option<i32>, Vec<bool>)>(&buf)?, value);
    Ok(())
}

#[test]
fn union_alternatives() -> Result<()> {
    let mut expected = 0u64.to_le_bytes().to_vec();
    expected.extend(77u32.to_le_bytes());
    assert_eq!(to_vec(&Payload::Int(77))?, expected);

    let mut expected = 1u64.to_le_bytes().to_vec();
    expected.extend(2u64.to_le_bytes());
    expected.extend(b"ok");
    assert_eq!(to_vec(&Payload::Text(String::from("ok")))?, expected);

    assert_eq!(to_vec(&Payload::Empty)?, 2u64.to_le_bytes());
    assert_eq!(
        from_slice::<Payload>(&UNION_SENTINEL.to_le_bytes())?,
        Payload::Empty
    );
    Ok(())
}

#[test]
fn empty_collections() -> Result<()> {
    assert_eq!(to_vec(&Vec::<String>::new())?, [0u8; 8]);
    assert_eq!(to_vec(&Vec::<bool>::new())?, [0u8; 8]);
    assert_eq!(to_vec(&HashMap::<u8, Vec<u8>>::new())?, [0u8; 8]);
    assert!(from_slice::<Vec<bool>>(&[0u8; 8])?.is_empty());
    Ok(())
}

#[test]
fn cursor_advances_by_encoded_length() -> Result<()> {
    let value = (
        vec![Some(1u16), None],
        String::from("cursor"),
        [true, true],
        Payload::Text(String::from("x")),
    );
    let len = ser_len(&value);

    let mut buf = vec![0xaau8; len + 5];
    let mut w = &mut buf[..];
    let w_len = ser(&mut w, &value)?;
    assert_eq!(*w_len, len);
    assert_eq!(w.len(), 5);

    let mut r = &buf[..];
    let decoded = deser::<(Vec<Option<u16>>, String, [bool; 2], Payload), _>(&mut r)?;
    assert_eq!(r.len(), 5);
    assert_eq!(decoded, value);
    Ok(())
}

#[test]
fn writing_past_the_end_fails() {
    let mut buf = [0u8; 4];
    let mut w = &mut buf[..];
    assert!(ser(&mut w, &1u64).is_err());
}

#[test]
fn trailing_bytes_are_rejected() {
    let err = from_slice::<u16>(&[1, 0, 9]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<DecodeError>(),
        Some(&DecodeError::TrailingBytes(1))
    );
}
