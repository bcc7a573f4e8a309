//! Heterogeneous values written back to back into one buffer.

use anyhow::Result;
use itertools::Itertools;
use lepack_codec::{deser, ser, Complex};
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

lepack_codec::tagged_union! {
    #[derive(PartialEq, Debug)]
    enum Item {
        Int(i64),
        Text(String),
        Flags(Vec<bool>),
        Maybe(Option<u16>),
        Point((f32, f32)),
        Set(BTreeSet<char>),
        Wave(Complex<i16>),
        Nested(Vec<Option<String>>),
        Nothing,
    }
}

fn verify(items: &Vec<Item>) -> Result<()> {
    let (serialized, w_len_at_each_item) = {
        let mut serialized: Vec<u8> = vec![];
        let mut w_len_at_each_item: Vec<usize> = vec![]; // Cumulative `w_len`s.

        let mut w_len = 0;
        for item in items {
            let delta_w_len = ser(&mut serialized, item)?;
            w_len += *delta_w_len;
            w_len_at_each_item.push(w_len);
        }
        assert_eq!(serialized.len(), w_len, "\n{:?}\n{:?}\n", items, serialized);

        (serialized, w_len_at_each_item)
    };

    let mut r = &serialized[..];
    let mut deserialized: Vec<Item> = vec![];
    for item_i in 0..items.len() {
        deserialized.push(deser::<Item, _>(&mut r)?);
        assert_eq!(w_len_at_each_item[item_i], serialized.len() - r.len());
    }
    assert!(r.is_empty(), "\n{:?}\n{:?}\n", items, serialized);
    assert_eq!(items, &deserialized, "\n{:?}\n{:?}\n", items, serialized);

    Ok(())
}

fn gen_int() -> Item {
    Item::Int(-123)
}
fn gen_text() -> Item {
    Item::Text(String::from("asdf"))
}
fn gen_flags() -> Item {
    Item::Flags(vec![true, false, false, true, true, false, true, false, true])
}
fn gen_maybe() -> Item {
    Item::Maybe(Some(9))
}
fn gen_point() -> Item {
    Item::Point((0.5, -2.0))
}
fn gen_set() -> Item {
    Item::Set(BTreeSet::from(['z', 'é', '1']))
}
fn gen_wave() -> Item {
    Item::Wave(Complex::new(3, -4))
}
fn gen_nested() -> Item {
    Item::Nested(vec![None, Some(String::from("zxcv")), Some(String::new())])
}
fn gen_nothing() -> Item {
    Item::Nothing
}

#[test]
fn ser_then_deser() -> Result<()> {
    let mut rand_rng = rand::thread_rng();

    let gen_fns = [
        gen_int,
        gen_text,
        gen_flags,
        gen_maybe,
        gen_point,
        gen_set,
        gen_wave,
        gen_nested,
        gen_nothing,
    ];

    for mut gen_fns in gen_fns.iter().powerset() {
        let items = gen_fns.iter().map(|gen| gen()).collect::<Vec<_>>();
        verify(&items)?;

        gen_fns.shuffle(&mut rand_rng);
        let items = gen_fns.iter().map(|gen| gen()).collect::<Vec<_>>();
        verify(&items)?;
    }

    Ok(())
}
