//! Randomized values of every shape.

use anyhow::Result;
use lepack_codec::time::{Millis, Nanos, SystemClock};
use lepack_codec::{from_slice, ser_len, to_vec, Complex, Deser, Ser, Ticks, TimePoint};
use rand::distributions::Alphanumeric;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::{BTreeMap, VecDeque};
use std::fmt::Debug;

const ROUNDS: usize = 200;

fn verify<T: Ser + Deser + PartialEq + Debug>(value: &T) -> Result<()> {
    let buf = to_vec(value)?;
    assert_eq!(buf.len(), ser_len(value), "{value:?}");
    assert_eq!(&from_slice::<T>(&buf)?, value, "{buf:?}");
    Ok(())
}

fn gen_string(rng: &mut ThreadRng) -> String {
    let len = rng.gen_range(0..16);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn gen_bools(rng: &mut ThreadRng) -> Vec<bool> {
    let len = rng.gen_range(0..150);
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn primitives() -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        verify(&rng.gen::<u8>())?;
        verify(&rng.gen::<i16>())?;
        verify(&rng.gen::<u128>())?;
        verify(&rng.gen::<i64>())?;
        verify(&rng.gen::<f32>())?;
        verify(&rng.gen::<f64>())?;
        verify(&rng.gen::<char>())?;
        verify(&rng.gen::<bool>())?;
    }
    Ok(())
}

#[test]
fn nested_containers() -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let bools = gen_bools(&mut rng);
        verify(&bools)?;

        let nested = (0..rng.gen_range(0..5))
            .map(|_| gen_bools(&mut rng))
            .collect::<Vec<_>>();
        verify(&nested)?;

        let map = (0..rng.gen_range(0..8))
            .map(|_| (gen_string(&mut rng), rng.gen::<Option<i32>>()))
            .collect::<BTreeMap<_, _>>();
        verify(&map)?;

        let deque = (0..rng.gen_range(0..8))
            .map(|_| (rng.gen::<u8>(), gen_string(&mut rng)))
            .collect::<VecDeque<_>>();
        verify(&deque)?;
    }
    Ok(())
}

#[test]
fn numeric_wrappers() -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        verify(&Complex::new(rng.gen::<f64>(), rng.gen::<f64>()))?;
        verify(&Ticks::<i64, Millis>::new(rng.gen()))?;
        verify(&TimePoint::<SystemClock, u64, Nanos>::from_epoch(Ticks::new(rng.gen())))?;
        verify(&[rng.gen::<u32>(), rng.gen(), rng.gen()])?;
    }
    Ok(())
}
