//! Durations and timestamps.
//!
//! Only the tick count travels on the wire. The period and the clock are part of the
//! static type, so a reader must name the same `Ticks<R, P>` / `TimePoint<C, R, P>`
//! that the writer used.
//!
//! `std::time::Duration` is written as a `u128` count of nanoseconds, and
//! `std::time::SystemTime` as an `i128` count of nanoseconds since the UNIX epoch
//! (negative before it).

use crate::lengths::WriteLen;
use crate::{DecodeError, Deser, Primitive, Ser, Shape};
use anyhow::Result;
use derive_more::Deref;
use num_traits::{Float, PrimInt};
use std::fmt::Debug;
use std::hash::Hash;
use std::io::{Read, Write};
use std::marker::PhantomData;
use std::mem;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A tick length of `NUM / DEN` seconds.
pub trait Period: Copy + Eq + Ord + Hash + Debug {
    const NUM: u64;
    const DEN: u64;
}

/// The epoch a [`TimePoint`] is measured from.
pub trait Clock: Copy + Eq + Ord + Hash + Debug {}

macro_rules! periods {
    ($($name:ident = $num:literal / $den:literal),+ $(,)?) => {
        $(
            #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
            pub enum $name {}
            impl Period for $name {
                const NUM: u64 = $num;
                const DEN: u64 = $den;
            }
        )+
    };
}

periods!(
    Nanos = 1 / 1_000_000_000,
    Micros = 1 / 1_000_000,
    Millis = 1 / 1_000,
    Seconds = 1 / 1,
    Minutes = 60 / 1,
    Hours = 3_600 / 1,
);

/// Wall-clock time, epoch at 1970-01-01T00:00:00Z.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum SystemClock {}
impl Clock for SystemClock {}

/// Monotonic time, epoch chosen by the producer.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum SteadyClock {}
impl Clock for SteadyClock {}

/// A count of `R` ticks, each `P::NUM / P::DEN` seconds long.
#[derive(Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Ticks<R, P: Period> {
    #[deref]
    count: R,
    period: PhantomData<P>,
}

impl<R, P: Period> Ticks<R, P> {
    pub fn new(count: R) -> Self {
        Self {
            count,
            period: PhantomData,
        }
    }

    pub fn count(&self) -> R
    where
        R: Copy,
    {
        self.count
    }
}

/// `(num, den)` such that one `P` tick is `num / den` ticks of `Q`.
fn tick_ratio<P: Period, Q: Period>() -> (i128, i128) {
    let num = <i128 as From<u64>>::from(P::NUM) * <i128 as From<u64>>::from(Q::DEN);
    let den = <i128 as From<u64>>::from(P::DEN) * <i128 as From<u64>>::from(Q::NUM);
    (num, den)
}

impl<R, P> Ticks<R, P>
where
    R: PrimInt,
    P: Period,
{
    /// Re-expresses the duration in ticks of `Q`, truncating toward zero.
    /// `None` if the result does not fit `R` or `Q` has a zero-length tick.
    pub fn cast<Q: Period>(self) -> Option<Ticks<R, Q>> {
        let (num, den) = tick_ratio::<P, Q>();
        let count = self.count.to_i128()?.checked_mul(num)?.checked_div(den)?;
        Some(Ticks::new(R::from(count)?))
    }
}

impl<R, P> Ticks<R, P>
where
    R: Float,
    P: Period,
{
    /// Like [`Ticks::cast`], keeping the fractional part.
    pub fn cast_float<Q: Period>(self) -> Option<Ticks<R, Q>> {
        let (num, den) = tick_ratio::<P, Q>();
        if den == 0 {
            return None;
        }
        Some(Ticks::new(self.count * R::from(num)? / R::from(den)?))
    }
}

impl<R, P> Ser for Ticks<R, P>
where
    R: Primitive,
    P: Period,
{
    const SHAPE: Shape = Shape::Duration;

    fn ser_len(&self) -> usize {
        R::WIDTH
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        self.count.ser(w)
    }
}
impl<R, P> Deser for Ticks<R, P>
where
    R: Primitive,
    P: Period,
{
    fn deser<R2: Read>(r: &mut R2) -> Result<Self> {
        R::deser(r).map(Self::new)
    }
}

/// A point in time on clock `C`, held as the duration since the clock's epoch.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TimePoint<C: Clock, R, P: Period> {
    since_epoch: Ticks<R, P>,
    clock: PhantomData<C>,
}

impl<C: Clock, R, P: Period> TimePoint<C, R, P> {
    pub fn from_epoch(since_epoch: Ticks<R, P>) -> Self {
        Self {
            since_epoch,
            clock: PhantomData,
        }
    }

    pub fn since_epoch(&self) -> &Ticks<R, P> {
        &self.since_epoch
    }
}

impl<C, R, P> Ser for TimePoint<C, R, P>
where
    C: Clock,
    R: Primitive,
    P: Period,
{
    const SHAPE: Shape = Shape::Timestamp;

    fn ser_len(&self) -> usize {
        self.since_epoch.ser_len()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        self.since_epoch.ser(w)
    }
}
impl<C, R, P> Deser for TimePoint<C, R, P>
where
    C: Clock,
    R: Primitive,
    P: Period,
{
    fn deser<R2: Read>(r: &mut R2) -> Result<Self> {
        Ticks::deser(r).map(Self::from_epoch)
    }
}

/* std::time */
const NANOS_PER_SEC: u128 = 1_000_000_000;

fn duration_from_nanos(nanos: u128) -> Result<Duration> {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).map_err(|_| DecodeError::DurationOverflow)?;
    let subsec_nanos = (nanos % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, subsec_nanos))
}

impl Ser for Duration {
    const SHAPE: Shape = Shape::Duration;

    fn ser_len(&self) -> usize {
        mem::size_of::<u128>()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        self.as_nanos().ser(w)
    }
}
impl Deser for Duration {
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        duration_from_nanos(u128::deser(r)?)
    }
}

impl Ser for SystemTime {
    const SHAPE: Shape = Shape::Timestamp;

    fn ser_len(&self) -> usize {
        mem::size_of::<i128>()
    }
    fn ser<W: Write>(&self, w: &mut W) -> Result<WriteLen> {
        // `as_nanos` tops out near 2^64 seconds, well inside i128.
        let nanos = match self.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_nanos() as i128,
            Err(before) => -(before.duration().as_nanos() as i128),
        };
        nanos.ser(w)
    }
}
impl Deser for SystemTime {
    fn deser<R: Read>(r: &mut R) -> Result<Self> {
        let nanos = i128::deser(r)?;
        let offset = duration_from_nanos(nanos.unsigned_abs())?;
        let time = if nanos >= 0 {
            UNIX_EPOCH.checked_add(offset)
        } else {
            UNIX_EPOCH.checked_sub(offset)
        };
        time.ok_or_else(|| DecodeError::DurationOverflow.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{from_slice, shape_of, to_vec};

    #[test]
    fn ticks_carry_only_the_count() -> Result<()> {
        let d = Ticks::<i64, Millis>::new(1500);
        assert_eq!(to_vec(&d)?, 1500i64.to_le_bytes());
        assert_eq!(from_slice::<Ticks<i64, Millis>>(&to_vec(&d)?)?, d);
        assert_eq!(*d, 1500);
        assert_eq!(shape_of::<Ticks<f64, Seconds>>(), Shape::Duration);
        Ok(())
    }

    /// A period whose ticks have no length.
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
    enum Frozen {}
    impl Period for Frozen {
        const NUM: u64 = 0;
        const DEN: u64 = 1;
    }

    #[test]
    fn cast_between_periods() {
        let d = Ticks::<i64, Millis>::new(1500);
        assert_eq!(d.cast::<Micros>().map(|t| t.count()), Some(1_500_000));
        assert_eq!(d.cast::<Seconds>().map(|t| t.count()), Some(1));
        assert_eq!(Ticks::<i64, Millis>::new(-1500).cast::<Seconds>().map(|t| t.count()), Some(-1));
        assert_eq!(Ticks::<i64, Hours>::new(2).cast::<Minutes>().map(|t| t.count()), Some(120));

        let f = Ticks::<f64, Millis>::new(1500.0);
        assert_eq!(f.cast_float::<Seconds>().map(|t| t.count()), Some(1.5));

        assert_eq!(Ticks::<u8, Seconds>::new(5).cast::<Millis>(), None);
    }

    #[test]
    fn cast_to_zero_length_ticks() {
        assert_eq!(Ticks::<i64, Seconds>::new(3).cast::<Frozen>(), None);
        assert_eq!(Ticks::<f64, Seconds>::new(3.0).cast_float::<Frozen>(), None);
        assert_eq!(Ticks::<i64, Frozen>::new(3).cast::<Seconds>().map(|t| t.count()), Some(0));
    }

    #[test]
    fn time_points() -> Result<()> {
        let t = TimePoint::<SteadyClock, u32, Micros>::from_epoch(Ticks::new(42));
        assert_eq!(to_vec(&t)?, 42u32.to_le_bytes());
        assert_eq!(from_slice::<TimePoint<SteadyClock, u32, Micros>>(&to_vec(&t)?)?, t);
        assert_eq!(shape_of::<TimePoint<SystemClock, i64, Nanos>>(), Shape::Timestamp);
        Ok(())
    }

    #[test]
    fn std_time() -> Result<()> {
        let d = Duration::new(3, 250);
        assert_eq!(to_vec(&d)?, 3_000_000_250u128.to_le_bytes());
        assert_eq!(from_slice::<Duration>(&to_vec(&d)?)?, d);

        for t in [
            UNIX_EPOCH,
            UNIX_EPOCH + Duration::new(1_700_000_000, 123),
            UNIX_EPOCH - Duration::new(86_400, 1),
        ] {
            assert_eq!(from_slice::<SystemTime>(&to_vec(&t)?)?, t);
        }
        Ok(())
    }

    #[test]
    fn duration_overflow() {
        let err = from_slice::<Duration>(&u128::MAX.to_le_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DecodeError>(),
            Some(&DecodeError::DurationOverflow)
        );
    }
}
