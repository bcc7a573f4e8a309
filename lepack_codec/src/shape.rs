use crate::Ser;

/// The closed set of structural categories the codec knows.
///
/// Each [`Ser`] impl names its shape in [`Ser::SHAPE`], so classification happens
/// at compile time; a type without an impl is rejected by the compiler.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum Shape {
    Primitive,
    FixedArray,
    Sequence,
    Map,
    Optional,
    Union,
    Pair,
    Tuple,
    Complex,
    Duration,
    Timestamp,
    Custom,
}

pub const fn shape_of<T: Ser + ?Sized>() -> Shape {
    T::SHAPE
}
