use thiserror::Error;

/// Structural decoding failures.
///
/// These travel inside [`anyhow::Error`]; recover them with
/// `err.downcast_ref::<DecodeError>()`.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum DecodeError {
    #[error("Unexpected end of input while reading {requested} bytes")]
    UnexpectedEof { requested: usize },

    #[error("Union index {index} is out of range for {alternatives} alternatives")]
    UnionIndexOutOfRange { index: u64, alternatives: u64 },

    #[error("{0:#x} is not a Unicode scalar value")]
    InvalidChar(u32),

    #[error("Bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("Length {0} does not fit in usize")]
    LengthOverflow(u64),

    #[error("Expected {expected} array elements, got {actual}")]
    ArrayLength { expected: usize, actual: usize },

    #[error("Duration is out of range for the destination type")]
    DurationOverflow,

    #[error("{0} bytes left over after decoding")]
    TrailingBytes(usize),
}
