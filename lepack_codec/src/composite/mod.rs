//! Fixed arrays, optionals, tuples and tagged unions.
//!
//! Each of these composes the codec of its members in declared order and adds at
//! most a small fixed header (a presence flag, an alternative index).

mod array;
mod optional;
mod tuple;
pub mod union;
