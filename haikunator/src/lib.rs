//! Deterministic, human-readable names for 32-bit serial numbers, e.g.
//!
//! `0xdeadbeef` -> "baker-dog-1003409401"
//!
//! A serial number is first run through [`permute`], a fixed bijection which
//! scatters consecutive serial numbers across the `u32` range. The permuted
//! value is then read as a mixed-radix number with radices
//! `(first.len(), second.len(), ..)`: the two low digits index into the two
//! word lists and whatever remains becomes the numeric suffix.
//!
//! As long as both word lists stay fixed (same words, same order), every
//! serial number maps to exactly one name and no two serial numbers share a
//! name.

/// The name composer and its errors.
mod name;
/// The bit permutation.
mod permute;
/// An immutable, ordered list of words.
mod word_list;

pub use name::{compose, Error, ListPosition, NameParts};
pub use permute::{permute, unpermute};
pub use word_list::WordList;
