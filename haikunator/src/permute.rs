//! A fixed bijection on `u32` which breaks up runs of consecutive serial
//! numbers.
//!
//! The transform is the "outer perfect shuffle" from Hacker's Delight
//! (section 7-2, released to the public domain) followed by a full 32-bit
//! reversal. Every stage is a butterfly swap of two bit groups, which is its
//! own inverse, so the whole thing is a permutation of bit positions and
//! therefore a bijection on all `2^32` inputs.
//!
//! The low bit of the input lands in the high bit of the output, so `x` and
//! `x + 1` always disagree in bit 31 after permuting.

/// Butterfly stages as `(shift, mask)` pairs, applied in this order by
/// [`permute`] and in reverse order by [`unpermute`].
///
/// These are load-bearing: changing any shift, mask, or their order changes
/// the name assigned to every serial number.
const STAGES: [(u32, u32); 4] = [
    (8, 0x0000_ff00),
    (4, 0x00f0_00f0),
    (2, 0x0c0c_0c0c),
    (1, 0x2222_2222),
];

/// Permute the bits of a serial number. Total, constant time, no allocation.
///
/// ```
/// assert_eq!(haikunator::permute(0), 0);
/// assert_eq!(haikunator::permute(1), 0x8000_0000);
/// ```
pub const fn permute(x: u32) -> u32 {
    let mut x = x;
    let mut i = 0;
    while i < STAGES.len() {
        let (shift, mask) = STAGES[i];
        x = swap_bit_groups(x, shift, mask);
        i += 1;
    }
    x.reverse_bits()
}

/// The inverse of [`permute`]: `unpermute(permute(x)) == x` for every `x`.
pub const fn unpermute(x: u32) -> u32 {
    let mut x = x.reverse_bits();
    let mut i = STAGES.len();
    while i > 0 {
        i -= 1;
        let (shift, mask) = STAGES[i];
        x = swap_bit_groups(x, shift, mask);
    }
    x
}

/// Swap each bit group selected by `mask` with the group `shift` bits above
/// it. Applying the same swap twice is the identity.
#[inline(always)]
const fn swap_bit_groups(x: u32, shift: u32, mask: u32) -> u32 {
    let t = (x ^ (x >> shift)) & mask;
    x ^ t ^ (t << shift)
}
