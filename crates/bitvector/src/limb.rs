//! Limb-level bit addressing.

/// The storage word.
pub type Limb = u64;

/// Number of bits in a [Limb].
pub const BITS: usize = Limb::BITS as usize;

/// Split a bit index into its limb index and the offset within that limb.
#[inline]
pub const fn location(index: usize) -> (usize, usize) {
    (index / BITS, index % BITS)
}

/// Number of limbs needed to address bits `0..=index`.
#[inline]
pub const fn limbs_through(index: usize) -> usize {
    index / BITS + 1
}

/// A limb with the low `n` bits set. `n` must be in `1..=BITS`.
#[inline]
pub const fn ones_up_to(n: usize) -> Limb {
    debug_assert!(n > 0 && n <= BITS);
    Limb::MAX >> (BITS - n)
}

#[inline]
pub const fn get(limb: Limb, offset: usize) -> bool {
    (limb >> offset) & 1 != 0
}

#[inline]
pub const fn set(limb: Limb, offset: usize, value: bool) -> Limb {
    (limb & !(1 << offset)) | ((value as Limb) << offset)
}
