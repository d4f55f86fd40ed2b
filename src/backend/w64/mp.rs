//! Carry-chain addition and subtraction over limb slices.
//!
//! Every function here processes all limbs of its operands, whatever
//! their values; carries and borrows are propagated explicitly and
//! returned as 0 or 1. Slice lengths are public (they come from the
//! fixed-width types that call these functions).

use super::{addcarry_u64, subborrow_u64};

// d <- a + b; returns the carry. All three slices have the same length.
#[inline]
pub(crate) fn add(d: &mut [u64], a: &[u64], b: &[u64]) -> u8 {
    debug_assert!(a.len() == d.len() && b.len() == d.len());
    let mut cc = 0;
    for i in 0..d.len() {
        (d[i], cc) = addcarry_u64(a[i], b[i], cc);
    }
    cc
}

// d <- a - b; returns the borrow. All three slices have the same length.
#[inline]
pub(crate) fn sub(d: &mut [u64], a: &[u64], b: &[u64]) -> u8 {
    debug_assert!(a.len() == d.len() && b.len() == d.len());
    let mut cc = 0;
    for i in 0..d.len() {
        (d[i], cc) = subborrow_u64(a[i], b[i], cc);
    }
    cc
}

// d <- d + b; the two slices have the same length. Returns the carry.
#[inline]
pub(crate) fn add_assign(d: &mut [u64], b: &[u64]) -> u8 {
    debug_assert!(b.len() == d.len());
    let mut cc = 0;
    for i in 0..d.len() {
        (d[i], cc) = addcarry_u64(d[i], b[i], cc);
    }
    cc
}

// d <- d - b; the two slices have the same length. Returns the borrow.
#[inline]
pub(crate) fn sub_assign(d: &mut [u64], b: &[u64]) -> u8 {
    debug_assert!(b.len() == d.len());
    let mut cc = 0;
    for i in 0..d.len() {
        (d[i], cc) = subborrow_u64(d[i], b[i], cc);
    }
    cc
}

// d <- d + (b & m), with m = 0 or 0xFFFFFFFFFFFFFFFF. Slices have the
// same length. Returns the carry.
#[inline]
pub(crate) fn cond_add_assign(d: &mut [u64], b: &[u64], m: u64) -> u8 {
    debug_assert!(b.len() == d.len());
    let mut cc = 0;
    for i in 0..d.len() {
        (d[i], cc) = addcarry_u64(d[i], b[i] & m, cc);
    }
    cc
}

// d <- d + b, where b may be shorter than d; the carry out of b's top
// limb is propagated through the rest of d. Returns the carry out of d.
#[inline]
pub(crate) fn add_propagate(d: &mut [u64], b: &[u64]) -> u8 {
    debug_assert!(b.len() <= d.len());
    let mut cc = 0;
    for i in 0..b.len() {
        (d[i], cc) = addcarry_u64(d[i], b[i], cc);
    }
    for i in b.len()..d.len() {
        (d[i], cc) = addcarry_u64(d[i], 0, cc);
    }
    cc
}

// d <- d + (b & m), where b may be shorter than d (masked version of
// add_propagate()).
#[inline]
pub(crate) fn cond_add_propagate(d: &mut [u64], b: &[u64], m: u64) -> u8 {
    debug_assert!(b.len() <= d.len());
    let mut cc = 0;
    for i in 0..b.len() {
        (d[i], cc) = addcarry_u64(d[i], b[i] & m, cc);
    }
    for i in b.len()..d.len() {
        (d[i], cc) = addcarry_u64(d[i], 0, cc);
    }
    cc
}

// d <- d - b, where b may be shorter than d; the borrow is propagated
// through the rest of d. Returns the borrow out of d.
#[inline]
pub(crate) fn sub_propagate(d: &mut [u64], b: &[u64]) -> u8 {
    debug_assert!(b.len() <= d.len());
    let mut cc = 0;
    for i in 0..b.len() {
        (d[i], cc) = subborrow_u64(d[i], b[i], cc);
    }
    for i in b.len()..d.len() {
        (d[i], cc) = subborrow_u64(d[i], 0, cc);
    }
    cc
}

// Get the borrow of a - b, without storing the difference (i.e. 1 if
// a < b, 0 otherwise). Slices have the same length.
#[inline]
pub(crate) fn borrow(a: &[u64], b: &[u64]) -> u8 {
    debug_assert!(b.len() == a.len());
    let mut cc = 0;
    for i in 0..a.len() {
        (_, cc) = subborrow_u64(a[i], b[i], cc);
    }
    cc
}

// Logical right shift by one bit; `top` (0 or 1) is inserted as the new
// most significant bit.
#[inline]
pub(crate) fn shr1(d: &mut [u64], top: u8) {
    let n = d.len();
    for i in 0..(n - 1) {
        d[i] = (d[i] >> 1) | (d[i + 1] << 63);
    }
    d[n - 1] = (d[n - 1] >> 1) | ((top as u64) << 63);
}

// Returns 0xFFFFFFFF if all limbs are zero, 0x00000000 otherwise.
#[inline]
pub(crate) fn iszero(a: &[u64]) -> u32 {
    let mut r = 0;
    for i in 0..a.len() {
        r |= a[i];
    }
    ((r | r.wrapping_neg()) >> 63).wrapping_sub(1) as u32
}
