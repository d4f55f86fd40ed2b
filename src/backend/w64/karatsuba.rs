//! Karatsuba multiplication and squaring over limb slices.
//!
//! An n-limb operand `a` is split into a low half `a_lo` of `h = ceil(n/2)`
//! limbs and a high half `a_hi` of `n - h` limbs. The product is then
//! obtained from three half-size products:
//!
//! ```text
//!   lo  = a_lo*b_lo
//!   hi  = a_hi*b_hi
//!   mid = (a_lo + a_hi)*(b_lo + b_hi) - lo - hi
//!   a*b = lo + mid*2^(64*h) + hi*2^(128*h)
//! ```
//!
//! The half sums `a_lo + a_hi` and `b_lo + b_hi` may be one bit larger
//! than `h` limbs. That extra bit is kept as an explicit carry (0 or 1)
//! and its contribution to the middle product is added back with masked
//! additions:
//!
//! ```text
//!   (sa + ca*W)*(sb + cb*W) = sa*sb + W*(ca*sb + cb*sa) + W^2*(ca*cb)
//! ```
//!
//! with `W = 2^(64*h)`. Nothing is saturated: `mid` is held over `2*h + 1`
//! limbs, which is enough since `mid = a_lo*b_hi + a_hi*b_lo < 2*W^2`.
//!
//! Operands shorter than `KARATSUBA_THRESHOLD` limbs use the schoolbook
//! routines. With 12-limb operands this gives one level of splitting
//! (12 -> 6); 16-limb operands get two levels (16 -> 8 -> 4). Whether a
//! split occurs depends only on operand lengths, never on their values.

use super::{cmask, mac, mp};

// Operands of at least this many limbs are split.
pub(crate) const KARATSUBA_THRESHOLD: usize = 8;

// Largest supported operand length (in limbs). Intermediate buffers are
// allocated on the stack with this bound.
pub(crate) const MAX_LIMBS: usize = 32;

const MAX_HALF: usize = (MAX_LIMBS + 1) >> 1;

// d <- a*b, with a and b of the same length n, and d of length 2*n.
pub(crate) fn mul(d: &mut [u64], a: &[u64], b: &[u64]) {
    let n = a.len();
    debug_assert!(b.len() == n && d.len() == 2 * n);
    debug_assert!(n <= MAX_LIMBS);
    if n < KARATSUBA_THRESHOLD {
        mac::mul_schoolbook(d, a, b);
        return;
    }

    let h = (n + 1) >> 1;
    let (a_lo, a_hi) = a.split_at(h);
    let (b_lo, b_hi) = b.split_at(h);

    // lo -> d[..2*h], hi -> d[2*h..]
    {
        let (d_lo, d_hi) = d.split_at_mut(h << 1);
        if h == (n - h) && h < KARATSUBA_THRESHOLD {
            mac::mul_schoolbook_x2(d_lo, a_lo, b_lo, d_hi, a_hi, b_hi);
        } else {
            mul(d_lo, a_lo, b_lo);
            mul(d_hi, a_hi, b_hi);
        }
    }

    // Half sums, with their carries.
    let mut sa = [0u64; MAX_HALF];
    let mut sb = [0u64; MAX_HALF];
    let sa = &mut sa[..h];
    let sb = &mut sb[..h];
    sa.copy_from_slice(a_lo);
    sb.copy_from_slice(b_lo);
    let ca = mp::add_propagate(sa, a_hi);
    let cb = mp::add_propagate(sb, b_hi);

    // mid <- (sa + ca*W)*(sb + cb*W)
    let mut mid = [0u64; (MAX_HALF << 1) + 1];
    let mid = &mut mid[..((h << 1) + 1)];
    mul(&mut mid[..(h << 1)], sa, sb);
    mp::cond_add_propagate(&mut mid[h..], sb, cmask(ca));
    mp::cond_add_propagate(&mut mid[h..], sa, cmask(cb));
    mid[h << 1] = mid[h << 1].wrapping_add((ca & cb) as u64);

    recombine(d, mid, h);
}

// d <- a^2, with d of length twice that of a.
pub(crate) fn square(d: &mut [u64], a: &[u64]) {
    let n = a.len();
    debug_assert!(d.len() == 2 * n);
    debug_assert!(n <= MAX_LIMBS);
    if n < KARATSUBA_THRESHOLD {
        mac::sqr_schoolbook(d, a);
        return;
    }

    let h = (n + 1) >> 1;
    let (a_lo, a_hi) = a.split_at(h);
    {
        let (d_lo, d_hi) = d.split_at_mut(h << 1);
        square(d_lo, a_lo);
        square(d_hi, a_hi);
    }

    let mut sa = [0u64; MAX_HALF];
    let sa = &mut sa[..h];
    sa.copy_from_slice(a_lo);
    let ca = mp::add_propagate(sa, a_hi);

    // mid <- (sa + ca*W)^2 = sa^2 + 2*ca*sa*W + ca*W^2
    let mut mid = [0u64; (MAX_HALF << 1) + 1];
    let mid = &mut mid[..((h << 1) + 1)];
    square(&mut mid[..(h << 1)], sa);
    let m = cmask(ca);
    mp::cond_add_propagate(&mut mid[h..], sa, m);
    mp::cond_add_propagate(&mut mid[h..], sa, m);
    mid[h << 1] = mid[h << 1].wrapping_add(ca as u64);

    recombine(d, mid, h);
}

// Given d = lo + hi*2^(128*h) (with lo over 2*h limbs) and the full
// middle product in mid (2*h + 1 limbs), subtract lo and hi from mid and
// add the result into d at offset h.
#[inline]
fn recombine(d: &mut [u64], mid: &mut [u64], h: usize) {
    let (lo, hi) = d.split_at(h << 1);
    let bb1 = mp::sub_propagate(mid, lo);
    let bb2 = mp::sub_propagate(mid, hi);
    let cc = mp::add_propagate(&mut d[h..], mid);

    // mid - lo - hi is a sum of two products, hence non-negative, and the
    // full product fits in d.
    debug_assert!(bb1 == 0 && bb2 == 0 && cc == 0);
}
