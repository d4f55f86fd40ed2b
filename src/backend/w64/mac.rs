//! Schoolbook multiply-accumulate.
//!
//! This is the base case of all multiplications: the Karatsuba
//! multiplier recurses down to operands of a few limbs, which are then
//! multiplied here, row by row.

use super::{addcarry_u64, umull, umull_add, umull_add2};

// d <- d + x*y, with y shorter than d: the products x*y[j] are added at
// offset j, and the final carry is propagated through the whole of d.
// The carry out of d (0 or 1) is returned.
#[inline]
pub(crate) fn mac_row(d: &mut [u64], x: u64, y: &[u64]) -> u64 {
    let k = y.len();
    debug_assert!(k < d.len());
    let mut hi = 0;
    for j in 0..k {
        (d[j], hi) = umull_add2(x, y[j], d[j], hi);
    }
    let mut cc;
    (d[k], cc) = addcarry_u64(d[k], hi, 0);
    for j in (k + 1)..d.len() {
        (d[j], cc) = addcarry_u64(d[j], 0, cc);
    }
    cc as u64
}

// d <- a*b, with a and b of the same length n, and d of length 2*n.
pub(crate) fn mul_schoolbook(d: &mut [u64], a: &[u64], b: &[u64]) {
    let n = a.len();
    debug_assert!(b.len() == n && d.len() == 2 * n);
    d.fill(0);
    for i in 0..n {
        // d[i + n] is still zero at this point, so the row cannot carry
        // beyond it.
        mac_row(&mut d[i..(i + n + 1)], a[i], b);
    }
}

// Two independent products d0 <- a0*b0 and d1 <- a1*b1, computed in a
// single interleaved pass; all four operands have the same length n.
// The two streams never interact, and each output is bit-identical to
// what mul_schoolbook() returns; the interleaving only gives the CPU two
// independent dependency chains to schedule.
pub(crate) fn mul_schoolbook_x2(
    d0: &mut [u64], a0: &[u64], b0: &[u64],
    d1: &mut [u64], a1: &[u64], b1: &[u64])
{
    let n = a0.len();
    debug_assert!(b0.len() == n && a1.len() == n && b1.len() == n);
    debug_assert!(d0.len() == 2 * n && d1.len() == 2 * n);
    d0.fill(0);
    d1.fill(0);
    for i in 0..n {
        let x0 = a0[i];
        let x1 = a1[i];
        let mut h0 = 0;
        let mut h1 = 0;
        for j in 0..n {
            (d0[i + j], h0) = umull_add2(x0, b0[j], d0[i + j], h0);
            (d1[i + j], h1) = umull_add2(x1, b1[j], d1[i + j], h1);
        }
        d0[i + n] = h0;
        d1[i + n] = h1;
    }
}

// d <- a^2, with d of length twice that of a. Cross products a_i*a_j
// (i < j) are computed once and doubled.
pub(crate) fn sqr_schoolbook(d: &mut [u64], a: &[u64]) {
    let n = a.len();
    debug_assert!(d.len() == 2 * n);
    if n == 1 {
        (d[0], d[1]) = umull(a[0], a[0]);
        return;
    }

    // sum_{i<j} a_i*a_j*2^(64*(i+j)) < 2^(64*(2*n-1))
    // -> d[2*n-1] remains at zero
    d.fill(0);
    let f = a[0];
    let (x, mut cc) = umull(f, a[1]);
    d[1] = x;
    for j in 2..n {
        let (x, hi) = umull_add(f, a[j], cc);
        d[j] = x;
        cc = hi;
    }
    d[n] = cc;
    for i in 1..(n - 1) {
        let f = a[i];
        let (x, mut cc) = umull_add(f, a[i + 1], d[(i << 1) + 1]);
        d[(i << 1) + 1] = x;
        for j in (i + 2)..n {
            let (x, hi) = umull_add2(f, a[j], d[i + j], cc);
            d[i + j] = x;
            cc = hi;
        }
        d[i + n] = cc;
    }

    // Double the cross products.
    let mut cc = 0;
    for i in 1..((n << 1) - 1) {
        let w = d[i];
        let ee = w >> 63;
        d[i] = (w << 1) | cc;
        cc = ee;
    }
    d[(n << 1) - 1] = cc;

    // Add the squares a_i^2*2^(128*i).
    let mut cc = 0;
    for i in 0..n {
        let (lo, hi) = umull(a[i], a[i]);
        let (x0, ee) = addcarry_u64(lo, d[i << 1], cc);
        let (x1, ee) = addcarry_u64(hi, d[(i << 1) + 1], ee);
        d[i << 1] = x0;
        d[(i << 1) + 1] = x1;
        cc = ee;
    }
}
