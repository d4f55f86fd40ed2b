//! Montgomery reduction for moduli p such that p + 1 is a multiple of
//! 2^64.
//!
//! For such a modulus, -1/p = 1 mod 2^64, so the Montgomery quotient
//! digit for each column is simply the current column value. Adding
//! `q*p = q*(p + 1) - q` at that column then clears it exactly, and only
//! the product `q*(p + 1)` remains to be accumulated. The low limbs of
//! p + 1 are zero (p + 1 = 2^a*3^b), so those partial products are
//! skipped altogether: for p751, only 7 of the 12 limbs of p + 1 are
//! non-zero, and 9 of 16 for p964.
//!
//! The reduction is organized column by column (comba), with a three-word
//! accumulator. Which partial products are computed depends only on the
//! limb count and on the number of zero limbs of p + 1, both public.

use super::{addcarry_u64, umull};

// Add x*y to the accumulator (v, u, w).
#[inline(always)]
fn acc_mul(v: &mut u64, u: &mut u64, w: &mut u64, x: u64, y: u64) {
    let (lo, hi) = umull(x, y);
    let (nv, cc) = addcarry_u64(*v, lo, 0);
    let (nu, cc) = addcarry_u64(*u, hi, cc);
    *v = nv;
    *u = nu;
    *w = w.wrapping_add(cc as u64);
}

// Add x to the accumulator (v, u, w).
#[inline(always)]
fn acc_add(v: &mut u64, u: &mut u64, w: &mut u64, x: u64) {
    let (nv, cc) = addcarry_u64(*v, x, 0);
    let (nu, cc) = addcarry_u64(*u, 0, cc);
    *v = nv;
    *u = nu;
    *w = w.wrapping_add(cc as u64);
}

// d <- t/2^(64*n) mod p, for the modulus p such that p + 1 = p1, with
// n = d.len() and t of length 2*n. The `zw` low limbs of p1 must be zero,
// with zw >= 1.
//
// If t < p*2^(64*n), then the output is in the [0, 2*p-1] range. This
// precondition is not checked here; callers always feed the product of
// two values lower than 2*p, with 4*p < 2^(64*n).
pub(crate) fn montyred(d: &mut [u64], t: &[u64], p1: &[u64], zw: usize) {
    let n = d.len();
    debug_assert!(t.len() == 2 * n && p1.len() == n);
    debug_assert!(zw >= 1 && zw < n);

    let (mut v, mut u, mut w) = (0u64, 0u64, 0u64);

    // Low columns: each yields a quotient digit q[i], kept in d[i]. The
    // column itself becomes zero and only its carry moves on.
    for i in 0..n {
        if i >= zw {
            for j in 0..(i + 1 - zw) {
                acc_mul(&mut v, &mut u, &mut w, d[j], p1[i - j]);
            }
        }
        acc_add(&mut v, &mut u, &mut w, t[i]);
        d[i] = v;
        v = u;
        u = w;
        w = 0;
    }

    // High columns: output limbs. Column i reads the quotient digits
    // q[j] for j > i - n, and overwrites q[i - n], which is not needed
    // anymore.
    for i in n..((n << 1) - 1) {
        let jmax = if (i + 1 - zw) < n { i + 1 - zw } else { n };
        for j in (i + 1 - n)..jmax {
            acc_mul(&mut v, &mut u, &mut w, d[j], p1[i - j]);
        }
        acc_add(&mut v, &mut u, &mut w, t[i]);
        d[i - n] = v;
        v = u;
        u = w;
        w = 0;
    }

    // Top column: the result is below 2^(64*n), so no carry remains.
    d[n - 1] = v.wrapping_add(t[(n << 1) - 1]);
}
