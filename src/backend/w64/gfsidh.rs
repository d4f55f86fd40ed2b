use core::marker::PhantomData;

use super::{cmask, const_add, const_bitlen, const_low_mask, const_lt, const_small, const_sub, const_zero_words};
use super::{karatsuba, montyred, mp};
use super::zz::{Zu, ZuWide};
use crate::params::SidhParams;
use crate::{CryptoRng, RngCore};

#[cfg(feature = "alloc")]
use crate::Vec;

/// Element of the field of integers modulo p = 2^a*3^b - 1.
///
/// The value is kept in Montgomery representation (x is stored as
/// x*R mod p, with R = 2^(64*N)) and in a redundant range: the stored
/// integer is in [0, 2*p-1]. Only `correction()` brings the stored value
/// into [0, p-1]; all other operations accept and return values in the
/// redundant range.
#[derive(Clone, Copy, Debug)]
pub struct GFsidh<P: SidhParams<N>, const N: usize>(
    pub(crate) [u64; N], PhantomData<P>);

impl<P: SidhParams<N>, const N: usize> GFsidh<P, N> {

    // Modulus p (little-endian order, 64-bit limbs).
    pub const MODULUS: [u64; N] = P::MODULUS;

    // 2*p
    pub const MODULUS_X2: [u64; N] = const_add(P::MODULUS, P::MODULUS);

    // p + 1
    pub const MODULUS_P1: [u64; N] = const_add(P::MODULUS, const_small(1));

    // Number of low limbs of value zero in p + 1.
    const ZW: usize = const_zero_words(Self::MODULUS_P1);

    // p - 2 (exponent for inversion).
    const PM2: [u64; N] = const_sub(P::MODULUS, const_small(2));

    // Mask for the significant bits of integers lower than p.
    const VMASK: [u64; N] = const_low_mask(Self::BITLEN);

    // Modulus length (in bits).
    pub const BITLEN: usize = const_bitlen(P::MODULUS);

    // Element encoded length, in bytes.
    pub const ENC_LEN: usize = (Self::BITLEN + 7) >> 3;

    pub const ZERO: Self = Self([0u64; N], PhantomData);
    pub const ONE: Self = Self(P::MONTGOMERY_ONE, PhantomData);
    pub const R2: Self = Self(P::MONTGOMERY_R2, PhantomData);

    // Evaluated (and checked) when the type is instantiated; a bundle
    // that does not fulfill these conditions fails to compile.
    const CHECK: () = Self::check_params();

    const fn check_params() {
        assert!(N >= 2 && N <= karatsuba::MAX_LIMBS);
        assert!(P::MODULUS[0] == 0xFFFFFFFFFFFFFFFF);
        assert!(Self::ZW >= 1 && Self::ZW < N);
        assert!(Self::ZW == ((P::EXP2 as usize) >> 6));

        // 16*p < R
        assert!(Self::BITLEN + 4 <= 64 * N);
    }

    /// Create an element from its internal representation (Montgomery
    /// representation, 64-bit limbs in little-endian order). The
    /// provided integer MUST be lower than 2*p; this is checked only in
    /// debug builds.
    #[inline(always)]
    pub const fn from_raw(x: [u64; N]) -> Self {
        debug_assert!(const_lt(&x, &Self::MODULUS_X2));
        Self(x, PhantomData)
    }

    /// Get the internal representation of this element (Montgomery
    /// representation, not necessarily canonical, 64-bit limbs in
    /// little-endian order).
    #[inline(always)]
    pub const fn to_raw(self) -> [u64; N] {
        self.0
    }

    // Create an element from its 64-bit limbs, provided in little-endian
    // order (least significant limb first).
    //
    // Note: if the value is numerically larger than the modulus, then
    // it is implicitly reduced.
    #[inline]
    pub fn from_w64le(x: [u64; N]) -> Self {
        // x < R and R2 < p, hence x*R2 < R*p.
        let t = Zu(x).mul_wide(&Zu(P::MONTGOMERY_R2));
        Self::montyred(&t)
    }

    // Create an element by converting the provided integer.
    #[inline]
    pub fn from_u64(x: u64) -> Self {
        let mut d = [0u64; N];
        d[0] = x;
        Self::from_w64le(d)
    }

    /// Get the value of this element as an integer in [0, p-1] (64-bit
    /// limbs, little-endian order).
    pub fn to_w64le(self) -> [u64; N] {
        let r = Self::montyred(&ZuWide::from_halves(Zu(self.0), Zu::ZERO));
        r.correction().0
    }

    /// Montgomery reduction: given the double-width integer `t`, return
    /// the element whose internal representation is congruent to
    /// t/R mod p, in [0, 2*p-1].
    ///
    /// `t` MUST be lower than R*p; this holds for the product of two
    /// integers lower than 2*p. This is checked only in debug builds.
    #[inline]
    pub fn montyred(t: &ZuWide<N>) -> Self {
        let mut r = Self::ZERO;
        r.set_montyred(t);
        r
    }

    #[inline]
    fn set_montyred(&mut self, t: &ZuWide<N>) {
        let () = Self::CHECK;

        // t < R*p if and only if the high half is lower than p.
        debug_assert!(mp::borrow(&t.0[1], &Self::MODULUS) == 1);
        montyred::montyred(&mut self.0, t.0.as_flattened(),
            &Self::MODULUS_P1, Self::ZW);
    }

    #[inline(always)]
    fn debug_check_range(&self) {
        debug_assert!(mp::borrow(&self.0, &Self::MODULUS_X2) == 1);
    }

    // Given a value lower than 4*p, reduce it to [0, 2*p-1] by
    // conditionally subtracting 2*p.
    #[inline(always)]
    fn reduce_x2(&mut self) {
        let bb = mp::sub_assign(&mut self.0, &Self::MODULUS_X2);
        mp::cond_add_assign(&mut self.0, &Self::MODULUS_X2, cmask(bb));
    }

    /// Add `rhs` to this element.
    #[inline]
    pub fn set_add(&mut self, rhs: &Self) {
        self.debug_check_range();
        rhs.debug_check_range();

        // 4*p < R, so the sum cannot overflow.
        let cc = mp::add_assign(&mut self.0, &rhs.0);
        debug_assert!(cc == 0);
        self.reduce_x2();
    }

    /// Subtract `rhs` from this element.
    #[inline]
    pub fn set_sub(&mut self, rhs: &Self) {
        self.debug_check_range();
        rhs.debug_check_range();
        let bb = mp::sub_assign(&mut self.0, &rhs.0);
        mp::cond_add_assign(&mut self.0, &Self::MODULUS_X2, cmask(bb));
    }

    /// Negate this element.
    #[inline]
    pub fn set_neg(&mut self) {
        self.debug_check_range();

        // 2*p - x is in [1, 2*p]; the value 2*p (for x = 0) is folded
        // back to zero.
        let mut d = Self::MODULUS_X2;
        mp::sub_assign(&mut d, &self.0);
        self.0 = d;
        self.reduce_x2();
    }

    /// Halve this element (division by 2).
    #[inline]
    pub fn set_half(&mut self) {
        self.debug_check_range();

        // If the value is odd, add p to make it even; the sum is lower
        // than 3*p, hence it cannot overflow.
        let m = (self.0[0] & 1).wrapping_neg();
        let cc = mp::cond_add_assign(&mut self.0, &Self::MODULUS, m);
        mp::shr1(&mut self.0, cc);
    }

    /// Compute the half of this element.
    #[inline(always)]
    pub fn half(self) -> Self {
        let mut r = self;
        r.set_half();
        r
    }

    /// Normalize this element into [0, p-1].
    #[inline]
    pub fn set_correction(&mut self) {
        self.debug_check_range();
        let bb = mp::sub_assign(&mut self.0, &Self::MODULUS);
        mp::cond_add_assign(&mut self.0, &Self::MODULUS, cmask(bb));
    }

    /// Get this element normalized into [0, p-1].
    #[inline(always)]
    pub fn correction(self) -> Self {
        let mut r = self;
        r.set_correction();
        r
    }

    /// Multiply this element by `rhs`.
    #[inline]
    pub fn set_mul(&mut self, rhs: &Self) {
        self.debug_check_range();
        rhs.debug_check_range();
        let t = Zu(self.0).mul_wide(&Zu(rhs.0));
        self.set_montyred(&t);
    }

    /// Square this element.
    #[inline]
    pub fn set_square(&mut self) {
        self.debug_check_range();
        let t = Zu(self.0).square_wide();
        self.set_montyred(&t);
    }

    /// Compute the square of this element.
    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    /// Square this element `n` times.
    #[inline]
    pub fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    /// Compute the `n`-th successive square of this element.
    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    #[inline(always)]
    pub fn set_mul2(&mut self) {
        let r = *self;
        self.set_add(&r);
    }

    #[inline(always)]
    pub fn mul2(self) -> Self {
        let mut r = self;
        r.set_mul2();
        r
    }

    #[inline(always)]
    pub fn set_mul3(&mut self) {
        let r = *self;
        self.set_mul2();
        self.set_add(&r);
    }

    #[inline(always)]
    pub fn mul3(self) -> Self {
        let mut r = self;
        r.set_mul3();
        r
    }

    #[inline(always)]
    pub fn set_mul4(&mut self) {
        self.set_mul2();
        self.set_mul2();
    }

    #[inline(always)]
    pub fn mul4(self) -> Self {
        let mut r = self;
        r.set_mul4();
        r
    }

    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        for i in 0..N {
            self.0[i] ^= cw & (self.0[i] ^ a.0[i]);
        }
    }

    #[inline]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        for i in 0..N {
            let t = cw & (a.0[i] ^ b.0[i]);
            a.0[i] ^= t;
            b.0[i] ^= t;
        }
    }

    // Raise this value to the provided exponent. The exponent is non-zero
    // and is public. The exponent is encoded over N 64-bit limbs.
    fn set_modpow_pubexp(&mut self, e: &[u64; N]) {
        // Make a 4-bit window; win[i] contains x^(i+1)
        let mut win = [Self::ZERO; 15];
        win[0] = *self;
        for i in 1..8 {
            let j = i * 2;
            win[j - 1] = win[i - 1].square();
            win[j] = win[j - 1] * win[0];
        }

        // Explore 4-bit chunks of the exponent, high to low. Skip leading
        // chunks of value 0.
        let mut z = false;
        for i in (0..N).rev() {
            let ew = e[i];
            for j in (0..16).rev() {
                if z {
                    self.set_xsquare(4);
                }
                let c = ((ew >> (j << 2)) & 0x0F) as usize;
                if c != 0 {
                    if z {
                        self.set_mul(&win[c - 1]);
                    } else {
                        z = true;
                        *self = win[c - 1];
                    }
                }
            }
        }
        if !z {
            *self = Self::ONE;
        }
    }

    /// Invert this element (Fermat's little theorem: x^(p-2) = 1/x).
    /// The inverse of zero is zero.
    #[inline]
    pub fn set_invert(&mut self) {
        self.set_modpow_pubexp(&Self::PM2);
    }

    /// Compute the inverse of this element. The inverse of zero is zero.
    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    // Equality check (constant-time): returned value is 0xFFFFFFFF on
    // equality, 0 otherwise. Both operands are normalized first, since a
    // value may have two representations in [0, 2*p-1].
    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        let a = self.correction();
        let b = rhs.correction();
        let mut r = 0;
        for i in 0..N {
            r |= a.0[i] ^ b.0[i];
        }
        ((r | r.wrapping_neg()) >> 63).wrapping_sub(1) as u32
    }

    // Compare this value with zero (constant-time): returned value
    // is 0xFFFFFFFF if this element is zero, 0 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        mp::iszero(&self.correction().0)
    }

    /// Encode this element into exactly `ENC_LEN` bytes (unsigned
    /// little-endian encoding of the value, normalized to [0, p-1]).
    /// The destination slice MUST have length `ENC_LEN`.
    pub fn encode_into(self, dst: &mut [u8]) {
        assert!(dst.len() == Self::ENC_LEN);
        let x = self.to_w64le();
        let mut j = 0;
        for i in 0..N {
            if j >= Self::ENC_LEN {
                break;
            }
            let k = core::cmp::min(8, Self::ENC_LEN - j);
            dst[j..(j + k)].copy_from_slice(&x[i].to_le_bytes()[..k]);
            j += k;
        }
    }

    /// Encode this element into a new vector of `ENC_LEN` bytes.
    #[cfg(feature = "alloc")]
    pub fn encode(self) -> Vec<u8> {
        let mut d = vec![0u8; Self::ENC_LEN];
        self.encode_into(&mut d);
        d
    }

    // Decode an integer from up to 8*N bytes (unsigned little-endian
    // convention). The value is not reduced, and not converted to
    // Montgomery representation.
    fn decode_raw(buf: &[u8]) -> [u64; N] {
        let n = buf.len();
        let mut d = [0u64; N];
        for i in 0..N {
            let j = 8 * i;
            if j >= n {
                break;
            }
            let k = core::cmp::min(8, n - j);
            let mut tmp = [0u8; 8];
            tmp[..k].copy_from_slice(&buf[j..(j + k)]);
            d[i] = u64::from_le_bytes(tmp);
        }
        d
    }

    // Decode a value from bytes. If the provided slice length
    // matches the modulus length exactly (`Self::ENC_LEN`), _and_
    // the unsigned little-endian interpretation of these bytes is
    // an integer in the 0 to p-1 range, then this value is set to
    // that integer, and 0xFFFFFFFF is returned. Otherwise (wrong length,
    // or value not lower than the modulus), this value is set to zero,
    // and 0x00000000 is returned.
    pub fn set_decode_ct(&mut self, buf: &[u8]) -> u32 {
        if buf.len() != Self::ENC_LEN {
            // We cannot hide from side-channels the length of the
            // input slice, so we can return early here.
            *self = Self::ZERO;
            return 0;
        }
        let mut x = Self::decode_raw(buf);

        // Subtracting the modulus must yield a borrow; otherwise, this
        // is a non-canonical input.
        let r = (mp::borrow(&x, &Self::MODULUS) as u32).wrapping_neg();
        let m = ((r as i32) as i64) as u64;
        for i in 0..N {
            x[i] &= m;
        }

        // Convert to Montgomery representation.
        *self = Self::from_w64le(x);
        r
    }

    #[inline(always)]
    pub fn decode_ct(buf: &[u8]) -> (Self, u32) {
        let mut x = Self::ZERO;
        let r = x.set_decode_ct(buf);
        (x, r)
    }

    // Decode a value from bytes, as in `decode_ct()`; `None` is returned
    // on failure. Side-channel analysis may reveal to outsiders whether
    // the decoding succeeded or not.
    #[inline(always)]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (x, r) = Self::decode_ct(buf);
        if r != 0 {
            Some(x)
        } else {
            None
        }
    }

    /// Get a uniformly random element, using the provided random source.
    ///
    /// Random integers of `BITLEN` bits are generated until one is lower
    /// than p. The number of attempts is independent of the returned
    /// value.
    pub fn random<T: CryptoRng + RngCore>(rng: &mut T) -> Self {
        loop {
            let mut x = [0u64; N];
            for i in 0..N {
                x[i] = rng.next_u64() & Self::VMASK[i];
            }
            if mp::borrow(&x, &Self::MODULUS) != 0 {
                return Self::from_w64le(x);
            }
        }
    }
}

impl_field_ops!(GFsidh);

#[cfg(test)]
mod tests {

    use super::GFsidh;
    use crate::backend::w64::zz::{Zu, ZuWide};
    use crate::params::SidhParams;
    use crate::{CryptoRng, RngCore, RngError};
    use num_bigint::BigUint;
    use sha2::{Sha512, Digest};

    fn zint(a: &[u64]) -> BigUint {
        let mut w = vec![0u32; a.len() * 2];
        for i in 0..a.len() {
            w[2 * i] = a[i] as u32;
            w[2 * i + 1] = (a[i] >> 32) as u32;
        }
        BigUint::from_slice(&w)
    }

    fn limbs<const N: usize>(x: &BigUint) -> [u64; N] {
        let v = x.to_u64_digits();
        let mut d = [0u64; N];
        d[..v.len()].copy_from_slice(&v);
        d
    }

    fn mkrndv(vv: &mut [u8], bx: u64) {
        let mut sh = Sha512::new();
        let mut j = 0;
        while j < vv.len() {
            sh.update((bx + ((j as u64) << 40)).to_le_bytes());
            let k = core::cmp::min(64, vv.len() - j);
            vv[j..(j + k)].copy_from_slice(&sh.finalize_reset()[..k]);
            j += 64;
        }
    }

    // Deterministic random source, for tests.
    struct DRNG {
        buf: [u8; 64],
        ptr: usize,
    }

    impl DRNG {

        fn from_seed(seed: &[u8]) -> Self {
            let mut d = Self {
                buf: [0u8; 64],
                ptr: 0,
            };
            let mut sh = Sha512::new();
            sh.update(seed);
            d.buf[..].copy_from_slice(&sh.finalize());
            d
        }
    }

    impl RngCore for DRNG {

        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let len = dest.len();
            let mut off = 0;
            while off < len {
                let mut clen = 32 - self.ptr;
                if clen > (len - off) {
                    clen = len - off;
                }
                dest[off .. off + clen].copy_from_slice(
                    &self.buf[self.ptr .. self.ptr + clen]);
                self.ptr += clen;
                off += clen;
                if self.ptr == 32 {
                    let mut sh = Sha512::new();
                    sh.update(&self.buf);
                    self.buf[..].copy_from_slice(&sh.finalize());
                    self.ptr = 0;
                }
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8])
            -> Result<(), RngError>
        {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for DRNG { }

    // Random value in the redundant range [0, 2*p-1]; the first few
    // values are the edge cases 0, 1, p-1, p, p+1 and 2*p-1.
    fn mkrnd<P: SidhParams<N>, const N: usize>(bx: u64) -> GFsidh<P, N> {
        let zp = zint(&P::MODULUS);
        let one = BigUint::from(1u32);
        let zp2 = &zp << 1usize;
        let z = match bx {
            0 => BigUint::from(0u32),
            1 => one.clone(),
            2 => &zp - &one,
            3 => zp.clone(),
            4 => &zp + &one,
            5 => &zp2 - &one,
            _ => {
                let mut vv = vec![0u8; 8 * N];
                mkrndv(&mut vv, bx);
                BigUint::from_bytes_le(&vv) % &zp2
            }
        };
        GFsidh::<P, N>::from_raw(limbs(&z))
    }

    fn check_gf_ops<P: SidhParams<N>, const N: usize>() {
        let zp = zint(&P::MODULUS);
        let zp2 = &zp << 1usize;
        let zr = BigUint::from(1u32) << (64 * N);
        let zrinv = zr.modpow(&(&zp - BigUint::from(2u32)), &zp);
        let zero = BigUint::from(0u32);

        for k in 0..400u64 {
            let a = mkrnd::<P, N>(k);
            let b = mkrnd::<P, N>(k.wrapping_mul(7).wrapping_add(1000));
            let za = zint(&a.0);
            let zb = zint(&b.0);

            let c = a + b;
            let zc = zint(&c.0);
            assert!(zc < zp2);
            assert!(&zc % &zp == (&za + &zb) % &zp);

            let c = a - b;
            let zc = zint(&c.0);
            assert!(zc < zp2);
            assert!(&zc % &zp == ((&zp2 + &za) - &zb) % &zp);

            let c = -a;
            let zc = zint(&c.0);
            assert!(zc < zp2);
            assert!((&zc + &za) % &zp == zero);
            if za == zero {
                assert!(zc == zero);
            }

            let c = a.half();
            let zc = zint(&c.0);
            assert!(zc < zp2);
            assert!((&zc << 1usize) % &zp == &za % &zp);

            let c = a.correction();
            let zc = zint(&c.0);
            assert!(zc < zp);
            assert!(zc == &za % &zp);
            assert!(c.correction().0 == c.0);

            let c = a * b;
            let zc = zint(&c.0);
            assert!(zc < zp2);
            assert!(&zc % &zp == (&za * &zb * &zrinv) % &zp);

            let c = a.square();
            let d = a * a;
            assert!(c.0 == d.0);

            let c = a.mul2();
            assert!(zint(&c.0) < zp2);
            assert!(zint(&c.0) % &zp == (&za << 1usize) % &zp);
            let c = a.mul3();
            assert!(zint(&c.0) < zp2);
            assert!(zint(&c.0) % &zp == (&za * 3u32) % &zp);
            let c = a.mul4();
            assert!(zint(&c.0) < zp2);
            assert!(zint(&c.0) % &zp == (&za << 2usize) % &zp);

            let c = a.xsquare(3);
            let d = a.square().square().square();
            assert!(c.0 == d.0);

            let mut c = a;
            c += b;
            c -= b;
            c *= b;
            assert!(c.equals(a * b) == 0xFFFFFFFF);
            assert!((&a + &b).equals(a + b) == 0xFFFFFFFF);
            assert!((&a - b).equals(a - b) == 0xFFFFFFFF);
            assert!((a * &b).equals(&a * &b) == 0xFFFFFFFF);
            assert!((-&a).equals(-a) == 0xFFFFFFFF);

            // Redundant representations of the same value compare equal.
            assert!(a.equals(a.correction()) == 0xFFFFFFFF);
            assert!(a.equals(a + GFsidh::<P, N>::ONE) == 0);
            assert!((a - a).iszero() == 0xFFFFFFFF);
            let zz = (&za % &zp) == zero;
            assert!(a.iszero() == if zz { 0xFFFFFFFF } else { 0 });

            // Montgomery reduction on a double-width input below R*p.
            let mut vv = vec![0u8; 16 * N];
            mkrndv(&mut vv, k + 50000);
            let zt = BigUint::from_bytes_le(&vv) % (&zr * &zp);
            let t = ZuWide::<N>::from_halves(
                Zu::w64le(limbs(&(&zt % &zr))), Zu::w64le(limbs(&(&zt >> (64 * N)))));
            let c = GFsidh::<P, N>::montyred(&t);
            let zc = zint(&c.0);
            assert!(zc < zp2);
            assert!(&zc % &zp == (&zt * &zrinv) % &zp);
        }
    }

    fn check_gf_constants<P: SidhParams<N>, const N: usize>() {
        let zp = zint(&P::MODULUS);
        assert!(zint(&GFsidh::<P, N>::MODULUS_X2) == &zp << 1usize);
        assert!(zint(&GFsidh::<P, N>::MODULUS_P1) == &zp + BigUint::from(1u32));
        assert!(GFsidh::<P, N>::BITLEN as u64 == zp.bits());
        assert!(GFsidh::<P, N>::ENC_LEN == (GFsidh::<P, N>::BITLEN + 7) / 8);

        // ONE*ONE reproduces ONE exactly.
        let c = GFsidh::<P, N>::ONE * GFsidh::<P, N>::ONE;
        assert!(c.0 == P::MONTGOMERY_ONE);
        let c = GFsidh::<P, N>::ONE.square();
        assert!(c.0 == P::MONTGOMERY_ONE);

        // Reducing R mod p (i.e. R*1) yields exactly 1.
        let t = ZuWide::from_halves(Zu::w64le(P::MONTGOMERY_ONE), Zu::ZERO);
        let c = GFsidh::<P, N>::montyred(&t);
        let mut one = [0u64; N];
        one[0] = 1;
        assert!(c.0 == one);
        assert!(GFsidh::<P, N>::ONE.to_w64le() == one);

        // R2 converts integers into Montgomery representation.
        let c = GFsidh::<P, N>::from_u64(1);
        assert!(c.equals(GFsidh::<P, N>::ONE) == 0xFFFFFFFF);
        assert!(c.correction().0 == P::MONTGOMERY_ONE);
    }

    // Small values: 5 and 7.
    fn check_gf_small<P: SidhParams<N>, const N: usize>() {
        let mut w = [0u64; N];
        let a = GFsidh::<P, N>::from_u64(5);
        let b = GFsidh::<P, N>::from_u64(7);

        w[0] = 12;
        assert!((a + b).to_w64le() == w);
        w[0] = 35;
        assert!((a * b).to_w64le() == w);
        w[0] = 6;
        assert!((a + b).half().to_w64le() == w);

        // 5 - 7 = p - 2
        let mut pm2 = P::MODULUS;
        pm2[0] -= 2;
        assert!((a - b).to_w64le() == pm2);

        // 1/2 = (p + 1)/2
        let h = GFsidh::<P, N>::ONE.half();
        assert!(zint(&h.to_w64le())
            == (zint(&P::MODULUS) + BigUint::from(1u32)) >> 1usize);
        assert!(h.mul2().equals(GFsidh::<P, N>::ONE) == 0xFFFFFFFF);
    }

    fn check_gf_conv<P: SidhParams<N>, const N: usize>() {
        let zp = zint(&P::MODULUS);
        for k in 0..50u64 {
            let mut vv = vec![0u8; 8 * N];
            mkrndv(&mut vv, k + 70000);
            if k == 0 {
                vv.fill(0xFF);
            }
            let zx = BigUint::from_bytes_le(&vv);
            let a = GFsidh::<P, N>::from_w64le(limbs(&zx));
            assert!(zint(&a.0) < (&zp << 1usize));
            assert!(zint(&a.to_w64le()) == &zx % &zp);
        }
        let a = GFsidh::<P, N>::from_u64(0xFFFFFFFFFFFFFFFF);
        assert!(zint(&a.to_w64le()) == BigUint::from(0xFFFFFFFFFFFFFFFFu64));
    }

    fn check_gf_invert<P: SidhParams<N>, const N: usize>() {
        assert!(GFsidh::<P, N>::ZERO.invert().iszero() == 0xFFFFFFFF);
        assert!(GFsidh::<P, N>::ONE.invert().equals(GFsidh::<P, N>::ONE) == 0xFFFFFFFF);
        for k in 6..30u64 {
            let a = mkrnd::<P, N>(k);
            let b = a.invert();
            assert!(zint(&b.0) < (zint(&P::MODULUS) << 1usize));
            assert!((a * b).equals(GFsidh::<P, N>::ONE) == 0xFFFFFFFF);
        }
        // p is equivalent to zero.
        let a = mkrnd::<P, N>(3);
        assert!(a.invert().iszero() == 0xFFFFFFFF);
    }

    fn check_gf_encode<P: SidhParams<N>, const N: usize>() {
        let zp = zint(&P::MODULUS);
        let len = GFsidh::<P, N>::ENC_LEN;
        for k in 0..100u64 {
            let a = mkrnd::<P, N>(k);
            let mut buf = vec![0u8; len];
            a.encode_into(&mut buf);
            assert!(BigUint::from_bytes_le(&buf) == zint(&a.to_w64le()));
            #[cfg(feature = "alloc")]
            assert!(a.encode() == buf);
            let (b, r) = GFsidh::<P, N>::decode_ct(&buf);
            assert!(r == 0xFFFFFFFF);
            assert!(b.equals(a) == 0xFFFFFFFF);
            assert!(GFsidh::<P, N>::decode(&buf).is_some());
            assert!(GFsidh::<P, N>::decode(&buf[1..]).is_none());
        }

        // p and p-1
        let mut buf = vec![0u8; len];
        let mut vp = zp.to_bytes_le();
        vp.resize(len, 0);
        buf.copy_from_slice(&vp);
        let (b, r) = GFsidh::<P, N>::decode_ct(&buf);
        assert!(r == 0);
        assert!(b.iszero() == 0xFFFFFFFF);
        assert!(GFsidh::<P, N>::decode(&buf).is_none());
        buf[0] -= 1;
        let b = GFsidh::<P, N>::decode(&buf).unwrap();
        assert!((b + GFsidh::<P, N>::ONE).iszero() == 0xFFFFFFFF);

        // Wrong lengths.
        let (_, r) = GFsidh::<P, N>::decode_ct(&[]);
        assert!(r == 0);
        let long = vec![0u8; len + 1];
        assert!(GFsidh::<P, N>::decode(&long).is_none());
    }

    fn check_gf_random<P: SidhParams<N>, const N: usize>() {
        let zp = zint(&P::MODULUS);
        let mut rng = DRNG::from_seed(&(N as u64).to_le_bytes());
        let mut prev = GFsidh::<P, N>::ZERO;
        for _ in 0..50 {
            let a = GFsidh::<P, N>::random(&mut rng);
            assert!(zint(&a.to_w64le()) < zp);
            assert!(zint(&a.0) < (&zp << 1usize));
            assert!(a.equals(prev) == 0);
            prev = a;
        }
    }

    fn check_gf_cond<P: SidhParams<N>, const N: usize>() {
        let a = mkrnd::<P, N>(10);
        let b = mkrnd::<P, N>(11);
        assert!(GFsidh::<P, N>::select(&a, &b, 0).0 == a.0);
        assert!(GFsidh::<P, N>::select(&a, &b, 0xFFFFFFFF).0 == b.0);
        let mut c = a;
        c.set_cond(&b, 0);
        assert!(c.0 == a.0);
        c.set_cond(&b, 0xFFFFFFFF);
        assert!(c.0 == b.0);
        let (mut x, mut y) = (a, b);
        GFsidh::<P, N>::cswap(&mut x, &mut y, 0);
        assert!(x.0 == a.0 && y.0 == b.0);
        GFsidh::<P, N>::cswap(&mut x, &mut y, 0xFFFFFFFF);
        assert!(x.0 == b.0 && y.0 == a.0);
    }

    fn check_gf_all<P: SidhParams<N>, const N: usize>() {
        check_gf_constants::<P, N>();
        check_gf_small::<P, N>();
        check_gf_ops::<P, N>();
        check_gf_conv::<P, N>();
        check_gf_invert::<P, N>();
        check_gf_encode::<P, N>();
        check_gf_random::<P, N>();
        check_gf_cond::<P, N>();
    }

    #[cfg(feature = "p751")]
    #[test]
    fn gfp751() {
        check_gf_all::<crate::params::P751, 12>();
    }

    #[cfg(feature = "p964")]
    #[test]
    fn gfp964() {
        check_gf_all::<crate::params::P964, 16>();
    }

    // Out-of-range operands are caught in debug builds. The element is
    // built directly (not through from_raw(), which checks its input).
    #[cfg(feature = "p751")]
    type F751 = GFsidh<crate::params::P751, 12>;

    #[cfg(all(debug_assertions, feature = "p751"))]
    fn out_of_range() -> F751 {
        GFsidh([0xFFFFFFFFFFFFFFFF; 12], core::marker::PhantomData)
    }

    #[cfg(all(debug_assertions, feature = "p751"))]
    #[test]
    #[should_panic]
    fn gfp751_from_raw_range() {
        let _ = F751::from_raw(F751::MODULUS_X2);
    }

    #[cfg(all(debug_assertions, feature = "p751"))]
    #[test]
    #[should_panic]
    fn gfp751_sub_range() {
        let _ = F751::ONE - out_of_range();
    }

    #[cfg(all(debug_assertions, feature = "p751"))]
    #[test]
    #[should_panic]
    fn gfp751_neg_range() {
        let _ = -out_of_range();
    }

    #[cfg(all(debug_assertions, feature = "p751"))]
    #[test]
    #[should_panic]
    fn gfp751_half_range() {
        let _ = out_of_range().half();
    }

    // Reducer input with a high half equal to p (t >= R*p).
    #[cfg(all(debug_assertions, feature = "p751"))]
    #[test]
    #[should_panic]
    fn gfp751_montyred_range() {
        let t = ZuWide::from_halves(Zu::ZERO, Zu(F751::MODULUS));
        let _ = F751::montyred(&t);
    }

    // Largest accepted values pass the checks.
    #[cfg(feature = "p751")]
    #[test]
    fn gfp751_range_limit() {
        let mut x = F751::MODULUS_X2;
        x[0] -= 1;
        let a = F751::from_raw(x);
        let b = (a - F751::ONE) + F751::ONE;
        assert!(a.equals(b) == 0xFFFFFFFF);
        assert!((-a).equals(F751::ZERO - a) == 0xFFFFFFFF);
        assert!(a.half().mul2().equals(a) == 0xFFFFFFFF);
        let mut y = F751::MODULUS;
        y[11] -= 1;
        let t = ZuWide::from_halves(Zu([0xFFFFFFFFFFFFFFFF; 12]), Zu(y));
        let r = F751::montyred(&t);
        assert!(crate::backend::w64::mp::borrow(&r.0, &F751::MODULUS_X2) == 1);
    }

    #[cfg(all(feature = "zeroize", feature = "p751"))]
    #[test]
    fn gfp751_zeroize() {
        use zeroize::Zeroize;

        let mut a = F751::from_u64(12345);
        assert!(a.iszero() == 0);
        a.zeroize();
        assert!(a.iszero() == 0xFFFFFFFF);
        assert!(a.to_raw() == [0u64; 12]);
    }
}
