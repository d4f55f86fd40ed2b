use super::cmask;
use super::gfsidh::GFsidh;
use super::mp;
use super::zz::Zu;
use crate::params::SidhParams;

#[cfg(feature = "alloc")]
use crate::Vec;

/// Element of GF(p^2), defined as GF(p)\[i\] with i^2 = -1.
///
/// An element x0 + x1*i is stored as its two coordinates, each a
/// `GFsidh` value in the redundant range [0, 2*p-1].
#[derive(Clone, Copy, Debug)]
pub struct GF2sidh<P: SidhParams<N>, const N: usize>([GFsidh<P, N>; 2]);

impl<P: SidhParams<N>, const N: usize> GF2sidh<P, N> {

    pub const ZERO: Self = Self([ GFsidh::ZERO, GFsidh::ZERO ]);
    pub const ONE: Self = Self([ GFsidh::ONE, GFsidh::ZERO ]);
    pub const I: Self = Self([ GFsidh::ZERO, GFsidh::ONE ]);

    // Element encoded length, in bytes (x0, then x1).
    pub const ENC_LEN: usize = 2 * GFsidh::<P, N>::ENC_LEN;

    #[inline(always)]
    pub const fn from_components(x0: GFsidh<P, N>, x1: GFsidh<P, N>) -> Self {
        Self([ x0, x1 ])
    }

    // Get x0 and x1 such that self = x0 + x1*i
    #[inline(always)]
    pub fn to_components(self) -> (GFsidh<P, N>, GFsidh<P, N>) {
        (self.0[0], self.0[1])
    }

    #[inline(always)]
    pub fn set_add(&mut self, rhs: &Self) {
        self.0[0] += rhs.0[0];
        self.0[1] += rhs.0[1];
    }

    #[inline(always)]
    pub fn set_sub(&mut self, rhs: &Self) {
        self.0[0] -= rhs.0[0];
        self.0[1] -= rhs.0[1];
    }

    #[inline(always)]
    pub fn set_neg(&mut self) {
        self.0[0].set_neg();
        self.0[1].set_neg();
    }

    #[inline(always)]
    pub fn set_half(&mut self) {
        self.0[0].set_half();
        self.0[1].set_half();
    }

    #[inline(always)]
    pub fn half(self) -> Self {
        let mut r = self;
        r.set_half();
        r
    }

    // Normalize both coordinates into [0, p-1].
    #[inline(always)]
    pub fn set_correction(&mut self) {
        self.0[0].set_correction();
        self.0[1].set_correction();
    }

    #[inline(always)]
    pub fn correction(self) -> Self {
        let mut r = self;
        r.set_correction();
        r
    }

    #[inline(always)]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        self.0[0].set_cond(&a.0[0], ctl);
        self.0[1].set_cond(&a.0[1], ctl);
    }

    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    #[inline(always)]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        GFsidh::cswap(&mut a.0[0], &mut b.0[0], ctl);
        GFsidh::cswap(&mut a.0[1], &mut b.0[1], ctl);
    }

    #[inline]
    pub fn set_mul(&mut self, rhs: &Self) {
        // (a0 + a1*i)*(b0 + b1*i)
        //  = (a0*b0 - a1*b1) + i*((a0 + a1)*(b0 + b1) - a0*b0 - a1*b1)
        //
        // The three products are computed over plain integers, and only
        // two Montgomery reductions are performed. Since all coordinates
        // are lower than 2*p:
        //  - a0 + a1 and b0 + b1 are lower than 4*p < R;
        //  - a0*b1 + a1*b0 < 8*p^2 < R*p;
        //  - a0*b0 - a1*b1 is in ]-4*p^2, 4*p^2[; when negative, p*R is
        //    added, which keeps the result below R*p.
        let a0 = Zu(self.0[0].0);
        let a1 = Zu(self.0[1].0);
        let b0 = Zu(rhs.0[0].0);
        let b1 = Zu(rhs.0[1].0);
        let (t1, c1) = a0.add(&a1);
        let (t2, c2) = b0.add(&b1);
        debug_assert!(c1 == 0 && c2 == 0);

        let tt1 = a0.mul_wide(&b0);
        let tt2 = a1.mul_wide(&b1);
        let (tt3, b3) = t1.mul_wide(&t2).sub(&tt1);
        let (tt3, b4) = tt3.sub(&tt2);
        debug_assert!(b3 == 0 && b4 == 0);

        let (mut tt1, bb) = tt1.sub(&tt2);
        mp::cond_add_assign(&mut tt1.0[1], &GFsidh::<P, N>::MODULUS, cmask(bb));

        self.0[0] = GFsidh::<P, N>::montyred(&tt1);
        self.0[1] = GFsidh::<P, N>::montyred(&tt3);
    }

    #[inline]
    pub fn set_square(&mut self) {
        // (a0 + a1*i)^2 = (a0 + a1)*(a0 - a1) + i*(2*a0*a1)
        let (a0, a1) = (self.0[0], self.0[1]);
        self.0[0] = (a0 + a1) * (a0 - a1);
        self.0[1] = a0.mul2() * a1;
    }

    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    #[inline(always)]
    pub fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    // Multiply this value by an element of GF(p).
    #[inline]
    pub fn set_mul_gf(&mut self, rhs: &GFsidh<P, N>) {
        self.0[0] *= rhs;
        self.0[1] *= rhs;
    }

    #[inline]
    pub fn mul_gf(self, rhs: &GFsidh<P, N>) -> Self {
        let mut r = self;
        r.set_mul_gf(rhs);
        r
    }

    // Invert this value; the inverse of zero is zero.
    pub fn set_invert(&mut self) {
        // 1/(a0 + a1*i) = (a0 - a1*i)/(a0^2 + a1^2)
        let (a0, a1) = (self.0[0], self.0[1]);
        let t = (a0.square() + a1.square()).invert();
        self.0[0] = a0 * t;
        self.0[1] = -(a1 * t);
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        self.0[0].equals(rhs.0[0]) & self.0[1].equals(rhs.0[1])
    }

    #[inline]
    pub fn iszero(self) -> u32 {
        self.0[0].iszero() & self.0[1].iszero()
    }

    /// Encode this element into exactly `ENC_LEN` bytes: the canonical
    /// encoding of x0, followed by that of x1.
    pub fn encode_into(self, dst: &mut [u8]) {
        assert!(dst.len() == Self::ENC_LEN);
        let (d0, d1) = dst.split_at_mut(GFsidh::<P, N>::ENC_LEN);
        self.0[0].encode_into(d0);
        self.0[1].encode_into(d1);
    }

    #[cfg(feature = "alloc")]
    pub fn encode(self) -> Vec<u8> {
        let mut d = vec![0u8; Self::ENC_LEN];
        self.encode_into(&mut d);
        d
    }

    // Decode an element from exactly `ENC_LEN` bytes. Both coordinates
    // must be canonical. On success, the element and 0xFFFFFFFF are
    // returned; on failure, zero and 0x00000000 are returned.
    pub fn decode_ct(buf: &[u8]) -> (Self, u32) {
        if buf.len() != Self::ENC_LEN {
            return (Self::ZERO, 0);
        }
        let (b0, b1) = buf.split_at(GFsidh::<P, N>::ENC_LEN);
        let (x0, r0) = GFsidh::<P, N>::decode_ct(b0);
        let (x1, r1) = GFsidh::<P, N>::decode_ct(b1);
        let r = r0 & r1;
        let mut x = Self::ZERO;
        x.set_cond(&Self([ x0, x1 ]), r);
        (x, r)
    }

    #[inline(always)]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (x, r) = Self::decode_ct(buf);
        if r != 0 {
            Some(x)
        } else {
            None
        }
    }
}

impl_field_ops!(GF2sidh);
