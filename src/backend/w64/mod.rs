// Multi-precision layers, leaf first:
//  - mp: carry-chain addition and subtraction over limb slices
//  - mac: schoolbook multiply-accumulate (scalar and dual-lane)
//  - karatsuba: recursive multiplication and squaring
//  - montyred: Montgomery reduction specialized to p = 2^a*3^b - 1
// All of them work on little-endian slices of 64-bit limbs whose lengths
// are fixed by the calling types. They are exposed through the fixed-width
// integer types (zz) and the field types (gfsidh, gf2sidh).

// Implementations of all the traits needed to use the simple operators
// (+, -, *) on field element instances, with or without references. The
// type must provide set_add(), set_sub(), set_mul() and set_neg().
macro_rules! impl_field_ops { ($typename:ident) => {

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Add<$typename<P, N>> for $typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn add(self, other: $typename<P, N>) -> $typename<P, N> {
            let mut r = self;
            r.set_add(&other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Add<&$typename<P, N>> for $typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn add(self, other: &$typename<P, N>) -> $typename<P, N> {
            let mut r = self;
            r.set_add(other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Add<$typename<P, N>> for &$typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn add(self, other: $typename<P, N>) -> $typename<P, N> {
            let mut r = *self;
            r.set_add(&other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Add<&$typename<P, N>> for &$typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn add(self, other: &$typename<P, N>) -> $typename<P, N> {
            let mut r = *self;
            r.set_add(other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::AddAssign<$typename<P, N>> for $typename<P, N>
    {
        #[inline(always)]
        fn add_assign(&mut self, other: $typename<P, N>) {
            self.set_add(&other);
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::AddAssign<&$typename<P, N>> for $typename<P, N>
    {
        #[inline(always)]
        fn add_assign(&mut self, other: &$typename<P, N>) {
            self.set_add(other);
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Mul<$typename<P, N>> for $typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn mul(self, other: $typename<P, N>) -> $typename<P, N> {
            let mut r = self;
            r.set_mul(&other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Mul<&$typename<P, N>> for $typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn mul(self, other: &$typename<P, N>) -> $typename<P, N> {
            let mut r = self;
            r.set_mul(other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Mul<$typename<P, N>> for &$typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn mul(self, other: $typename<P, N>) -> $typename<P, N> {
            let mut r = *self;
            r.set_mul(&other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Mul<&$typename<P, N>> for &$typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn mul(self, other: &$typename<P, N>) -> $typename<P, N> {
            let mut r = *self;
            r.set_mul(other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::MulAssign<$typename<P, N>> for $typename<P, N>
    {
        #[inline(always)]
        fn mul_assign(&mut self, other: $typename<P, N>) {
            self.set_mul(&other);
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::MulAssign<&$typename<P, N>> for $typename<P, N>
    {
        #[inline(always)]
        fn mul_assign(&mut self, other: &$typename<P, N>) {
            self.set_mul(other);
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Neg for $typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn neg(self) -> $typename<P, N> {
            let mut r = self;
            r.set_neg();
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Neg for &$typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn neg(self) -> $typename<P, N> {
            let mut r = *self;
            r.set_neg();
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Sub<$typename<P, N>> for $typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn sub(self, other: $typename<P, N>) -> $typename<P, N> {
            let mut r = self;
            r.set_sub(&other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Sub<&$typename<P, N>> for $typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn sub(self, other: &$typename<P, N>) -> $typename<P, N> {
            let mut r = self;
            r.set_sub(other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Sub<$typename<P, N>> for &$typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn sub(self, other: $typename<P, N>) -> $typename<P, N> {
            let mut r = *self;
            r.set_sub(&other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::Sub<&$typename<P, N>> for &$typename<P, N>
    {
        type Output = $typename<P, N>;

        #[inline(always)]
        fn sub(self, other: &$typename<P, N>) -> $typename<P, N> {
            let mut r = *self;
            r.set_sub(other);
            r
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::SubAssign<$typename<P, N>> for $typename<P, N>
    {
        #[inline(always)]
        fn sub_assign(&mut self, other: $typename<P, N>) {
            self.set_sub(&other);
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        core::ops::SubAssign<&$typename<P, N>> for $typename<P, N>
    {
        #[inline(always)]
        fn sub_assign(&mut self, other: &$typename<P, N>) {
            self.set_sub(other);
        }
    }

    impl<P: $crate::params::SidhParams<N>, const N: usize>
        Default for $typename<P, N>
    {
        #[inline(always)]
        fn default() -> Self {
            Self::ZERO
        }
    }

    #[cfg(feature = "zeroize")]
    impl<P: $crate::params::SidhParams<N>, const N: usize>
        zeroize::DefaultIsZeroes for $typename<P, N> { }

} } // End of macro: impl_field_ops

pub(crate) mod mp;
pub(crate) mod mac;
pub(crate) mod karatsuba;
pub(crate) mod montyred;

pub mod zz;
pub use zz::{Zu, ZuWide};

pub mod gfsidh;
pub use gfsidh::GFsidh;

pub mod gf2sidh;
pub use gf2sidh::GF2sidh;

// Carrying addition and subtraction should use u64::carrying_add()
// and u64::borrowing_sub(), but these functions are currently only
// experimental.

// Add with carry; carry is 0 or 1.
// (x, y, c_in) -> x + y + c_in mod 2^64, c_out

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub(crate) fn addcarry_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    use core::arch::x86_64::_addcarry_u64;
    unsafe {
        let mut d = 0u64;
        let cc = _addcarry_u64(c, x, y, &mut d);
        (d, cc)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub(crate) const fn addcarry_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    let z = (x as u128).wrapping_add(y as u128).wrapping_add(c as u128);
    (z as u64, (z >> 64) as u8)
}

// Subtract with borrow; borrow is 0 or 1.
// (x, y, c_in) -> x - y - c_in mod 2^64, c_out

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub(crate) fn subborrow_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    use core::arch::x86_64::_subborrow_u64;
    unsafe {
        let mut d = 0u64;
        let cc = _subborrow_u64(c, x, y, &mut d);
        (d, cc)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub(crate) const fn subborrow_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    let z = (x as u128).wrapping_sub(y as u128).wrapping_sub(c as u128);
    (z as u64, (z >> 127) as u8)
}

// Compute x*y over 128 bits, returned as two 64-bit words (lo, hi)
#[inline(always)]
pub(crate) const fn umull(x: u64, y: u64) -> (u64, u64) {
    let z = (x as u128) * (y as u128);
    (z as u64, (z >> 64) as u64)
}

// Compute x*y+z over 128 bits, returned as two 64-bit words (lo, hi)
#[inline(always)]
pub(crate) const fn umull_add(x: u64, y: u64, z: u64) -> (u64, u64) {
    let t = ((x as u128) * (y as u128)).wrapping_add(z as u128);
    (t as u64, (t >> 64) as u64)
}

// Compute x*y+z1+z2 over 128 bits, returned as two 64-bit words (lo, hi)
#[inline(always)]
pub(crate) const fn umull_add2(x: u64, y: u64, z1: u64, z2: u64) -> (u64, u64) {
    let t = ((x as u128) * (y as u128))
        .wrapping_add(z1 as u128).wrapping_add(z2 as u128);
    (t as u64, (t >> 64) as u64)
}

// Expand a carry or borrow (0 or 1) into a full-width mask (0 or
// 0xFFFFFFFFFFFFFFFF).
#[inline(always)]
pub(crate) const fn cmask(c: u8) -> u64 {
    (c as u64).wrapping_neg()
}

// Compile-time computations on limb arrays, used to derive the constants
// of each parameter set and to check values in debug builds. These
// functions are not constant-time; they must be used only on public
// values.

// (a + b) mod 2^(64*N), with the carry dropped.
pub(crate) const fn const_add<const N: usize>(a: [u64; N], b: [u64; N])
    -> [u64; N]
{
    let mut d = [0u64; N];
    let mut cc = 0u128;
    let mut i = 0;
    while i < N {
        let z = (a[i] as u128) + (b[i] as u128) + cc;
        d[i] = z as u64;
        cc = z >> 64;
        i += 1;
    }
    d
}

// (a - b) mod 2^(64*N), with the borrow dropped.
pub(crate) const fn const_sub<const N: usize>(a: [u64; N], b: [u64; N])
    -> [u64; N]
{
    let mut d = [0u64; N];
    let mut cc = 0u128;
    let mut i = 0;
    while i < N {
        let z = (a[i] as u128).wrapping_sub(b[i] as u128).wrapping_sub(cc);
        d[i] = z as u64;
        cc = z >> 127;
        i += 1;
    }
    d
}

// Returns true if a < b.
pub(crate) const fn const_lt<const N: usize>(a: &[u64; N], b: &[u64; N])
    -> bool
{
    let mut i = N;
    while i > 0 {
        i -= 1;
        if a[i] != b[i] {
            return a[i] < b[i];
        }
    }
    false
}

// Small integer as an N-limb array.
pub(crate) const fn const_small<const N: usize>(x: u64) -> [u64; N] {
    let mut d = [0u64; N];
    d[0] = x;
    d
}

// Number of low limbs of value zero.
pub(crate) const fn const_zero_words<const N: usize>(a: [u64; N]) -> usize {
    let mut i = 0;
    while i < N && a[i] == 0 {
        i += 1;
    }
    i
}

// Mask of the `bitlen` low bits, over N limbs.
pub(crate) const fn const_low_mask<const N: usize>(bitlen: usize) -> [u64; N] {
    let mut d = [0u64; N];
    let mut i = 0;
    while i < N {
        if bitlen >= 64 * (i + 1) {
            d[i] = 0xFFFFFFFFFFFFFFFF;
        } else if bitlen > 64 * i {
            d[i] = (1u64 << (bitlen - 64 * i)) - 1;
        }
        i += 1;
    }
    d
}

// Exact bit length of the integer.
pub(crate) const fn const_bitlen<const N: usize>(a: [u64; N]) -> usize {
    let mut i = N;
    while i > 0 {
        if a[i - 1] != 0 {
            return 64 * i - (a[i - 1].leading_zeros() as usize);
        }
        i -= 1;
    }
    0
}
