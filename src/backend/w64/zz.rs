use core::convert::TryFrom;

use super::{karatsuba, mac, mp};

/// A custom fixed-width unsigned integer (`N` limbs of 64 bits), with
/// constant-time operations.
///
/// This is the plain (non-modular) integer layer below the field
/// elements: additions and subtractions return their carry or borrow
/// (0 or 1), and multiplications return the exact double-width product
/// as a `ZuWide<N>`.
///
/// The limb count `N` must be between 1 and 32 (inclusive); other
/// values are rejected at compile time when an arithmetic function is
/// used.
#[derive(Clone, Copy, Debug)]
pub struct Zu<const N: usize>(pub(crate) [u64; N]);

/// A double-width unsigned integer (`2*N` limbs of 64 bits), typically
/// the product of two `Zu<N>` values before Montgomery reduction.
///
/// The value is stored as two `N`-limb halves, low half first; the
/// in-memory order is thus the plain little-endian order of `2*N`
/// limbs.
#[derive(Clone, Copy, Debug)]
pub struct ZuWide<const N: usize>(pub(crate) [[u64; N]; 2]);

impl<const N: usize> Zu<N> {

    pub const ZERO: Self = Self([0u64; N]);

    // Evaluated when an arithmetic function is instantiated; limb
    // counts outside of [1, MAX_LIMBS] fail to compile.
    pub(crate) const CHECK: () = assert!(N >= 1 && N <= karatsuba::MAX_LIMBS);

    /// Encoding length (in bytes).
    pub const ENC_LEN: usize = 8 * N;

    /// Build a value from its limbs, in little-endian order (least
    /// significant limb first).
    #[inline(always)]
    pub const fn w64le(x: [u64; N]) -> Self {
        Self(x)
    }

    /// Get the limbs of this value, in little-endian order.
    #[inline(always)]
    pub const fn to_w64le(self) -> [u64; N] {
        self.0
    }

    /// Return `(self + b) mod 2^(64*N)` and the carry (0 or 1).
    #[inline]
    pub fn add(self, b: &Self) -> (Self, u8) {
        let () = Self::CHECK;
        let mut d = Self::ZERO;
        let cc = mp::add(&mut d.0, &self.0, &b.0);
        (d, cc)
    }

    /// Return `(self - b) mod 2^(64*N)` and the borrow (0 or 1). A borrow
    /// of 1 means that the true difference is negative.
    #[inline]
    pub fn sub(self, b: &Self) -> (Self, u8) {
        let () = Self::CHECK;
        let mut d = Self::ZERO;
        let cc = mp::sub(&mut d.0, &self.0, &b.0);
        (d, cc)
    }

    /// Logical right shift by one bit.
    #[inline]
    pub fn shr1(self) -> Self {
        let () = Self::CHECK;
        let mut d = self;
        mp::shr1(&mut d.0, 0);
        d
    }

    /// Exact product `self*b`, computed with the Karatsuba multiplier.
    #[inline]
    pub fn mul_wide(self, b: &Self) -> ZuWide<N> {
        let () = Self::CHECK;
        let mut d = ZuWide::<N>::ZERO;
        karatsuba::mul(d.0.as_flattened_mut(), &self.0, &b.0);
        d
    }

    /// Exact square of this value. The result is identical to
    /// `self.mul_wide(&self)`, but fewer limb products are computed.
    #[inline]
    pub fn square_wide(self) -> ZuWide<N> {
        let () = Self::CHECK;
        let mut d = ZuWide::<N>::ZERO;
        karatsuba::square(d.0.as_flattened_mut(), &self.0);
        d
    }

    /// Exact product `self*b`, computed with the quadratic schoolbook
    /// method. This is slower than `mul_wide()`, and meant as a reference.
    pub fn mul_schoolbook(self, b: &Self) -> ZuWide<N> {
        let () = Self::CHECK;
        let mut d = ZuWide::<N>::ZERO;
        mac::mul_schoolbook(d.0.as_flattened_mut(), &self.0, &b.0);
        d
    }

    /// Return 0xFFFFFFFF if this value is zero, 0x00000000 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        mp::iszero(&self.0)
    }

    /// Encode this value over exactly `8*N` bytes (unsigned little-endian
    /// convention). The destination slice must have length `8*N`.
    pub fn encode_into(self, dst: &mut [u8]) {
        assert!(dst.len() == Self::ENC_LEN);
        for i in 0..N {
            dst[(8 * i)..(8 * i + 8)].copy_from_slice(&self.0[i].to_le_bytes());
        }
    }

    /// Decode a value from exactly `8*N` bytes (unsigned little-endian
    /// convention). If the source slice does not have the right length,
    /// then `None` is returned.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() != Self::ENC_LEN {
            return None;
        }
        let mut x = Self::ZERO;
        for i in 0..N {
            x.0[i] = u64::from_le_bytes(*<&[u8; 8]>::try_from(
                &buf[(8 * i)..(8 * i + 8)]).ok()?);
        }
        Some(x)
    }
}

impl<const N: usize> ZuWide<N> {

    pub const ZERO: Self = Self([[0u64; N]; 2]);

    /// Build a double-width value from its low and high halves.
    #[inline(always)]
    pub const fn from_halves(lo: Zu<N>, hi: Zu<N>) -> Self {
        Self([lo.0, hi.0])
    }

    /// Get the low half (limbs `0` to `N-1`).
    #[inline(always)]
    pub const fn lo(self) -> Zu<N> {
        Zu(self.0[0])
    }

    /// Get the high half (limbs `N` to `2*N-1`).
    #[inline(always)]
    pub const fn hi(self) -> Zu<N> {
        Zu(self.0[1])
    }

    /// Get the `2*N` limbs, in little-endian order.
    #[inline(always)]
    pub fn as_limbs(&self) -> &[u64] {
        self.0.as_flattened()
    }

    /// Return `(self + b) mod 2^(128*N)` and the carry (0 or 1).
    #[inline]
    pub fn add(self, b: &Self) -> (Self, u8) {
        let () = Zu::<N>::CHECK;
        let mut d = Self::ZERO;
        let cc = mp::add(d.0.as_flattened_mut(),
            self.0.as_flattened(), b.0.as_flattened());
        (d, cc)
    }

    /// Return `(self - b) mod 2^(128*N)` and the borrow (0 or 1).
    #[inline]
    pub fn sub(self, b: &Self) -> (Self, u8) {
        let () = Zu::<N>::CHECK;
        let mut d = Self::ZERO;
        let cc = mp::sub(d.0.as_flattened_mut(),
            self.0.as_flattened(), b.0.as_flattened());
        (d, cc)
    }

    /// Return 0xFFFFFFFF if this value is zero, 0x00000000 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        mp::iszero(self.0.as_flattened())
    }
}

#[cfg(feature = "zeroize")]
impl<const N: usize> Default for Zu<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(feature = "zeroize")]
impl<const N: usize> zeroize::DefaultIsZeroes for Zu<N> { }

#[cfg(feature = "zeroize")]
impl<const N: usize> Default for ZuWide<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(feature = "zeroize")]
impl<const N: usize> zeroize::DefaultIsZeroes for ZuWide<N> { }
