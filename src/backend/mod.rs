//! Architecture-specific implementations of finite fields.
//!
//! This module provides the types that implement the fields modulo
//! p = 2^a\*3^b - 1 and their quadratic extensions. Each type is generic
//! over a parameter bundle `P` and a limb count `N` (see `SidhParams`);
//! the `field` module defines aliases for the supported parameter sets.
//! A single 64-bit backend is provided.
//!
//! In general, the following properties apply to field implementations:
//!
//!  - An instance encapsulates a field element, in Montgomery
//!    representation. The internal value is in the redundant range
//!    [0, 2\*p-1]; it is brought to [0, p-1] by `set_correction()`
//!    (or `correction()`, which returns a new instance).
//!
//!  - The constant values `Self::ZERO` and `Self::ONE` contain the
//!    elements of value 0 and 1, respectively.
//!
//!  - Usual arithmetic operators can be used on field elements (`+`, `-`,
//!    `*`, and the compound assignments `+=`, `-=` and `*=`). Operators
//!    can use both the raw types, and references thereof.
//!
//!  - Function `set_square(&mut self)` squares a field element (in place).
//!    Corresponding function `square(self) -> Self` returns the result
//!    as a new instance. These functions are somewhat faster than general
//!    multiplications, and return exactly the same internal value as a
//!    multiplication of the element by itself. Sequences of multiple
//!    squarings can be performed with `set_xsquare(&mut self, n: u32)`
//!    (and a corresponding `xsquare()` to get the result as a new
//!    instance).
//!
//!  - Function `set_neg(&mut self)` negates the instance on which it is
//!    applied. Function `set_half(&mut self)` divides it by 2.
//!
//!  - Function `set_cond(&mut self, a: &Self, ctl: u32)` sets
//!    the instance to the value of the other instance `a` if `ctl` is
//!    equal to 0xFFFFFFFF, or leaves the instance value unmodified if
//!    `ctl` is equal to 0x00000000.
//!
//!  - Function `select(a0: &Self, a1: &Self, ctl: u32) -> Self` returns
//!    a copy of `a0` if `ctl` is 0x00000000, or a copy of `a1` if
//!    `ctl` is 0xFFFFFFFF.
//!
//!  - Function `cswap(a: &mut Self, b: &mut Self, ctl: u32)`
//!    exchanges the contents of `a` and `b` if `ctl` is 0xFFFFFFFF,
//!    or leaves them unmodified if `ctl` is 0x00000000.
//!
//!  - Function `equals(self, rhs: Self) -> u32` returns 0xFFFFFFFF
//!    if `self` and `rhs` represent the same value, or 0x00000000
//!    otherwise. Function `iszero(self) -> u32` is a specialized
//!    subcase that compares `self` with zero. Both functions normalize
//!    their operands first.
//!
//!  - Function `invert(self) -> Self` returns the inverse of the
//!    element (the "inverse" of zero is zero).
//!
//!  - Function `encode_into(self, dst: &mut [u8])` encodes an element
//!    as exactly `Self::ENC_LEN` bytes. Unsigned little-endian convention
//!    is used; encoding is always canonical. With the `alloc` feature,
//!    `encode(self) -> Vec<u8>` returns the encoding as a new vector.
//!
//!  - Function `decode_ct(buf: &[u8]) -> (Self, u32)` decodes some bytes
//!    with little-endian convention. If the source slice does not have
//!    length exactly `Self::ENC_LEN`, or if it encodes a non-canonical
//!    value, then the decoding fails. On success, the decoded value and
//!    0xFFFFFFFF are returned; on failure, zero and 0x00000000 are
//!    returned. Function `decode(buf: &[u8]) -> Option<Self>` is a
//!    variant which returns `None` on failure.
//!
//! The base field type additionally provides the raw fixed-width
//! interface: `from_raw()` and `to_raw()` access the internal limbs,
//! and `montyred()` applies a Montgomery reduction to a double-width
//! integer (`ZuWide`), such as a product obtained with `Zu::mul_wide()`.

#[cfg(not(any(
    feature = "w64_backend",
    target_pointer_width = "32",
    target_pointer_width = "64",
)))]
compile_error!("no backend specified; cannot infer from pointer size");

pub mod w64;

/// Fixed-width unsigned integer over `N` limbs of 64 bits.
pub type Zu<const N: usize> = w64::Zu<N>;

/// Double-width unsigned integer (`2*N` limbs of 64 bits).
pub type ZuWide<const N: usize> = w64::ZuWide<N>;

/// Finite field: integers modulo p = 2^a\*3^b - 1, with parameters `P`
/// over `N` limbs of 64 bits.
///
/// This type implements `set_mul2()`, `set_mul3()` and `set_mul4()`
/// (and the corresponding `mul2()`, `mul3()` and `mul4()`).
pub type GFsidh<P, const N: usize> = w64::GFsidh<P, N>;

/// Quadratic extension GF(p^2) = GF(p)\[i\], with i^2 = -1.
pub type GF2sidh<P, const N: usize> = w64::GF2sidh<P, N>;
