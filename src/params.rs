//! Parameter bundles for primes p = 2^a*3^b - 1.
//!
//! A parameter bundle is a zero-sized type that implements the
//! `SidhParams<N>` trait, where `N` is the number of 64-bit limbs of
//! field elements. The bundle provides the exponents `a` and `b`, the
//! modulus itself, and two Montgomery constants. All other constants
//! (2*p, p + 1, bit length, encoded length...) are derived at compile
//! time by the field types.
//!
//! The following conditions are required from a bundle, and checked at
//! compile time when a field type is instantiated:
//!
//!  - the low limb of the modulus is 0xFFFFFFFFFFFFFFFF (i.e. `a >= 64`);
//!
//!  - `16*p < 2^(64*N)` (headroom for lazy reductions in GF(p^2));
//!
//!  - `N` is not larger than 32.
//!
//! Stored values `MONTGOMERY_R2` and `MONTGOMERY_ONE` are not checked at
//! compile time; the test suite recomputes them.

/// Parameters for a prime p = 2^a*3^b - 1, over `N` limbs of 64 bits.
pub trait SidhParams<const N: usize>: Clone + Copy + core::fmt::Debug {

    /// Exponent of 2 in p + 1.
    const EXP2: u32;

    /// Exponent of 3 in p + 1.
    const EXP3: u32;

    /// The modulus p (64-bit limbs, little-endian order).
    const MODULUS: [u64; N];

    /// R^2 mod p, with R = 2^(64*N).
    const MONTGOMERY_R2: [u64; N];

    /// R mod p, i.e. the Montgomery representation of 1.
    const MONTGOMERY_ONE: [u64; N];
}

/// Parameters for p751 = 2^372*3^239 - 1 (12 limbs).
#[cfg(feature = "p751")]
#[derive(Clone, Copy, Debug)]
pub struct P751;

#[cfg(feature = "p751")]
impl SidhParams<12> for P751 {
    const EXP2: u32 = 372;
    const EXP3: u32 = 239;

    const MODULUS: [u64; 12] = [
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xEEAFFFFFFFFFFFFF,
        0xE3EC968549F878A8, 0xDA959B1A13F7CC76,
        0x084E9867D6EBE876, 0x8562B5045CB25748,
        0x0E12909F97BADC66, 0x00006FE5D541F71C,
    ];

    const MONTGOMERY_R2: [u64; 12] = [
        0x233046449DAD4058, 0xDB010161A696452A,
        0x5E36941472E3FD8E, 0xF40BFE2082A2E706,
        0x4932CCA8904F8751, 0x1F735F1F1EE7FC81,
        0xA24F4D80C1048E18, 0xB56C383CCDB607C5,
        0x441DD47B735F9C90, 0x5673ED2C6A6AC82A,
        0x06C905261132294B, 0x000041AD830F1F35,
    ];

    const MONTGOMERY_ONE: [u64; 12] = [
        0x00000000000249AD, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x8310000000000000,
        0x5527B1E4375C6C66, 0x697797BF3F4F24D0,
        0xC89DB7B2AC5C4E2E, 0x4CA4B439D2076956,
        0x10F7926C7512C7E9, 0x00002D5B24BCE5E2,
    ];
}

/// Parameters for p964 = 2^486*3^301 - 1 (16 limbs).
#[cfg(feature = "p964")]
#[derive(Clone, Copy, Debug)]
pub struct P964;

#[cfg(feature = "p964")]
impl SidhParams<16> for P964 {
    const EXP2: u32 = 486;
    const EXP3: u32 = 301;

    const MODULUS: [u64; 16] = [
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0x451CD4BFFFFFFFFF,
        0xABB38EAB467ACDE5, 0xE56EF6AA57A94749,
        0x093F2B8DAD5281E7, 0xCBAB245135469BAB,
        0x50CBAA75A2A1FA44, 0x10028248AD4FC4B1,
        0x6B5BFF7643C64F7A, 0x0000000000000008,
    ];

    const MONTGOMERY_R2: [u64; 16] = [
        0x49BEAB58E287A9F1, 0x86A242D12EA5A11A,
        0xB12512C92DD30800, 0x83D81C6BF9BC092E,
        0x5AFA951F0F780370, 0x36BAB97634D25944,
        0x130638EF637CB27F, 0x0CDB7689C4452519,
        0xEF58B1B27E0542F8, 0x6109A63CB14FD223,
        0x7E60914AB79A734B, 0x282640CE02415051,
        0x8E76DB8220153984, 0xDE7F01881434E82D,
        0xB0AA8606EF7C00DE, 0x0000000000000006,
    ];

    const MONTGOMERY_ONE: [u64; 16] = [
        0x1E67F3F78730D81B, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x3E738FC000000000,
        0x0A21FE854AE027A8, 0x853FB7B621CC75C3,
        0xDB8515C38E354F0C, 0x6232C1D569A850B5,
        0x377C1534E2EF4915, 0x964EE9BA62138CAD,
        0xE011B4007E0E88AA, 0x0000000000000004,
    ];
}
