//! Sikefp is a Rust library for arithmetic in the finite fields used by
//! isogeny-based key encapsulation (SIKE-style parameter sets).
//!
//! This library implements computations modulo primes of the special form
//! p = 2^a\*3^b - 1, and in the quadratic extension GF(p^2) = GF(p)\[i\]
//! (with i^2 = -1). Two parameter sets are provided: p751 = 2^372\*3^239 - 1
//! (12 limbs of 64 bits) and p964 = 2^486\*3^301 - 1 (16 limbs). The
//! field types are generic over a parameter bundle (see the `params`
//! module), so that other primes of the same shape can be supported by
//! defining a new bundle.
//!
//! Field elements use the Montgomery representation, and a redundant
//! range: stored values are integers in [0, 2\*p-1], and a full reduction
//! to [0, p-1] happens only on explicit correction, comparison and
//! encoding. Multiplications use a Karatsuba multiplier on top of
//! schoolbook base cases, followed by a Montgomery reduction that skips
//! the zero low limbs of p + 1.
//!
//! The curve and isogeny layers, and the key encapsulation protocol, are
//! not part of this library.
//!
//! # Usage
//!
//! The library is `no_std`. By default, it compiles against the standard
//! library, which is used only by the `Vec`-returning encoding helpers.
//! Parameter sets are selected with the `p751` and `p964` features (both
//! are enabled by default, through `omnes`).
//!
//! # Conventions
//!
//! All implemented functions should be strictly constant-time, unless
//! explicitly documented otherwise. In order to avoid unwanted
//! side-channel leaks, Booleans are avoided (compilers tend to "optimize"
//! things a bit too eagerly when handling `bool` values). All functions
//! that return or use a potentially secret Boolean value use the `u32`
//! type; the convention is that 0xFFFFFFFF means "true", and 0x00000000
//! means "false". No other value shall be used, for they would lead to
//! unpredictable results. Similarly, the `Eq` or `PartialEq` traits are
//! not implemented.
//!
//! Algebraic operations on field elements are performed with the usual
//! operators (e.g. `+`); appropriate traits are defined so that structure
//! types and pointers to structure types can be used more or less
//! interchangeably. Throughout the code, functions that modify the object
//! on which they are called tend to have a name in `set_*()` (e.g. for a
//! field element `x`, `x.set_square()` modifies `x` in place, while
//! `x.square()` leaves `x` unmodified and returns the square as a new
//! instance).
//!
//! Operand ranges (e.g. "input lower than 2\*p") are invariants
//! maintained by the types; they are verified with debug assertions only.
//!
//! No inline assembly is used. On x86-64 architectures, the
//! `_addcarry_u64()` and `_subborrow_u64()` intrinsics are used
//! (from `core::arch::x86_64`); however, plain implementations with
//! no intrinsics are available (and used on other architectures).

#![no_std]

#[cfg(all(feature = "alloc", not(feature = "std")))]
#[macro_use]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

#[cfg(all(feature = "alloc", not(feature = "std")))]
pub(crate) use alloc::vec::Vec;

#[cfg(feature = "std")]
pub(crate) use std::vec::Vec;

pub use rand_core::{CryptoRng, RngCore, Error as RngError};

pub mod backend;
pub mod field;
pub mod params;
