//! Finite fields.
//!
//! This module defines the fields of the supported parameter sets. These
//! are merely specializations of the backend-provided `GFsidh` and
//! `GF2sidh` types.

#[cfg(feature = "p751")]
use crate::params::P751;

#[cfg(feature = "p964")]
use crate::params::P964;

/// Integers modulo p751 = 2^372\*3^239 - 1.
#[cfg(feature = "p751")]
pub type GFp751 = crate::backend::GFsidh<P751, 12>;

/// GF(p751^2)
#[cfg(feature = "p751")]
pub type GF2p751 = crate::backend::GF2sidh<P751, 12>;

/// Integers modulo p964 = 2^486\*3^301 - 1.
#[cfg(feature = "p964")]
pub type GFp964 = crate::backend::GFsidh<P964, 16>;

/// GF(p964^2)
#[cfg(feature = "p964")]
pub type GF2p964 = crate::backend::GF2sidh<P964, 16>;
