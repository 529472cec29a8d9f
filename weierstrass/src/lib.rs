//! Short Weierstrass curves `y^2 = x^3 + ax + b` over a prime field.
//!
//! This crate provides modular arithmetic with an extended-Euclid inverse,
//! the chord-and-tangent group law with an explicit identity variant,
//! double-and-add scalar multiplication, and enumeration of the multiples of
//! a base point. Curve parameters are chosen at runtime; a few named curves
//! live in the `presets` module.
//!
//! Nothing here is constant-time.

mod curve;
mod enumerate;
mod errors;
pub mod field;
mod group;
mod keys;
mod point;
pub mod presets;
mod random;

pub use curve::{CurveGroup, CurveParameters};
pub use enumerate::{generate, GeneratedEntry, SubgroupEnumerator};
pub use errors::{CurveError, Result};
pub use field::PrimeField;
pub use group::GroupLaw;
pub use keys::{PrivateKey, PublicKey};
pub use num_bigint::{BigInt, BigUint};
pub use point::Point;
pub use random::{random_below, random_nonzero_below};
