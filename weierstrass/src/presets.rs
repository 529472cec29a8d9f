//! Named curves with well-known base points.

use num_bigint::{BigInt, BigUint};

use crate::curve::CurveGroup;
use crate::errors::Result;

/// `y^2 = x^3 + 7 mod 67` with `G = (2, 22)`, a subgroup of prime order 79.
///
/// These are the example values offered when parameters are entered by hand.
pub fn textbook() -> Result<CurveGroup> {
    small(0, 7, 67, 2, 22)
}

/// `y^2 = x^3 + 2x + 2 mod 17` with `G = (5, 1)`, a subgroup of order 19.
pub fn toy() -> Result<CurveGroup> {
    small(2, 2, 17, 5, 1)
}

// p = 2^256 - 2^32 - 977, little-endian u32 digits
const SECP256K1_P: [u32; 8] = [
    0xfffffc2f, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
];
const SECP256K1_GX: [u32; 8] = [
    0x16f81798, 0x59f2815b, 0x2dce28d9, 0x029bfcdb, 0xce870b07, 0x55a06295, 0xf9dcbbac, 0x79be667e,
];
const SECP256K1_GY: [u32; 8] = [
    0xfb10d4b8, 0x9c47d08f, 0xa6855419, 0xfd17b448, 0x0e1108a8, 0x5da4fbfc, 0x26a3c465, 0x483ada77,
];
const SECP256K1_N: [u32; 8] = [
    0xd0364141, 0xbfd25e8c, 0xaf48a03b, 0xbaaedce6, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff,
];

/// secp256k1: `y^2 = x^3 + 7` over the 256-bit prime `2^256 - 2^32 - 977`.
pub fn secp256k1() -> Result<CurveGroup> {
    CurveGroup::from_integers(
        BigInt::from(0u32),
        BigInt::from(7u32),
        BigUint::from_slice(&SECP256K1_P),
        BigUint::from_slice(&SECP256K1_GX).into(),
        BigUint::from_slice(&SECP256K1_GY).into(),
    )
}

/// Prime order of the secp256k1 base point.
pub fn secp256k1_order() -> BigUint {
    BigUint::from_slice(&SECP256K1_N)
}

/// Look up a preset by name.
pub fn by_name(name: &str) -> Option<Result<CurveGroup>> {
    match name {
        "textbook" => Some(textbook()),
        "toy" => Some(toy()),
        "secp256k1" => Some(secp256k1()),
        _ => None,
    }
}

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 3] = ["textbook", "toy", "secp256k1"];

fn small(a: i64, b: i64, p: u64, gx: i64, gy: i64) -> Result<CurveGroup> {
    CurveGroup::from_integers(
        BigInt::from(a),
        BigInt::from(b),
        BigUint::from(p),
        BigInt::from(gx),
        BigInt::from(gy),
    )
}
