//! Modular arithmetic over a prime modulus.
//!
//! Field elements are plain `BigUint` values. Every helper here returns the
//! canonical representative in `[0, p)`, including for subtraction and
//! negation, so callers never see a negative remainder.

use core::mem;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::{CurveError, Result};

/// Computes `a^{-1} mod p` with the extended Euclidean algorithm.
///
/// `a` may be negative or larger than `p`; it is reduced first. Fails with
/// [`CurveError::NoInverseExists`] when `a ≡ 0` or `gcd(a, p) != 1`, and with
/// [`CurveError::InvalidParameters`] when `p < 2`.
pub fn inverse(a: &BigInt, p: &BigUint) -> Result<BigUint> {
    if *p < BigUint::from(2u32) {
        return Err(CurveError::InvalidParameters(format!(
            "modulus must be at least 2, got {p}"
        )));
    }

    let modulus = BigInt::from_biguint(Sign::Plus, p.clone());
    let no_inverse = || CurveError::NoInverseExists {
        value: a.clone(),
        modulus: p.clone(),
    };

    let reduced = a.mod_floor(&modulus);
    if reduced.is_zero() {
        return Err(no_inverse());
    }

    // Invariant: old_s * a ≡ old_r and s * a ≡ r (mod p).
    let (mut old_r, mut r) = (reduced, modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r);
        old_r = mem::replace(&mut r, rem);
        let next_s = &old_s - &q * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(no_inverse());
    }

    Ok(old_s.mod_floor(&modulus).magnitude().clone())
}

/// The integers modulo `p`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Wraps a modulus. Primality is not checked.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(CurveError::InvalidParameters(format!(
                "modulus must be at least 2, got {modulus}"
            )));
        }
        Ok(Self { modulus })
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Reduce a signed integer into `[0, p)`.
    pub fn reduce(&self, value: &BigInt) -> BigUint {
        let modulus = BigInt::from_biguint(Sign::Plus, self.modulus.clone());
        value.mod_floor(&modulus).magnitude().clone()
    }

    #[inline]
    pub fn reduce_unsigned(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    #[inline]
    pub fn is_zero(&self, value: &BigUint) -> bool {
        (value % &self.modulus).is_zero()
    }

    #[inline]
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// `a - b mod p`, computed as `a + (p - b mod p)` so nothing goes negative.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = b % &self.modulus;
        (a + &self.modulus - b) % &self.modulus
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = a % &self.modulus;
        if a.is_zero() {
            a
        } else {
            &self.modulus - a
        }
    }

    #[inline]
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    #[inline]
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Multiplicative inverse of `a`; see [`inverse`].
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint> {
        inverse(&BigInt::from_biguint(Sign::Plus, a.clone()), &self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::random_below;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn ubig(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn secp256k1_prime() -> BigUint {
        BigUint::parse_bytes(
            b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            16,
        )
        .unwrap()
    }

    #[test]
    fn test_inverse_small_values() {
        assert_eq!(inverse(&big(3), &ubig(7)).unwrap(), ubig(5));
        assert_eq!(inverse(&big(44), &ubig(67)).unwrap(), ubig(32));
        assert_eq!(inverse(&big(50), &ubig(67)).unwrap(), ubig(63));
        assert_eq!(inverse(&big(1), &ubig(67)).unwrap(), ubig(1));
    }

    #[test]
    fn test_inverse_composite_modulus_when_coprime() {
        assert_eq!(inverse(&big(17), &ubig(3120)).unwrap(), ubig(2753));
    }

    #[test]
    fn test_inverse_normalises_input() {
        assert_eq!(inverse(&big(-1), &ubig(7)).unwrap(), ubig(6));
        assert_eq!(inverse(&big(10), &ubig(7)).unwrap(), ubig(5));
        assert_eq!(inverse(&big(-4), &ubig(7)).unwrap(), ubig(5));
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        let err = inverse(&big(0), &ubig(67)).unwrap_err();
        assert_eq!(
            err,
            CurveError::NoInverseExists {
                value: big(0),
                modulus: ubig(67)
            }
        );
        assert!(matches!(
            inverse(&big(134), &ubig(67)),
            Err(CurveError::NoInverseExists { .. })
        ));
    }

    #[test]
    fn test_inverse_shared_factor_fails() {
        assert!(matches!(
            inverse(&big(6), &ubig(9)),
            Err(CurveError::NoInverseExists { .. })
        ));
        assert!(matches!(
            inverse(&big(9), &ubig(15)),
            Err(CurveError::NoInverseExists { .. })
        ));
    }

    #[test]
    fn test_inverse_rejects_tiny_modulus() {
        assert!(matches!(
            inverse(&big(1), &ubig(1)),
            Err(CurveError::InvalidParameters(_))
        ));
        assert!(matches!(
            inverse(&big(1), &ubig(0)),
            Err(CurveError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_inverse_random_large_prime() {
        let p = secp256k1_prime();
        let field = PrimeField::new(p.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..32 {
            let a = random_below(&mut rng, &p);
            if a.is_zero() {
                continue;
            }
            let a_inv = field.inverse(&a).unwrap();
            assert!(a_inv < p);
            assert_eq!(field.mul(&a, &a_inv), BigUint::one());
        }
    }

    #[test]
    fn test_field_rejects_tiny_modulus() {
        assert!(PrimeField::new(ubig(1)).is_err());
        assert!(PrimeField::new(ubig(2)).is_ok());
    }

    #[test]
    fn test_reduce_signed() {
        let field = PrimeField::new(ubig(67)).unwrap();
        assert_eq!(field.reduce(&big(-1)), ubig(66));
        assert_eq!(field.reduce(&big(-67)), ubig(0));
        assert_eq!(field.reduce(&big(-68)), ubig(66));
        assert_eq!(field.reduce(&big(135)), ubig(1));
    }

    #[test]
    fn test_subtraction_stays_non_negative() {
        let field = PrimeField::new(ubig(67)).unwrap();
        assert_eq!(field.sub(&ubig(2), &ubig(52)), ubig(17));
        assert_eq!(field.sub(&ubig(10), &ubig(3)), ubig(7));
        assert_eq!(field.sub(&ubig(0), &ubig(200)), ubig(1));
    }

    #[test]
    fn test_negation() {
        let field = PrimeField::new(ubig(67)).unwrap();
        let a = ubig(5);
        assert_eq!(field.add(&a, &field.neg(&a)), ubig(0));
        assert_eq!(field.neg(&ubig(0)), ubig(0));
        assert_eq!(field.neg(&ubig(67)), ubig(0));
    }

    #[test]
    fn test_multiplication() {
        let field = PrimeField::new(ubig(67)).unwrap();
        assert_eq!(field.mul(&ubig(6), &ubig(7)), ubig(42));
        assert_eq!(field.square(&ubig(22)), ubig(15));
        assert!(field.is_zero(&ubig(134)));
    }
}
