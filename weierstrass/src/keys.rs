//! Private and public keys on a runtime-chosen curve.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::curve::CurveGroup;
use crate::errors::{CurveError, Result};
use crate::point::Point;
use crate::random::random_nonzero_below;

/// A secret scalar in `[1, n)`, where `n` is the order of the base point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    scalar: BigUint,
}

/// The public point `scalar * G` of a [`PrivateKey`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    point: Point,
}

impl PrivateKey {
    /// Wrap an existing scalar, checking `0 < scalar < order`.
    pub fn new(scalar: BigUint, order: &BigUint) -> Result<Self> {
        if scalar.is_zero() || scalar >= *order {
            return Err(CurveError::InvalidParameters(format!(
                "private key must lie in [1, {order}), got {scalar}"
            )));
        }
        Ok(Self { scalar })
    }

    /// Sample a private key uniformly from `[1, order)`.
    ///
    /// `order` should be the order of the base point, e.g. from
    /// [`CurveGroup::base_order`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R, order: &BigUint) -> Result<Self> {
        Ok(Self {
            scalar: random_nonzero_below(rng, order)?,
        })
    }

    #[inline]
    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Derive the public key `scalar * G`.
    pub fn public_key(&self, group: &CurveGroup) -> Result<PublicKey> {
        let point = group.scalar_multiply(&self.scalar, group.generator())?;
        Ok(PublicKey { point })
    }
}

impl PublicKey {
    #[inline]
    pub fn point(&self) -> &Point {
        &self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_public_key_matches_enumeration() {
        let group = presets::textbook().unwrap();
        let order = BigUint::from(79u32);

        let sk = PrivateKey::new(BigUint::from(3u32), &order).unwrap();
        let pk = sk.public_key(&group).unwrap();
        assert_eq!(pk.point(), &Point::affine(62u32, 63u32));
    }

    #[test]
    fn test_rejects_out_of_range_scalars() {
        let order = BigUint::from(79u32);
        assert!(PrivateKey::new(BigUint::zero(), &order).is_err());
        assert!(PrivateKey::new(BigUint::from(79u32), &order).is_err());
        assert!(PrivateKey::new(BigUint::from(78u32), &order).is_ok());
    }

    #[test]
    fn test_random_keys_are_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        let group = presets::textbook().unwrap();
        let order = BigUint::from(79u32);

        for _ in 0..50 {
            let sk = PrivateKey::random(&mut rng, &order).unwrap();
            assert!(!sk.scalar().is_zero() && sk.scalar() < &order);

            let pk = sk.public_key(&group).unwrap();
            assert!(!pk.point().is_identity());
            assert!(group.contains(pk.point()));
        }
    }

    #[test]
    fn test_random_secp256k1_key() {
        let mut rng = StdRng::seed_from_u64(7);
        let group = presets::secp256k1().unwrap();
        let sk = PrivateKey::random(&mut rng, &presets::secp256k1_order()).unwrap();
        let pk = sk.public_key(&group).unwrap();
        assert!(group.contains(pk.point()));
    }

    #[test]
    fn test_random_rejects_trivial_order() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(PrivateKey::random(&mut rng, &BigUint::from(1u32)).is_err());
    }

    #[test]
    fn test_keys_serialize() {
        let group = presets::toy().unwrap();
        let sk = PrivateKey::new(BigUint::from(5u32), &BigUint::from(19u32)).unwrap();
        let pk = sk.public_key(&group).unwrap();

        let sk2: PrivateKey = serde_json::from_str(&serde_json::to_string(&sk).unwrap()).unwrap();
        let pk2: PublicKey = serde_json::from_str(&serde_json::to_string(&pk).unwrap()).unwrap();
        assert_eq!(sk2, sk);
        assert_eq!(pk2, pk);
    }
}
