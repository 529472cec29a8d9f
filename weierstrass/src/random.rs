use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use crate::errors::{CurveError, Result};

/// Sample uniformly from `[0, bound)` by rejection.
///
/// Candidates are drawn with exactly `bound.bits()` random bits, so each
/// attempt succeeds with probability above one half. Returns zero when
/// `bound` is zero.
pub fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    if bound.is_zero() {
        return BigUint::zero();
    }

    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let mask = 0xffu8 >> (len as u64 * 8 - bits);
    let mut bytes = vec![0u8; len];

    loop {
        rng.fill(&mut bytes[..]);
        bytes[0] &= mask;
        let candidate = BigUint::from_bytes_be(&bytes);
        if candidate < *bound {
            return candidate;
        }
    }
}

/// Sample uniformly from `[1, bound)`. Fails when the range is empty.
pub fn random_nonzero_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> Result<BigUint> {
    if *bound < BigUint::from(2u32) {
        return Err(CurveError::InvalidParameters(format!(
            "cannot sample from [1, {bound})"
        )));
    }

    loop {
        let candidate = random_below(rng, bound);
        if !candidate.is_zero() {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_below_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for bound in [1u64, 2, 3, 67, 79, 255, 256, 257, 65_537] {
            let bound = BigUint::from(bound);
            for _ in 0..64 {
                assert!(random_below(&mut rng, &bound) < bound);
            }
        }
    }

    #[test]
    fn test_random_below_covers_small_range() {
        let mut rng = StdRng::seed_from_u64(12345);
        let bound = BigUint::from(5u32);
        let mut seen = [false; 5];
        for _ in 0..200 {
            let v = random_below(&mut rng, &bound);
            seen[v.to_u32_digits().first().copied().unwrap_or(0) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_nonzero_below() {
        let mut rng = StdRng::seed_from_u64(42);
        let bound = BigUint::from(2u32);
        for _ in 0..16 {
            assert_eq!(random_nonzero_below(&mut rng, &bound).unwrap(), BigUint::from(1u32));
        }
    }

    #[test]
    fn test_random_nonzero_below_empty_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for bound in [0u32, 1] {
            assert!(matches!(
                random_nonzero_below(&mut rng, &BigUint::from(bound)),
                Err(CurveError::InvalidParameters(_))
            ));
        }
    }

    #[test]
    fn test_zero_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_below(&mut rng, &BigUint::zero()).is_zero());
    }
}
