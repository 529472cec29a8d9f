//! Enumeration of `k * G` over a range of scalars.
//!
//! Scalars whose multiple is the identity (multiples of the order of `G`) are
//! skipped, so the emitted sequence only holds affine points. Consumers that
//! need the identity positions can recover them from the gaps in `scalar`.

use core::iter::FusedIterator;
use core::ops::RangeInclusive;

use num_bigint::BigUint;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::curve::CurveGroup;
use crate::errors::{CurveError, Result};
use crate::point::Point;

/// One emitted multiple of the base point: `scalar * G = (x, y)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedEntry {
    pub scalar: u64,
    pub x: BigUint,
    pub y: BigUint,
}

impl GeneratedEntry {
    pub fn point(&self) -> Point {
        Point::Affine {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }
}

/// Lazily walks `k = 1..=scalar_modulus`, yielding `k * G` for every affine
/// result. Stops for good after the first error.
#[derive(Clone, Debug)]
pub struct SubgroupEnumerator<'a> {
    group: &'a CurveGroup,
    scalars: RangeInclusive<u64>,
    failed: bool,
}

impl<'a> SubgroupEnumerator<'a> {
    pub fn new(group: &'a CurveGroup, scalar_modulus: u64) -> Result<Self> {
        check_scalar_modulus(scalar_modulus)?;
        Ok(Self {
            group,
            scalars: 1..=scalar_modulus,
            failed: false,
        })
    }
}

impl Iterator for SubgroupEnumerator<'_> {
    type Item = Result<GeneratedEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for k in self.scalars.by_ref() {
            match entry(self.group, k) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        (0, self.scalars.size_hint().1)
    }
}

impl FusedIterator for SubgroupEnumerator<'_> {}

/// Compute `k * G` for every `k` in `1..=scalar_modulus`, in ascending order,
/// dropping identity results.
///
/// The first failure aborts the whole run; there is no partial result. With
/// the `parallel` feature the range is split across the rayon pool and the
/// output order is unchanged.
pub fn generate(group: &CurveGroup, scalar_modulus: u64) -> Result<Vec<GeneratedEntry>> {
    check_scalar_modulus(scalar_modulus)?;

    #[cfg(feature = "parallel")]
    {
        (1..=scalar_modulus)
            .into_par_iter()
            .map(|k| entry(group, k))
            .filter_map(Result::transpose)
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        SubgroupEnumerator::new(group, scalar_modulus)?.collect()
    }
}

fn check_scalar_modulus(scalar_modulus: u64) -> Result<()> {
    if scalar_modulus == 0 {
        return Err(CurveError::InvalidParameters(
            "scalar modulus must be positive".to_string(),
        ));
    }
    Ok(())
}

fn entry(group: &CurveGroup, k: u64) -> Result<Option<GeneratedEntry>> {
    Ok(match group.base_multiple(k)? {
        Point::Identity => None,
        Point::Affine { x, y } => Some(GeneratedEntry { scalar: k, x, y }),
    })
}
