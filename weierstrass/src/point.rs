use core::fmt::{self, Display, Formatter};

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A point of the curve group.
///
/// The point at infinity is its own variant, so a signature taking `Point`
/// always says whether infinity is an acceptable input or output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// The point at infinity (identity element)
    #[default]
    Identity,
    /// A finite point with coordinates in `[0, p)`
    Affine { x: BigUint, y: BigUint },
}

impl Point {
    /// Create an affine point. No curve membership check is done here; use
    /// [`CurveGroup::point`](crate::CurveGroup::point) for that.
    pub fn affine(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Point::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// The `(x, y)` pair, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let id = Point::Identity;
        assert!(id.is_identity());
        assert_eq!(id.coordinates(), None);
        assert_eq!(Point::default(), id);
    }

    #[test]
    fn test_affine_accessors() {
        let p = Point::affine(2u32, 22u32);
        assert!(!p.is_identity());
        assert_eq!(p.x(), Some(&BigUint::from(2u32)));
        assert_eq!(p.y(), Some(&BigUint::from(22u32)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::Identity.to_string(), "O");
        assert_eq!(Point::affine(52u32, 7u32).to_string(), "(52, 7)");
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&Point::Identity).unwrap();
        assert_eq!(json, "\"Identity\"");

        let p = Point::affine(62u32, 63u32);
        let back: Point = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back, p);
    }
}
