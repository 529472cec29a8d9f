//! Short Weierstrass curves `y^2 = x^3 + ax + b` over a prime field, and the
//! group generated by a chosen base point.

use core::fmt::{self, Display, Formatter};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

use crate::errors::{CurveError, Result};
use crate::field::PrimeField;
use crate::group::GroupLaw;
use crate::point::Point;

/// Curve coefficients together with the field they live in.
///
/// `a` and `b` are stored as canonical residues, so a curve given with
/// `a = -3` reports `a = p - 3`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurveParameters {
    field: PrimeField,
    a: BigUint,
    b: BigUint,
}

impl CurveParameters {
    /// Validate the modulus and normalise the coefficients.
    ///
    /// `p` must be odd and at least 5: the chord-and-tangent formulas divide
    /// by 2 and 3. Primality itself is not tested.
    pub fn new(a: BigInt, b: BigInt, p: BigUint) -> Result<Self> {
        let field = PrimeField::new(p)?;
        let p = field.modulus();
        if p.is_even() || *p < BigUint::from(5u32) {
            return Err(CurveError::InvalidParameters(format!(
                "field modulus must be an odd prime of at least 5, got {p}"
            )));
        }

        Ok(Self {
            a: field.reduce(&a),
            b: field.reduce(&b),
            field,
        })
    }

    #[inline]
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    #[inline]
    pub fn p(&self) -> &BigUint {
        self.field.modulus()
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Right-hand side of the curve equation: `x^3 + ax + b mod p`.
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        let ax = f.mul(&self.a, x);
        f.add(&f.add(&x3, &ax), &self.b)
    }

    /// Check `y^2 ≡ x^3 + ax + b (mod p)`. Coordinates need not be reduced.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        self.field.square(y) == self.rhs(x)
    }

    /// `-16(4a^3 + 27b^2) mod p`.
    pub fn discriminant(&self) -> BigUint {
        let f = &self.field;
        let a3 = f.mul(&f.square(&self.a), &self.a);
        let four_a3 = f.mul(&BigUint::from(4u32), &a3);
        let b2 = f.square(&self.b);
        let twenty_seven_b2 = f.mul(&BigUint::from(27u32), &b2);
        let sum = f.add(&four_a3, &twenty_seven_b2);
        f.neg(&f.mul(&BigUint::from(16u32), &sum))
    }

    /// A singular curve has a cusp or node, and its points do not form a group
    /// under the chord-and-tangent law.
    pub fn is_singular(&self) -> bool {
        self.discriminant().is_zero()
    }
}

impl Display for CurveParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} mod {}",
            self.a,
            self.b,
            self.field.modulus()
        )
    }
}

/// The group generated on a curve by a validated base point `G`.
///
/// Immutable once built; cloning or sharing it across threads is cheap and
/// safe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveGroup {
    params: CurveParameters,
    generator: Point,
}

impl CurveGroup {
    /// Build the group, failing fast if `g` is the identity or off the curve.
    pub fn new(params: CurveParameters, g: Point) -> Result<Self> {
        let generator = match g {
            Point::Identity => {
                return Err(CurveError::InvalidParameters(
                    "base point must be an affine point, not the identity".to_string(),
                ))
            }
            Point::Affine { x, y } => {
                if !params.is_on_curve(&x, &y) {
                    return Err(CurveError::PointNotOnCurve {
                        x: x.into(),
                        y: y.into(),
                    });
                }
                let field = params.field();
                Point::Affine {
                    x: field.reduce_unsigned(&x),
                    y: field.reduce_unsigned(&y),
                }
            }
        };

        Ok(Self { params, generator })
    }

    /// Build the group from raw integers. Signed coordinates are reduced mod `p`.
    pub fn from_integers(a: BigInt, b: BigInt, p: BigUint, gx: BigInt, gy: BigInt) -> Result<Self> {
        let params = CurveParameters::new(a, b, p)?;
        let g = params.point(&gx, &gy)?;
        Self::new(params, g)
    }

    #[inline]
    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    /// The base point `G`; always affine.
    #[inline]
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Build a validated affine point on this curve.
    pub fn point(&self, x: &BigInt, y: &BigInt) -> Result<Point> {
        self.params.point(x, y)
    }

    /// Curve membership. The identity is always a member.
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => self.params.is_on_curve(x, y),
        }
    }

    /// `k * P` by double-and-add.
    pub fn scalar_multiply(&self, k: &BigUint, p: &Point) -> Result<Point> {
        self.scalar_mul(k, p)
    }

    /// `k * G`.
    pub fn base_multiple(&self, k: u64) -> Result<Point> {
        self.mul_u64(k, &self.generator)
    }

    /// Order of `G`, found by walking `G, 2G, 3G, ...` up to `limit` steps.
    ///
    /// Returns `None` if the identity is not reached within `limit`. By Hasse's
    /// bound the order never exceeds `p + 1 + 2√p`.
    pub fn base_order(&self, limit: u64) -> Result<Option<u64>> {
        let mut acc = Point::Identity;
        for k in 1..=limit {
            acc = self.add(&acc, &self.generator)?;
            if acc.is_identity() {
                return Ok(Some(k));
            }
        }
        Ok(None)
    }

    fn normalize(&self, x: &BigUint, y: &BigUint) -> (BigUint, BigUint) {
        let field = self.params.field();
        (field.reduce_unsigned(x), field.reduce_unsigned(y))
    }

    /// Tangent-line doubling of an affine point with reduced coordinates.
    fn double_affine(&self, x: &BigUint, y: &BigUint) -> Result<Point> {
        let field = self.params.field();

        // 2-torsion: the tangent is vertical and 2P = O
        if field.is_zero(y) {
            return Ok(Point::Identity);
        }

        // λ = (3x^2 + a) / (2y)
        let three_x2 = field.mul(&BigUint::from(3u32), &field.square(x));
        let numerator = field.add(&three_x2, self.params.a());
        let denominator = field.add(y, y);
        let lambda = field.mul(&numerator, &field.inverse(&denominator)?);

        Ok(self.chord_point(&lambda, x, x, y))
    }

    /// Third intersection of the line with slope `lambda`, reflected:
    /// `x_r = λ^2 - x1 - x2`, `y_r = λ(x1 - x_r) - y1`.
    fn chord_point(&self, lambda: &BigUint, x1: &BigUint, x2: &BigUint, y1: &BigUint) -> Point {
        let field = self.params.field();
        let x_r = field.sub(&field.sub(&field.square(lambda), x1), x2);
        let y_r = field.sub(&field.mul(lambda, &field.sub(x1, &x_r)), y1);
        Point::Affine { x: x_r, y: y_r }
    }
}

impl CurveParameters {
    /// Build an affine point, reducing signed coordinates and checking the
    /// curve equation.
    pub fn point(&self, x: &BigInt, y: &BigInt) -> Result<Point> {
        let (rx, ry) = (self.field.reduce(x), self.field.reduce(y));
        if !self.is_on_curve(&rx, &ry) {
            return Err(CurveError::PointNotOnCurve {
                x: x.clone(),
                y: y.clone(),
            });
        }
        Ok(Point::Affine { x: rx, y: ry })
    }
}

impl GroupLaw for CurveGroup {
    type Element = Point;

    #[inline]
    fn identity(&self) -> Point {
        Point::Identity
    }

    #[inline]
    fn is_identity(&self, element: &Point) -> bool {
        element.is_identity()
    }

    fn add(&self, p: &Point, q: &Point) -> Result<Point> {
        let ((x1, y1), (x2, y2)) = match (p, q) {
            (Point::Identity, _) => return Ok(q.clone()),
            (_, Point::Identity) => return Ok(p.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                (self.normalize(x1, y1), self.normalize(x2, y2))
            }
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double_affine(&x1, &y1);
            }
            // Q = -P
            return Ok(Point::Identity);
        }

        // λ = (y2 - y1) / (x2 - x1)
        let field = self.params.field();
        let numerator = field.sub(&y2, &y1);
        let denominator = field.sub(&x2, &x1);
        let lambda = field.mul(&numerator, &field.inverse(&denominator)?);

        Ok(self.chord_point(&lambda, &x1, &x2, &y1))
    }

    fn double(&self, p: &Point) -> Result<Point> {
        match p {
            Point::Identity => Ok(Point::Identity),
            Point::Affine { x, y } => {
                let (x, y) = self.normalize(x, y);
                self.double_affine(&x, &y)
            }
        }
    }

    fn negate(&self, p: &Point) -> Point {
        match p {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => {
                let field = self.params.field();
                Point::Affine {
                    x: field.reduce_unsigned(x),
                    y: field.neg(y),
                }
            }
        }
    }
}
