use num_bigint::BigUint;

use crate::errors::Result;

/// Group law over elements that need the group itself for context.
///
/// Curve points carry no parameters of their own, so every operation takes
/// `&self`. The law can fail only where a modular inverse is involved.
pub trait GroupLaw {
    type Element: Clone;

    fn identity(&self) -> Self::Element;
    fn is_identity(&self, element: &Self::Element) -> bool;
    fn add(&self, p: &Self::Element, q: &Self::Element) -> Result<Self::Element>;
    fn double(&self, p: &Self::Element) -> Result<Self::Element>;
    fn negate(&self, p: &Self::Element) -> Self::Element;

    /// Double-and-add, least significant bit first.
    ///
    /// The running base is not doubled past the top bit of `k`, since that
    /// doubling would never be accumulated.
    fn scalar_mul(&self, k: &BigUint, p: &Self::Element) -> Result<Self::Element> {
        let bits = k.bits();
        let mut result = self.identity();
        let mut addend = p.clone();

        for i in 0..bits {
            if k.bit(i) {
                result = self.add(&result, &addend)?;
            }
            if i + 1 < bits {
                addend = self.double(&addend)?;
            }
        }

        Ok(result)
    }

    fn mul_u64(&self, n: u64, p: &Self::Element) -> Result<Self::Element> {
        match n {
            0 => Ok(self.identity()),
            1 => Ok(p.clone()),
            _ => self.scalar_mul(&BigUint::from(n), p),
        }
    }
}
