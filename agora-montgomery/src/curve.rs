use crate::{Field, MontgomeryError, Ring, XPoint};

use log::debug;

/// The Montgomery curve `y^2 = x^3 + A x^2 + x`.
///
/// Besides the coefficient `A` the curve carries the doubling constant
/// `(A + 2) / 4`. Curves are never mutated after construction, points
/// borrow them.
#[derive(Clone, Debug)]
pub struct MontgomeryCurve<F> {
    a: F,
    a24: F,
}

impl<F: Ring> PartialEq for MontgomeryCurve<F> {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a
    }
}

impl<F: Ring> MontgomeryCurve<F> {
    /// Builds a curve over a ring without division, where the caller
    /// supplies `(A + 2) / 4` directly.
    pub fn with_a24(a: F, a24: F) -> Self {
        Self { a, a24 }
    }

    pub fn a(&self) -> &F {
        &self.a
    }

    pub fn a24(&self) -> &F {
        &self.a24
    }

    /// The point at infinity in its canonical `(0 : 0)` form.
    pub fn infinity(&self) -> XPoint<'_, F> {
        XPoint::new(F::zero(), F::zero(), self)
    }

    /// The order 2 point `(0 : 1)`, fixed under negation.
    pub fn two_torsion(&self) -> XPoint<'_, F> {
        XPoint::new(F::zero(), F::one(), self)
    }

    pub fn point(&self, x: F, z: F) -> XPoint<'_, F> {
        XPoint::new(x, z, self)
    }

    pub fn affine_point(&self, x: F) -> XPoint<'_, F> {
        XPoint::new(x, F::one(), self)
    }
}

impl<F: Field> MontgomeryCurve<F> {
    pub fn new(a: F) -> Result<Self, MontgomeryError> {
        let four = F::from_u64(4);
        let a_plus_two = a.clone() + F::from_u64(2);
        let a24 = a_plus_two.div(&four).ok_or_else(|| {
            debug!("4 is not invertible in the coefficient field");
            MontgomeryError::TriedToInvertZero
        })?;
        Ok(Self { a, a24 })
    }
}
