mod formulas;

use crate::{Field, MontgomeryCurve, Ring};

/// An x-only point `(X : Z)` on a Montgomery curve.
///
/// `(0 : 0)` is the canonical point at infinity and `(0 : Z)` with a
/// nonzero `Z` is the 2-torsion point. Any other pair with a nonzero `Z`
/// stands for the affine coordinate `x = X / Z` in some scaling.
///
/// `PartialEq` is structural: it compares the curves and the raw
/// coordinates, so `(X : Z)` and `(2X : 2Z)` differ. Use
/// [`XPoint::projective_eq`] to compare represented points.
#[derive(Clone, Copy, Debug)]
pub struct XPoint<'c, F> {
    x: F,
    z: F,
    curve: &'c MontgomeryCurve<F>,
}

impl<'c, F: Ring> PartialEq for XPoint<'c, F> {
    fn eq(&self, other: &Self) -> bool {
        self.same_curve(other) && self.x == other.x && self.z == other.z
    }
}

impl<'c, F: Ring> XPoint<'c, F> {
    pub fn new(x: F, z: F, curve: &'c MontgomeryCurve<F>) -> Self {
        Self { x, z, curve }
    }

    #[inline(always)]
    pub fn x(&self) -> &F {
        &self.x
    }

    #[inline(always)]
    pub fn z(&self) -> &F {
        &self.z
    }

    #[inline(always)]
    pub fn curve(&self) -> &'c MontgomeryCurve<F> {
        self.curve
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Checks only `X`; whether `Z` is nonzero is up to the caller.
    pub fn is_two_torsion(&self) -> bool {
        self.x.is_zero()
    }

    pub fn same_curve(&self, other: &Self) -> bool {
        std::ptr::eq(self.curve, other.curve) || self.curve == other.curve
    }
}

impl<'c, F: Field> XPoint<'c, F> {
    /// Returns the representative with `Z = 1`, or `(0 : 0)` for the
    /// point at infinity.
    pub fn normalize(&self) -> Self {
        let mut normalized = self.clone();
        normalized.normalize_in_place();
        normalized
    }

    pub fn normalize_in_place(&mut self) {
        let z_inv: Option<F> = self.z.inverse().into();
        match z_inv {
            Some(z_inv) => {
                self.x = self.x.clone() * z_inv;
                self.z = F::one();
            }
            None => {
                self.x = F::zero();
                self.z = F::zero();
            }
        }
    }

    /// Equality of the represented points, independent of scaling.
    pub fn projective_eq(&self, other: &Self) -> bool {
        self.same_curve(other) && {
            let lhs = self.normalize();
            let rhs = other.normalize();
            lhs.x == rhs.x && lhs.z == rhs.z
        }
    }

    /// The affine x-coordinate, `None` for the point at infinity.
    pub fn affine_x(&self) -> Option<F> {
        self.x.div(&self.z)
    }
}
