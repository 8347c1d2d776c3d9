use super::XPoint;
use crate::{MontgomeryError, Ring};

impl<'c, F: Ring> XPoint<'c, F> {
    /// x-only doubling (xDBL), 4 multiplications/squarings and one
    /// multiplication by `(A + 2) / 4`.
    ///
    /// A result with `Z = 0` is always returned as the canonical
    /// `(0 : 0)`.
    pub fn double(&self) -> Self {
        let mut v1 = (self.x.clone() + self.z.clone()).square();
        let v2 = (self.x.clone() - self.z.clone()).square();
        let mut x = v1.clone() * v2.clone();
        // 4XZ
        v1 = v1 - v2.clone();
        let v3 = self.curve.a24().clone() * v1.clone() + v2;
        let z = v1 * v3;
        if z.is_zero() {
            x = F::zero();
        }

        Self::new(x, z, self.curve)
    }

    /// `2^e` times this point by repeated doubling.
    pub fn double_times(&self, e: usize) -> Self {
        let mut q = self.clone();
        for _ in 0..e {
            q = q.double();
        }
        q
    }

    /// Differential addition (xADD): computes `self + rhs` given
    /// `diff = self - rhs`.
    ///
    /// `diff` must be neither the point at infinity nor the 2-torsion
    /// point. This is not checked and a degenerate `diff` produces a
    /// wrong result; see [`XPoint::try_differential_add`] for the checked
    /// variant. The result lies on `self`'s curve.
    pub fn differential_add(&self, rhs: &Self, diff: &Self) -> Self {
        let v0 = (self.x.clone() + self.z.clone()) * (rhs.x.clone() - rhs.z.clone());
        let v1 = (self.x.clone() - self.z.clone()) * (rhs.x.clone() + rhs.z.clone());
        let x = diff.z.clone() * (v0.clone() + v1.clone()).square();
        let z = diff.x.clone() * (v0 - v1).square();

        Self::new(x, z, self.curve)
    }

    pub fn try_differential_add(&self, rhs: &Self, diff: &Self) -> Result<Self, MontgomeryError> {
        if !self.same_curve(rhs) || !self.same_curve(diff) {
            return Err(MontgomeryError::CurveMismatch);
        }
        if diff.is_infinity() || diff.is_two_torsion() {
            return Err(MontgomeryError::DegenerateDifference);
        }
        Ok(self.differential_add(rhs, diff))
    }
}
