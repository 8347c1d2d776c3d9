#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod arithmetic;
#[cfg(any(test, feature = "bls-field"))]
mod bls_field;
mod curve;
mod integer;
mod ladder;
#[cfg(test)]
mod macros;
mod point;

pub use curve::MontgomeryCurve;
pub use num_bigint::BigInt;
pub use point::XPoint;

use subtle::CtOption;
use thiserror::Error;

use std::ops::{Add, Mul, Sub};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MontgomeryError {
    #[error("attempted to invert a zero field element")]
    TriedToInvertZero,
    #[error("difference point is degenerate (infinity or the 2-torsion point)")]
    DegenerateDifference,
    #[error("points lie on different curves")]
    CurveMismatch,
}

/// Base capability tier: enough structure for x-only doubling and
/// differential addition.
pub trait Ring:
    Clone + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_u64(num: u64) -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    fn square(&self) -> Self {
        self.clone() * self.clone()
    }
}

/// Field capability tier: rings in which every nonzero element is
/// invertible. Required for normalization, projective equality and
/// scalar multiplication.
pub trait Field: Ring {
    fn inverse(&self) -> CtOption<Self>;

    fn div(&self, rhs: &Self) -> Option<Self> {
        Option::<Self>::from(rhs.inverse()).map(|inv| self.clone() * inv)
    }
}
