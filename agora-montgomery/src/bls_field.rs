use crate::{Field, Ring};
use bls::Scalar;
use subtle::CtOption;

impl Ring for Scalar {
    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn from_u64(num: u64) -> Self {
        Self::from(num)
    }

    fn square(&self) -> Self {
        Scalar::square(self)
    }
}

impl Field for Scalar {
    fn inverse(&self) -> CtOption<Self> {
        self.invert()
    }
}

#[cfg(test)]
crate::macros::test_scalar_mul!(bls::Scalar);
