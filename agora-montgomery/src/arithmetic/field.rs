use super::modular::Modular;
use super::modulus::Modulus;
use crate::{Field, Ring};

use bigint::{NonZero, U256};
use subtle::{Choice, ConditionallySelectable, CtOption};

use std::marker::PhantomData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement<M: Modulus>(pub(crate) U256, pub(crate) PhantomData<M>);

impl<M: Modulus> FieldElement<M> {
    pub const ONE: Self = Self(U256::ONE, PhantomData);
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);

    pub fn from_be_hex(hex: &str) -> Self {
        <Self as Modular>::new(U256::from_be_hex(hex))
    }
}

impl<M: Modulus> Modular for FieldElement<M> {
    const MODULUS: U256 = M::PRIME_MODULUS;

    fn new(number: U256) -> Self {
        let reduced = if number < Self::MODULUS {
            number
        } else {
            // NOTE unwrap is fine here because the modulus
            // can be safely assumed to be nonzero
            number % NonZero::new(Self::MODULUS).unwrap()
        };

        Self(reduced, PhantomData)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl<M: Modulus> Ring for FieldElement<M> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn from_u64(num: u64) -> Self {
        <Self as Modular>::new(U256::from_u64(num))
    }
}

impl<M: Modulus> Field for FieldElement<M> {
    fn inverse(&self) -> CtOption<Self> {
        let is_nonzero = Choice::from((self.0 != U256::ZERO) as u8);
        CtOption::new(self.fermat_inverse(), is_nonzero)
    }
}

impl<M: Modulus> ConditionallySelectable for FieldElement<M> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U256::conditional_select(&a.0, &b.0, choice), PhantomData)
    }
}

impl<'a, 'b, M: Modulus> std::ops::Add<&'b FieldElement<M>> for &'a FieldElement<M> {
    type Output = FieldElement<M>;
    fn add(self, rhs: &'b FieldElement<M>) -> Self::Output {
        Modular::add(self, rhs)
    }
}

impl<M: Modulus> std::ops::Add for FieldElement<M> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl<M: Modulus> std::ops::AddAssign for FieldElement<M> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<M: Modulus> std::ops::Sub for FieldElement<M> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<'a, 'b, M: Modulus> std::ops::Sub<&'b FieldElement<M>> for &'a FieldElement<M> {
    type Output = FieldElement<M>;
    fn sub(self, rhs: &'b FieldElement<M>) -> Self::Output {
        Modular::sub(self, rhs)
    }
}

impl<M: Modulus> std::ops::SubAssign for FieldElement<M> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<M: Modulus> std::ops::Neg for FieldElement<M> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl<M: Modulus> std::ops::Mul for FieldElement<M> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

impl<'a, 'b, M: Modulus> std::ops::Mul<&'b FieldElement<M>> for &'a FieldElement<M> {
    type Output = FieldElement<M>;
    fn mul(self, rhs: &'b FieldElement<M>) -> Self::Output {
        Modular::mul(self, rhs)
    }
}

impl<M: Modulus> std::ops::MulAssign for FieldElement<M> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
