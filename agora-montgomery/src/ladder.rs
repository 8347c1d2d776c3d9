use crate::{Field, MontgomeryCurve, XPoint};

use log::trace;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use subtle::{Choice, ConditionallySelectable};

/// Bits of a nonzero magnitude, most significant first, without the
/// leading one.
fn trailing_bits(k: &BigUint) -> impl Iterator<Item = u8> {
    k.to_radix_be(2).into_iter().skip(1)
}

impl<'c, F: Field> XPoint<'c, F> {
    /// Computes `kP`. This is the entry point for scalar multiplication.
    ///
    /// The point at infinity and the 2-torsion point are resolved without
    /// arithmetic, every other point goes through the Montgomery ladder.
    /// Since `kP` and `-kP` share their x-coordinate, the sign of `k` is
    /// ignored.
    ///
    /// The ladder branches on the bits of `k`, so this is not constant
    /// time. See [`XPoint::scalar_mul_ct`].
    pub fn scalar_mul(&self, k: &BigInt) -> Self {
        match self.degenerate_mul(k) {
            Some(q) => q,
            None => self.ladder(k.magnitude()),
        }
    }

    /// Same as [`XPoint::scalar_mul`], but the ladder steps use
    /// conditional swaps instead of branching on the scalar bits. The
    /// special cases still branch, on public properties of the point.
    pub fn scalar_mul_ct(&self, k: &BigInt) -> Self
    where
        F: ConditionallySelectable,
    {
        match self.degenerate_mul(k) {
            Some(q) => q,
            None => self.ladder_ct(k.magnitude()),
        }
    }

    fn degenerate_mul(&self, k: &BigInt) -> Option<Self> {
        if k.magnitude().bits() == 0 {
            trace!("zero scalar, returning the point at infinity");
            return Some(self.curve().infinity());
        }
        if self.is_infinity() {
            trace!("scalar multiple of the point at infinity");
            return Some(self.curve().infinity());
        }
        if self.is_two_torsion() {
            trace!("scalar multiple of the 2-torsion point");
            return if k.is_even() {
                Some(self.curve().infinity())
            } else {
                Some(self.clone())
            };
        }
        None
    }

    /// Requires a nonzero `k` and a point that is neither the point at
    /// infinity nor the 2-torsion point.
    fn ladder(&self, k: &BigUint) -> Self {
        let p = self.normalize();
        trace!("ladder over {} scalar bits", k.bits());

        // r0 = nP, r1 = (n + 1)P
        let mut r0 = p.clone();
        let mut r1 = p.double();
        for bit in trailing_bits(k) {
            if bit == 0 {
                r1 = r0.differential_add(&r1, &p);
                r0 = r0.double();
            } else {
                r0 = r0.differential_add(&r1, &p);
                r1 = r1.double();
            }
        }
        r0
    }

    fn ladder_ct(&self, k: &BigUint) -> Self
    where
        F: ConditionallySelectable,
    {
        let p = self.normalize();
        trace!("constant structure ladder over {} scalar bits", k.bits());

        let mut r0 = p.clone();
        let mut r1 = p.double();
        // the pair is kept swapped whenever the previous bit was set
        let mut swapped = Choice::from(0);
        for bit in trailing_bits(k) {
            let bit = Choice::from(bit);
            conditional_swap(&mut r0, &mut r1, swapped ^ bit);
            let sum = r0.differential_add(&r1, &p);
            r0 = r0.double();
            r1 = sum;
            swapped = bit;
        }
        conditional_swap(&mut r0, &mut r1, swapped);
        r0
    }
}

fn conditional_swap<F: Field + ConditionallySelectable>(
    a: &mut XPoint<'_, F>,
    b: &mut XPoint<'_, F>,
    choice: Choice,
) {
    let (mut ax, mut az) = (*a.x(), *a.z());
    let (mut bx, mut bz) = (*b.x(), *b.z());
    F::conditional_swap(&mut ax, &mut bx, choice);
    F::conditional_swap(&mut az, &mut bz, choice);
    *a = XPoint::new(ax, az, a.curve());
    *b = XPoint::new(bx, bz, b.curve());
}

impl<F: Field + Send + Sync> MontgomeryCurve<F> {
    /// Scalar multiplies every `(k, P)` pair. The jobs are independent and
    /// run on the rayon thread pool with the `parallel` feature.
    pub fn batch_mul<'c>(&'c self, jobs: &[(BigInt, XPoint<'c, F>)]) -> Vec<XPoint<'c, F>> {
        #[cfg(feature = "parallel")]
        let iter = jobs.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = jobs.iter();

        iter.map(|(k, point)| point.scalar_mul(k)).collect()
    }
}

impl<'a, 'b, 'c, F: Field> std::ops::Mul<&'b BigInt> for &'a XPoint<'c, F> {
    type Output = XPoint<'c, F>;
    fn mul(self, rhs: &'b BigInt) -> Self::Output {
        self.scalar_mul(rhs)
    }
}

impl<'c, F: Field> std::ops::Mul<BigInt> for XPoint<'c, F> {
    type Output = XPoint<'c, F>;
    fn mul(self, rhs: BigInt) -> Self::Output {
        self.scalar_mul(&rhs)
    }
}

#[cfg(test)]
crate::macros::test_scalar_mul!(crate::arithmetic::FieldElement<crate::arithmetic::Curve25519Base>);
