macro_rules! test_scalar_mul {
    ($t: ty) => {
        #[cfg(test)]
        mod scalar_mul_properties {
            use crate::{BigInt, MontgomeryCurve, Ring, XPoint};

            type TestField = $t;

            fn curve() -> MontgomeryCurve<TestField> {
                MontgomeryCurve::new(<TestField as Ring>::from_u64(6)).unwrap()
            }

            fn sample_point(curve: &MontgomeryCurve<TestField>) -> XPoint<'_, TestField> {
                curve.point(
                    <TestField as Ring>::from_u64(21),
                    <TestField as Ring>::from_u64(7),
                )
            }

            fn scaled<'c>(
                point: &XPoint<'c, TestField>,
                lambda: u64,
            ) -> XPoint<'c, TestField> {
                let lambda = <TestField as Ring>::from_u64(lambda);
                point
                    .curve()
                    .point(*point.x() * lambda, *point.z() * lambda)
            }

            #[test]
            fn degenerate_inputs() {
                let curve = curve();
                let p = sample_point(&curve);
                let inf = curve.infinity();
                let t = curve.two_torsion();

                assert_eq!(p.scalar_mul(&BigInt::from(0)), inf);
                for k in [-7i64, -2, 1, 2, 3, 1 << 40] {
                    let k = BigInt::from(k);
                    assert_eq!(inf.scalar_mul(&k), inf);
                    assert_eq!(inf.scalar_mul_ct(&k), inf);
                }
                for k in 1..20i64 {
                    let expected = if k % 2 == 0 { inf } else { t };
                    assert_eq!(t.scalar_mul(&BigInt::from(k)), expected);
                    assert_eq!(t.scalar_mul(&BigInt::from(-k)), expected);
                    assert_eq!(t.scalar_mul_ct(&BigInt::from(k)), expected);
                }
                // any nonzero Z marks the 2-torsion point
                let t3 = curve.point(<TestField as Ring>::zero(), <TestField as Ring>::from_u64(3));
                assert_eq!(t3.scalar_mul(&BigInt::from(5)), t3);
            }

            #[test]
            fn doubling_agrees_with_scalar_mul() {
                let curve = curve();
                let p = sample_point(&curve);
                let two = BigInt::from(2);
                assert!(p.scalar_mul(&two).projective_eq(&p.normalize().double()));
                assert!(p.double_times(5).projective_eq(&p.scalar_mul(&BigInt::from(32))));
            }

            #[test]
            fn sign_invariance() {
                let curve = curve();
                let p = sample_point(&curve);
                let big = (BigInt::from(1) << 200) + BigInt::from(12345);
                for k in [BigInt::from(1), BigInt::from(2), BigInt::from(77), big] {
                    let neg = -k.clone();
                    assert_eq!(p.scalar_mul(&k), p.scalar_mul(&neg));
                    assert_eq!(p.scalar_mul_ct(&k), p.scalar_mul(&k));
                    assert_eq!(p.scalar_mul_ct(&neg), p.scalar_mul(&k));
                }
            }

            #[test]
            fn ladder_matches_differential_chain() {
                let curve = curve();
                let p = sample_point(&curve);

                // chain[n] = nP, built as nP = (n - 1)P + P with difference (n - 2)P
                let mut chain = vec![curve.infinity(), p, p.double()];
                for n in 2..50 {
                    let next = chain[n].differential_add(&p, &chain[n - 1]);
                    chain.push(next);
                }

                for (k, expected) in chain.iter().enumerate().skip(1) {
                    let k = BigInt::from(k);
                    let q = p.scalar_mul(&k);
                    assert!(q.projective_eq(expected));
                    assert_eq!(p.scalar_mul_ct(&k), q);
                }
            }

            #[test]
            fn scalar_mul_composes() {
                let curve = curve();
                let p = sample_point(&curve);
                let a = BigInt::from(1234567u64);
                let b = BigInt::from(89u64);
                let ab = &a * &b;
                let lhs = p.scalar_mul(&b).scalar_mul(&a);
                assert!(lhs.projective_eq(&p.scalar_mul(&ab)));
            }

            #[test]
            fn normalize_and_projective_equality() {
                let curve = curve();
                let p = sample_point(&curve);
                let n = p.normalize();
                assert_eq!(n.normalize(), n);
                assert_eq!(n.z(), &<TestField as Ring>::one());
                assert_eq!(n.x(), &<TestField as Ring>::from_u64(3));

                let q = scaled(&p, 5);
                let r = scaled(&q, 11);
                assert_ne!(p, q);
                assert!(p.projective_eq(&p));
                assert!(p.projective_eq(&q) && q.projective_eq(&p));
                assert!(q.projective_eq(&r) && p.projective_eq(&r));
                for lambda in [2, 3, 1000, u64::MAX] {
                    assert!(p.projective_eq(&scaled(&p, lambda)));
                }
                assert!(!p.projective_eq(&p.double()));

                let mut m = q;
                m.normalize_in_place();
                assert_eq!(m, n);
            }
        }
    };
}

pub(crate) use test_scalar_mul;
