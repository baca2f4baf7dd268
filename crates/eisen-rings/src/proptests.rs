//! Property-based tests for Eisenstein integer and fraction arithmetic.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use proptest::prelude::*;

    use crate::gcd::{extended_gcd, gcd, gcd_with_config, GcdConfig, Termination};
    use crate::lattice::{from_complex, remainder};
    use crate::traits::{Arithmetic, Ring};
    use crate::{EisensteinFraction, EisensteinInteger};

    // Strategy for generating small Eisenstein integers
    fn small_eisenstein() -> impl Strategy<Value = EisensteinInteger> {
        (-100i64..100i64, -100i64..100i64).prop_map(|(a, b)| EisensteinInteger::new(a, b))
    }

    // Strategy for generating non-zero Eisenstein integers
    fn non_zero_eisenstein() -> impl Strategy<Value = EisensteinInteger> {
        small_eisenstein().prop_filter("non-zero", |x| !x.is_zero())
    }

    fn fraction() -> impl Strategy<Value = EisensteinFraction> {
        (small_eisenstein(), non_zero_eisenstein())
            .prop_map(|(n, d)| EisensteinFraction::new(n, d).expect("non-zero denominator"))
    }

    fn non_zero_fraction() -> impl Strategy<Value = EisensteinFraction> {
        (non_zero_eisenstein(), non_zero_eisenstein())
            .prop_map(|(n, d)| EisensteinFraction::new(n, d).expect("non-zero denominator"))
    }

    proptest! {
        // Ring axioms

        #[test]
        fn add_commutative(x in small_eisenstein(), y in small_eisenstein()) {
            prop_assert_eq!(x.add(&y), y.add(&x));
        }

        #[test]
        fn add_associative(x in small_eisenstein(), y in small_eisenstein(), z in small_eisenstein()) {
            prop_assert_eq!(x.add(&y).add(&z), x.add(&y.add(&z)));
        }

        #[test]
        fn mul_commutative(x in small_eisenstein(), y in small_eisenstein()) {
            prop_assert_eq!(x.multiply(&y), y.multiply(&x));
        }

        #[test]
        fn mul_associative(x in small_eisenstein(), y in small_eisenstein(), z in small_eisenstein()) {
            prop_assert_eq!(x.multiply(&y).multiply(&z), x.multiply(&y.multiply(&z)));
        }

        #[test]
        fn distributive(x in small_eisenstein(), y in small_eisenstein(), z in small_eisenstein()) {
            prop_assert_eq!(x.multiply(&y.add(&z)), x.multiply(&y).add(&x.multiply(&z)));
        }

        #[test]
        fn norm_multiplicative(x in small_eisenstein(), y in small_eisenstein()) {
            prop_assert_eq!(x.multiply(&y).norm(), x.norm() * y.norm());
        }

        #[test]
        fn norm_matches_complex_modulus(x in small_eisenstein()) {
            let z = x.to_complex();
            prop_assert!((z.norm() - x.modulus()).abs() < 1e-9);
        }

        #[test]
        fn from_complex_inverts_to_complex(x in small_eisenstein()) {
            prop_assert_eq!(from_complex(x.to_complex()).unwrap(), x);
        }

        // Division with remainder

        #[test]
        fn remainder_norm_descends(x in small_eisenstein(), y in non_zero_eisenstein()) {
            let r = remainder(&x, &y).unwrap();
            prop_assert!(r.norm() * IBig::from(4) <= y.norm() * IBig::from(3));
        }

        #[test]
        fn floor_divide_reconstructs(x in small_eisenstein(), y in non_zero_eisenstein()) {
            let q = x.floor_divide(&y).unwrap();
            let r = x.modulo(&y).unwrap();
            prop_assert_eq!(q.multiply(&y).add(&r), x);
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(x in non_zero_eisenstein(), y in non_zero_eisenstein()) {
            let g = gcd(&x, &y);
            prop_assert!(remainder(&x, &g).unwrap().norm() == IBig::ZERO);
            prop_assert!(remainder(&y, &g).unwrap().norm() == IBig::ZERO);
        }

        #[test]
        fn gcd_of_common_factor(g in non_zero_eisenstein(), x in small_eisenstein(), y in small_eisenstein()) {
            let d = gcd(&g.multiply(&x), &g.multiply(&y));
            prop_assert!(d.is_divisible_by(&g));
        }

        #[test]
        fn gcd_norm_symmetric(x in small_eisenstein(), y in small_eisenstein()) {
            prop_assert_eq!(gcd(&x, &y).norm(), gcd(&y, &x).norm());
        }

        #[test]
        fn bezout_identity(x in small_eisenstein(), y in small_eisenstein()) {
            let (g, s, t) = extended_gcd(&x, &y);
            prop_assert_eq!(s.multiply(&x).add(&t.multiply(&y)), g.clone());
            prop_assert_eq!(g.norm(), gcd(&x, &y).norm());
        }

        #[test]
        fn dot_product_termination_never_outruns_exact(x in non_zero_eisenstein(), y in non_zero_eisenstein()) {
            let config = GcdConfig { termination: Termination::DotProduct, ..GcdConfig::default() };
            let d = gcd_with_config(&x, &y, &config).unwrap();
            // Stopping early can only leave a multiple of the true gcd.
            prop_assert!(d.is_divisible_by(&gcd(&x, &y)));
        }

        // Fraction properties

        #[test]
        fn fraction_is_reduced(n in small_eisenstein(), d in non_zero_eisenstein()) {
            let f = EisensteinFraction::new(n, d).unwrap();
            if !f.is_zero() {
                prop_assert_eq!(gcd(f.numerator(), f.denominator()).norm(), IBig::ONE);
            }
        }

        #[test]
        fn fraction_keeps_value(n in small_eisenstein(), d in non_zero_eisenstein()) {
            let f = EisensteinFraction::new(n.clone(), d.clone()).unwrap();
            prop_assert_eq!(f.numerator().multiply(&d), n.multiply(f.denominator()));
        }

        #[test]
        fn fraction_inverse(x in non_zero_fraction()) {
            let inv = x.inverse().unwrap();
            prop_assert_eq!(x.multiply(&inv), EisensteinFraction::one());
        }

        #[test]
        fn fraction_add_commutative(p in fraction(), q in fraction()) {
            prop_assert_eq!(p.add(&q), q.add(&p));
        }

        #[test]
        fn fraction_distributive(p in fraction(), q in fraction(), r in fraction()) {
            let lhs = p.multiply(&q.add(&r));
            let rhs = p.multiply(&q).add(&p.multiply(&r));
            prop_assert!(lhs.value_eq(&rhs));
        }

        #[test]
        fn fraction_divide_undoes_multiply(p in fraction(), q in non_zero_fraction()) {
            let back = p.multiply(&q).divide(&q).unwrap();
            prop_assert!(back.value_eq(&p));
        }

        #[test]
        fn fraction_subtract_self_is_zero(p in fraction()) {
            prop_assert!(p.subtract(&p).is_zero());
        }
    }
}
