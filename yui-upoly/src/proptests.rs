use num_rational::Ratio;
use num_traits::Zero;
use proptest::prelude::*;

use crate::{gcd, Poly};

type Q = Ratio<i64>;

fn coeff(n: i64) -> impl Strategy<Value = Q> {
    (-n..=n).prop_map(Q::from_integer)
}

// degree <= max_deg, leading coefficient first.
fn poly(max_deg: usize, n: i64) -> impl Strategy<Value = Poly<Q>> {
    proptest::collection::vec(coeff(n), 1..=max_deg + 1).prop_map(Poly::new)
}

fn nonzero_poly(max_deg: usize, n: i64) -> impl Strategy<Value = Poly<Q>> {
    poly(max_deg, n).prop_filter("must be non-zero", |p| !p.is_zero())
}

proptest! {
    #[test]
    fn add_sub(p in poly(6, 50), q in poly(6, 50)) {
        prop_assert_eq!(&(&p + &q) - &q, p);
    }

    #[test]
    fn mul_commutative(p in poly(5, 50), q in poly(5, 50)) {
        prop_assert_eq!(&p * &q, &q * &p);
    }

    #[test]
    fn mul_degree(p in nonzero_poly(5, 50), q in nonzero_poly(5, 50)) {
        prop_assert_eq!((&p * &q).degree(), p.degree() + q.degree());
    }

    #[test]
    fn div_identity(p in poly(5, 20), r in nonzero_poly(3, 20)) {
        prop_assume!(p.degree() >= r.degree());

        let (q, rem) = p.div_rem(&r).unwrap();
        prop_assert_eq!(&(&q * &r) + &rem, p.clone());
        prop_assert_eq!(&p / &r, q);
        prop_assert_eq!(&p % &r, rem.clone());
        prop_assert!(rem.is_zero() || rem.degree() < r.degree());
    }

    #[test]
    fn eval_linear(p in poly(5, 20), q in poly(5, 20), x in -5i64..=5) {
        let x = Q::from_integer(x);
        prop_assert_eq!((&p + &q).eval(&x), p.eval(&x) + q.eval(&x));
        prop_assert_eq!((&p * &q).eval(&x), p.eval(&x) * q.eval(&x));
    }

    #[test]
    fn gcd_symmetric(p in poly(2, 10), q in poly(2, 10)) {
        prop_assert_eq!(gcd(&p, &q), gcd(&q, &p));
    }

    #[test]
    fn gcd_divides(p in nonzero_poly(2, 10), q in nonzero_poly(2, 10)) {
        let d = gcd(&p, &q);
        prop_assert!(!d.is_zero());
        prop_assert!((&p % &d).is_zero());
        prop_assert!((&q % &d).is_zero());
    }
}
