use std::ops::{Div, DivAssign, Rem, RemAssign};
use auto_impl_ops::auto_ops;
use log::trace;
use num_traits::Zero;

use crate::{Coeff, CoeffOps, Poly, PolyError};
use crate::err::ensure;
use crate::ops::impl_scalar_lhs_op;

impl<T> Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    /// Long division `self = q * rhs + r`, returning `(q, r)`.
    ///
    /// Two cases differ from the textbook algorithm:
    ///
    /// * if `deg(self) < deg(rhs)`, the result is `(0, rhs)`, not `(0, self)`.
    /// * the loop stops as soon as the quotient of the leading coefficients is zero,
    ///   which happens with truncating integer division. `deg(r)` may then stay
    ///   `>= deg(rhs)`.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), PolyError> {
        ensure!(!rhs.is_zero(), PolyError::DivByZero);
        Ok(self.long_div(rhs))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, PolyError> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    // `rhs` must be non-zero.
    pub(crate) fn long_div(&self, rhs: &Self) -> (Self, Self) {
        let e = rhs.degree();

        if self.degree() < e {
            return (Self::zero(), rhs.clone())
        }

        let b = rhs.lead_coeff();
        let mut q = Self::zero();
        let mut r = self.clone();

        while r.degree() >= e && !r.is_zero() {
            let d = r.degree();
            let c = r.lead_coeff() / b;

            if c.is_zero() {
                trace!("div: stop at deg(r) = {d}, lead(r) / lead(rhs) = 0.");
                break
            }

            let m = Self::mono(c, d - e); // (a/b) x^{d-e}
            r -= &m * rhs;
            q += m;
        }

        trace!("div: deg(q) = {}, deg(r) = {}", q.degree(), r.degree());

        (q, r)
    }
}

fn unwrap_or_panic<T>(res: Result<T, PolyError>) -> T {
    match res {
        Ok(t) => t,
        Err(e) => panic!("{e}")
    }
}

// `/` and `%` panic when dividing by zero, see `checked_div` and `checked_rem`.

#[auto_ops]
impl<'a, 'b, T> Div<&'b Poly<T>> for &'a Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    type Output = Poly<T>;
    fn div(self, rhs: &'b Poly<T>) -> Self::Output {
        unwrap_or_panic(self.checked_div(rhs))
    }
}

#[auto_ops]
impl<'a, 'b, T> Rem<&'b Poly<T>> for &'a Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    type Output = Poly<T>;
    fn rem(self, rhs: &'b Poly<T>) -> Self::Output {
        unwrap_or_panic(self.checked_rem(rhs))
    }
}

#[auto_ops]
impl<'a, 'b, T> Div<&'b T> for &'a Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    type Output = Poly<T>;
    fn div(self, rhs: &'b T) -> Self::Output {
        let rhs = Poly::<T>::from_const(rhs.clone());
        unwrap_or_panic(self.checked_div(&rhs))
    }
}

#[auto_ops]
impl<'a, 'b, T> Rem<&'b T> for &'a Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    type Output = Poly<T>;
    fn rem(self, rhs: &'b T) -> Self::Output {
        let rhs = Poly::<T>::from_const(rhs.clone());
        unwrap_or_panic(self.checked_rem(&rhs))
    }
}

impl_scalar_lhs_op!(Div, div, i8, i16, i32, i64, i128, isize, f32, f64);
impl_scalar_lhs_op!(Rem, rem, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use std::num::Wrapping;
    use itertools::Itertools;
    use num_rational::Ratio;
    use super::*;

    // middle coefficients of the quotient exceed i32.
    fn seq(n: usize) -> Poly<Wrapping<i32>> {
        Poly::new((1..=n as i32 + 1).map(Wrapping).collect_vec())
    }

    #[test]
    fn div_int() {
        let f = Poly::new([1, 0, -1]);
        let g = Poly::new([1, 1]);

        assert_eq!(&f / &g, Poly::new([1, -1]));
        assert!((&f % &g).is_zero());
    }

    #[test]
    fn div_rem() {
        let f = Poly::new([3.5, -2.0, 1.0]);
        let g = Poly::new([1.0, 5.5]);

        let (q, r) = f.div_rem(&g).unwrap();
        assert_eq!(q, Poly::new([3.5, -21.25]));
        assert_eq!(r, Poly::from_const(117.875));
    }

    #[test]
    fn div_f64() {
        let f = Poly::new([1.0, -1.0, 2.0]);
        let g = Poly::new([1.0, -3.0]);

        assert_eq!(&f / &g, Poly::new([1.0, 2.0]));
        assert_eq!(&f % &g, Poly::from_const(8.0));
    }

    #[test]
    fn div_scalar() {
        let f = Poly::new([1.0, 1.0]);

        assert_eq!(&f / 2.0, Poly::new([0.5, 0.5]));
        assert_eq!(&f % 2.0, Poly::zero());

        let f = Poly::new([1.0, -2.0, 5.0]);
        assert_eq!(&f / 1.0, f);
        assert_eq!(&f % 1.0, Poly::zero());
    }

    #[test]
    fn div_scalar_by_poly() {
        let g = Poly::new([1.0, -2.0, 5.0]);

        assert_eq!(5.0 / &g, Poly::zero());
        assert_eq!(5.0 % &g, g); // the divisor, not 5.
    }

    #[test]
    fn div_lower_degree_returns_divisor() {
        let f = Poly::new([1, 2]);
        let g = Poly::new([1, 0, 1]);

        let (q, r) = f.div_rem(&g).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, g);
    }

    #[test]
    fn div_truncated() {
        // 3x² + 2x + 1 = x (2x + 2) + (x² + 1), then 1 / 2 = 0 stops the loop.
        let f = Poly::new([3, 2, 1]);
        let g = Poly::new([2, 2]);

        let (q, r) = f.div_rem(&g).unwrap();
        assert_eq!(q, Poly::new([1, 0]));
        assert_eq!(r, Poly::new([1, 0, 1]));
        assert!(r.degree() >= g.degree());
    }

    #[test]
    fn div_stress() {
        let f = seq(1000);
        let g = seq(10);
        let q = &f / &g;

        assert_eq!(q.degree(), 990);
        assert_eq!(q[990], Wrapping(1));
        assert_eq!(q[979], Wrapping(12));
        assert_eq!(q[978], Wrapping(-11));
    }

    #[test]
    fn div_assign() {
        let mut f = Poly::new([1, 0, -1]);
        f /= Poly::new([1, 1]);
        assert_eq!(f, Poly::new([1, -1]));

        let mut f = Poly::new([1.0, -1.0, 2.0]);
        f %= Poly::new([1.0, -3.0]);
        assert_eq!(f, Poly::from_const(8.0));

        let mut f = Poly::new([2.0, 4.0]);
        f /= 2.0;
        assert_eq!(f, Poly::new([1.0, 2.0]));
    }

    #[test]
    fn div_by_zero() {
        let f = Poly::new([1.0, 5.0]);

        assert_eq!(f.div_rem(&Poly::zero()), Err(PolyError::DivByZero));
        assert_eq!(f.checked_div(&Poly::from_const(0.0)), Err(PolyError::DivByZero));
        assert_eq!(f.checked_rem(&Poly::new([0.0, 0.0])), Err(PolyError::DivByZero));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn div_by_zero_scalar() {
        let f = Poly::new([1.0, 5.0]);
        let _ = f / 0.0;
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn rem_by_zero_scalar() {
        let f = Poly::new([1.0, 5.0]);
        let _ = f % 0.0;
    }

    #[test]
    fn div_identity_ratio() {
        type R = Ratio<i64>;
        let r = |a: i64, b: i64| R::new(a, b);

        let f = Poly::new([r(1, 1), r(2, 1), r(1, 1)]);
        let g = Poly::new([r(2, 1), r(3, 1)]);

        let (q, rem) = f.div_rem(&g).unwrap();
        assert_eq!(q, Poly::new([r(1, 2), r(1, 4)]));
        assert_eq!(rem, Poly::from_const(r(1, 4)));
        assert_eq!(&q * &g + &rem, f);
    }
}
