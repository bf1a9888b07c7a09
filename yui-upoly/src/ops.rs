use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use auto_impl_ops::auto_ops;
use num_traits::{One, Zero};

use crate::{Coeff, CoeffOps, Poly};

impl<T> Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    /// Evaluates `Σ cᵢ xⁱ` from the constant term up, keeping a running power of `x`.
    pub fn eval(&self, x: &T) -> T {
        let mut value = T::zero();
        let mut pow = T::one();

        for c in self.iter() {
            value += &(c * &pow);
            pow = &pow * x;
        }

        value
    }

    /// The composition `self(q)`.
    pub fn eval_poly(&self, q: &Self) -> Self {
        let mut value = Self::zero();
        let mut pow = Self::one();

        for c in self.iter() {
            value += &pow * c;
            pow *= q;
        }

        value
    }

    pub fn pow(&self, n: u32) -> Self {
        let mut res = Self::one();
        for _ in 0..n {
            res *= self
        }
        res
    }
}

macro_rules! impl_add_assign_op {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<T> $trait<&Poly<T>> for Poly<T>
        where T: Clone + Zero + for<'x> $trait<&'x T> {
            fn $method(&mut self, rhs: &Poly<T>) {
                self.normalize();

                let e = rhs.degree();
                if self.degree() < e {
                    self.coeff_mut(e); // extend to deg(rhs)
                }

                for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs()) {
                    a.$method(b)
                }

                self.normalize();
            }
        }

        #[auto_ops]
        impl<T> $trait<&T> for Poly<T>
        where T: Clone + Zero + for<'x> $trait<&'x T> {
            fn $method(&mut self, rhs: &T) {
                self.coeffs[0].$method(rhs);
                self.normalize();
            }
        }
    };
}

impl_add_assign_op!(AddAssign, add_assign);
impl_add_assign_op!(SubAssign, sub_assign);

#[auto_ops]
impl<T> MulAssign<&Poly<T>> for Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    fn mul_assign(&mut self, rhs: &Poly<T>) {
        let (a, b) = (self.coeffs(), rhs.coeffs());
        let mut res = vec![T::zero(); a.len() + b.len() - 1];

        for (i, x) in a.iter().enumerate() {
            for (j, y) in b.iter().enumerate() {
                res[i + j] += &(x * y);
            }
        }

        self.coeffs = res;
        self.normalize();
    }
}

#[auto_ops]
impl<T> MulAssign<&T> for Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    fn mul_assign(&mut self, rhs: &T) {
        for c in self.coeffs.iter_mut() {
            *c = &*c * rhs;
        }
        self.normalize();
    }
}

impl<T> Neg for Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Poly::<T>::zero() - self
    }
}

impl<T> Neg for &Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    type Output = Poly<T>;
    fn neg(self) -> Self::Output {
        Poly::<T>::zero() - self
    }
}

macro_rules! impl_accum {
    ($trait:ident, $method:ident, $accum_method:ident, $accum_init:ident) => {
        impl<T> $trait for Poly<T>
        where T: Coeff, for<'x> &'x T: CoeffOps<T> {
            fn $method<Iter: Iterator<Item = Self>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, p| {
                    res.$accum_method(p);
                    res
                })
            }
        }

        impl<'a, T> $trait<&'a Poly<T>> for Poly<T>
        where T: Coeff, for<'x> &'x T: CoeffOps<T> {
            fn $method<Iter: Iterator<Item = &'a Poly<T>>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, p| {
                    res.$accum_method(p);
                    res
                })
            }
        }
    }
}

impl_accum!(Sum, sum, add_assign, zero);
impl_accum!(Product, product, mul_assign, one);

// `c + p`, `c * p`, ... for primitive scalars `c`.
macro_rules! impl_scalar_lhs_op {
    ($trait:ident, $method:ident, $($t:ty),*) => {
        $(
            impl $trait<Poly<$t>> for $t {
                type Output = Poly<$t>;
                fn $method(self, rhs: Poly<$t>) -> Self::Output {
                    Poly::<$t>::from_const(self).$method(rhs)
                }
            }

            impl $trait<&Poly<$t>> for $t {
                type Output = Poly<$t>;
                fn $method(self, rhs: &Poly<$t>) -> Self::Output {
                    Poly::<$t>::from_const(self).$method(rhs)
                }
            }
        )*
    };
}

impl_scalar_lhs_op!(Add, add, i8, i16, i32, i64, i128, isize, f32, f64);
impl_scalar_lhs_op!(Sub, sub, i8, i16, i32, i64, i128, isize, f32, f64);
impl_scalar_lhs_op!(Mul, mul, i8, i16, i32, i64, i128, isize, f32, f64);

pub(crate) use impl_scalar_lhs_op;
