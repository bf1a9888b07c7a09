use std::num::Wrapping;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use num_rational::Ratio;
use num_traits::{One, Zero};

// Coefficients of a polynomial.
// Anything closed under the four arithmetic operations with a zero and a one.
// Implemented for the primitive numbers, `Wrapping` integers and `Ratio`.
// Integer division is allowed to truncate.

pub trait CoeffOps<T = Self>:
    Sized +
    Add<T, Output = T> +
    for<'a> Add<&'a T, Output = T> +
    Sub<T, Output = T> +
    for<'a> Sub<&'a T, Output = T> +
    Mul<T, Output = T> +
    for<'a> Mul<&'a T, Output = T> +
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T>
{}

pub trait Coeff:
    Clone +
    PartialEq +
    Zero +
    One +
    for<'a> AddAssign<&'a Self> +
    for<'a> SubAssign<&'a Self> +
    CoeffOps
where
    for<'a> &'a Self: CoeffOps<Self>
{}

macro_rules! impl_coeff {
    ($($type:ty),*) => {
        $(
            impl CoeffOps for $type {}
            impl<'a> CoeffOps<$type> for &'a $type {}
            impl Coeff for $type {}
        )*
    };
}

impl_coeff!(i8, i16, i32, i64, i128, isize, f32, f64);
impl_coeff!(Wrapping<i8>, Wrapping<i16>, Wrapping<i32>, Wrapping<i64>, Wrapping<i128>, Wrapping<isize>);
impl_coeff!(Ratio<i8>, Ratio<i16>, Ratio<i32>, Ratio<i64>, Ratio<i128>, Ratio<isize>);
