use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, Index, IndexMut};
use itertools::Itertools;
use num_traits::{One, Zero};

use crate::{Coeff, CoeffOps, PolyError};
use crate::err::ensure;
use crate::format::{fmt_mono, lc};

// A polynomial c₀ + c₁x + ... + cₙxⁿ over T, stored densely from the constant term up.
//
// Writing through `IndexMut` may leave zeros at the top of `coeffs`.
// Nothing observes them: all reads go through `degree()`, which skips them.

#[derive(Clone)]
pub struct Poly<T> {
    pub(crate) coeffs: Vec<T>
}

impl<T> Poly<T>
where T: Clone + Zero {
    pub fn from_const(c: T) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Builds a polynomial from its coefficients, leading coefficient first:
    /// `Poly::new([1, 0, -1])` is `x² - 1`.
    ///
    /// No trimming happens here, `Poly::new([0, 1])` has degree 0 from the start.
    pub fn new<I>(desc: I) -> Self
    where I: IntoIterator<Item = T> {
        let mut coeffs = desc.into_iter().collect_vec();
        coeffs.reverse();
        Self::from_coeffs(coeffs)
    }

    /// Builds a polynomial from its coefficients, constant term first.
    pub fn from_coeffs(coeffs: Vec<T>) -> Self {
        if coeffs.is_empty() {
            Self::from_const(T::zero())
        } else {
            Self { coeffs }
        }
    }

    /// The monomial `c·xᵏ`.
    pub fn mono(c: T, k: usize) -> Self {
        let mut p = Self::from_const(c);
        p.shift(k);
        p
    }

    pub fn variable() -> Self
    where T: One {
        Self::mono(T::one(), 1)
    }

    /// The highest exponent with a non-zero coefficient, `0` for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|c| !c.is_zero()).unwrap_or(0)
    }

    /// Drops zero coefficients above the degree.
    pub fn normalize(&mut self) {
        let d = self.degree();
        self.coeffs.truncate(d + 1);
    }

    /// The coefficients `c₀, ..., cₙ` with `n = self.degree()`.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs[..=self.degree()]
    }

    pub fn into_coeffs(mut self) -> Vec<T> {
        self.normalize();
        self.coeffs
    }

    pub fn coeff(&self, i: usize) -> Result<&T, PolyError> {
        let degree = self.degree();
        ensure!(i <= degree, PolyError::OutOfRange { index: i, degree });
        Ok(&self.coeffs[i])
    }

    /// Mutable access to the coefficient of `xⁱ`,
    /// extending the storage with zeros when `i` is beyond it.
    pub fn coeff_mut(&mut self, i: usize) -> &mut T {
        if i >= self.coeffs.len() {
            self.coeffs.resize(i + 1, T::zero());
        }
        &mut self.coeffs[i]
    }

    pub fn const_term(&self) -> &T {
        &self.coeffs[0]
    }

    pub fn lead_coeff(&self) -> &T {
        &self.coeffs[self.degree()]
    }

    pub fn is_const(&self) -> bool {
        self.degree() == 0
    }

    /// Multiplies by `xᵏ` in place.
    pub fn shift(&mut self, k: usize) {
        if k == 0 {
            return
        }

        self.normalize();

        let mut coeffs = vec![T::zero(); k];
        coeffs.append(&mut self.coeffs);
        self.coeffs = coeffs;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        let d = self.degree();
        self.coeffs[..=d].iter_mut()
    }
}

impl<T> Poly<T>
where T: Clone + Zero + PartialOrd {
    // lower degree first, then the coefficients from the constant term up.
    fn lt_by_deg(&self, other: &Self) -> bool {
        let (d, e) = (self.degree(), other.degree());
        if d != e {
            return d < e
        }

        for (a, b) in self.coeffs().iter().zip(other.coeffs()) {
            if a < b {
                return true
            } else if b < a {
                return false
            }
        }
        false
    }

    fn cmp_by_deg(&self, other: &Self) -> Ordering {
        if self.lt_by_deg(other) {
            Ordering::Less
        } else if self == other {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl<T> From<T> for Poly<T>
where T: Clone + Zero {
    fn from(c: T) -> Self {
        Self::from_const(c)
    }
}

impl<T> Default for Poly<T>
where T: Clone + Zero {
    fn default() -> Self {
        Self::from_const(T::zero())
    }
}

impl<T> PartialEq for Poly<T>
where T: Clone + Zero + PartialEq {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs() == other.coeffs()
    }
}

impl<T> Eq for Poly<T>
where T: Clone + Zero + Eq {}

// `partial_cmp` never returns `None`, so that
// `a > b` iff `!(a < b) && a != b`, `a <= b` iff `!(a > b)` and `a >= b` iff `!(a < b)`.
impl<T> PartialOrd for Poly<T>
where T: Clone + Zero + PartialOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_by_deg(other))
    }
}

impl<T> Ord for Poly<T>
where T: Clone + Zero + Ord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by_deg(other)
    }
}

impl<T> Index<usize> for Poly<T>
where T: Clone + Zero {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match self.coeff(i) {
            Ok(c) => c,
            Err(e) => panic!("{e}")
        }
    }
}

impl<T> IndexMut<usize> for Poly<T>
where T: Clone + Zero {
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.coeff_mut(i)
    }
}

impl<T> Zero for Poly<T>
where T: Clone + Zero + for<'x> AddAssign<&'x T> {
    fn zero() -> Self {
        Self::from_const(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }
}

impl<T> One for Poly<T>
where T: Coeff, for<'x> &'x T: CoeffOps<T> {
    fn one() -> Self {
        Self::from_const(T::one())
    }
}

impl<T> IntoIterator for Poly<T>
where T: Clone + Zero {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_coeffs().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Poly<T>
where T: Clone + Zero {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Poly<T>
where T: Clone + Zero + Display {
    fn fmt_terms(&self, f: &mut std::fmt::Formatter<'_>, unicode: bool) -> std::fmt::Result {
        let terms = self.coeffs().iter().enumerate().rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| (fmt_mono("x", i, unicode), c));
        f.write_str(&lc(terms))
    }
}

// `{}` writes exponents as superscripts, `{:#}` as `x^k`.
impl<T> Display for Poly<T>
where T: Clone + Zero + Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unicode = !f.alternate();
        self.fmt_terms(f, unicode)
    }
}

impl<T> Debug for Poly<T>
where T: Clone + Zero + Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        impl<T> Serialize for Poly<T>
        where T: Clone + Zero + Serialize {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where S: Serializer {
                self.coeffs().serialize(serializer)
            }
        }

        impl<'de, T> Deserialize<'de> for Poly<T>
        where T: Clone + Zero + Deserialize<'de> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where D: Deserializer<'de> {
                let coeffs = Vec::<T>::deserialize(deserializer)?;
                Ok(Self::from_coeffs(coeffs))
            }
        }
    }
}
