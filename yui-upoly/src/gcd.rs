use log::{debug, trace};
use num_traits::Zero;

use crate::{Coeff, CoeffOps, Poly};

/// The Euclidean algorithm on `a` and `b`.
///
/// The operand that compares greater (by degree, then by coefficients from the
/// constant term up) is divided first. No normalization of the leading coefficient
/// is done, so over a field the result is a gcd up to a unit:
/// `gcd(x² - 1, x + 1) = x + 1`, but `gcd(2x - 5, x + 1) = 3.5`.
pub fn gcd<T>(a: &Poly<T>, b: &Poly<T>) -> Poly<T>
where T: Coeff + PartialOrd, for<'x> &'x T: CoeffOps<T> {
    let (mut f, mut g) = if a > b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    };

    let mut step = 0;

    while !g.is_zero() {
        let (_, r) = f.long_div(&g);
        trace!("gcd[{step}]: deg(f) = {}, deg(g) = {}, deg(r) = {}", f.degree(), g.degree(), r.degree());

        f = std::mem::replace(&mut g, r);
        step += 1;
    }

    debug!("gcd: {step} steps, deg = {}", f.degree());

    f
}

impl<T> Poly<T>
where T: Coeff + PartialOrd, for<'x> &'x T: CoeffOps<T> {
    pub fn gcd(&self, other: &Self) -> Self {
        gcd::<T>(self, other)
    }
}
