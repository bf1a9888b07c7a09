#![cfg(feature = "tex")]

use num_traits::Zero;

use crate::{Coeff, CoeffOps, Poly};
use crate::format::lc;

pub trait TeX {
    fn tex_math_symbol() -> String;
    fn tex_string(&self) -> String;
}

macro_rules! impl_tex {
    ($symbol:literal, $($t:ty),*) => {
        $(
            impl TeX for $t {
                fn tex_math_symbol() -> String {
                    String::from($symbol)
                }
                fn tex_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_tex!("\\mathbb{Z}", i8, i16, i32, i64, i128, isize);
impl_tex!("\\mathbb{R}", f32, f64);

fn tex_mono(d: usize) -> String {
    match d {
        0 => String::from("1"),
        1 => String::from("x"),
        _ => format!("x^{{{d}}}")
    }
}

impl<T> TeX for Poly<T>
where T: Coeff + TeX, for<'x> &'x T: CoeffOps<T> {
    fn tex_math_symbol() -> String {
        format!("{}[x]", T::tex_math_symbol())
    }

    fn tex_string(&self) -> String {
        let terms = self.coeffs().iter().enumerate().rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| (tex_mono(i), c.tex_string()));
        lc(terms)
    }
}
