use std::fmt::Display;
use std::str::FromStr;
use yui_upoly::{Coeff, CoeffOps};

pub type Int = i64;
pub type Real = f64;

cfg_if::cfg_if! {
    if #[cfg(feature = "tex")] {
        use yui_upoly::tex::TeX;

        pub trait CoeffType: Coeff + PartialOrd + FromStr + Display + TeX
        where for<'x> &'x Self: CoeffOps<Self> {}

        impl<T> CoeffType for T
        where T: Coeff + PartialOrd + FromStr + Display + TeX, for<'x> &'x T: CoeffOps<T> {}
    } else {
        pub trait CoeffType: Coeff + PartialOrd + FromStr + Display
        where for<'x> &'x Self: CoeffOps<Self> {}

        impl<T> CoeffType for T
        where T: Coeff + PartialOrd + FromStr + Display, for<'x> &'x T: CoeffOps<T> {}
    }
}

macro_rules! dispatch_coeff {
    ($app:ident, $args:expr) => {{
        use crate::app::utils::dispatch::*;

        match $args.c_type {
            CType::Z => run!(Int,  $app, $args),
            CType::R => run!(Real, $app, $args),
        }
    }};
}

macro_rules! run {
    ($c_type:ty, $app:ident, $args:expr) => {{
        let app: $app<$c_type> = $app::new($args.clone());
        app.run()
    }}
}

pub(crate) use {dispatch_coeff, run};
