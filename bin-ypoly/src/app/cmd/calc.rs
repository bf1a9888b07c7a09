use std::marker::PhantomData;
use clap::ValueEnum;
use derive_more::Display;
use log::info;
use yui_upoly::{gcd, CoeffOps, Poly};

use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_coeff!(App, args)
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Op {
    #[default] Add,
    Sub, Mul, Div, Rem, DivRem, Gcd
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub op: Op,

    #[arg(allow_hyphen_values = true)]
    pub lhs: String,

    #[arg(allow_hyphen_values = true)]
    pub rhs: String,

    #[arg(short = 't', long, default_value = "Z")]
    pub c_type: CType,

    #[arg(short, long, default_value = "unicode")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R>
where R: CoeffType, for<'x> &'x R: CoeffOps<R> {
    args: Args,
    _coeff: PhantomData<R>
}

impl<R> App<R>
where R: CoeffType, for<'x> &'x R: CoeffOps<R> {
    pub fn new(args: Args) -> Self {
        App { args, _coeff: PhantomData }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> {
        let f = parse_poly::<R>(&self.args.lhs)?;
        let g = parse_poly::<R>(&self.args.rhs)?;

        info!("lhs: {f}");
        info!("rhs: {g}");

        let res = match self.args.op {
            Op::Add    => self.fmt(&(&f + &g))?,
            Op::Sub    => self.fmt(&(&f - &g))?,
            Op::Mul    => self.fmt(&(&f * &g))?,
            Op::Div    => self.fmt(&f.checked_div(&g)?)?,
            Op::Rem    => self.fmt(&f.checked_rem(&g)?)?,
            Op::DivRem => {
                let (q, r) = f.div_rem(&g)?;
                format!("q = {}\nr = {}", self.fmt(&q)?, self.fmt(&r)?)
            },
            Op::Gcd    => self.fmt(&gcd(&f, &g))?,
        };

        Ok(res)
    }

    fn fmt(&self, p: &Poly<R>) -> Result<String, Box<dyn std::error::Error>> {
        fmt_poly(p, self.args.format)
    }
}
