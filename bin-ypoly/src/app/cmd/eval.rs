use std::marker::PhantomData;
use log::info;
use yui_upoly::CoeffOps;

use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_coeff!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[arg(allow_hyphen_values = true)]
    pub poly: String,

    #[arg(allow_hyphen_values = true)]
    pub x: String,

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
        let p = parse_poly::<R>(&self.args.poly)?;
        let x = parse_coeff::<R>(&self.args.x)?;

        info!("p: {p}, x: {x}");

        let y = p.eval(&x);
        fmt_coeff(&y, self.args.format)
    }
}
