use std::str::FromStr;
use yui_upoly::{CoeffOps, Poly};

use crate::app::err::*;
use super::{CoeffType, Format};

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(f).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

pub fn parse_poly<R>(s: &str) -> Result<Poly<R>, Box<dyn std::error::Error>>
where R: CoeffType, for<'x> &'x R: CoeffOps<R> {
    let p = s.parse::<Poly<R>>()?;
    Ok(p)
}

pub fn parse_coeff<R>(s: &str) -> Result<R, Box<dyn std::error::Error>>
where R: FromStr {
    match R::from_str(s.trim()) {
        Ok(x) => Ok(x),
        Err(_) => err!("cannot parse '{}' as {}.", s, std::any::type_name::<R>())
    }
}

pub fn fmt_poly<R>(p: &Poly<R>, format: Format) -> Result<String, Box<dyn std::error::Error>>
where R: CoeffType, for<'x> &'x R: CoeffOps<R> {
    match format {
        Format::Unicode => Ok(p.to_string()),
        Format::TeX     => tex_string(p)
    }
}

pub fn fmt_coeff<R>(x: &R, format: Format) -> Result<String, Box<dyn std::error::Error>>
where R: CoeffType, for<'x> &'x R: CoeffOps<R> {
    match format {
        Format::Unicode => Ok(x.to_string()),
        Format::TeX     => tex_string(x)
    }
}

#[cfg(feature = "tex")]
fn tex_string<X>(x: &X) -> Result<String, Box<dyn std::error::Error>>
where X: yui_upoly::tex::TeX {
    Ok(x.tex_string())
}

#[cfg(not(feature = "tex"))]
fn tex_string<X>(_: &X) -> Result<String, Box<dyn std::error::Error>> {
    err!("build with `--features tex` to enable TeX output.")
}
