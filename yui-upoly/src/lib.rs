mod coeff;
mod err;
mod poly;
mod ops;
mod div;
mod gcd;
mod parse;

pub mod format;
pub mod tex;
pub mod util;

#[cfg(test)]
mod proptests;

pub use coeff::*;
pub use err::*;
pub use poly::*;
pub use gcd::gcd;
