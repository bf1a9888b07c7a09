mod ctype;
mod helper;
pub mod dispatch;

pub use ctype::*;
pub use helper::*;
pub use dispatch::CoeffType;
pub(crate) use dispatch::dispatch_coeff;
