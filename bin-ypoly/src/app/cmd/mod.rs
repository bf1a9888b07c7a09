pub mod calc;
pub mod eval;
