use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum PolyError {
    #[display("index {index} is out of range (degree: {degree})")]
    OutOfRange { index: usize, degree: usize },

    #[display("divide by zero")]
    DivByZero,

    #[display("cannot parse '{input}' as a polynomial")]
    Parse { input: String },
}

impl std::error::Error for PolyError {}

macro_rules! ensure {
    ($cond:expr, $e:expr) => {{
        if !$cond {
            return Err($e)
        }
    }}
}

pub(crate) use ensure;
