use std::str::FromStr;
use regex::Regex;

use crate::{Coeff, CoeffOps, Poly, PolyError};

// "1, 0, -1" or "[1, 0, -1]", leading coefficient first.
const POLY_PATTERN: &str = r"^\s*(?:\[([^\[\]]*)\]|([^\[\]]*))\s*$";

impl<T> FromStr for Poly<T>
where T: Coeff + FromStr, for<'x> &'x T: CoeffOps<T> {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PolyError::Parse { input: s.to_string() };

        let r = Regex::new(POLY_PATTERN).map_err(|_| err())?;
        let Some(m) = r.captures(s) else {
            return Err(err())
        };

        let list = m.get(1).or(m.get(2)).map(|m| m.as_str()).unwrap_or("");
        if list.trim().is_empty() {
            return Err(err())
        }

        let coeffs = list.split(',').map(|c|
            T::from_str(c.trim()).map_err(|_| err())
        ).collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(coeffs))
    }
}
