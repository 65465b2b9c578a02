//! Implementation of std::str::FromStr

use crate::{DecimalError, FixedDecimal};

use std::str::FromStr;

impl FromStr for FixedDecimal {
    type Err = DecimalError;

    #[inline]
    fn from_str(s: &str) -> Result<FixedDecimal, DecimalError> {
        FixedDecimal::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let fd: FixedDecimal = "-123.45".parse().unwrap();
        assert_eq!(fd.to_string_with_scale(-1), "-123.45");

        let err = "12..3".parse::<FixedDecimal>();
        assert_eq!(err, Err(DecimalError::ConversionSyntax));
    }
}
