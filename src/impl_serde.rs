//!
//! Support for serde implementations
//!
use crate::FixedDecimal;
use serde::{de, ser};

use std::fmt;
use std::str::FromStr;

impl ser::Serialize for FixedDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a FixedDecimal
struct FixedDecimalVisitor;

impl<'de> de::Visitor<'de> for FixedDecimalVisitor {
    type Value = FixedDecimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a number or formatted decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<FixedDecimal, E>
    where
        E: de::Error,
    {
        FixedDecimal::from_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<FixedDecimal, E>
    where
        E: de::Error,
    {
        Ok(FixedDecimal::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<FixedDecimal, E>
    where
        E: de::Error,
    {
        Ok(FixedDecimal::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<FixedDecimal, E>
    where
        E: de::Error,
    {
        // shortest round-trip rendering, then the string parser; the
        // exact binary expansion of the float is not what a decimal
        // column stores
        FixedDecimal::parse(&value.to_string()).map_err(|err| E::custom(format!("{}", err)))
    }
}

impl<'de> de::Deserialize<'de> for FixedDecimal {
    fn deserialize<D>(d: D) -> Result<FixedDecimal, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(FixedDecimalVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{assert_de_tokens, assert_tokens, Token};

    mod serde_serialize_deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let expected = Token::Str($output);
                    let decimal: FixedDecimal = $input.parse().unwrap();
                    assert_tokens(&decimal, &[expected]);
                }
            };
        }

        impl_case!(case_1d0: "1.0" => "1.0");
        impl_case!(case_0d5: "0.5" => "0.5");
        impl_case!(case_50: "50" => "50");
        impl_case!(case_n2d22: "-2.22" => "-2.22");
        impl_case!(case_1en3: "1e-3" => "0.001");
        impl_case!(case_d25: ".25" => "0.25");
        impl_case!(case_12d34e1: "12.34e1" => "123.4");
        impl_case!(case_40d0010: "40.0010" => "40.0010");
    }

    mod serde_deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ($( $ttype:ident ),+ : $input:literal) => {
                $( paste! { impl_case!([< case_ $input _ $ttype:lower >] : $ttype : $input); } )*
            };
            ($name:ident : $type:ident : $input:literal) => {
                #[test]
                fn $name() {
                    let expected = FixedDecimal::from($input);
                    let token = Token::$type($input);
                    assert_de_tokens(&expected, &[token]);
                }
            };
        }

        impl_case!(I64, U64 : 0);
        impl_case!(I64, U64 : 1);
        impl_case!(case_n1_i64 : I64 : -1i64);
        impl_case!(case_min_i64 : I64 : -9_223_372_036_854_775_808i64);
    }

    mod serde_deserialize_float {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $expected:literal) => {
                #[test]
                fn $name() {
                    let expected: FixedDecimal = $expected.parse().unwrap();
                    let token = Token::F64($input);
                    assert_de_tokens(&expected, &[token]);
                }
            };
        }

        impl_case!(case_1d0: 1.0 => "1");
        impl_case!(case_0d5: 0.5 => "0.5");
        impl_case!(case_n100d25: -100.25 => "-100.25");
    }
}
