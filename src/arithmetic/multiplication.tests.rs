// Test cases for the multiplication kernel; every case is also checked
// with the operands swapped.

macro_rules! impl_case {
    ($name:ident: $a:literal * $b:literal => $c:literal) => {
        #[test]
        fn $name() {
            let lhs: crate::FixedDecimal = $a.parse().unwrap();
            let rhs: crate::FixedDecimal = $b.parse().unwrap();

            let mut product = crate::FixedDecimal::zero();
            mul(&lhs, &rhs, &mut product).unwrap();
            assert_eq!(product.to_string_with_scale(-1), $c);

            let mut commuted = crate::FixedDecimal::zero();
            mul(&rhs, &lhs, &mut commuted).unwrap();
            assert_eq!(commuted.to_string_with_scale(-1), $c);
        }
    };
}

impl_case!(case_0_0: "0" * "0" => "0");
impl_case!(case_0_1: "0" * "1" => "0");
impl_case!(case_1_1: "1" * "1" => "1");
impl_case!(case_1_2: "1" * "2" => "2");
impl_case!(case_1_n1: "1" * "-1" => "-1");
impl_case!(case_n1_n100: "-1" * "-100" => "100");
impl_case!(case_1d0_0: "1.0" * "0" => "0");
impl_case!(case_1d0_0d0: "1.0" * "0.0" => "0.00");
impl_case!(case_n1d0_0d01: "-1.0" * "0.01" => "-0.010");
impl_case!(case_n0d3_1d27: "-0.3" * "1.27" => "-0.381");
impl_case!(case_n0d3_n0d2: "-0.3" * "-0.2" => "0.06");
impl_case!(case_n0d3_0d2: "-0.3" * "0.2" => "-0.06");
impl_case!(case_n0d01_0d001: "-0.01" * "0.001" => "-0.00001");
impl_case!(case_n0d10_0d001: "-0.10" * "0.001" => "-0.00010");
impl_case!(case_n123_0d1: "-123" * "0.1" => "-12.3");
impl_case!(case_1_n12d5: "1" * "-12.5" => "-12.5");
impl_case!(case_n5d0_5d0: "-5.0" * "5.0" => "-25.00");
impl_case!(case_1d0_0d1: "1.0" * "0.1" => "0.10");
impl_case!(case_1d01_0d1: "1.01" * "0.1" => "0.101");
impl_case!(case_1d00000000001_1000d01: "1.00000000001" * "1000.01" => "1000.0100000100001");
impl_case!(case_1d234567890_0d0000000001: "1.234567890" * "0.0000000001" => "0.0000000001234567890");
impl_case!(case_n1d234567890_0d0000000001: "-1.234567890" * "0.0000000001" => "-0.0000000001234567890");

#[test]
fn test_overflow() {
    let lhs: crate::FixedDecimal = "1e41".parse().unwrap();
    let rhs: crate::FixedDecimal = "1e40".parse().unwrap();
    let mut product = crate::FixedDecimal::zero();
    assert_eq!(
        mul(&lhs, &rhs, &mut product),
        Err(crate::DecimalError::Overflow)
    );
}

#[test]
fn test_wide_product_keeps_the_integer_part() {
    // 65 integer digits push the exact 30-digit fraction out entirely
    let lhs: crate::FixedDecimal = "1e64".parse().unwrap();
    let rhs: crate::FixedDecimal = "1.5".parse().unwrap();
    let mut product = crate::FixedDecimal::zero();
    mul(&lhs, &rhs, &mut product).unwrap();
    assert_eq!(
        product.to_string_with_scale(-1),
        "15000000000000000000000000000000000000000000000000000000000000000.0"
    );
}

#[test]
fn test_special_dispatch() {
    let nan: crate::FixedDecimal = "NaN".parse().unwrap();
    let inf: crate::FixedDecimal = "Inf".parse().unwrap();
    let one = crate::FixedDecimal::one();

    let mut dest = crate::FixedDecimal::zero();
    mul_any(&nan, &one, &mut dest).unwrap();
    assert!(dest.is_nan());
    mul_any(&inf, &one, &mut dest).unwrap();
    assert!(dest.is_inf());
    mul_any(&one, &one, &mut dest).unwrap();
    assert!(!dest.is_special());
}
