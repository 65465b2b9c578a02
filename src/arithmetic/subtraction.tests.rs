// Test cases for the subtraction kernel; every case also checks that
// swapping the operands negates the difference.

macro_rules! impl_case {
    ($name:ident: $a:literal - $b:literal => $c:literal) => {
        #[test]
        fn $name() {
            let lhs: crate::FixedDecimal = $a.parse().unwrap();
            let rhs: crate::FixedDecimal = $b.parse().unwrap();

            let mut diff = crate::FixedDecimal::zero();
            sub(&lhs, &rhs, &mut diff);
            assert_eq!(diff.to_string_with_scale(-1), $c);

            let mut swapped = crate::FixedDecimal::zero();
            sub(&rhs, &lhs, &mut swapped);
            assert_eq!(-swapped, diff);
        }
    };
}

impl_case!(case_0_0: "0" - "0" => "0");
impl_case!(case_0_1: "0" - "1" => "-1");
impl_case!(case_0_n1: "0" - "-1" => "1");
impl_case!(case_n1_0: "-1" - "0" => "-1");
impl_case!(case_1_1: "1" - "1" => "0");
impl_case!(case_1_2: "1" - "2" => "-1");
impl_case!(case_2_1: "2" - "1" => "1");
impl_case!(case_1_n1: "1" - "-1" => "2");
impl_case!(case_n1_1: "-1" - "1" => "-2");
impl_case!(case_n1_n100: "-1" - "-100" => "99");
impl_case!(case_1d0_0: "1.0" - "0" => "1.0");
impl_case!(case_n1d0_0d01: "-1.0" - "0.01" => "-1.01");
impl_case!(case_n0d3_1d27: "-0.3" - "1.27" => "-1.57");
impl_case!(case_n0d3_n0d2: "-0.3" - "-0.2" => "-0.1");
impl_case!(case_n0d3_0d2: "-0.3" - "0.2" => "-0.5");
impl_case!(case_n0d01_0d001: "-0.01" - "0.001" => "-0.011");
impl_case!(case_n123_0d1: "-123" - "0.1" => "-123.1");
impl_case!(case_1_n12d5: "1" - "-12.5" => "13.5");
impl_case!(case_n5d0_5d0: "-5.0" - "5.0" => "-10.0");
impl_case!(case_1d0_0d1: "1.0" - "0.1" => "0.9");
impl_case!(case_1d01_0d1: "1.01" - "0.1" => "0.91");
impl_case!(case_1d00000000001_1000d01: "1.00000000001" - "1000.01" => "-999.00999999999");
impl_case!(case_1d234567890_0d0000000001: "1.234567890" - "0.0000000001" => "1.2345678899");
impl_case!(case_n1d234567890_0d0000000001: "-1.234567890" - "0.0000000001" => "-1.2345678901");
impl_case!(case_1000000000_1: "1000000000" - "1" => "999999999");
impl_case!(case_1_1000000000: "1" - "1000000000" => "-999999999");

#[test]
fn test_zero_lhs_negates_exactly() {
    // 0 - b == -b, including for zero itself
    let zero = crate::FixedDecimal::zero();
    let b: crate::FixedDecimal = "2.5".parse().unwrap();
    let mut diff = crate::FixedDecimal::zero();
    sub(&zero, &b, &mut diff);
    assert_eq!(diff.to_string_with_scale(-1), "-2.5");

    sub(&zero, &zero, &mut diff);
    assert!(diff.is_zero());
    assert!(!diff.is_negative());
}

#[test]
fn test_special_dispatch() {
    let nan: crate::FixedDecimal = "NaN".parse().unwrap();
    let inf: crate::FixedDecimal = "Inf".parse().unwrap();
    let one = crate::FixedDecimal::one();

    let mut dest = crate::FixedDecimal::zero();
    sub_any(&nan, &one, &mut dest);
    assert!(dest.is_nan());
    sub_any(&one, &inf, &mut dest);
    assert!(dest.is_inf());
    sub_any(&one, &one, &mut dest);
    assert!(!dest.is_special());
}
