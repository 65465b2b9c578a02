// Test cases for the addition kernel; every case is also checked with
// the operands swapped.

macro_rules! impl_case {
    ($name:ident: $a:literal + $b:literal => $c:literal) => {
        #[test]
        fn $name() {
            let lhs: crate::FixedDecimal = $a.parse().unwrap();
            let rhs: crate::FixedDecimal = $b.parse().unwrap();

            let mut sum = crate::FixedDecimal::zero();
            add(&lhs, &rhs, &mut sum);
            assert_eq!(sum.to_string_with_scale(-1), $c);

            let mut commuted = crate::FixedDecimal::zero();
            add(&rhs, &lhs, &mut commuted);
            assert_eq!(commuted.to_string_with_scale(-1), $c);
        }
    };
}

impl_case!(case_0_0: "0" + "0" => "0");
impl_case!(case_0_1: "0" + "1" => "1");
impl_case!(case_1_1: "1" + "1" => "2");
impl_case!(case_1_n1: "1" + "-1" => "0");
impl_case!(case_n1_n100: "-1" + "-100" => "-101");
impl_case!(case_5_5: "5" + "5" => "10");
impl_case!(case_1d0_0: "1.0" + "0" => "1.0");
impl_case!(case_1d0_0d0: "1.0" + "0.0" => "1.0");
impl_case!(case_n1d0_0d01: "-1.0" + "0.01" => "-0.99");
impl_case!(case_n0d3_1d27: "-0.3" + "1.27" => "0.97");
impl_case!(case_n0d3_0d2: "-0.3" + "0.2" => "-0.1");
impl_case!(case_n0d01_0d001: "-0.01" + "0.001" => "-0.009");
impl_case!(case_n123_0d1: "-123" + "0.1" => "-122.9");
impl_case!(case_1_n12d5: "1" + "-12.5" => "-11.5");
impl_case!(case_n5d0_5d0: "-5.0" + "5.0" => "0");
impl_case!(case_1d0_0d1: "1.0" + "0.1" => "1.1");
impl_case!(case_1d01_0d1: "1.01" + "0.1" => "1.11");
impl_case!(case_1d00000000001_1000d01: "1.00000000001" + "1000.01" => "1001.01000000001");
impl_case!(case_1d234567890_0d0000000001: "1.234567890" + "0.0000000001" => "1.2345678901");
impl_case!(case_n1d234567890_0d0000000001: "-1.234567890" + "0.0000000001" => "-1.2345678899");
impl_case!(case_10000000000_1: "10000000000" + "1" => "10000000001");
impl_case!(case_999999999_1: "999999999" + "1" => "1000000000");
impl_case!(case_999999999999999999_1: "999999999999999999" + "1" => "1000000000000000000");

#[test]
fn test_special_dispatch() {
    let nan: crate::FixedDecimal = "NaN".parse().unwrap();
    let inf: crate::FixedDecimal = "Inf".parse().unwrap();
    let one = crate::FixedDecimal::one();

    let mut dest = crate::FixedDecimal::zero();
    add_any(&nan, &one, &mut dest);
    assert!(dest.is_nan());
    add_any(&one, &inf, &mut dest);
    assert!(dest.is_inf());
    // NaN dominates Infinity
    add_any(&nan, &inf, &mut dest);
    assert!(dest.is_nan());
    add_any(&one, &one, &mut dest);
    assert!(!dest.is_special());
}
