// Rounding vectors, run through both the in-place and the copying
// variants.

#[test]
fn test_round_vectors() {
    struct Case {
        input: &'static str,
        scale: i32,
        expected: &'static str,
    }

    let cases = [
        Case { input: "0", scale: 0, expected: "0" },
        Case { input: "0", scale: 1, expected: "0.0" },
        Case { input: "1", scale: -1, expected: "0" },
        Case { input: "1", scale: -2, expected: "0" },
        Case { input: "1.00", scale: 1, expected: "1.0" },
        Case { input: "1.04", scale: 1, expected: "1.0" },
        Case { input: "1.05", scale: 1, expected: "1.1" },
        Case { input: "1.09", scale: 1, expected: "1.1" },
        Case { input: "1.050", scale: 1, expected: "1.1" },
        Case { input: "1.054", scale: 1, expected: "1.1" },
        Case { input: "1.059", scale: 1, expected: "1.1" },
        Case { input: "1.040", scale: 1, expected: "1.0" },
        Case { input: "1.045", scale: 1, expected: "1.0" },
        Case { input: "1.049", scale: 1, expected: "1.0" },
        Case { input: "1.0000000000", scale: 9, expected: "1.000000000" },
        Case { input: "1.0000000004", scale: 9, expected: "1.000000000" },
        Case { input: "1.0000000005", scale: 9, expected: "1.000000001" },
        Case { input: "1.0000000009", scale: 9, expected: "1.000000001" },
        Case { input: "1.0000000090", scale: 9, expected: "1.000000009" },
        Case { input: "1.0000000094", scale: 9, expected: "1.000000009" },
        Case { input: "1.0000000095", scale: 9, expected: "1.000000010" },
        Case { input: "1.0000000099", scale: 9, expected: "1.000000010" },
        Case { input: "999999999.0", scale: 0, expected: "999999999" },
        Case { input: "999999999.4", scale: 0, expected: "999999999" },
        Case { input: "999999999.5", scale: 0, expected: "1000000000" },
        Case { input: "999999999.9", scale: 0, expected: "1000000000" },
        Case { input: "999999999.99990", scale: 4, expected: "999999999.9999" },
        Case { input: "999999999.99994", scale: 4, expected: "999999999.9999" },
        Case { input: "999999999.99995", scale: 4, expected: "1000000000.0000" },
        Case { input: "999999999.99999", scale: 4, expected: "1000000000.0000" },
        Case { input: "999999999999999999.0", scale: 0, expected: "999999999999999999" },
        Case { input: "999999999999999999.4", scale: 0, expected: "999999999999999999" },
        Case { input: "999999999999999999.5", scale: 0, expected: "1000000000000000000" },
        Case { input: "999999999999999999.90", scale: 1, expected: "999999999999999999.9" },
        Case { input: "999999999999999999.94", scale: 1, expected: "999999999999999999.9" },
        Case { input: "999999999999999999.95", scale: 1, expected: "1000000000000000000.0" },
        Case { input: "999999999999999999.99", scale: 1, expected: "1000000000000000000.0" },
        Case { input: "0.9876543210", scale: 10, expected: "0.9876543210" },
        Case { input: "0.9876543210", scale: 9, expected: "0.987654321" },
        Case { input: "0.9876543210", scale: 8, expected: "0.98765432" },
        Case { input: "0.9876543210", scale: 7, expected: "0.9876543" },
        Case { input: "0.9876543210", scale: 6, expected: "0.987654" },
        Case { input: "0.9876543210", scale: 5, expected: "0.98765" },
        Case { input: "0.9876543210", scale: 4, expected: "0.9877" },
        Case { input: "0.9876543210", scale: 3, expected: "0.988" },
        Case { input: "0.9876543210", scale: 2, expected: "0.99" },
        Case { input: "0.9876543210", scale: 1, expected: "1.0" },
        Case { input: "0.9876543210", scale: 0, expected: "1" },
        Case { input: "123456789123456789", scale: -1, expected: "123456789123456790" },
        Case { input: "123456789123456789", scale: -2, expected: "123456789123456800" },
        Case { input: "123456789123456789", scale: -3, expected: "123456789123457000" },
        Case { input: "123456789123456789", scale: -4, expected: "123456789123460000" },
        Case { input: "123456789123456789", scale: -5, expected: "123456789123500000" },
        Case { input: "123456789123456789", scale: -6, expected: "123456789123000000" },
        Case { input: "123456789123456789", scale: -7, expected: "123456789120000000" },
        Case { input: "123456789123456789", scale: -8, expected: "123456789100000000" },
        Case { input: "123456789123456789", scale: -9, expected: "123456789000000000" },
        Case { input: "999999999999999999", scale: -1, expected: "1000000000000000000" },
        Case { input: "0.999999999", scale: 9, expected: "0.999999999" },
        Case { input: "0.999999999", scale: 8, expected: "1.00000000" },
        Case { input: "0.999999999", scale: 7, expected: "1.0000000" },
        Case { input: "0.999999999", scale: 6, expected: "1.000000" },
        Case { input: "0.999999999", scale: 5, expected: "1.00000" },
        Case { input: "0.999999999", scale: 4, expected: "1.0000" },
        Case { input: "0.999999999", scale: 3, expected: "1.000" },
        Case { input: "0.999999999", scale: 2, expected: "1.00" },
        Case { input: "0.999999999", scale: 1, expected: "1.0" },
        Case { input: "0.999999999", scale: 0, expected: "1" },
        // a limb-aligned cut inside the integer part still rounds on
        // the top digit of the dropped limb
        Case { input: "1600000000", scale: -9, expected: "2000000000" },
        Case { input: "1400000000", scale: -9, expected: "1000000000" },
        // negative values round on magnitude, keeping the sign
        Case { input: "-1.05", scale: 1, expected: "-1.1" },
        Case { input: "-1.04", scale: 1, expected: "-1.0" },
        Case { input: "-0.4", scale: 0, expected: "0" },
    ];

    for case in &cases {
        let input: crate::FixedDecimal = case.input.parse().unwrap();

        let mut copied = crate::FixedDecimal::zero();
        input.round_to(&mut copied, case.scale);
        assert_eq!(
            copied.to_string_with_scale(-1),
            case.expected,
            "({}).round_to({})",
            case.input,
            case.scale
        );

        let mut in_place = input;
        in_place.round(case.scale);
        assert_eq!(
            in_place.to_string_with_scale(-1),
            case.expected,
            "({}).round({})",
            case.input,
            case.scale
        );
    }
}

#[test]
fn test_round_is_idempotent() {
    for (input, scale) in [("1.2345", 2), ("0.999999999", 4), ("123456789123456789", -3)] {
        let mut once: crate::FixedDecimal = input.parse().unwrap();
        once.round(scale);
        let mut twice = once;
        twice.round(scale);
        assert_eq!(once, twice, "({}).round({})", input, scale);
        assert_eq!(
            once.to_string_with_scale(-1),
            twice.to_string_with_scale(-1)
        );
    }
}

#[test]
fn test_round_widens_scale_without_changing_value() {
    let mut fd: crate::FixedDecimal = "1.5".parse().unwrap();
    fd.round(12);
    assert_eq!(fd.frac_digits(), 12);
    assert_eq!(fd.to_string_with_scale(-1), "1.500000000000");

    let reference: crate::FixedDecimal = "1.5".parse().unwrap();
    assert_eq!(fd, reference);
}

#[test]
fn test_round_to_zero_drops_sign() {
    let mut fd: crate::FixedDecimal = "-0.04".parse().unwrap();
    fd.round(1);
    assert!(!fd.is_negative());
    assert_eq!(fd.to_string_with_scale(-1), "0.0");
}
