// Stringification vectors at explicit scales, plus Display behavior.

#[test]
fn test_to_string_full_width() {
    let cases = [
        ("0", "0"),
        ("1", "1"),
        ("-1", "-1"),
        ("123", "123"),
        ("123456789012345", "123456789012345"),
        ("0.0", "0.0"),
        ("0.100", "0.100"),
        ("0.12345678901234567890", "0.12345678901234567890"),
        ("1e0", "1"),
        ("1E1", "10"),
        ("1E+2", "100"),
        ("1.0E-2", "0.010"),
        ("1.0e10", "10000000000"),
        ("1.2345e20", "123450000000000000000"),
        ("5.4433e4", "54433"),
        ("5.4433e3", "5443.3"),
        ("5.4433e2", "544.33"),
        ("5.4433e1", "54.433"),
        ("5.4433e0", "5.4433"),
        ("5.4433e-1", "0.54433"),
        ("5.4433e-2", "0.054433"),
        ("5.4433e-3", "0.0054433"),
        ("5.4433e-5", "0.000054433"),
        ("5.4433e-6", "0.0000054433"),
        ("5.4433e-7", "0.00000054433"),
        ("5.4433e-8", "0.000000054433"),
        ("5.4433e-9", "0.0000000054433"),
        ("5.4433e-10", "0.00000000054433"),
        ("5.4433e-11", "0.000000000054433"),
        ("5.4433e-20", "0.000000000000000000054433"),
        ("Inf", "Infinity"),
        ("NaN", "NaN"),
    ];
    for &(input, expected) in &cases {
        let fd: crate::FixedDecimal = input.parse().unwrap();
        assert_eq!(fd.to_string_with_scale(-1), expected, "input {:?}", input);
    }
}

#[test]
fn test_to_string_at_scale() {
    struct Case {
        input: &'static str,
        scale: i32,
        expected: &'static str,
    }

    let cases = [
        Case { input: "123456789.123456789", scale: 0, expected: "123456789" },
        Case { input: "123456789.123456789", scale: 1, expected: "123456789.1" },
        Case { input: "123456789.123456789", scale: 2, expected: "123456789.12" },
        Case { input: "123456789.123456789", scale: 5, expected: "123456789.12345" },
        Case { input: "123456789.123456789", scale: 8, expected: "123456789.12345678" },
        Case { input: "123456789.123456789", scale: 9, expected: "123456789.123456789" },
        Case { input: "123456789.123456789", scale: 10, expected: "123456789.1234567890" },
        // truncation, not rounding
        Case { input: "1.021", scale: 2, expected: "1.02" },
        Case { input: "1.00021", scale: 2, expected: "1.00" },
        Case { input: "0.0", scale: 0, expected: "0" },
        Case { input: "0.0", scale: 1, expected: "0.0" },
        Case { input: "0.0", scale: 5, expected: "0.00000" },
        Case { input: "0.0", scale: 12, expected: "0.000000000000" },
        Case { input: "0.123456789123456789", scale: 0, expected: "0" },
        Case { input: "0.123456789123456789", scale: 1, expected: "0.1" },
        Case { input: "0.123456789123456789", scale: 9, expected: "0.123456789" },
        Case { input: "0.123456789123456789", scale: 12, expected: "0.123456789123" },
        Case { input: "0.123456789123456789", scale: 17, expected: "0.12345678912345678" },
        Case { input: "0.123456789123456789", scale: 18, expected: "0.123456789123456789" },
        Case { input: "123456789123456789", scale: -1, expected: "123456789123456789" },
        Case { input: "123456789123456789", scale: 0, expected: "123456789123456789" },
        Case { input: "123456789123456789", scale: 1, expected: "123456789123456789.0" },
        Case { input: "123456789123456789", scale: 9, expected: "123456789123456789.000000000" },
        Case {
            input: "123456789123456789",
            scale: 19,
            expected: "123456789123456789.0000000000000000000",
        },
    ];
    for case in &cases {
        let fd: crate::FixedDecimal = case.input.parse().unwrap();
        assert_eq!(
            fd.to_string_with_scale(case.scale),
            case.expected,
            "input {:?} scale {}",
            case.input,
            case.scale
        );
    }
}

#[test]
fn test_display() {
    let fd: crate::FixedDecimal = "-123.45".parse().unwrap();
    assert_eq!(format!("{}", fd), "-123.45");
    // std precision selects the output scale
    assert_eq!(format!("{:.1}", fd), "-123.4");
    assert_eq!(format!("{:.4}", fd), "-123.4500");
    assert_eq!(format!("{:.0}", fd), "-123");
    // width and fill go through pad_integral
    assert_eq!(format!("{:>10}", fd), "   -123.45");
    assert_eq!(format!("{:010}", fd), "-000123.45");

    let inf: crate::FixedDecimal = "inf".parse().unwrap();
    assert_eq!(format!("{}", inf), "Infinity");
    assert_eq!(format!("{}", -inf), "-Infinity");

    let nan: crate::FixedDecimal = "nan".parse().unwrap();
    assert_eq!(format!("{}", nan), "NaN");
}

#[test]
fn test_display_padded_intg_suppresses_zero_limbs() {
    // subtraction pads the stored integer width to whole limbs; the
    // rendering must not leak the leading zero limb
    let a: crate::FixedDecimal = "1000000000".parse().unwrap();
    let b: crate::FixedDecimal = "1".parse().unwrap();
    let mut diff = crate::FixedDecimal::zero();
    a.sub_to(&b, &mut diff);
    assert!(diff.intg_digits() >= 10);
    assert_eq!(format!("{}", diff), "999999999");
}

#[test]
fn test_truncated_to_zero_prints_unsigned() {
    let fd: crate::FixedDecimal = "-0.5".parse().unwrap();
    assert_eq!(fd.to_string_with_scale(0), "0");
    assert_eq!(format!("{:.0}", fd), "0");

    let fd: crate::FixedDecimal = "-0.004".parse().unwrap();
    assert_eq!(fd.to_string_with_scale(2), "0.00");
    assert_eq!(fd.to_string_with_scale(-1), "-0.004");
}

#[test]
fn test_debug() {
    let fd: crate::FixedDecimal = "1.5".parse().unwrap();
    let repr = format!("{:?}", fd);
    assert!(repr.starts_with("FixedDecimal("), "{}", repr);
    assert_eq!(format!("{:#?}", fd), "FixedDecimal(\"1.5\")");
}
