// Scanner and limb-fill cases, including every malformed form the
// grammar rejects.

#[test]
fn test_parse_ok() {
    // input and its canonical full-width rendering
    let cases = [
        ("0", "0"),
        ("1", "1"),
        ("-1", "-1"),
        ("+1", "1"),
        ("123", "123"),
        ("123456789012345", "123456789012345"),
        ("0.1", "0.1"),
        ("0.123", "0.123"),
        ("1.0", "1.0"),
        ("-1.0", "-1.0"),
        (".5", "0.5"),
        ("1.", "1"),
        ("1E1", "10"),
        ("1E+2", "100"),
        ("1.0E-2", "0.010"),
        ("1.0e10", "10000000000"),
        ("1.0e02", "100"),
        ("1E20", "100000000000000000000"),
        ("0.00", "0.00"),
        ("0.12345678901234567890", "0.12345678901234567890"),
    ];
    for &(input, expected) in &cases {
        let fd: crate::FixedDecimal = input.parse().unwrap();
        assert_eq!(fd.to_string_with_scale(-1), expected, "input {:?}", input);
    }
}

#[test]
fn test_parse_errors() {
    let inputs = [
        "",
        "abc",
        ".",
        ".a",
        ".NaN",
        "N",
        "Nb",
        "Na",
        "Nab",
        "NaNx",
        "0x",
        "0E",
        ".1e+",
        ".1e-",
        ".1e+f",
        ".1e12345",
        ".1e-200",
        "12..3",
        "+",
        "-",
        "1e99999999999999999999",
        // 70 digits
        "1234567890123456789012345678901234567890123456789012345678901234567890",
    ];
    for input in &inputs {
        assert_eq!(
            input.parse::<crate::FixedDecimal>(),
            Err(crate::DecimalError::ConversionSyntax),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_parse_specials() {
    for input in &["Inf", "inf", "INFINITY", "Infinity"] {
        let fd: crate::FixedDecimal = input.parse().unwrap();
        assert!(fd.is_inf(), "input {:?}", input);
        assert!(fd.is_special());
    }
    for input in &["NaN", "nan", "NAN", "NaN0", "NaN000"] {
        let fd: crate::FixedDecimal = input.parse().unwrap();
        assert!(fd.is_nan(), "input {:?}", input);
    }
    // a sign in front of a special is consumed and ignored
    let fd: crate::FixedDecimal = "-Inf".parse().unwrap();
    assert!(fd.is_inf());
    assert!(!fd.is_negative());
}

#[test]
fn test_parse_digit_counts() {
    let fd: crate::FixedDecimal = "123.45".parse().unwrap();
    assert_eq!(fd.intg_digits(), 3);
    assert_eq!(fd.frac_digits(), 2);
    assert_eq!(fd.intg_units(), 1);
    assert_eq!(fd.frac_units(), 1);

    let fd: crate::FixedDecimal = ".5".parse().unwrap();
    assert_eq!(fd.intg_digits(), 0);
    assert_eq!(fd.frac_digits(), 1);

    // exponent normalization shifts digits between the two parts
    let fd: crate::FixedDecimal = "5.4433e3".parse().unwrap();
    assert_eq!(fd.intg_digits(), 4);
    assert_eq!(fd.frac_digits(), 1);

    let fd: crate::FixedDecimal = "5.4433e-3".parse().unwrap();
    assert_eq!(fd.intg_digits(), 0);
    assert_eq!(fd.frac_digits(), 7);
}

#[test]
fn test_parse_negative_zero_is_canonical() {
    let fd: crate::FixedDecimal = "-0".parse().unwrap();
    assert!(fd.is_zero());
    assert!(!fd.is_negative());
    assert_eq!(fd.to_string_with_scale(-1), "0");

    let fd: crate::FixedDecimal = "-0.00".parse().unwrap();
    assert!(!fd.is_negative());
}

#[test]
fn test_parse_exponent_bounds() {
    // +65 and -30 are the extremes the format can absorb
    assert!("1e65".parse::<crate::FixedDecimal>().is_err());
    assert!("1e-31".parse::<crate::FixedDecimal>().is_err());
    assert!("1e-30".parse::<crate::FixedDecimal>().is_ok());
}
