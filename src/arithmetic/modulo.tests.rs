// Modulo vectors; the remainder keeps the dividend's sign and the
// wider fractional width of the operands.

#[test]
fn test_mod_vectors() {
    struct Case {
        lhs: &'static str,
        rhs: &'static str,
        expected: &'static str,
    }

    let cases = [
        Case { lhs: "0", rhs: "1", expected: "0" },
        Case { lhs: "1", rhs: "1", expected: "0" },
        Case { lhs: "1", rhs: "2", expected: "1" },
        Case { lhs: "2", rhs: "1", expected: "0" },
        Case { lhs: "1000000001", rhs: "2", expected: "1" },
        Case { lhs: "-1000000001", rhs: "2", expected: "-1" },
        Case { lhs: "-1", rhs: "2", expected: "-1" },
        Case { lhs: "-1", rhs: "-2", expected: "-1" },
        Case { lhs: "1", rhs: "-2", expected: "1" },
        Case { lhs: "-1", rhs: "-100", expected: "-1" },
        Case { lhs: "100", rhs: "3", expected: "1" },
        Case { lhs: "100", rhs: "1001", expected: "100" },
        Case { lhs: "0.2", rhs: "1", expected: "0.2" },
        Case { lhs: "0.02", rhs: "1", expected: "0.02" },
        Case { lhs: "0.000000002", rhs: "1", expected: "0.000000002" },
        Case { lhs: "0.2", rhs: "1.0", expected: "0.2" },
        Case { lhs: "0.2", rhs: "1.00", expected: "0.20" },
        Case { lhs: "0.2", rhs: "1.000000000", expected: "0.200000000" },
        Case { lhs: "-0.2", rhs: "1.0", expected: "-0.2" },
        Case { lhs: "-0.2", rhs: "1.000000000", expected: "-0.200000000" },
        Case { lhs: "-0.3", rhs: "-0.2", expected: "-0.1" },
        Case { lhs: "0.3", rhs: "0.2", expected: "0.1" },
        Case { lhs: "0.3", rhs: "-0.2", expected: "0.1" },
        Case { lhs: "-0.3", rhs: "0.2", expected: "-0.1" },
        Case { lhs: "-0.3", rhs: "-0.7", expected: "-0.3" },
        Case { lhs: "0.3", rhs: "-0.7", expected: "0.3" },
        Case { lhs: "0.3", rhs: "0.7", expected: "0.3" },
        Case { lhs: "1000000000.1", rhs: "7", expected: "6.1" },
        Case { lhs: "1000000000.1", rhs: "9", expected: "1.1" },
        Case { lhs: "1000000000.1", rhs: "9.00", expected: "1.10" },
        Case { lhs: "100.10000000001", rhs: "7", expected: "2.10000000001" },
        Case { lhs: "101000000000.1", rhs: "7.1", expected: "4.9" },
        Case { lhs: "101000000000.1", rhs: "5", expected: "0.1" },
        Case { lhs: "101000000000.1", rhs: "5.291", expected: "0.201" },
        Case { lhs: "100.1", rhs: "7.0000000001", expected: "2.0999999986" },
        Case { lhs: "205.6", rhs: "9.5000000001", expected: "6.0999999979" },
        Case { lhs: "2000000005.1", rhs: "7.5000000001", expected: "2.5733333333" },
        Case { lhs: "1.2", rhs: "0.7", expected: "0.5" },
        Case { lhs: "1.22", rhs: "0.77", expected: "0.45" },
        Case { lhs: "1.222", rhs: "0.777", expected: "0.445" },
        Case { lhs: "1.2222", rhs: "0.7777", expected: "0.4445" },
        Case { lhs: "1.22222", rhs: "0.77777", expected: "0.44445" },
        Case { lhs: "1.222222", rhs: "0.777777", expected: "0.444445" },
        Case { lhs: "1.2222222", rhs: "0.7777777", expected: "0.4444445" },
        Case { lhs: "1.22222222", rhs: "0.77777777", expected: "0.44444445" },
        Case { lhs: "1.222222222", rhs: "0.777777777", expected: "0.444444445" },
        Case { lhs: "9.8", rhs: "1", expected: "0.8" },
        Case { lhs: "98.7", rhs: "1.2", expected: "0.3" },
        Case { lhs: "987.6", rhs: "1.23", expected: "1.14" },
        Case { lhs: "9876.5", rhs: "1.234", expected: "0.798" },
        Case { lhs: "98765.4", rhs: "1.2345", expected: "0.4620" },
        Case { lhs: "987654.3", rhs: "1.23456", expected: "0.12720" },
        Case { lhs: "9876543.2", rhs: "1.234567", expected: "1.027165" },
        Case { lhs: "98765432.1", rhs: "1.2345678", expected: "0.6925932" },
        Case { lhs: "987654321.1", rhs: "1.23456789", expected: "0.45802477" },
        Case { lhs: "987654321.12", rhs: "1.234567899", expected: "0.685432101" },
        Case { lhs: "987654321.123", rhs: "1.2345678998", expected: "0.0484321002" },
        Case { lhs: "987654321.1234", rhs: "1.23456789987", expected: "1.22740000000" },
        Case { lhs: "987654321.12345", rhs: "1.234567899876", expected: "1.222650000000" },
        Case { lhs: "987654321.123456", rhs: "1.2345678998765", expected: "1.2222560000000" },
        Case { lhs: "987654321.1234567", rhs: "1.23456789987654", expected: "1.22222470000000" },
        Case {
            lhs: "987654321.12345678",
            rhs: "1.234567899876543",
            expected: "1.222222380000000",
        },
        Case {
            lhs: "987654321.123456789",
            rhs: "1.2345678998765432",
            expected: "1.2222222290000000",
        },
        Case {
            lhs: "-987654321.123456789",
            rhs: "1.2345678998765432",
            expected: "-1.2222222290000000",
        },
        Case { lhs: "-9.8", rhs: "1", expected: "-0.8" },
        Case { lhs: "-98765432.1", rhs: "1.2345678", expected: "-0.6925932" },
        Case { lhs: "0.170511", rhs: "-353390023.459963", expected: "0.170511" },
        Case { lhs: "-353390023.459963", rhs: "0.170511", expected: "-0.060946" },
        Case { lhs: "0.170511", rhs: "-353390023", expected: "0.170511" },
        Case { lhs: "-353390023", rhs: "0.170511", expected: "-0.112516" },
        Case { lhs: "0.4", rhs: "0.000000003", expected: "0.000000001" },
        Case { lhs: "0.4", rhs: "0.0000000003", expected: "0.0000000001" },
        Case { lhs: "0.2", rhs: "0.000000003", expected: "0.000000002" },
        Case { lhs: "0.2", rhs: "0.0000000003", expected: "0.0000000002" },
        Case { lhs: "1000000000000000001", rhs: "70298007", expected: "68215565" },
        Case { lhs: "1000000000000000001", rhs: "0.70298007", expected: "0.07924142" },
        Case { lhs: "1000000000000000001", rhs: "500000000.1", expected: "300000001.1" },
        Case { lhs: "0.1", rhs: "0.20000000001", expected: "0.10000000000" },
    ];

    for case in &cases {
        let lhs: crate::FixedDecimal = case.lhs.parse().unwrap();
        let rhs: crate::FixedDecimal = case.rhs.parse().unwrap();
        let mut remainder = crate::FixedDecimal::zero();
        rem(&lhs, &rhs, &mut remainder).unwrap();
        assert_eq!(
            remainder.to_string_with_scale(-1),
            case.expected,
            "{} % {}",
            case.lhs,
            case.rhs
        );
    }
}

#[test]
fn test_mod_by_zero() {
    let one = crate::FixedDecimal::one();
    let zero = crate::FixedDecimal::zero();
    let mut dest = crate::FixedDecimal::zero();
    assert_eq!(
        rem(&one, &zero, &mut dest),
        Err(crate::DecimalError::DivisionByZero)
    );
}

#[test]
fn test_special_dispatch() {
    let nan: crate::FixedDecimal = "NaN".parse().unwrap();
    let inf: crate::FixedDecimal = "Inf".parse().unwrap();
    let one = crate::FixedDecimal::one();

    let mut dest = crate::FixedDecimal::zero();
    rem_any(&nan, &one, &mut dest).unwrap();
    assert!(dest.is_nan());
    rem_any(&one, &inf, &mut dest).unwrap();
    assert!(dest.is_inf());
    rem_any(&one, &one, &mut dest).unwrap();
    assert!(!dest.is_special());
}
