// Division vectors; all run with four extra fractional digits
// requested, the conventional increment.

#[test]
fn test_div_vectors() {
    struct Case {
        lhs: &'static str,
        rhs: &'static str,
        expected: &'static str,
    }

    let cases = [
        Case { lhs: "0", rhs: "1", expected: "0" },
        // the requested increment rounds up to one whole limb
        Case { lhs: "1", rhs: "1", expected: "1.000000000" },
        Case { lhs: "1", rhs: "2", expected: "0.500000000" },
        Case { lhs: "2", rhs: "1", expected: "2.000000000" },
        Case { lhs: "1", rhs: "-1", expected: "-1.000000000" },
        Case { lhs: "-1", rhs: "1", expected: "-1.000000000" },
        Case { lhs: "-1", rhs: "-100", expected: "0.010000000" },
        Case { lhs: "100", rhs: "1", expected: "100.000000000" },
        Case { lhs: "100", rhs: "100", expected: "1.000000000" },
        Case { lhs: "0.000000002", rhs: "1", expected: "0.000000002000000000" },
        Case { lhs: "1.0", rhs: "2", expected: "0.500000000" },
        // two fractional limbs once both operands carry fractions
        Case { lhs: "1.0", rhs: "2.0", expected: "0.500000000000000000" },
        Case { lhs: "-1", rhs: "0.01", expected: "-100.000000000" },
        Case { lhs: "0.27", rhs: "0.3", expected: "0.900000000000000000" },
        Case { lhs: "-0.3", rhs: "-0.2", expected: "1.500000000000000000" },
        Case { lhs: "0.3", rhs: "0.7", expected: "0.428571428571428571" },
        Case { lhs: "0.6", rhs: "0.9", expected: "0.666666666666666666" },
        Case { lhs: "-0.3", rhs: "0.2", expected: "-1.500000000000000000" },
        Case { lhs: "1000000000.1", rhs: "7", expected: "142857142.871428571" },
        Case { lhs: "1000000000.1", rhs: "9", expected: "111111111.122222222" },
        Case { lhs: "101000000000.1", rhs: "7", expected: "14428571428.585714285" },
        Case { lhs: "101000000000.1", rhs: "7.1", expected: "14225352112.690140845070422535" },
        Case { lhs: "101000000000.1", rhs: "5", expected: "20200000000.020000000" },
        Case { lhs: "101000000000.1", rhs: "5.0", expected: "20200000000.020000000000000000" },
        Case { lhs: "100.10000000001", rhs: "7", expected: "14.300000000001428571" },
        Case { lhs: "100.10000000001", rhs: "7.0", expected: "14.300000000001428571428571428" },
        Case { lhs: "100.1", rhs: "7.0000000001", expected: "14.299999999795714285717204081" },
        Case { lhs: "205.6", rhs: "9.5000000001", expected: "21.642105262930083102495472809" },
        Case {
            lhs: "2000000005.1",
            rhs: "7.5000000001",
            expected: "266666667.343111111102091851851972108",
        },
        Case { lhs: "1.2", rhs: "0.7", expected: "1.714285714285714285" },
        Case { lhs: "1.22", rhs: "0.77", expected: "1.584415584415584415" },
        Case { lhs: "1.222", rhs: "0.777", expected: "1.572715572715572715" },
        Case { lhs: "1.2222", rhs: "0.7777", expected: "1.571557155715571557" },
        Case { lhs: "1.22222", rhs: "0.77777", expected: "1.571441428700001285" },
        Case { lhs: "1.222222", rhs: "0.777777", expected: "1.571429857144142858" },
        Case { lhs: "1.2222222", rhs: "0.7777777", expected: "1.571428700000012857" },
        Case { lhs: "1.22222222", rhs: "0.77777777", expected: "1.571428584285714414285715571" },
        Case { lhs: "1.222222222", rhs: "0.777777777", expected: "1.571428572714285715571428572" },
        Case { lhs: "9.8", rhs: "1", expected: "9.800000000" },
        Case { lhs: "98.7", rhs: "1.2", expected: "82.250000000000000000" },
        Case { lhs: "987.6", rhs: "12.3", expected: "80.292682926829268292" },
        Case { lhs: "9876.5", rhs: "123.4", expected: "80.036466774716369529" },
        Case { lhs: "98765.4", rhs: "1234.5", expected: "80.004374240583232077" },
        Case { lhs: "987654.3", rhs: "12345.6", expected: "80.000510303265940902" },
        Case { lhs: "9876543.2", rhs: "123456.7", expected: "80.000058320042573631" },
        Case { lhs: "98765432.1", rhs: "1234567.8", expected: "80.000006561000538002" },
        Case { lhs: "987654321.1", rhs: "12345678.9", expected: "80.000000737100006707" },
        Case { lhs: "987654321.12", rhs: "12345678.99", expected: "80.000000155520000281" },
        Case { lhs: "987654321.123", rhs: "12345678.998", expected: "80.000000103923000120" },
        Case { lhs: "987654321.1234", rhs: "12345678.9987", expected: "80.000000099419400109" },
        Case { lhs: "987654321.12345", rhs: "12345678.99876", expected: "80.000000099034650108" },
        Case { lhs: "987654321.123456", rhs: "12345678.998765", expected: "80.000000099002736108" },
        Case {
            lhs: "987654321.1234567",
            rhs: "12345678.9987654",
            expected: "80.000000099000200808",
        },
        Case {
            lhs: "987654321.12345678",
            rhs: "12345678.99876543",
            expected: "80.000000099000012888900031007",
        },
        Case {
            lhs: "987654321.123456789",
            rhs: "12345678.998765432",
            expected: "80.000000099000000657900001515",
        },
        Case {
            lhs: "-987654321.123456789",
            rhs: "12345678.998765432",
            expected: "-80.000000099000000657900001515",
        },
        Case { lhs: "-987654.3", rhs: "12345.6", expected: "-80.000510303265940902" },
        Case { lhs: "0.170511", rhs: "-353390023.459963", expected: "-0.000000000482500887" },
        Case { lhs: "0.170511", rhs: "-353390023", expected: "-0.000000000482500888" },
        Case { lhs: "0.1", rhs: "300000000", expected: "0.000000000" },
        Case { lhs: "0.1", rhs: "300000000.0", expected: "0.000000000333333333" },
        Case { lhs: "0.1", rhs: "3000000000", expected: "0.000000000" },
        Case { lhs: "0.1", rhs: "3000000000.0", expected: "0.000000000033333333" },
        Case { lhs: "0.0000000001", rhs: "300000000", expected: "0.000000000000000000" },
        Case {
            lhs: "0.0000000001",
            rhs: "300000000.0",
            expected: "0.000000000000000000333333333",
        },
        Case { lhs: "0.0000000001", rhs: "3000000000", expected: "0.000000000000000000" },
        Case {
            lhs: "0.0000000001",
            rhs: "3000000000.0",
            expected: "0.000000000000000000033333333",
        },
        Case { lhs: "1", rhs: "300000000", expected: "0.000000003" },
        Case { lhs: "1", rhs: "300000000.0", expected: "0.000000003" },
        Case { lhs: "1", rhs: "3000000000", expected: "0.000000000" },
        Case { lhs: "1", rhs: "3000000000.0", expected: "0.000000000" },
        Case { lhs: "1.0", rhs: "300000000", expected: "0.000000003" },
        Case { lhs: "1.0", rhs: "300000000.0", expected: "0.000000003333333333" },
        Case { lhs: "1.0", rhs: "3000000000", expected: "0.000000000" },
        Case { lhs: "1.0", rhs: "3000000000.0", expected: "0.000000000333333333" },
        Case { lhs: "0.4", rhs: "0.000000003", expected: "133333333.333333333333333333" },
        Case {
            lhs: "0.4",
            rhs: "0.0000000003",
            expected: "1333333333.333333333333333333333333333",
        },
        Case { lhs: "0.2", rhs: "0.000000003", expected: "66666666.666666666666666666" },
        Case {
            lhs: "0.2",
            rhs: "0.0000000003",
            expected: "666666666.666666666666666666666666666",
        },
        Case { lhs: "400000000", rhs: "300000000", expected: "1.333333333" },
        Case { lhs: "400000000.0", rhs: "300000000.0", expected: "1.333333333333333333" },
        Case { lhs: "4000000000", rhs: "3000000000", expected: "1.333333333" },
        Case { lhs: "4000000000.0", rhs: "3000000000.0", expected: "1.333333333333333333" },
        Case { lhs: "200000000", rhs: "300000000", expected: "0.666666666" },
        Case { lhs: "200000000.0", rhs: "300000000.0", expected: "0.666666666666666666" },
        Case { lhs: "2000000000", rhs: "3000000000", expected: "0.666666666" },
        Case { lhs: "2000000000.0", rhs: "3000000000.0", expected: "0.666666666666666666" },
        Case {
            lhs: "400000000",
            rhs: "0.000000003",
            expected: "133333333333333333.333333333333333333",
        },
        Case {
            lhs: "4000000000",
            rhs: "0.000000003",
            expected: "1333333333333333333.333333333333333333",
        },
        Case { lhs: "1", rhs: "500000000.1", expected: "0.000000001" },
    ];

    for case in &cases {
        let lhs: crate::FixedDecimal = case.lhs.parse().unwrap();
        let rhs: crate::FixedDecimal = case.rhs.parse().unwrap();
        let mut quotient = crate::FixedDecimal::zero();
        div(&lhs, &rhs, &mut quotient, crate::DIV_INCR_FRAC).unwrap();
        assert_eq!(
            quotient.to_string_with_scale(-1),
            case.expected,
            "{} / {}",
            case.lhs,
            case.rhs
        );
    }
}

#[test]
fn test_div_by_zero() {
    let one = crate::FixedDecimal::one();
    let zero = crate::FixedDecimal::zero();
    let mut dest = crate::FixedDecimal::zero();
    assert_eq!(
        div(&one, &zero, &mut dest, crate::DIV_INCR_FRAC),
        Err(crate::DecimalError::DivisionByZero)
    );
    // a zero-valued divisor with fractional width is still zero
    let wide_zero: crate::FixedDecimal = "0.00".parse().unwrap();
    assert_eq!(
        div(&one, &wide_zero, &mut dest, crate::DIV_INCR_FRAC),
        Err(crate::DecimalError::DivisionByZero)
    );
}

#[test]
fn test_special_dispatch() {
    let nan: crate::FixedDecimal = "NaN".parse().unwrap();
    let inf: crate::FixedDecimal = "Inf".parse().unwrap();
    let one = crate::FixedDecimal::one();

    let mut dest = crate::FixedDecimal::zero();
    div_any(&nan, &one, &mut dest, crate::DIV_INCR_FRAC).unwrap();
    assert!(dest.is_nan());
    div_any(&one, &inf, &mut dest, crate::DIV_INCR_FRAC).unwrap();
    assert!(dest.is_inf());
    div_any(&one, &one, &mut dest, crate::DIV_INCR_FRAC).unwrap();
    assert!(!dest.is_special());
}
