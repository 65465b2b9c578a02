// Ordering vectors and the special-state trait behavior.

#[test]
fn test_compare_vectors() {
    struct Case {
        lhs: &'static str,
        rhs: &'static str,
        expected: Ordering,
    }

    use Ordering::*;

    let cases = [
        Case { lhs: "0", rhs: "0", expected: Equal },
        Case { lhs: "0", rhs: "1", expected: Less },
        Case { lhs: "1", rhs: "0", expected: Greater },
        Case { lhs: "-1", rhs: "-1", expected: Equal },
        Case { lhs: "1", rhs: "-1", expected: Greater },
        Case { lhs: "-1", rhs: "1", expected: Less },
        Case { lhs: "-1", rhs: "-2", expected: Greater },
        Case { lhs: "2", rhs: "1", expected: Greater },
        Case { lhs: "1", rhs: "2", expected: Less },
        Case { lhs: "1.0", rhs: "1", expected: Equal },
        Case { lhs: "1", rhs: "1.0", expected: Equal },
        Case { lhs: "1.000", rhs: "1.00", expected: Equal },
        Case { lhs: "1.000000000000", rhs: "1.00000", expected: Equal },
        Case { lhs: "1.01", rhs: "1", expected: Greater },
        Case { lhs: "1", rhs: "1.01", expected: Less },
        Case { lhs: "1.02", rhs: "1.01", expected: Greater },
        Case { lhs: "1.01", rhs: "1.02", expected: Less },
        Case { lhs: "1000000000", rhs: "999999999", expected: Greater },
        Case { lhs: "999999999", rhs: "1000000000", expected: Less },
        Case { lhs: "1.0000000000000000000000000001", rhs: "1", expected: Greater },
        Case { lhs: "1", rhs: "1.0000000000000000000000000001", expected: Less },
        Case {
            lhs: "1.0000000010000000000000000001",
            rhs: "1.0000000010000000000000000001",
            expected: Equal,
        },
        Case {
            lhs: "1.0000000010000000000000000001",
            rhs: "1.0000000010000000000000000002",
            expected: Less,
        },
        Case {
            lhs: "1.0000000010000000010000000002",
            rhs: "1.0000000010000000010000000001",
            expected: Greater,
        },
        Case {
            lhs: "100000000000000000000000000",
            rhs: "100000000000000000000000000",
            expected: Equal,
        },
        Case {
            lhs: "100000000000000000000000001",
            rhs: "100000000000000000000000000",
            expected: Greater,
        },
        Case {
            lhs: "100000000000000000000000000",
            rhs: "100000000000000000000000001",
            expected: Less,
        },
    ];

    for case in &cases {
        let lhs: FixedDecimal = case.lhs.parse().unwrap();
        let rhs: FixedDecimal = case.rhs.parse().unwrap();
        assert_eq!(
            lhs.compare(&rhs),
            case.expected,
            "({}).compare({})",
            case.lhs,
            case.rhs
        );
        // antisymmetry
        assert_eq!(
            rhs.compare(&lhs),
            case.expected.reverse(),
            "({}).compare({})",
            case.rhs,
            case.lhs
        );
    }
}

#[test]
fn test_partial_ord_finite() {
    let a: FixedDecimal = "1.5".parse().unwrap();
    let b: FixedDecimal = "2".parse().unwrap();
    assert!(a < b);
    assert!(b > a);
    assert!(a <= a);
    assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
}

#[test]
fn test_partial_ord_specials() {
    let nan: FixedDecimal = "NaN".parse().unwrap();
    let inf: FixedDecimal = "Inf".parse().unwrap();
    let neg_inf = -inf;
    let one = FixedDecimal::one();

    // NaN is unordered and unequal, itself included
    assert_eq!(nan.partial_cmp(&one), None);
    assert_eq!(one.partial_cmp(&nan), None);
    assert_ne!(nan, nan);

    assert!(inf > one);
    assert!(neg_inf < one);
    assert!(neg_inf < inf);
    assert_eq!(inf.partial_cmp(&inf), Some(Ordering::Equal));
    assert_eq!(inf, inf);
    assert_ne!(inf, neg_inf);
}
