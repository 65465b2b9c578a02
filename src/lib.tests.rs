// Cross-operation scenarios exercising the public surface end to end.

use std::cmp::Ordering;

fn dec(s: &str) -> FixedDecimal {
    s.parse().unwrap()
}

#[test]
fn test_seed_scenarios() {
    let mut out = FixedDecimal::zero();

    dec("999999999").add_to(&dec("1"), &mut out);
    assert_eq!(out.to_string_with_scale(-1), "1000000000");

    dec("1.00000000001").sub_to(&dec("1000.01"), &mut out);
    assert_eq!(out.to_string_with_scale(-1), "-999.00999999999");

    dec("1.00000000001").mul_to(&dec("1000.01"), &mut out).unwrap();
    assert_eq!(out.to_string_with_scale(-1), "1000.0100000100001");

    dec("0.3").div_to(&dec("0.7"), &mut out, DIV_INCR_FRAC).unwrap();
    assert_eq!(out.to_string_with_scale(-1), "0.428571428571428571");

    dec("987654321.123456789")
        .div_to(&dec("12345678.998765432"), &mut out, DIV_INCR_FRAC)
        .unwrap();
    assert_eq!(out.to_string_with_scale(-1), "80.000000099000000657900001515");

    dec("1000000000000000001")
        .rem_to(&dec("0.70298007"), &mut out)
        .unwrap();
    assert_eq!(out.to_string_with_scale(-1), "0.07924142");

    let mut rounded = dec("999999999999999999.95");
    rounded.round(1);
    assert_eq!(rounded.to_string_with_scale(-1), "1000000000000000000.0");

    assert_eq!(
        dec("1E20").to_string_with_scale(-1),
        "100000000000000000000"
    );
}

#[test]
fn test_seed_errors() {
    let mut out = FixedDecimal::zero();
    assert_eq!(
        dec("1").div_to(&dec("0"), &mut out, DIV_INCR_FRAC),
        Err(DecimalError::DivisionByZero)
    );
    assert_eq!(
        dec("1e41").mul_to(&dec("1e40"), &mut out),
        Err(DecimalError::Overflow)
    );
}

#[test]
fn test_any_dispatch_over_all_operations() {
    let nan = dec("NaN");
    let inf = dec("Inf");
    let one = dec("1");
    let mut out = FixedDecimal::zero();

    // NaN infects every operation, in either operand position
    nan.add_any_to(&one, &mut out);
    assert!(out.is_nan());
    one.add_any_to(&nan, &mut out);
    assert!(out.is_nan());
    nan.sub_any_to(&one, &mut out);
    assert!(out.is_nan());
    one.sub_any_to(&nan, &mut out);
    assert!(out.is_nan());
    nan.mul_any_to(&one, &mut out).unwrap();
    assert!(out.is_nan());
    nan.div_any_to(&one, &mut out, DIV_INCR_FRAC).unwrap();
    assert!(out.is_nan());
    nan.rem_any_to(&one, &mut out).unwrap();
    assert!(out.is_nan());

    // infinity wins over finite operands
    inf.add_any_to(&one, &mut out);
    assert!(out.is_inf());
    one.sub_any_to(&inf, &mut out);
    assert!(out.is_inf());
    inf.mul_any_to(&one, &mut out).unwrap();
    assert!(out.is_inf());
    one.div_any_to(&inf, &mut out, DIV_INCR_FRAC).unwrap();
    assert!(out.is_inf());
    inf.rem_any_to(&one, &mut out).unwrap();
    assert!(out.is_inf());

    // even a zero divisor loses to the dispatch
    nan.div_any_to(&dec("0"), &mut out, DIV_INCR_FRAC).unwrap();
    assert!(out.is_nan());

    // finite operands stay on the normal path
    one.add_any_to(&one, &mut out);
    assert!(!out.is_special());
}

#[test]
fn test_round_trip_through_strings() {
    let inputs = [
        "0",
        "1",
        "-1",
        "0.5",
        "-123.456",
        "999999999999999999",
        "0.000000000000000000054433",
        "123456789123456789.123456789",
        "-0.000000001",
    ];
    for input in &inputs {
        let fd = dec(input);
        let rendered = fd.to_string_with_scale(-1);
        assert_eq!(&rendered, input, "canonical form changed");
        let reparsed = dec(&rendered);
        assert_eq!(reparsed.compare(&fd), Ordering::Equal);
        assert_eq!(reparsed.to_string_with_scale(-1), rendered);
    }
}

#[test]
fn test_no_negative_zero_output() {
    let mut out = FixedDecimal::zero();

    dec("-5.0").add_to(&dec("5.0"), &mut out);
    assert!(!out.to_string_with_scale(-1).starts_with('-'));

    dec("1").sub_to(&dec("1"), &mut out);
    assert!(!out.to_string_with_scale(-1).starts_with('-'));

    dec("-1").mul_to(&dec("0"), &mut out).unwrap();
    assert_eq!(out.to_string_with_scale(-1), "0");

    let mut rounded = dec("-0.4");
    rounded.round(0);
    assert_eq!(rounded.to_string_with_scale(-1), "0");
}

#[test]
fn test_add_sub_inverse() {
    let pairs = [
        ("1.5", "2.25"),
        ("-0.3", "1.27"),
        ("999999999", "1"),
        ("123456789.123456789", "-987654321.987"),
    ];
    for &(a, b) in &pairs {
        let a = dec(a);
        let b = dec(b);
        let mut sum = FixedDecimal::zero();
        a.add_to(&b, &mut sum);
        let mut back = FixedDecimal::zero();
        sum.sub_to(&b, &mut back);
        assert_eq!(back.compare(&a), Ordering::Equal);
    }
}

#[test]
fn test_div_mod_reconstruction() {
    // pairs dividing evenly: the quotient is exact at the delivered
    // precision and the remainder is zero, so q * b + (a mod b)
    // reconstructs a without rounding error
    let pairs = [
        ("7.5", "2.5"),
        ("100", "4"),
        ("1.25", "0.25"),
        ("-7.5", "2.5"),
        ("1000000000.5", "0.5"),
    ];
    for &(a, b) in &pairs {
        let a = dec(a);
        let b = dec(b);
        let mut q = FixedDecimal::zero();
        a.div_to(&b, &mut q, DIV_INCR_FRAC).unwrap();
        let mut prod = FixedDecimal::zero();
        q.mul_to(&b, &mut prod).unwrap();
        let mut r = FixedDecimal::zero();
        a.rem_to(&b, &mut r).unwrap();
        let mut sum = FixedDecimal::zero();
        prod.add_to(&r, &mut sum);
        assert_eq!(
            sum.compare(&a),
            Ordering::Equal,
            "{:?} / {:?}: q={:?} r={:?}",
            a,
            b,
            q,
            r
        );
    }
}

#[test]
fn test_mod_magnitude_and_sign() {
    use num_traits::Signed;

    let pairs = [("10", "3"), ("-10", "3"), ("0.3", "0.7"), ("-98.7", "1.2")];
    for &(a, b) in &pairs {
        let a = dec(a);
        let b = dec(b);
        let mut r = FixedDecimal::zero();
        a.rem_to(&b, &mut r).unwrap();
        // |r| < |b| and r carries the dividend's sign (or is zero)
        assert_eq!(r.abs().compare(&b.abs()), Ordering::Less);
        if !r.all_limbs_zero() {
            assert_eq!(r.is_negative(), a.is_negative());
        }
    }
}

#[test]
fn test_mutators_and_predicates() {
    let mut fd = FixedDecimal::zero();
    assert!(fd.is_zero());
    assert!(!fd.is_special());

    fd.set_one();
    assert_eq!(fd.to_string_with_scale(-1), "1");

    fd.set_nan();
    assert!(fd.is_nan());
    assert!(fd.is_special());
    assert!(!fd.is_inf());

    fd.set_normal();
    assert!(!fd.is_special());

    fd.set_inf();
    assert!(fd.is_inf());
    assert!(!fd.is_nan());

    fd.set_normal();
    fd.set_one();
    fd.set_negative();
    assert!(fd.is_negative());
    fd.set_positive();
    assert!(!fd.is_negative());

    // setting the sign on an all-zero finite value resets to zero
    fd.set_zero();
    fd.set_negative();
    assert!(!fd.is_negative());
    assert!(fd.is_zero());
}

#[test]
fn test_destination_reuse() {
    // one destination driven through every operation stays coherent
    let mut dest = FixedDecimal::zero();
    dec("1").add_to(&dec("2"), &mut dest);
    assert_eq!(dest.to_string_with_scale(-1), "3");
    dec("10").rem_to(&dec("3"), &mut dest).unwrap();
    assert_eq!(dest.to_string_with_scale(-1), "1");
    dec("1.5").mul_to(&dec("2"), &mut dest).unwrap();
    assert_eq!(dest.to_string_with_scale(-1), "3.0");
    dec("Inf").add_any_to(&dec("1"), &mut dest);
    assert!(dest.is_inf());
    dec("1").add_to(&dec("2"), &mut dest);
    assert_eq!(dest.to_string_with_scale(-1), "3");
}
