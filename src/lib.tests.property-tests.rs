// Property tests included by lib.rs when the `property-tests` feature
// is enabled:
//
//     cargo test --features property-tests

use std::cmp::Ordering;

prop_compose! {
    /// Values with up to 27 integer digits and up to 10 fractional
    /// digits, well inside the 65/30 envelope so additions never hit
    /// the caller-side width contract.
    fn arb_decimal()(mantissa in -(10i128.pow(27))..10i128.pow(27), scale in 0u32..=10) -> FixedDecimal {
        format!("{}e-{}", mantissa, scale).parse().unwrap()
    }
}

proptest! {
    #[test]
    fn add_commutes(a in arb_decimal(), b in arb_decimal()) {
        let mut ab = FixedDecimal::zero();
        a.add_to(&b, &mut ab);
        let mut ba = FixedDecimal::zero();
        b.add_to(&a, &mut ba);
        prop_assert_eq!(ab.compare(&ba), Ordering::Equal);
        prop_assert_eq!(ab.to_string_with_scale(-1), ba.to_string_with_scale(-1));
    }

    #[test]
    fn mul_commutes(a in arb_decimal(), b in arb_decimal()) {
        let mut ab = FixedDecimal::zero();
        let mut ba = FixedDecimal::zero();
        if a.mul_to(&b, &mut ab).is_ok() && b.mul_to(&a, &mut ba).is_ok() {
            prop_assert_eq!(ab.compare(&ba), Ordering::Equal);
        }
    }

    #[test]
    fn add_sub_round_trips(a in arb_decimal(), b in arb_decimal()) {
        let mut sum = FixedDecimal::zero();
        a.add_to(&b, &mut sum);
        let mut back = FixedDecimal::zero();
        sum.sub_to(&b, &mut back);
        prop_assert_eq!(back.compare(&a), Ordering::Equal);
    }

    #[test]
    fn string_round_trips(a in arb_decimal()) {
        let rendered = a.to_string_with_scale(-1);
        let reparsed: FixedDecimal = rendered.parse().unwrap();
        prop_assert_eq!(reparsed.compare(&a), Ordering::Equal);
        prop_assert_eq!(reparsed.to_string_with_scale(-1), rendered);
    }

    #[test]
    fn no_negative_zero_rendering(a in arb_decimal()) {
        let mut diff = FixedDecimal::zero();
        a.sub_to(&a, &mut diff);
        let rendered = diff.to_string_with_scale(-1);
        prop_assert!(!rendered.starts_with("-0"));
    }

    #[test]
    fn compare_antisymmetric(a in arb_decimal(), b in arb_decimal()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn neg_is_involutive(a in arb_decimal()) {
        prop_assert_eq!((-(-a)).compare(&a), Ordering::Equal);
    }

    #[test]
    fn mul_by_one_is_identity(a in arb_decimal()) {
        let mut prod = FixedDecimal::zero();
        a.mul_to(&FixedDecimal::one(), &mut prod).unwrap();
        prop_assert_eq!(prod.compare(&a), Ordering::Equal);
    }

    #[test]
    fn round_is_idempotent(a in arb_decimal(), scale in 0i32..=10) {
        let mut once = a;
        once.round(scale);
        let mut twice = once;
        twice.round(scale);
        prop_assert_eq!(once.compare(&twice), Ordering::Equal);
        prop_assert_eq!(once.frac_digits(), twice.frac_digits());
    }

    #[test]
    fn round_widening_preserves_value(a in arb_decimal(), extra in 0i32..=5) {
        let scale = a.frac_digits() as i32 + extra;
        let mut widened = FixedDecimal::zero();
        a.round_to(&mut widened, scale);
        prop_assert_eq!(widened.compare(&a), Ordering::Equal);
        prop_assert_eq!(widened.frac_digits() as i32, scale);
    }
}
