use deci::{Deci, RoundMode};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;

/// An arbitrary valid deci: any 26-digit significand, any sign, the full
/// exponent range.
#[derive(Copy, Clone, Debug)]
struct Money(Deci);

impl Arbitrary for Money {
    fn arbitrary(g: &mut Gen) -> Money {
        let coeff = u128::arbitrary(g) % 100_000_000_000_000_000_000_000_000;
        Money(Deci::from_parts(coeff, bool::arbitrary(g), i8::arbitrary(g)).unwrap())
    }
}

/// A deci small enough that products stay exact: twelve digits, modest
/// exponents.
#[derive(Copy, Clone, Debug)]
struct SmallMoney(Deci);

impl Arbitrary for SmallMoney {
    fn arbitrary(g: &mut Gen) -> SmallMoney {
        let coeff = u128::arbitrary(g) % 1_000_000_000_000;
        let exp = i8::arbitrary(g) % 20;
        SmallMoney(Deci::from_parts(coeff, bool::arbitrary(g), exp).unwrap())
    }
}

fn well_formed(a: Deci) -> bool {
    a.coeff() < 10u128.pow(26)
}

#[quickcheck]
fn prop_results_are_well_formed(a: Money, b: Money) -> bool {
    [
        a.0.checked_add(b.0),
        a.0.checked_sub(b.0),
        a.0.checked_mul(b.0),
        a.0.checked_div(b.0),
        a.0.checked_rem(b.0),
    ]
    .into_iter()
    .flatten()
    .all(well_formed)
}

#[quickcheck]
fn prop_additive_identity(a: Money) -> bool {
    a.0.checked_add(Deci::ZERO).unwrap() == a.0
}

#[quickcheck]
fn prop_addition_commutes(a: Money, b: Money) -> bool {
    match (a.0.checked_add(b.0), b.0.checked_add(a.0)) {
        (Ok(x), Ok(y)) => x == y,
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

#[quickcheck]
fn prop_multiplication_commutes(a: Money, b: Money) -> bool {
    match (a.0.checked_mul(b.0), b.0.checked_mul(a.0)) {
        (Ok(x), Ok(y)) => x == y,
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

#[quickcheck]
fn prop_additive_inverse(a: Money) -> bool {
    a.0.checked_add(-a.0).unwrap().is_zero()
}

#[quickcheck]
fn prop_negation_distributes_over_multiplication(a: Money, b: Money) -> bool {
    match ((-a.0).checked_mul(b.0), a.0.checked_mul(b.0)) {
        (Ok(x), Ok(y)) => x.is_same(-y),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

#[quickcheck]
fn prop_exact_divide_multiply_round_trip(a: SmallMoney, b: SmallMoney) -> TestResult {
    if b.0.is_zero() {
        return TestResult::discard();
    }
    // construct an exact multiple, then divide it back out
    let product = match a.0.checked_mul(b.0) {
        Ok(p) => p,
        Err(_) => return TestResult::discard(),
    };
    match product.checked_div(b.0) {
        Ok(q) => TestResult::from_bool(q == a.0),
        Err(_) => TestResult::discard(),
    }
}

#[quickcheck]
fn prop_rem_identity(a: Money, b: Money) -> TestResult {
    if b.0.is_zero() {
        return TestResult::discard();
    }
    let r = a.0.checked_rem(b.0).unwrap();
    // |a mod b| <= |b|
    if !(r.abs() <= b.0.abs()) {
        return TestResult::failed();
    }
    // sign follows the dividend when non-zero
    if !r.is_zero() && r.is_negative() != a.0.is_negative() {
        return TestResult::failed();
    }
    // (a - (a mod b)) mod b = 0
    let multiple = match a.0.checked_sub(r) {
        Ok(m) => m,
        Err(_) => return TestResult::discard(),
    };
    match multiple.checked_rem(b.0) {
        Ok(rest) => TestResult::from_bool(rest.is_zero()),
        Err(_) => TestResult::discard(),
    }
}

#[quickcheck]
fn prop_round_to_yields_a_multiple(a: Money, b: Money) -> TestResult {
    if b.0.is_zero() {
        return TestResult::discard();
    }
    for mode in [
        RoundMode::Truncate,
        RoundMode::Away,
        RoundMode::Floor,
        RoundMode::Ceil,
        RoundMode::HalfEven,
        RoundMode::HalfAway,
        RoundMode::HalfTruncate,
        RoundMode::HalfCeil,
        RoundMode::HalfFloor,
    ] {
        let rounded = match a.0.round_to(b.0, mode) {
            Ok(r) => r,
            Err(_) => continue,
        };
        let rest = match rounded.checked_rem(b.0) {
            Ok(r) => r,
            Err(_) => continue,
        };
        if !rest.is_zero() {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}

#[quickcheck]
fn prop_text_round_trip(a: Money) -> bool {
    a.0.to_string().parse::<Deci>().unwrap() == a.0
}

#[quickcheck]
fn prop_binary_round_trip(a: Money) -> bool {
    Deci::from_be_bytes(a.0.to_be_bytes()).unwrap().is_same(a.0)
}

#[quickcheck]
fn prop_int_round_trip(n: i64) -> bool {
    i64::try_from(Deci::from(n)) == Ok(n)
}

#[quickcheck]
fn prop_comparison_consistency(a: Money, b: Money) -> bool {
    if a.0 == b.0 {
        a.0 <= b.0 && b.0 <= a.0
    } else {
        !(a.0 <= b.0 && b.0 <= a.0)
    }
}

#[quickcheck]
fn prop_same_implies_equal(a: Money) -> bool {
    let copy = a.0;
    a.0.is_same(copy) && a.0 == copy
}
