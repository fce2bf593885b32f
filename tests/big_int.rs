use digitwise::interpreter::value::big_int::{BigInt, ParseBigIntError};
use pretty_assertions::assert_eq;

fn big(digits: &str) -> BigInt {
    BigInt::from_digits(digits)
}

#[test]
fn addition_matches_schoolbook_example() {
    assert_eq!((&big("456") + &big("1123")).to_string(), "1579");
}

#[test]
fn addition_carries_into_a_new_digit() {
    assert_eq!((&big("999") + &big("1")).to_string(), "1000");
    assert_eq!((&big("5") + &big("5")).to_string(), "10");
}

#[test]
fn addition_is_commutative() {
    let pairs = [("0", "0"),
                 ("7", "0"),
                 ("456", "1123"),
                 ("99999999999999999999", "1"),
                 ("31415926535897932384626", "27182818284590452353602874")];

    for (a, b) in pairs {
        assert_eq!(&big(a) + &big(b), &big(b) + &big(a), "{a} + {b}");
    }
}

#[test]
fn addition_keeps_leading_zeros_of_operands() {
    assert_eq!((&big("007") + &big("1")).to_string(), "008");
}

#[test]
fn owned_operators_match_borrowed_ones() {
    assert_eq!(big("12") + big("30"), &big("12") + &big("30"));
    assert_eq!(big("12") - big("30"), &big("12") - &big("30"));
}

#[test]
fn subtraction_is_symmetric() {
    assert_eq!(big("456").abs_diff(&big("1123")).to_string(), "667");
    assert_eq!(big("1123").abs_diff(&big("456")).to_string(), "667");
}

#[test]
fn subtraction_borrows_across_digits() {
    assert_eq!((&big("1000") - &big("1")).to_string(), "999");
    assert_eq!((&big("100000000000000000000") - &big("99999999999999999999")).to_string(),
               "1");
}

#[test]
fn subtraction_strips_leading_zeros() {
    assert_eq!((&big("1234") - &big("1230")).to_string(), "4");
    assert_eq!((&big("42") - &big("42")).to_string(), "0");
    assert!((&big("42") - &big("42")).is_canonical());
}

#[test]
fn empty_value_behaves_like_nothing() {
    let empty = BigInt::empty();

    assert_eq!(empty.to_string(), "");
    assert_eq!((&empty + &big("5")).to_string(), "5");
    assert_eq!((&big("5") - &empty).to_string(), "5");
    assert_eq!((&empty - &big("5")).to_string(), "5");
    assert!((&empty - &empty).is_empty());
    assert!((&empty + &empty).is_empty());
}

#[test]
fn canonical_strings_round_trip() {
    for digits in ["0", "1", "10", "909", "123456789012345678901234567890"] {
        assert_eq!(big(digits).to_string(), digits);
    }
}

#[test]
fn ordering_is_length_first() {
    assert!(big("99") < big("100"));
    assert!(big("123") < big("124"));
    assert!(big("5") > big("0"));
    assert!(!(big("77") < big("77")));
    assert!(BigInt::empty() < big("0"));
}

#[test]
fn ordering_is_not_numeric_for_non_canonical_values() {
    // Three digits beat two, whatever they are.
    assert!(big("007") > big("10"));
    assert!(big("007").normalized() < big("10"));
}

#[test]
fn normalized_strips_to_one_digit() {
    assert_eq!(big("000120").normalized().to_string(), "120");
    assert_eq!(big("0000").normalized().to_string(), "0");
    assert!(BigInt::empty().normalized().is_empty());
}

#[test]
fn canonical_form_checks() {
    assert!(big("0").is_canonical());
    assert!(big("10").is_canonical());
    assert!(!big("00").is_canonical());
    assert!(!big("01").is_canonical());
    assert!(!big("1a").is_canonical());
    assert!(!BigInt::empty().is_canonical());
}

#[test]
fn parsing_rejects_non_digits() {
    assert_eq!("1579".parse::<BigInt>(), Ok(big("1579")));
    assert_eq!("007".parse::<BigInt>().map(|b| b.len()), Ok(3));
    assert_eq!("12x".parse::<BigInt>(),
               Err(ParseBigIntError { literal: "12x".to_string() }));
    assert!("".parse::<BigInt>().is_err());
}

#[test]
fn conversion_from_machine_integers() {
    assert_eq!(BigInt::from(0).to_string(), "0");
    assert_eq!(BigInt::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(&BigInt::from(u64::MAX) + &BigInt::from(1),
               big("18446744073709551616"));
}
