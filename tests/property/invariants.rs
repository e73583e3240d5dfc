//! Invariants checked over long increment runs rather than random samples.

use super::common::{all_composites, number, repeated};
use odometer::{Carry, CompositeDigit, Digit, Number, MAX_DIGITS};
use std::collections::HashSet;

#[test]
fn test_successors_are_distinct_over_two_digit_range() {
    // A1 through Z9-Z9 is every one- and two-digit value exactly once
    let expected = CompositeDigit::RADIX + CompositeDigit::RADIX * CompositeDigit::RADIX;
    let mut seen = HashSet::new();
    seen.insert(Number::minimum());
    for n in Number::minimum().successors() {
        if n.len() > 2 {
            break;
        }
        assert!(seen.insert(n), "{} visited twice", n);
    }
    assert_eq!(seen.len(), expected);
}

#[test]
fn test_every_low_digit_is_visited_between_carries() {
    let mut n = number("B2-A1");
    for expected in all_composites().into_iter().skip(1) {
        let _ = n.increment();
        assert_eq!(n.digit(0), Some(expected));
        assert_eq!(n.digit(1).unwrap().to_string(), "B2");
    }
    let _ = n.increment();
    assert_eq!(n.to_string(), "B3-A1");
}

#[test]
fn test_wrap_happens_exactly_once_near_the_top() {
    // Z8-Z9-...-Z9-A1: the low digit runs out, the carry puts Z9 on top, then
    // the counter wraps
    let mut digits: Vec<CompositeDigit> = vec!["Z8".parse().unwrap()];
    digits.extend([CompositeDigit::MAX; MAX_DIGITS - 2]);
    digits.push("A1".parse().unwrap());
    let start = Number::from_digits(&digits).unwrap();

    let values: Vec<Number> = start.successors().collect();
    assert_eq!(values.len(), CompositeDigit::RADIX + 1);
    let top = values[values.len() - 2];
    assert_eq!(top.to_string(), format!("Z9-{}", repeated("A1", MAX_DIGITS - 1)));
    assert!(top.is_maximum());
    assert_eq!(values[values.len() - 1], Number::minimum());
    assert_eq!(values.iter().filter(|n| n.is_maximum()).count(), 1);
    assert!(values.iter().all(Digit::is_valid));
}

#[test]
fn test_maximum_is_full_length_with_z9_on_top() {
    assert!(number(&repeated("Z9", MAX_DIGITS)).is_maximum());
    assert!(number(&format!("{}-Z8", repeated("Z9", MAX_DIGITS - 1))).is_maximum());
    assert!(number(&format!("Z9-{}", repeated("K4", MAX_DIGITS - 1))).is_maximum());
    assert!(!number(&repeated("Z9", MAX_DIGITS - 1)).is_maximum());
    assert!(!number(&format!("Z8-{}", repeated("Z9", MAX_DIGITS - 1))).is_maximum());
}

#[test]
fn test_every_full_length_value_with_z9_on_top_wraps() {
    for low in all_composites() {
        let text = format!("Z9-{}", repeated(&low.to_string(), MAX_DIGITS - 1));
        let mut n = number(&text);
        assert_eq!(n.increment(), Carry::Overflow, "{} should wrap", text);
        assert_eq!(n, Number::minimum());
    }
}

#[test]
fn test_full_length_value_below_the_top_carries_normally() {
    let mut n = number(&format!("A1-{}", repeated("Z9", MAX_DIGITS - 1)));
    assert!(!n.is_maximum());
    assert_eq!(n.increment(), Carry::Absorbed);
    assert_eq!(n.to_string(), format!("A2-{}", repeated("A1", MAX_DIGITS - 1)));
    assert_eq!(n.len(), MAX_DIGITS);

    // the top digit climbs to Z9 through ordinary carries, then wraps
    let mut n = number(&format!("Z8-{}", repeated("Z9", MAX_DIGITS - 1)));
    assert_eq!(n.increment(), Carry::Absorbed);
    assert_eq!(n.to_string(), format!("Z9-{}", repeated("A1", MAX_DIGITS - 1)));
    assert_eq!(n.increment(), Carry::Overflow);
    assert_eq!(n, Number::minimum());
}
