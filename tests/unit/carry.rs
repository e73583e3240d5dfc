//! Increment, carry propagation, growth and wrap.

use super::common::{advance, all_composites, assert_steps_to, maximum_text, number, repeated, step, steps_until_len};
use odometer::{Carry, CompositeDigit, Digit, Number, MAX_DIGITS};

#[test]
fn test_a1_to_a2() {
    assert_steps_to("A1", "A2");
}

#[test]
fn test_a9_to_b1() {
    assert_steps_to("A9", "B1");
}

#[test]
fn test_letter_skips_inside_composite() {
    assert_steps_to("C9", "E1");
    assert_steps_to("E9", "H1");
    assert_steps_to("U9", "W1");
}

#[test]
fn test_single_z9_grows() {
    assert_steps_to("Z9", "A1-A1");
}

#[test]
fn test_z9_composite_alone_overflows() {
    let mut d = CompositeDigit::MAX;
    assert_eq!(d.increment(), Carry::Overflow);
    assert_eq!(d.to_string(), "A1");
}

#[test]
fn test_carry_crosses_several_groups() {
    assert_steps_to("A1-Z9-Z9", "A2-A1-A1");
    assert_steps_to("Z9-Z9-Z9", "A1-A1-A1-A1");
    assert_steps_to("K3-B9", "K3-C1");
}

#[test]
fn test_growth_below_limit_adds_one_group() {
    for len in 1..MAX_DIGITS {
        let (text, carry) = step(&repeated("Z9", len));
        assert_eq!(carry, Carry::Absorbed);
        assert_eq!(text, repeated("A1", len + 1));
    }
}

#[test]
fn test_global_maximum_wraps_with_overflow() {
    let (text, carry) = step(&maximum_text());
    assert_eq!(text, "A1");
    assert_eq!(carry, Carry::Overflow);
}

#[test]
fn test_overflow_only_on_wrap() {
    // most significant group first: the carry lifts Z8 to Z9 on top
    let mut n = number(&format!("Z8-{}", repeated("Z9", MAX_DIGITS - 1)));
    assert!(!n.is_maximum());
    assert_eq!(n.increment(), Carry::Absorbed);
    assert_eq!(n.to_string(), format!("Z9-{}", repeated("A1", MAX_DIGITS - 1)));
    assert!(n.is_maximum());
    assert_eq!(n.increment(), Carry::Overflow);
    assert_eq!(n, Number::minimum());
    assert_eq!(n.increment(), Carry::Absorbed);
}

#[test]
fn test_z9_on_top_of_ten_groups_wraps() {
    let (text, carry) = step(&format!("Z9-{}", repeated("A1", MAX_DIGITS - 1)));
    assert_eq!(text, "A1");
    assert_eq!(carry, Carry::Overflow);
}

#[test]
fn test_ten_groups_below_the_top_carry_normally() {
    assert_steps_to(
        &format!("A1-{}", repeated("Z9", MAX_DIGITS - 1)),
        &format!("A2-{}", repeated("A1", MAX_DIGITS - 1)),
    );
}

#[test]
fn test_first_carry_into_second_group_after_all_single_values() {
    let mut n = Number::minimum();
    let mut seen = vec![n.digit(0).unwrap()];
    while n.len() == 1 {
        let _ = n.increment();
        if n.len() == 1 {
            seen.push(n.digit(0).unwrap());
        }
    }
    assert_eq!(seen, all_composites());
    assert_eq!(n.to_string(), "A1-A1");
}

#[test]
fn test_nine_steps_from_minimum() {
    assert_eq!(advance(Number::minimum(), 9).to_string(), "B1");
}

#[test]
fn test_growth_cadence() {
    // every length is reached after a full cycle of the lower digits
    let radix = CompositeDigit::RADIX;
    assert_eq!(steps_until_len(Number::minimum(), 2), radix);
    assert_eq!(steps_until_len(number("A1-A1"), 3), radix * radix);
}

#[test]
fn test_reset_and_set_minimum() {
    let mut n = number("K4-B2-Z9");
    n.set_minimum();
    assert_eq!(n.to_string(), "A1");
    let mut n = number("K4");
    n.reset();
    assert_eq!(n, Number::default());
}
