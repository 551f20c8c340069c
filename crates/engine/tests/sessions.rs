//! Whole-session key sequences through the calculator engine, the way a
//! front end would drive it.

use engine::{Calculator, Key, Operator};

fn session(keys: &[Key]) -> Calculator {
    let mut calc = Calculator::new();
    for key in keys {
        calc.press(*key);
    }
    calc
}

#[test]
fn long_chain_keeps_running_result() {
    // 2 + 3 × 4 - 1 = evaluates left to right: ((2 + 3) × 4) - 1 = 19.
    let calc = session(&[
        Key::Digit(2),
        Key::Operator(Operator::Add),
        Key::Digit(3),
        Key::Operator(Operator::Multiply),
        Key::Digit(4),
        Key::Operator(Operator::Subtract),
        Key::Digit(1),
        Key::Equals,
    ]);
    assert_eq!(calc.display(), "19");
}

#[test]
fn recovery_after_divide_by_zero() {
    let calc = session(&[
        Key::Digit(6),
        Key::Operator(Operator::Divide),
        Key::Digit(0),
        Key::Equals,
        // The next digit starts a fresh operand; the aborted division left
        // the accumulator at zero and the pending operator at equals.
        Key::Digit(5),
        Key::Operator(Operator::Add),
        Key::Digit(3),
        Key::Equals,
    ]);
    assert_eq!(calc.display(), "8");
    assert!(!calc.is_error());
}

#[test]
fn percent_then_operator_uses_transformed_operand() {
    // 200 × 10% = 20.
    let calc = session(&[
        Key::Digit(2),
        Key::Digit(0),
        Key::Digit(0),
        Key::Operator(Operator::Multiply),
        Key::Digit(1),
        Key::Digit(0),
        Key::Percent,
        Key::Equals,
    ]);
    assert_eq!(calc.display(), "20");
}

#[test]
fn sign_change_feeds_the_next_commit() {
    // 9 + (-4) = 5.
    let calc = session(&[
        Key::Digit(9),
        Key::Operator(Operator::Add),
        Key::Digit(4),
        Key::SignChange,
        Key::Equals,
    ]);
    assert_eq!(calc.display(), "5");
}

#[test]
fn clear_mid_expression_starts_over() {
    let calc = session(&[
        Key::Digit(7),
        Key::Operator(Operator::Multiply),
        Key::Digit(8),
        Key::Clear,
        Key::Digit(1),
        Key::Digit(2),
        Key::Equals,
    ]);
    assert_eq!(calc.display(), "12");
    assert_eq!(calc.pending_operator(), None);
}

#[test]
fn equals_without_entry_passes_value_through() {
    let calc = session(&[Key::Digit(4), Key::Digit(2), Key::Equals, Key::Equals]);
    assert_eq!(calc.display(), "42");
}
