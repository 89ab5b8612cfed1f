use zcalc::{CalculatorState, Digit, Key, Operation, format_display, parse_keys};

fn run(keys: &str) -> CalculatorState {
    CalculatorState::new().press_all(parse_keys(keys).unwrap())
}

fn digit(c: char) -> Digit {
    Digit::try_from(c).unwrap()
}

#[test]
fn test_typed_digits_are_concatenated() {
    for typed in ["1", "42", "9876543210", "1000", "31415"] {
        assert_eq!(run(typed).display(), typed);
    }
}

#[test]
fn test_leading_zeros_and_extra_points_are_dropped() {
    assert_eq!(run("0 0 1 2").display(), "12");
    assert_eq!(run("0 . 0 . 5").display(), "0.05");
    assert_eq!(run("1 . . 5").display(), "1.5");
}

#[test]
fn test_arithmetic_matches_operation_apply() {
    let cases = [
        ("7 + 5 =", Operation::Add),
        ("7 - 5 =", Operation::Subtract),
        ("7 × 5 =", Operation::Multiply),
        ("7 ÷ 5 =", Operation::Divide),
    ];
    for (keys, op) in cases {
        let expected = op.apply(7.0, 5.0).to_string();
        assert_eq!(run(keys).display(), expected, "{keys}");
    }
}

#[test]
fn test_chained_operations_have_no_precedence() {
    let state = CalculatorState::new()
        .enter_digit(digit('3'))
        .select_operation(Operation::Add)
        .enter_digit(digit('4'))
        .select_operation(Operation::Multiply)
        .enter_digit(digit('2'))
        .equals();
    assert_eq!(state.display(), "14");

    assert_eq!(run("10 - 4 ÷ 2 =").display(), "3");
}

#[test]
fn test_division_by_zero_yields_zero() {
    assert_eq!(run("5 ÷ 0 =").display(), "0");
    assert_eq!(run("5 ÷ 0 + 3 =").display(), "3");
}

#[test]
fn test_clear_returns_rest_state() {
    for keys in ["", "12.5", "3 +", "3 + 4", "3 + 4 =", "8 ± %", "1 ÷ 0 ="] {
        let state = run(keys).press(Key::Clear);
        assert_eq!(state, CalculatorState::new(), "{keys}");
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(!state.is_waiting_for_new_value());
    }
}

#[test]
fn test_toggle_sign_twice_restores_display() {
    for keys in ["", "0", "12.5", "3 + 4", "3 + 4 =", "0.", "2 ±"] {
        let state = run(keys);
        let toggled = state.clone().toggle_sign().toggle_sign();
        assert_eq!(toggled.display(), state.display(), "{keys}");
    }
}

#[test]
fn test_percent_of_fifty() {
    assert_eq!(run("50 %").display(), "0.5");
}

#[test]
fn test_equals_without_operator_is_noop() {
    let state = run("1 2 3");
    assert_eq!(state.clone().equals(), state);
}

#[test]
fn test_after_equals_result_feeds_next_operation() {
    assert_eq!(run("2 + 3 = × 4 =").display(), "20");
}

#[test]
fn test_negative_operands() {
    assert_eq!(run("5 ± + 2 =").display(), "-3");
    assert_eq!(run("± 5 × 2 =").display(), "-10");
}

#[test]
fn test_formatter_on_long_results() {
    assert_eq!(format_display("1234567890123"), "1.23457e+12");
    assert_eq!(format_display("123456789012"), "123456789012");

    let state = run("1000005 × 1000000 =");
    assert_eq!(state.display(), "1000005000000");
    assert_eq!(format_display(state.display()), "1.00001e+12");

    let state = run("1 ÷ 3 =");
    assert_eq!(state.display(), "0.3333333333333333");
    assert_eq!(format_display(state.display()), "0.333333333");
}
