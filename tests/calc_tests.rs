use khata::calc::{self, CalcError};

fn eval(input: &str) -> f64 {
    calc::evaluate(input).expect("expression should evaluate")
}

#[test]
fn test_basic_arithmetic() {
    assert_eq!(eval("1+2"), 3.0);
    assert_eq!(eval("10 - 4"), 6.0);
    assert_eq!(eval("6*7"), 42.0);
    assert_eq!(eval("9 / 2"), 4.5);
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("2*3+4"), 10.0);
    // left-associative chains
    assert_eq!(eval("10-3-2"), 5.0);
    assert_eq!(eval("100/5/2"), 10.0);
}

#[test]
fn test_parentheses() {
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("((1))"), 1.0);
    assert_eq!(eval("2*(3+(4-1))"), 12.0);
}

#[test]
fn test_unary_minus() {
    assert_eq!(eval("-5"), -5.0);
    assert_eq!(eval("-5 + 10"), 5.0);
    assert_eq!(eval("2 * -3"), -6.0);
    assert_eq!(eval("-(2+3)"), -5.0);
}

#[test]
fn test_decimals() {
    assert_eq!(eval("1.5 + 2.25"), 3.75);
    assert_eq!(eval(".5 * 4"), 2.0);
}

#[test]
fn test_division_by_zero_is_rejected() {
    let err = calc::evaluate("1/0").unwrap_err();
    assert!(matches!(err, CalcError::Eval(_)));
    assert!(err.to_string().contains("division by zero"));

    // a zero-valued subexpression counts too
    assert!(calc::evaluate("5 / (2 - 2)").is_err());
}

#[test]
fn test_non_arithmetic_input_is_rejected() {
    // nothing outside the grammar may evaluate, whatever its shape
    for input in [
        "x",
        "1 + x",
        "2 ** 3",
        "1 % 2",
        "__import__('os')",
        "print(1)",
        "1; 2",
        "1 = 2",
    ] {
        assert!(
            matches!(calc::evaluate(input), Err(CalcError::Parse(_))),
            "'{}' should not evaluate",
            input
        );
    }
}

#[test]
fn test_malformed_expressions_are_rejected() {
    for input in ["", "   ", "1 +", "(1 + 2", "1 2", "*3", "()"] {
        assert!(calc::evaluate(input).is_err(), "'{}' should not evaluate", input);
    }
}

#[test]
fn test_errors_carry_a_column() {
    match calc::evaluate("1 + ?").unwrap_err() {
        CalcError::Parse(err) => assert_eq!(err.column, 5),
        other => panic!("expected parse error, got {:?}", other),
    }
}
