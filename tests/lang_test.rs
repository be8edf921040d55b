mod common;

use lispy::eval::{DIVISION_BY_ZERO, NON_NUMBER, NOT_SYMBOL};
use lispy::prelude::*;


#[test]
fn basic_arithmetic() {
    let results = common::results(
        "(+ 1 2 3)
         (- 10 2 3)
         (* 2 3 4)
         (/ 7 2)",
    );
    assert_eq!(
        results,
        vec![
            Value::number(6),
            Value::number(5),
            Value::number(24),
            Value::number(3)
        ]
    );
}

#[test]
fn unary_negation() {
    let results = common::rendered("(- 10)\n(- -10)\n(- (- 3))");
    assert_eq!(results, vec!["-10", "10", "3"]);
}

#[test]
fn truncating_division() {
    let results = common::rendered("(/ -7 2)\n(/ 7 -2)\n(/ -7 -2)\n(/ 1 2)");
    assert_eq!(results, vec!["-3", "-3", "3", "0"]);
}

#[test]
fn nested_evaluation() {
    let results = common::rendered(
        "(+ 1 (* 2 3))
         (* (+ 1 1) (- 10 (/ 9 3)))
         ((((+ 1 2))))",
    );
    assert_eq!(results, vec!["7", "14", "3"]);
}

#[test]
fn errors() {
    let results = common::rendered(
        "(/ 10 0)
         (+ 1 (/ 1 0))
         (1 2 3)
         (+ 1 (+))
         (+ 1 99999999999999999999)",
    );
    assert_eq!(
        results,
        vec![
            "Error: Division By Zero!",
            "Error: Division By Zero!",
            "Error: S-expression Does not start with Symbol!",
            "Error: Cannot operate on non-number!",
            "Error: invalid number",
        ]
    );
}

#[test]
fn symbol_operand() {
    let results = common::results("(+ 1 -)\n(* 2 (/))");
    assert_eq!(results, vec![Value::error(NON_NUMBER), Value::error(NON_NUMBER)]);
}

#[test]
fn first_error_wins() {
    let results = common::results(
        "(+ (/ 1 0) (1 2))
         (+ (1 2) (/ 1 0))",
    );
    assert_eq!(
        results,
        vec![Value::error(DIVISION_BY_ZERO), Value::error(NOT_SYMBOL)]
    );
}

#[test]
fn empty_sexpr() {
    let results = common::rendered("()\n(())\n");
    assert_eq!(results, vec!["()", "()"]);
}

#[test]
fn reduced_values_reevaluate() {
    common::setup();
    for input in &["(+ 40 2)", "(/ 1 0)", "()"] {
        let once = lispy::eval_str("<test>", input).unwrap();
        assert_eq!(eval(once.clone()), once);
    }
}

#[test]
fn pipeline_by_parts() {
    common::setup();
    let ast = parse("<test>", "(* 6 7)").unwrap();
    let value = read(&ast);
    assert_eq!(value.to_string(), "((* 6 7))");
    assert_eq!(eval(value), Value::number(42));
}

#[test]
fn parse_errors() {
    common::setup();
    let err = lispy::eval_str("<stdin>", "(+ 1 2))").unwrap_err();
    assert_eq!(
        err.to_string(),
        "<stdin>:1:8: error: expected number, symbol, '(' or end of input at ')'"
    );
}
