use super::*;


fn call_nums(op: &str, nums: &[i64]) -> Value {
    call(op, nums.iter().map(|n| Value::number(*n)).collect())
}

#[test]
fn arithmetic() {
    assert_eq!(call_nums("+", &[1, 2, 3]), Value::number(6));
    assert_eq!(call_nums("-", &[10, 2, 3]), Value::number(5));
    assert_eq!(call_nums("*", &[2, 3, 4]), Value::number(24));
    assert_eq!(call_nums("/", &[100, 5, 2]), Value::number(10));
}

#[test]
fn single_operand() {
    assert_eq!(call_nums("-", &[10]), Value::number(-10));
    assert_eq!(call_nums("-", &[-3]), Value::number(3));
    assert_eq!(call_nums("+", &[7]), Value::number(7));
    assert_eq!(call_nums("*", &[7]), Value::number(7));
    assert_eq!(call_nums("/", &[7]), Value::number(7));
}

#[test]
fn truncating_division() {
    assert_eq!(call_nums("/", &[7, 2]), Value::number(3));
    assert_eq!(call_nums("/", &[-7, 2]), Value::number(-3));
    assert_eq!(call_nums("/", &[7, -2]), Value::number(-3));
    assert_eq!(call_nums("/", &[-7, -2]), Value::number(3));
}

#[test]
fn division_by_zero() {
    assert_eq!(call_nums("/", &[10, 0]), Value::error(DIVISION_BY_ZERO));
    // Partial results are discarded.
    assert_eq!(call_nums("/", &[10, 2, 0, 5]), Value::error(DIVISION_BY_ZERO));
    // Only divisors are checked.
    assert_eq!(call_nums("/", &[0, 5]), Value::number(0));
}

#[test]
fn non_number() {
    let args = sexpr![Value::number(1), Value::symbol("foo")];
    assert_eq!(call("+", args), Value::error(NON_NUMBER));

    let args = sexpr![sexpr![], Value::number(0)];
    assert_eq!(call("/", args), Value::error(NON_NUMBER));
}

#[test]
fn non_number_checked_before_operator() {
    let args = sexpr![Value::number(1), Value::symbol("+")];
    assert_eq!(call("%", args), Value::error(NON_NUMBER));
}

#[test]
fn unknown_operator() {
    assert_eq!(call_nums("%", &[1, 2]), Value::error(UNKNOWN_OPERATOR));
}

#[test]
fn overflow() {
    assert_eq!(call_nums("+", &[i64::MAX, 1]), Value::error(INTEGER_OVERFLOW));
    assert_eq!(call_nums("-", &[i64::MIN, 1]), Value::error(INTEGER_OVERFLOW));
    assert_eq!(call_nums("-", &[i64::MIN]), Value::error(INTEGER_OVERFLOW));
    assert_eq!(call_nums("*", &[i64::MAX, 2]), Value::error(INTEGER_OVERFLOW));
    assert_eq!(call_nums("/", &[i64::MIN, -1]), Value::error(INTEGER_OVERFLOW));
    assert_eq!(call_nums("-", &[i64::MAX]), Value::number(-i64::MAX));
}

#[test]
fn lookup() {
    for op in &["+", "-", "*", "/"] {
        assert!(Builtin::lookup(op).is_some());
    }
    assert!(Builtin::lookup("mod").is_none());
    assert_eq!(Builtin::lookup("-").unwrap().name(), "sub");
    assert_eq!(Builtin::lookup("/").unwrap().to_string(), "[BUILTIN_div]");
}

#[test]
fn apply_without_operands() {
    let add = Builtin::lookup("+").unwrap();
    assert_eq!(add.apply(&[]), Err(MISSING_OPERANDS));
}
