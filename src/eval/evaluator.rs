//! Reduction of Value trees to Numbers or Errors.

use log::debug;

use super::builtin;
use crate::value::{SExpr, Value};


pub const NOT_SYMBOL: &str = "S-expression Does not start with Symbol!";


/// Evaluates |value|, consuming it.
///
/// Numbers, Errors and Symbols are returned unchanged. S-expressions are
/// reduced bottom-up; any Error among their cells replaces the whole
/// expression.
pub fn eval(value: Value) -> Value {
    match value {
        Value::SExpr(sexpr) => eval_sexpr(sexpr),
        _ => value,
    }
}

fn eval_sexpr(sexpr: SExpr) -> Value {
    // All cells are evaluated before any are checked for Errors.
    let mut cells = sexpr.into_iter().map(eval).collect::<SExpr>();

    if let Some(i) = cells.iter().position(Value::is_error) {
        return cells.take(i);
    }

    match cells.len() {
        0 => Value::SExpr(cells),
        1 => cells.take(0),
        _ => match cells.pop_front() {
            Some(Value::Symbol(op)) => {
                debug!("Applying {} to {}", op, cells);
                builtin::call(&op, cells)
            }
            _ => Value::error(NOT_SYMBOL),
        },
    }
}


#[cfg(test)]
#[path = "./evaluator_test.rs"]
mod evaluator_test;
