//! Creation of built-in arithmetic operators.

use lazy_static::lazy_static;
use log::trace;

use std::collections::HashMap;
use std::fmt;

use crate::value::{SExpr, Value};


pub const NON_NUMBER: &str = "Cannot operate on non-number!";
pub const DIVISION_BY_ZERO: &str = "Division By Zero!";
pub const INTEGER_OVERFLOW: &str = "Integer Overflow!";
pub const UNKNOWN_OPERATOR: &str = "Unknown Operator!";
pub const MISSING_OPERANDS: &str = "Missing Operands!";

macro_rules! builtins {
    (@unary) => { None };
    (@unary $u:expr) => { Some($u as fn(i64) -> Step) };
    [$($n:tt : $x:expr $(=> $u:expr)?),*] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert(
                    $n,
                    Builtin {
                        name: stringify!($x),
                        fold: $x,
                        unary: builtins!(@unary $($u)?),
                    },
                );
            )*
            m
        }
    };
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, Builtin> =
        builtins!["+": add, "-": sub => neg, "*": mul, "/": div];
}

type Step = Result<i64, &'static str>;

pub struct Builtin {
    name: &'static str,
    fold: fn(i64, i64) -> Step,
    // Applied instead of the fold when there is a single operand.
    unary: Option<fn(i64) -> Step>,
}

impl Builtin {
    pub fn lookup(op: &str) -> Option<&'static Builtin> {
        BUILTINS.get(op)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Folds |operands| left-to-right, starting from the first one.
    pub fn apply(&self, operands: &[i64]) -> Step {
        let (first, rest) = match operands.split_first() {
            Some(split) => split,
            None => return Err(MISSING_OPERANDS),
        };

        if let (Some(unary), true) = (self.unary, rest.is_empty()) {
            return unary(*first);
        }
        rest.iter().try_fold(*first, |acc, operand| (self.fold)(acc, *operand))
    }
}

/// Applies the builtin named |op| to already-evaluated |args|.
pub fn call(op: &str, args: SExpr) -> Value {
    let mut operands = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::Number(num) => operands.push(num),
            _ => return Value::error(NON_NUMBER),
        }
    }

    let builtin = match Builtin::lookup(op) {
        Some(builtin) => builtin,
        None => return Value::error(UNKNOWN_OPERATOR),
    };
    trace!("Folding {:?} with {}", operands, builtin.name());

    match builtin.apply(&operands) {
        Ok(num) => Value::Number(num),
        Err(message) => Value::error(message),
    }
}


impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} @ {:p}]", self.name, &self.fold)
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


fn add(acc: i64, operand: i64) -> Step {
    acc.checked_add(operand).ok_or(INTEGER_OVERFLOW)
}

fn sub(acc: i64, operand: i64) -> Step {
    acc.checked_sub(operand).ok_or(INTEGER_OVERFLOW)
}

fn neg(operand: i64) -> Step {
    operand.checked_neg().ok_or(INTEGER_OVERFLOW)
}

fn mul(acc: i64, operand: i64) -> Step {
    acc.checked_mul(operand).ok_or(INTEGER_OVERFLOW)
}

// Truncates toward zero.
fn div(acc: i64, operand: i64) -> Step {
    if operand == 0 {
        return Err(DIVISION_BY_ZERO);
    }
    acc.checked_div(operand).ok_or(INTEGER_OVERFLOW)
}


#[cfg(test)]
#[path = "./builtin_test.rs"]
mod builtin_test;
