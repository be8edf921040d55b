//! Textual rendering of Values.
//!
//! Output is meant for display only; it is not guaranteed to parse back into
//! the same Value.

use std::fmt;

use super::{SExpr, Value};


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(num) => write!(f, "{}", num),
            Value::Error(message) => write!(f, "Error: {}", message),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::SExpr(sexpr) => write!(f, "{}", sexpr),
        }
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, cell) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, ")")
    }
}


#[cfg(test)]
#[path = "./print_test.rs"]
mod print_test;
