//! Module for representing Lispy runtime values.

use std::collections::vec_deque::{self, VecDeque};
use std::iter::FromIterator;


/// Builds an SExpr from a list of anything convertible into a Value.
#[macro_export]
macro_rules! sexpr {
    ($($elem:expr),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut sexpr = $crate::value::SExpr::new();
            $(
                sexpr.push($elem.into());
            )*
            sexpr
        }
    };
}


#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    SExpr(SExpr),
}

/// Ordered cells of an S-expression. Each cell is owned exclusively by its
/// SExpr.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SExpr {
    cells: VecDeque<Value>,
}

pub struct SExprIntoIter {
    cells: vec_deque::IntoIter<Value>,
}


impl Value {
    pub fn number(num: i64) -> Self {
        Value::Number(num)
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Value::Error(message.into())
    }

    pub fn symbol<S: Into<String>>(name: S) -> Self {
        Value::Symbol(name.into())
    }

    /// Empty S-expression.
    pub fn sexpr() -> Self {
        Value::SExpr(SExpr::new())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl SExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single cell, taking ownership of it.
    pub fn push(&mut self, value: Value) {
        self.cells.push_back(value);
    }

    pub fn pop_front(&mut self) -> Option<Value> {
        self.cells.pop_front()
    }

    /// Consumes self, returning only the cell at |index|.
    ///
    /// Out-of-bounds indices yield the empty S-expression.
    pub fn take(mut self, index: usize) -> Value {
        self.cells.remove(index).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<Value> {
        self.cells.iter()
    }
}


impl Default for Value {
    fn default() -> Self {
        Value::sexpr()
    }
}

impl From<i64> for Value {
    fn from(num: i64) -> Self {
        Value::Number(num)
    }
}

impl From<SExpr> for Value {
    fn from(sexpr: SExpr) -> Self {
        Value::SExpr(sexpr)
    }
}

impl FromIterator<Value> for SExpr {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        SExpr {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Iterator for SExprIntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.cells.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl IntoIterator for SExpr {
    type Item = Value;
    type IntoIter = SExprIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        SExprIntoIter {
            cells: self.cells.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a SExpr {
    type Item = &'a Value;
    type IntoIter = vec_deque::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
