//! Conversion of parse trees into Values.

use log::{trace, warn};

use crate::ast::AstNode;
use crate::value::{SExpr, Value};


pub const INVALID_NUMBER: &str = "invalid number";


/// Mirrors |node| as a Value tree.
///
/// The only validation performed is range checking of number literals; the
/// tree is otherwise assumed to be well-formed parser output.
pub fn read(node: &AstNode) -> Value {
    if node.has_tag("number") {
        return read_number(node);
    }
    if node.has_tag("symbol") {
        return Value::symbol(node.contents());
    }

    if !node.is_root() && !node.has_tag("sexpr") {
        warn!("Reading unexpected node {:?} as an S-expression", node.tag());
    }

    let mut sexpr = SExpr::new();
    for child in node.children() {
        if child.contents() == "(" || child.contents() == ")" || child.tag() == "regex" {
            continue;
        }
        sexpr.push(read(child));
    }
    trace!("Read {} cells from {:?}", sexpr.len(), node.tag());
    Value::SExpr(sexpr)
}

fn read_number(node: &AstNode) -> Value {
    match node.contents().parse::<i64>() {
        Ok(num) => Value::Number(num),
        Err(_) => Value::error(INVALID_NUMBER),
    }
}


#[cfg(test)]
#[path = "./reader_test.rs"]
mod reader_test;
