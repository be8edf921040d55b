use log::debug;

use crate::parser::ParseError;
use crate::value::Value;


#[macro_use]
pub mod value;

pub mod ast;
pub mod eval;
pub mod parser;
pub mod reader;
#[cfg(feature = "cli")]
pub mod repl;

pub mod prelude {
    pub use crate::ast::AstNode;
    pub use crate::eval::eval;
    pub use crate::parser::{parse, ParseError};
    pub use crate::reader::read;
    pub use crate::value::{SExpr, Value};
    // Macros.
    pub use crate::sexpr;
}


/// Parses, reads and evaluates |input| as a whole program.
///
/// Only malformed syntax is reported as Err; everything else reduces to a
/// Value, possibly Value::Error.
pub fn eval_str(filename: &str, input: &str) -> Result<Value, ParseError> {
    let ast = parser::parse(filename, input)?;
    let value = reader::read(&ast);
    debug!("Evaluating {}", value);
    Ok(eval::eval(value))
}
