#[macro_use]
mod value;

mod print;


pub use value::{SExpr, SExprIntoIter, Value};
