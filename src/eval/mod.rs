// Public exports.
pub use builtin::{
    Builtin, DIVISION_BY_ZERO, INTEGER_OVERFLOW, MISSING_OPERANDS, NON_NUMBER, UNKNOWN_OPERATOR,
};
pub use evaluator::{eval, NOT_SYMBOL};

// Public mods.
pub mod builtin;

// Private mods.
mod evaluator;
