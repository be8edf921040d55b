// Public exports.
pub use parse_error::{ParseError, ParseErrorReason};
pub use parser::{open_depth, parse, MAX_DEPTH};

// Private mods.
mod parse_error;
mod parser;
