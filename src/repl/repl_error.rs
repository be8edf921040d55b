use rustyline::error::ReadlineError;

use std::fmt;
use std::io;

use crate::parser::ParseError;


#[derive(Debug)]
pub enum ReplError {
    Io(io::Error),
    Parse(ParseError),
    Readline(ReadlineError),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplError::Io(err) => write!(f, "[IO Error]: {}", err),
            ReplError::Parse(err) => write!(f, "{}", err),
            ReplError::Readline(err) => write!(f, "[Readline Error]: {}", err),
        }
    }
}

impl std::error::Error for ReplError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplError::Io(err) => Some(err),
            ReplError::Parse(err) => Some(err),
            ReplError::Readline(err) => Some(err),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(err: io::Error) -> Self {
        ReplError::Io(err)
    }
}

impl From<ParseError> for ReplError {
    fn from(err: ParseError) -> Self {
        ReplError::Parse(err)
    }
}

impl From<ReadlineError> for ReplError {
    fn from(err: ReadlineError) -> Self {
        ReplError::Readline(err)
    }
}
