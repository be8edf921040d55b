use std::fmt;


#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    filename: String,
    line: usize,
    col: usize,
    reason: ParseErrorReason,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorReason {
    Unexpected {
        expected: Vec<&'static str>,
        // None at end of input.
        found: Option<char>,
    },
    DepthOverflow,
}

impl ParseError {
    pub fn new<S: Into<String>>(
        filename: S,
        line: usize,
        col: usize,
        reason: ParseErrorReason,
    ) -> Self {
        Self {
            filename: filename.into(),
            line,
            col,
            reason,
        }
    }

    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }

    /// (line, col), both 1-based.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}: error: ", self.filename, self.line, self.col)?;
        match &self.reason {
            ParseErrorReason::Unexpected { expected, found } => {
                write!(f, "expected ")?;
                for (i, item) in expected.iter().enumerate() {
                    if i == 0 {
                    } else if i + 1 == expected.len() {
                        write!(f, " or ")?;
                    } else {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                match found {
                    Some(c) => write!(f, " at '{}'", c),
                    None => write!(f, " at end of input"),
                }
            }
            // Reported at the '(' that opens level MAX_DEPTH + 1.
            ParseErrorReason::DepthOverflow => write!(f, "expected shallower nesting at '('"),
        }
    }
}

impl std::error::Error for ParseError {}
