//! Module for parsing Lispy text into a labeled parse tree.
//!
//! Grammar:
//!   number : /-?[0-9]+/ ;
//!   symbol : '+' | '-' | '*' | '/' ;
//!   sexpr  : '(' <expr>* ')' ;
//!   expr   : <number> | <symbol> | <sexpr> ;
//!   lispy  : /^/ <expr>* /$/ ;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::parse_error::ParseErrorReason::{self, *};
use super::parse_error::ParseError;
use crate::ast::node::{AstNode, ROOT_TAG};

pub const MAX_DEPTH: usize = 128;

const OPERATORS: &[char] = &['+', '-', '*', '/'];


/// Parses a whole program. |filename| is only used for diagnostics.
pub fn parse(filename: &str, input: &str) -> Result<AstNode, ParseError> {
    Parser::new(filename, input).parse_program()
}

/// Number of parens left open at the end of |input|.
pub fn open_depth(input: &str) -> usize {
    input.chars().fold(0, |depth: usize, c| match c {
        '(' => depth + 1,
        ')' => depth.saturating_sub(1),
        _ => depth,
    })
}


struct Parser<'a> {
    filename: &'a str,
    input: &'a str,

    pos: usize,
    line: usize,
    col: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(filename: &'a str, input: &'a str) -> Self {
        Self {
            filename,
            input,

            pos: 0,
            line: 1,
            col: 1,
            depth: 0,
        }
    }

    fn parse_program(mut self) -> Result<AstNode, ParseError> {
        let mut children = vec![AstNode::leaf("regex", "", self.line, self.col)];
        loop {
            self.skip_whitespace();
            match self.parse_expr()? {
                Some(expr) => children.push(expr),
                None => break,
            }
        }

        if let Some(c) = self.peek() {
            return Err(self.unexpected(&["number", "symbol", "'('", "end of input"], Some(c)));
        }
        children.push(AstNode::leaf("regex", "", self.line, self.col));

        trace!("Parsed {} top-level exprs", children.len() - 2);
        Ok(AstNode::branch(ROOT_TAG, children, 1, 1))
    }

    /// Returns None without consuming anything if no expr starts here.
    fn parse_expr(&mut self) -> Result<Option<AstNode>, ParseError> {
        // Number goes first so that "-5" isn't read as a symbol.
        let node = if let Some(number) = self.parse_number() {
            number
        } else if let Some(symbol) = self.parse_symbol() {
            symbol
        } else if self.peek() == Some('(') {
            self.parse_sexpr()?
        } else {
            return Ok(None);
        };
        Ok(Some(node.wrap("expr")))
    }

    fn parse_number(&mut self) -> Option<AstNode> {
        lazy_static! {
            static ref NUMBER: Regex = Regex::new(r"^-?[0-9]+").unwrap();
        }

        let text = NUMBER.find(self.rest())?.as_str();
        let node = AstNode::leaf("number|regex", text, self.line, self.col);
        self.advance(text.len());
        Some(node)
    }

    fn parse_symbol(&mut self) -> Option<AstNode> {
        let c = self.peek().filter(|c| OPERATORS.contains(c))?;
        let node = AstNode::leaf("symbol|char", c.to_string(), self.line, self.col);
        self.advance(c.len_utf8());
        Some(node)
    }

    fn parse_sexpr(&mut self) -> Result<AstNode, ParseError> {
        let (line, col) = (self.line, self.col);
        if self.depth >= MAX_DEPTH {
            return Err(self.error(DepthOverflow));
        }
        self.depth += 1;

        let mut children = vec![AstNode::leaf("char", "(", line, col)];
        self.advance(1);
        loop {
            self.skip_whitespace();
            if self.peek() == Some(')') {
                children.push(AstNode::leaf("char", ")", self.line, self.col));
                self.advance(1);
                break;
            }

            match self.parse_expr()? {
                Some(expr) => children.push(expr),
                None => {
                    let found = self.peek();
                    return Err(self.unexpected(&["number", "symbol", "'('", "')'"], found));
                }
            }
        }

        self.depth -= 1;
        Ok(AstNode::branch("sexpr|>", children, line, col))
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self, len: usize) {
        for c in self.input[self.pos..self.pos + len].chars() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.pos += len;
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.advance(c.len_utf8());
        }
    }

    fn unexpected(&self, expected: &[&'static str], found: Option<char>) -> ParseError {
        self.error(Unexpected {
            expected: expected.to_vec(),
            found,
        })
    }

    fn error(&self, reason: ParseErrorReason) -> ParseError {
        ParseError::new(self.filename, self.line, self.col, reason)
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
