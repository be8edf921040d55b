//! Labeled parse tree produced by the grammar parser.
//!
//! A node's tag is the `|`-joined path of grammar rules it matched, innermost
//! last (e.g. `expr|number|regex`). The root of a program is tagged `>`.

use std::fmt;


pub const ROOT_TAG: &str = ">";

#[derive(Clone, Debug, PartialEq)]
pub struct AstNode {
    tag: String,
    contents: String,
    children: Vec<AstNode>,

    line: usize,
    col: usize,
}

impl AstNode {
    pub fn leaf<T: Into<String>, C: Into<String>>(
        tag: T,
        contents: C,
        line: usize,
        col: usize,
    ) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            children: Default::default(),
            line,
            col,
        }
    }

    pub fn branch<T: Into<String>>(
        tag: T,
        children: Vec<AstNode>,
        line: usize,
        col: usize,
    ) -> Self {
        Self {
            tag: tag.into(),
            contents: String::default(),
            children,
            line,
            col,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn children(&self) -> &[AstNode] {
        &self.children
    }

    /// Whether |rule| is any component of this node's tag path.
    pub fn has_tag(&self, rule: &str) -> bool {
        self.tag.split('|').any(|component| component == rule)
    }

    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    /// (line, col), both 1-based.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// Prefixes |rule| to the tag path, as when a rule matched exactly this
    /// one node.
    pub(crate) fn wrap(mut self, rule: &str) -> Self {
        self.tag = format!("{}|{}", rule, self.tag);
        self
    }

    fn fmt_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{}", "  ".repeat(depth))?;
        if self.children.is_empty() {
            writeln!(f, "{}:{}:{} '{}'", self.tag, self.line, self.col, self.contents)
        } else {
            writeln!(f, "{} ", self.tag)?;
            for child in &self.children {
                child.fmt_depth(f, depth + 1)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_depth(f, 0)
    }
}


#[cfg(test)]
#[path = "./node_test.rs"]
mod node_test;
