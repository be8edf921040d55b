use log::error;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use std::path::Path;

use super::ReplError;
use crate::parser::open_depth;


pub const PROMPT: &str = "lisp> ";


/// Line-editing prompt yielding complete inputs.
///
/// Lines are accumulated on continuation prompts while parens remain open.
pub struct Prompt {
    editor: Editor<()>,

    curr_input: String,
}

impl Prompt {
    pub fn new() -> Prompt {
        Prompt {
            editor: Editor::<()>::new(),

            curr_input: String::default(),
        }
    }

    pub fn load_history(&mut self, path: &Path) -> Result<(), ReplError> {
        self.editor.load_history(path)?;
        Ok(())
    }

    pub fn save_history(&mut self, path: &Path) -> Result<(), ReplError> {
        self.editor.save_history(path)?;
        Ok(())
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}


impl Iterator for Prompt {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let depth = open_depth(&self.curr_input);
            let line = if depth == 0 {
                self.editor.readline(PROMPT)
            } else {
                self.editor.readline(&format!("..{}", "  ".repeat(depth)))
            };

            match line {
                Ok(line) => {
                    if !self.curr_input.is_empty() {
                        self.curr_input.push(' ');
                    }
                    self.curr_input += &line;
                    if open_depth(&self.curr_input) > 0 {
                        continue;
                    }

                    let input = std::mem::take(&mut self.curr_input);
                    if !input.trim().is_empty() {
                        self.editor.add_history_entry(input.as_str());
                    }
                    return Some(input);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    if self.curr_input.is_empty() {
                        return None;
                    }
                    // Cancel the pending input only.
                    self.curr_input.clear();
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    return None;
                }
                Err(err) => {
                    error!("[Readline Error]: {:?}", err);
                    return None;
                }
            }
        }
    }
}
