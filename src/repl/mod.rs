//! Interactive prompt and batch front-ends.

// Public exports.
pub use config::ReplConfig;
pub use prompt::Prompt;
pub use repl_error::ReplError;

// Public mods.
pub mod config;
pub mod prompt;

// Private mods.
mod repl_error;


use colored::*;
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::eval;
use crate::parser;
use crate::reader;
use crate::value::Value;


pub const BANNER: &str = "Lispy Version 0.1";
pub const EXIT_HINT: &str = "Press Ctrl+c to Exit";


/// Runs the interactive prompt until the user exits.
pub fn run(config: &ReplConfig) -> Result<(), ReplError> {
    println!("{}", BANNER.bold());
    println!("{}", EXIT_HINT);
    println!();

    let mut prompt = Prompt::new();
    if let Some(path) = &config.history {
        if let Err(err) = prompt.load_history(path) {
            info!("No history loaded from {}: {}", path.display(), err);
        }
    }

    for input in &mut prompt {
        match print_evaluation("<stdin>", &input, config) {
            Ok(_) | Err(ReplError::Parse(_)) => {}
            Err(err) => return Err(err),
        }
    }

    if let Some(path) = &config.history {
        prompt.save_history(path)?;
    }
    Ok(())
}

/// Evaluates each non-blank line of the file at |path| independently,
/// printing one line per input.
pub fn run_file<P: AsRef<Path>>(path: P, config: &ReplConfig) -> Result<(), ReplError> {
    run_file_to(&mut io::stdout(), path, config)
}

/// As run_file, writing to |out|. Parse errors are reported and skipped.
pub fn run_file_to<W: Write, P: AsRef<Path>>(
    out: &mut W,
    path: P,
    config: &ReplConfig,
) -> Result<(), ReplError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let filename = path.to_string_lossy();

    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        match write_evaluation(out, &filename, line, config) {
            Ok(_) | Err(ReplError::Parse(_)) => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

pub fn print_evaluation(
    filename: &str,
    input: &str,
    config: &ReplConfig,
) -> Result<Value, ReplError> {
    write_evaluation(&mut io::stdout(), filename, input, config)
}

/// Evaluates one input, writing either its Value or the parse diagnostic to
/// |out|.
///
/// The diagnostic is also returned as ReplError::Parse.
pub fn write_evaluation<W: Write>(
    out: &mut W,
    filename: &str,
    input: &str,
    config: &ReplConfig,
) -> Result<Value, ReplError> {
    let ast = match parser::parse(filename, input) {
        Ok(ast) => ast,
        Err(err) => {
            warn!("Failed to parse {:?}", input);
            writeln!(out, "{}", err.to_string().red())?;
            return Err(ReplError::Parse(err));
        }
    };
    if config.show_ast {
        write!(out, "{}", ast)?;
    }

    let value = eval::eval(reader::read(&ast));
    write_value(out, &value)?;
    Ok(value)
}

pub fn write_value<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    if value.is_error() {
        writeln!(out, "{}", value.to_string().red())
    } else {
        writeln!(out, "{}", value)
    }
}
