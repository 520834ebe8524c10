//! Input sources for interactive commands.
//!
//! On a terminal, prompts go through `dialoguer` and secrets are hidden.
//! When stdin is piped, each prompt consumes one line, which keeps the menu
//! scriptable.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::{Input, Password};

use crate::cli::output;
use crate::error::{Result, ValidationError};

/// Something that can answer prompts. `Ok(None)` means input is exhausted.
///
/// An answer that is not valid UTF-8 is consumed and reported as
/// `ValidationError::Encoding`.
pub trait Prompt {
    /// Ask for a visible value.
    fn text(&mut self, label: &str) -> Result<Option<String>>;

    /// Ask for a secret value.
    fn secret(&mut self, label: &str) -> Result<Option<String>>;
}

/// Interactive terminal prompts.
pub struct Terminal;

/// Map a closed terminal to end of input.
fn answered(result: dialoguer::Result<String>) -> Result<Option<String>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Prompt for Terminal {
    fn text(&mut self, label: &str) -> Result<Option<String>> {
        answered(
            Input::new()
                .with_prompt(label)
                .allow_empty(true)
                .interact_text(),
        )
    }

    fn secret(&mut self, label: &str) -> Result<Option<String>> {
        answered(
            Password::new()
                .with_prompt(label)
                .allow_empty_password(true)
                .interact(),
        )
    }
}

/// Line-per-prompt reader for piped input.
pub struct Lines<R> {
    reader: R,
    echo: bool,
}

impl<R: BufRead> Lines<R> {
    /// Read answers from `reader`. With `echo`, prompt labels are printed.
    pub fn new(reader: R, echo: bool) -> Self {
        Self { reader, echo }
    }

    fn next_line(&mut self, label: &str) -> Result<Option<String>> {
        if self.echo {
            output::prompt(label);
        }

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8(line).map_err(|_| ValidationError::Encoding)?;
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        Ok(Some(trimmed.to_string()))
    }
}

impl<R: BufRead> Prompt for Lines<R> {
    fn text(&mut self, label: &str) -> Result<Option<String>> {
        self.next_line(label)
    }

    fn secret(&mut self, label: &str) -> Result<Option<String>> {
        self.next_line(label)
    }
}

/// Pick the prompt source for stdin.
pub fn stdin() -> Box<dyn Prompt> {
    if std::io::stdin().is_terminal() {
        Box::new(Terminal)
    } else {
        Box::new(Lines::new(std::io::stdin().lock(), true))
    }
}

/// Read a secret for a one-shot command: piped stdin or a hidden prompt.
pub fn read_secret(label: &str) -> Result<String> {
    Ok(stdin().secret(label)?.unwrap_or_default())
}
