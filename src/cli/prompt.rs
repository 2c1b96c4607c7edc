//! Line-oriented prompts that re-ask until the input parses.

use std::io::{BufRead, Write};

use crate::common::{Error, Result};

/// Reads answers from `input`, writing prompts and messages to `output`.
///
/// Invalid numbers are never an error: the prompt repeats until a valid
/// value arrives. Only end of input (`Error::InputClosed`) and terminal
/// I/O failures escape.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where prompts and messages go.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and return the next line without its terminator.
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt for a 32-bit integer, repeating on invalid input.
    pub fn int(&mut self, prompt: &str) -> Result<i32> {
        self.parsed(prompt, "Invalid number. Try again.", parse_int)
    }

    /// Prompt for a finite price, repeating on invalid input.
    pub fn price(&mut self, prompt: &str) -> Result<f32> {
        self.parsed(prompt, "Invalid price. Try again.", parse_price)
    }

    /// Wait for the user to press Enter.
    pub fn pause(&mut self) -> Result<()> {
        self.line("\nPress Enter to continue...").map(|_| ())
    }

    fn parsed<T>(&mut self, prompt: &str, complaint: &str, parse: fn(&str) -> Option<T>) -> Result<T> {
        loop {
            let answer = self.line(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "{}", complaint)?,
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(Error::InputClosed);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(buf)
    }
}

/// A decimal `i32`, surrounding whitespace allowed.
pub fn parse_int(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// A finite `f32`, surrounding whitespace allowed.
pub fn parse_price(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|p| p.is_finite())
}
