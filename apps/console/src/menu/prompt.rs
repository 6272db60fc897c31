//! Line-based prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use canteen_core::Money;

use crate::error::{AppError, AppResult};

/// Reads answers from `input` and writes prompts and output to `output`.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Shows `prompt` and reads one line without its terminator.
    ///
    /// End of input becomes [`AppError::input_closed`]. Bytes that are not
    /// UTF-8 are replaced, so the answer is rejected by whoever parses it.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(AppError::input_closed());
        }

        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Reads a line with surrounding whitespace removed.
    pub fn read_text(&mut self, prompt: &str) -> AppResult<String> {
        Ok(self.read_line(prompt)?.trim().to_string())
    }

    /// Reads a value of any parseable type.
    pub fn read_number<T: FromStr>(&mut self, prompt: &str) -> AppResult<T> {
        let text = self.read_text(prompt)?;
        text.parse()
            .map_err(|_| AppError::invalid_input(format!("'{}' is not a valid number", text)))
    }

    /// Reads a decimal amount such as `2.50`.
    pub fn read_money(&mut self, prompt: &str) -> AppResult<Money> {
        let text = self.read_text(prompt)?;
        text.parse()
            .map_err(|_| AppError::invalid_input(format!("'{}' is not a valid amount", text)))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
