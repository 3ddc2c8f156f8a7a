//! Line-oriented console I/O with re-prompting.
//!
//! [`Console`] wraps any `BufRead`/`Write` pair so the prompts can be driven
//! from real stdin/stdout or from in-memory buffers in tests.

use std::io::{BufRead, Write};

use bikeshare_core::error::{BikeshareError, Result};
use tracing::debug;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for report output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning the writer (used by tests to inspect
    /// what was printed).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` without a trailing newline and read one line.
    ///
    /// Only the line terminator is removed. Bytes that are not valid UTF-8
    /// become U+FFFD, so a garbled answer is rejected like any other typo.
    /// Returns [`BikeshareError::InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("input closed at prompt {:?}", prompt.trim());
            return Err(BikeshareError::InputClosed);
        }
        let line = String::from_utf8_lossy(&raw).into_owned();
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    /// Re-prompt until `parse` accepts the trimmed, lower-cased answer.
    ///
    /// `error_message` is printed after each rejected answer. There is no
    /// retry limit.
    pub fn ask_until<T, F>(&mut self, prompt: &str, error_message: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(prompt)?.trim().to_lowercase();
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            debug!("rejected answer {:?}", answer);
            writeln!(self.output, "{}", error_message)?;
        }
    }

    /// Strict yes/no question: anything other than `yes` or `no`
    /// (case-insensitive, surrounding whitespace ignored) is asked again.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        self.ask_until(prompt, "Invalid input. Please enter 'yes' or 'no'.", |a| {
            match a {
                "yes" => Some(true),
                "no" => Some(false),
                _ => None,
            }
        })
    }
}
