//! Prompt/re-prompt loops over a generic terminal pair.
//!
//! Every typed prompt keeps asking until the input satisfies the field's
//! type and range constraints. End of input (Ctrl-D) surfaces as
//! [`PromptError::Interrupted`], which aborts the current operation and
//! returns control to the menu.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use stockbook_core::{Money, ProductId};

/// Terminal-layer error.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended mid-entry; the current operation is aborted.
    #[error("input interrupted")]
    Interrupted,

    /// Unrecoverable terminal IO failure.
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// A prompt/response pair over arbitrary reader/writer.
pub struct Prompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        self.output
    }

    pub fn say(&mut self, msg: &str) -> PromptResult<()> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// One trimmed line; may be empty.
    pub fn line(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Interrupted);
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompts until the line is non-empty.
    pub fn nonempty(&mut self, prompt: &str) -> PromptResult<String> {
        loop {
            let value = self.line(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            self.say("Input required. Try again.")?;
        }
    }

    /// Re-prompts until a valid integer >= `min` is entered.
    pub fn u32_min(&mut self, prompt: &str, min: u32) -> PromptResult<u32> {
        loop {
            let value = self.nonempty(prompt)?;
            match value.parse::<u32>() {
                Ok(n) if n >= min => return Ok(n),
                Ok(_) => self.say(&format!("Must be >= {min}."))?,
                Err(_) => self.say("Invalid integer. Try again.")?,
            }
        }
    }

    /// Re-prompts until a valid non-negative amount is entered.
    pub fn money(&mut self, prompt: &str) -> PromptResult<Money> {
        loop {
            let value = self.nonempty(prompt)?;
            match value.parse::<Money>() {
                Ok(amount) => return Ok(amount),
                Err(err) => self.say(&format!("{err}. Try again."))?,
            }
        }
    }

    /// Re-prompts until a valid number is entered.
    pub fn number(&mut self, prompt: &str) -> PromptResult<f64> {
        loop {
            let value = self.nonempty(prompt)?;
            match value.parse::<f64>() {
                Ok(n) if n.is_finite() => return Ok(n),
                _ => self.say("Invalid number. Try again.")?,
            }
        }
    }

    /// Re-prompts until the line parses as a product id.
    pub fn product_id(&mut self, prompt: &str) -> PromptResult<ProductId> {
        loop {
            let value = self.nonempty(prompt)?;
            match value.parse::<ProductId>() {
                Ok(id) => return Ok(id),
                Err(_) => self.say("Invalid integer. Try again.")?,
            }
        }
    }

    /// Optional field for partial updates: blank keeps the current value,
    /// a malformed entry is dropped with a notice (the rest of the patch
    /// still applies).
    pub fn optional_u32(&mut self, prompt: &str, label: &str) -> PromptResult<Option<u32>> {
        let value = self.line(prompt)?;
        if value.is_empty() {
            return Ok(None);
        }
        match value.parse::<u32>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                self.say(&format!("Invalid {label}; keeping old value."))?;
                Ok(None)
            }
        }
    }

    /// Optional amount, same semantics as [`Self::optional_u32`].
    pub fn optional_money(&mut self, prompt: &str, label: &str) -> PromptResult<Option<Money>> {
        let value = self.line(prompt)?;
        if value.is_empty() {
            return Ok(None);
        }
        match value.parse::<Money>() {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                self.say(&format!("Invalid {label}; keeping old value."))?;
                Ok(None)
            }
        }
    }

    /// Optional free-text field: blank keeps the current value.
    pub fn optional_line(&mut self, prompt: &str) -> PromptResult<Option<String>> {
        let value = self.line(prompt)?;
        Ok(if value.is_empty() { None } else { Some(value) })
    }

    /// `y` confirms; anything else declines.
    pub fn confirm(&mut self, prompt: &str) -> PromptResult<bool> {
        let value = self.line(prompt)?;
        Ok(value.eq_ignore_ascii_case("y"))
    }
}
