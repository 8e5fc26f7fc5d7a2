//! Line-oriented terminal I/O with input validation.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Context;

/// Prompting console over any buffered reader and writer.
///
/// Every prompt can be abandoned with the abort sentinel; end of input is
/// treated the same way so scripted sessions terminate cleanly.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
    abort_sentinel: String,
}

impl fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("abort_sentinel", &self.abort_sentinel)
            .finish_non_exhaustive()
    }
}

impl<'a> Console<'a> {
    pub fn new(
        input: &'a mut dyn BufRead,
        output: &'a mut dyn Write,
        abort_sentinel: impl Into<String>,
    ) -> Self {
        Self {
            input,
            output,
            abort_sentinel: abort_sentinel.into(),
        }
    }

    /// Raw output handle for renderers.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Write one line of output.
    pub fn say(&mut self, message: impl fmt::Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", message).with_context(|| "failed to write to output")
    }

    /// Read one trimmed line; `None` at end of input.
    pub fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        self.output
            .flush()
            .with_context(|| "failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context(|| "failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until a non-empty line is entered.
    ///
    /// Returns `None` when the user enters the abort sentinel or input ends.
    pub fn prompt_text(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        loop {
            write!(self.output, "{} (or '{}' to return): ", label, self.abort_sentinel)
                .with_context(|| "failed to write prompt")?;

            let Some(line) = self.read_line()? else {
                tracing::debug!(prompt = label, "input closed during prompt");
                return Ok(None);
            };
            if line == self.abort_sentinel {
                return Ok(None);
            }
            if line.is_empty() {
                self.say("Input cannot be empty")?;
                continue;
            }
            return Ok(Some(line));
        }
    }

    /// Prompt until a positive integer identifier is entered.
    ///
    /// `noun` names the identifier in the rejection message, e.g. `book`.
    pub fn prompt_id(&mut self, label: &str, noun: &str) -> anyhow::Result<Option<u64>> {
        loop {
            let Some(line) = self.prompt_text(label)? else {
                return Ok(None);
            };
            match line.parse::<u64>() {
                Ok(id) if id > 0 => return Ok(Some(id)),
                _ => self.say(format_args!("invalid {} id: must be positive integer", noun))?,
            }
        }
    }
}
