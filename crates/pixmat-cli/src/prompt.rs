use std::{
    fmt::Display,
    io::{BufRead, Write},
    str::FromStr,
};

use crate::error::CliError;

/// Line based question and answer over any reader and writer.
///
/// Invalid answers are reported on the writer and the question is asked
/// again. Running out of input is an error.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter reading answers from `reader` and writing questions to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Ask `question` until the answer parses as `T`.
    ///
    /// Blank answers are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnexpectedEof`] if the reader is exhausted, or
    /// [`CliError::Prompt`] if reading or writing fails.
    pub fn ask<T>(&mut self, question: &str) -> Result<T, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            write!(self.writer, "{question}: ")?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(CliError::UnexpectedEof);
            }

            let answer = line.trim();
            if answer.is_empty() {
                continue;
            }

            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("rejected answer {answer:?} to {question:?}");
                    writeln!(self.writer, "Invalid answer: {e}")?;
                }
            }
        }
    }

    /// Return `value` if given, otherwise [`Self::ask`] for it.
    pub fn or_ask<T>(&mut self, value: Option<T>, question: &str) -> Result<T, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match value {
            Some(value) => Ok(value),
            None => self.ask(question),
        }
    }
}
