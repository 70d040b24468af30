//! # Prompt
//!
//! Line-oriented operator input.
//!
//! Every `ask_*` method writes a question, reads one line and either returns
//! a value or explains the problem and asks again. The only ways out are a
//! valid answer, closed input ([`AppError::EndOfInput`]) or an I/O failure.
//!
//! The prompt is generic over its reader and writer so sessions can be
//! scripted in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use stockwatch_core::validation::ValidationResult;
use stockwatch_core::Category;
use tracing::warn;

use crate::error::{AppError, AppResult};

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// Consumes the prompt, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes a question and returns the trimmed answer.
    pub fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer parses as `T`.
    pub fn ask_parsed<T: FromStr>(&mut self, question: &str) -> AppResult<T> {
        loop {
            let answer = self.ask(question)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.reject(&answer, "Error: please enter a valid number.")?,
            }
        }
    }

    /// Like [`Prompt::ask_parsed`], but a blank answer returns `None`.
    pub fn ask_parsed_opt<T: FromStr>(&mut self, question: &str) -> AppResult<Option<T>> {
        loop {
            let answer = self.ask(question)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.reject(&answer, "Error: please enter a valid number.")?,
            }
        }
    }

    /// Asks for an integer until it passes `check`.
    pub fn ask_checked(
        &mut self,
        question: &str,
        check: impl Fn(i64) -> ValidationResult<()>,
    ) -> AppResult<i64> {
        loop {
            let value: i64 = self.ask_parsed(question)?;
            match check(value) {
                Ok(()) => return Ok(value),
                Err(e) => self.reject(&value.to_string(), format!("Error: {}.", e))?,
            }
        }
    }

    /// Asks for a 1-4 category choice.
    pub fn ask_category(&mut self, question: &str) -> AppResult<Category> {
        loop {
            let choice: i64 = self.ask_parsed(question)?;
            match Category::from_menu_choice(choice) {
                Some(category) => return Ok(category),
                None => self.reject(&choice.to_string(), "Error: choose a number from 1 to 4.")?,
            }
        }
    }

    /// Asks for an optional `YYYY-MM-DD` date. Blank means no date.
    pub fn ask_date(&mut self, question: &str) -> AppResult<Option<NaiveDate>> {
        loop {
            let answer = self.ask(question)?;
            if answer.is_empty() {
                return Ok(None);
            }
            match NaiveDate::parse_from_str(&answer, "%Y-%m-%d") {
                Ok(date) => return Ok(Some(date)),
                Err(_) => self.reject(
                    &answer,
                    "Error: dates must look like YYYY-MM-DD (e.g. 2025-10-15).",
                )?,
            }
        }
    }

    fn reject(&mut self, answer: &str, message: impl Display) -> AppResult<()> {
        warn!(answer, "Rejected input");
        self.say(message)
    }
}
