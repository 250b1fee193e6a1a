//! Interactive filter selection and yes/no questions.
//!
//! Validation lives in [`crate::filters`]; this module only owns the
//! ask-until-valid loops, so it runs against any reader and writer.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use tracing::debug;

use crate::error::ValidationError;
use crate::filters::{City, DayFilter, FilterSelection, MonthFilter, parse_yes_no};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Asks for a city, a month and a day in turn, re-asking each until it
    /// validates, then echoes the whole selection.
    pub fn prompt_filter_selection(&mut self) -> Result<FilterSelection> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city = self.ask_until_valid(
            "\nPlease input a city name:\n1. Chicago 2. New York City 3. Washington",
            City::parse,
        )?;
        writeln!(self.output, "\nYou have chosen {city} as your city.")?;

        let month = self.ask_until_valid(
            "\nPlease enter a month name between January and June or enter 'all' to view data for all the months:",
            MonthFilter::parse,
        )?;
        writeln!(self.output, "\nYou have chosen {month} as your month.")?;

        let day = self.ask_until_valid(
            "\nPlease enter the day of the week or enter 'all' to view data for all the days:",
            DayFilter::parse,
        )?;
        writeln!(self.output, "\nYou have chosen {day} as your day.")?;

        let selection = FilterSelection { city, month, day };
        writeln!(self.output, "\nYou have chosen to view data for {selection}.")?;
        writeln!(self.output, "{}", "-".repeat(80))?;
        Ok(selection)
    }

    /// Re-asks `question` until the answer is yes or no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.ask_until_valid(question, parse_yes_no)
    }

    /// Asks once; only a yes answer counts, anything else is a no.
    pub fn answered_yes(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        let answer = self.read_answer()?;
        Ok(parse_yes_no(&answer).unwrap_or(false))
    }

    fn ask_until_valid<T>(
        &mut self,
        question: &str,
        validate: impl Fn(&str) -> std::result::Result<T, ValidationError>,
    ) -> Result<T> {
        loop {
            writeln!(self.output, "{question}")?;
            self.output.flush()?;
            let answer = self.read_answer()?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    writeln!(self.output, "\nPlease re-check your input: {e}")?;
                }
            }
        }
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before an answer was given");
        }
        Ok(line.trim().to_string())
    }
}
