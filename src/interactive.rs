//! Interactive input collection for the command-line surface
//!
//! Generic over `BufRead`/`Write` so the prompt loop can be driven from
//! tests as well as from a terminal.

use crate::errors::{Result, SummarizeError};
use std::io::{BufRead, Write};

/// Shown before reading the text block
pub const TEXT_PROMPT: &str =
    "Please paste your text below. Press ENTER on an empty line when you are finished:";

/// Shown before reading the sentence count
pub const COUNT_PROMPT: &str = "How many sentences do you want in the summary? (e.g., 3): ";

/// Printed above the summary
pub const SUMMARY_BANNER: &str = "--- GENERATED SUMMARY ---";

/// Why a sentence count was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountRejection {
    /// The input was not an integer
    NotANumber,
    /// The input was zero or negative
    NotPositive,
}

impl CountRejection {
    /// Message asking the user to try again
    pub fn message(self) -> &'static str {
        match self {
            CountRejection::NotANumber => "That's not a valid number. Please try again.",
            CountRejection::NotPositive => "Please enter a positive number.",
        }
    }
}

/// Parse a sentence count typed by the user
pub fn parse_count(input: &str) -> std::result::Result<usize, CountRejection> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| CountRejection::NotANumber)?;
    if value <= 0 {
        return Err(CountRejection::NotPositive);
    }
    usize::try_from(value).map_err(|_| CountRejection::NotANumber)
}

/// Read lines until the first empty line (or end of input), joined by `\n`
pub fn read_text_block<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let content = line.trim_end_matches(['\n', '\r']);
        if content.is_empty() {
            break;
        }
        lines.push(content.to_string());
    }

    Ok(lines.join("\n"))
}

/// Prompt until a positive integer is entered
///
/// Fails only when input ends before a valid count was given.
pub fn prompt_sentence_count<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Result<usize> {
    let mut line = String::new();

    loop {
        write!(out, "{}", COUNT_PROMPT)?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(SummarizeError::io(
                "input ended before a sentence count was given",
            ));
        }

        match parse_count(&line) {
            Ok(count) => return Ok(count),
            Err(rejection) => {
                tracing::debug!(input = line.trim(), ?rejection, "rejected sentence count");
                writeln!(out, "{}", rejection.message())?;
            }
        }
    }
}
