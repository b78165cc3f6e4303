use crate::error::{ConvError, UsageError};
use crate::output::ParsedValue;
use crate::parse::{parse_float, parse_integer};

/// How every value of one invocation is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// `-d`: plain decimal float
    Double,
    /// `-l`: signed integer
    Long,
    /// `-h`: float with an optional K/M/G/T/P suffix
    Human,
}

impl ParseMode {
    pub fn parse(self, text: &str) -> Result<ParsedValue, ConvError> {
        match self {
            ParseMode::Double => parse_float(text, false).map(ParsedValue::Float),
            ParseMode::Long => parse_integer(text).map(ParsedValue::Integer),
            ParseMode::Human => parse_float(text, true).map(ParsedValue::Float),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub mode: Option<ParseMode>,
    pub values: Vec<String>,
}

impl Config {
    /// Check the invocation is usable and return the selected mode.
    ///
    /// The mode is checked first, so a missing mode is reported even when values
    /// are also missing.
    pub fn validate(&self) -> Result<ParseMode, UsageError> {
        let mode = self.mode.ok_or(UsageError::NoMode)?;
        if self.values.is_empty() {
            return Err(UsageError::NoValues);
        }
        Ok(mode)
    }
}
