//! Number grammar errors.
//!
//! [`NumberError`] is the custom payload the grammar attaches to fancy
//! failures. Its [`HasHints`] impl stamps each report with the payload's
//! own [`ParseErrorCode`] and adds fix-it hints.

use std::fmt;

use pinpoint_diagnostic::{HasHints, Note, Position, Report};

/// Error codes for number grammar diagnostics.
///
/// Format: E1xxx for syntax errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseErrorCode {
    /// Expected a number (reported for plain failures)
    E1000,
    /// Non-digit character inside a number
    E1001,
    /// Number does not fit in 64 bits
    E1002,
}

impl ParseErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorCode::E1000 => "E1000",
            ParseErrorCode::E1001 => "E1001",
            ParseErrorCode::E1002 => "E1002",
        }
    }

    /// One-line description for `--explain`-style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ParseErrorCode::E1000 => "expected a number",
            ParseErrorCode::E1001 => "invalid digit in number",
            ParseErrorCode::E1002 => "number too large",
        }
    }
}

impl fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ParseErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E1000" => Ok(ParseErrorCode::E1000),
            "E1001" => Ok(ParseErrorCode::E1001),
            "E1002" => Ok(ParseErrorCode::E1002),
            _ => Err(()),
        }
    }
}

/// Custom payload for malformed numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NumberError {
    /// A number ran into a character that is neither a digit nor whitespace.
    #[error("unexpected {found:?} in number")]
    InvalidDigit { found: char },
    /// A number has more value than a `u64` holds.
    #[error("number with {digits} digits does not fit in 64 bits")]
    Overflow { digits: usize },
}

impl NumberError {
    pub fn code(&self) -> ParseErrorCode {
        match self {
            NumberError::InvalidDigit { .. } => ParseErrorCode::E1001,
            NumberError::Overflow { .. } => ParseErrorCode::E1002,
        }
    }
}

impl HasHints<String> for NumberError {
    fn hints(&self) -> Vec<Note<String>> {
        match self {
            NumberError::InvalidDigit { .. } => vec![Note::Hint(
                "numbers may only contain the digits 0-9; separate numbers with whitespace"
                    .to_string(),
            )],
            NumberError::Overflow { .. } => vec![Note::Note(format!(
                "the largest supported number is {}",
                u64::MAX
            ))],
        }
    }

    fn shape_reports(
        &self,
        default_reports: Vec<Report<String>>,
        at: &Position,
    ) -> Vec<Report<String>> {
        let code = self.code().as_str().to_string();
        default_reports
            .into_iter()
            .map(|mut report| {
                report.code = Some(code.clone());
                match self {
                    NumberError::InvalidDigit { .. } => report,
                    NumberError::Overflow { .. } => {
                        report.with_suggestion(at.clone(), u64::MAX.to_string())
                    }
                }
            })
            .collect()
    }
}
