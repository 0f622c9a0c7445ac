//! Digit-sequence grammar.
//!
//! ```text
//! numbers := ws* number (ws+ number)* ws* EOF
//! number  := digit+
//! ```
//!
//! The parser never stops at the first problem: after a malformed number it
//! skips to the next whitespace and carries on, so one run can report
//! several failures in source order.

use pinpoint_diagnostic::{ErrorItem, Failure};
use tracing::{debug, trace};

use crate::{Cursor, NumberError};

/// A failure produced by the number grammar.
pub type NumberFailure = Failure<String, NumberError>;

/// Result of parsing: every well-formed number plus every failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub numbers: Vec<u64>,
    pub failures: Vec<NumberFailure>,
}

impl ParseOutput {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Parse whitespace-separated decimal numbers.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_numbers(source: &str) -> ParseOutput {
    let mut cursor = Cursor::new(source);
    let mut output = ParseOutput::default();

    cursor.skip_whitespace();
    if cursor.is_at_end() {
        output.failures.push(Failure::plain(
            cursor.position(),
            Some(ErrorItem::EndOfInput),
            [ErrorItem::label("digit")],
        ));
        return output;
    }

    while !cursor.is_at_end() {
        match number(&mut cursor) {
            Ok(n) => output.numbers.push(n),
            Err(failure) => {
                output.failures.push(failure);
                cursor.skip_to_whitespace();
            }
        }
        cursor.skip_whitespace();
    }

    debug!(
        numbers = output.numbers.len(),
        failures = output.failures.len(),
        "parsed numbers"
    );
    output
}

/// Parse one number, stopping at whitespace or end of input.
fn number(cursor: &mut Cursor<'_>) -> Result<u64, NumberFailure> {
    let start = cursor.position();
    let digits = cursor.eat_while(|c| c.is_ascii_digit());

    if let Some(found) = cursor.peek().filter(|c| !c.is_whitespace()) {
        let offset = cursor.position();
        trace!(offset, ?found, "non-digit in number");
        return Err(if digits.is_empty() {
            Failure::plain(
                offset,
                Some(ErrorItem::tokens(found.to_string())),
                [ErrorItem::label("digit")],
            )
        } else {
            Failure::custom(offset, NumberError::InvalidDigit { found })
        });
    }

    digits
        .bytes()
        .try_fold(0u64, |acc, b| {
            acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
        })
        .ok_or_else(|| {
            Failure::custom(
                start,
                NumberError::Overflow {
                    digits: digits.len(),
                },
            )
        })
}
