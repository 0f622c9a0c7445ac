//! Digit-sequence front end for pinpoint.
//!
//! Parses whitespace-separated decimal numbers and reports every malformed
//! one as a structural failure. [`check`] runs the parser and turns those
//! failures into a [`Diagnostic`] ready for printing.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{NumberError, ParseErrorCode};
pub use grammar::{parse_numbers, NumberFailure, ParseOutput};

use pinpoint_diagnostic::{error_diagnostic_from_bundle, BundleConfig, Diagnostic, SourceResolver};

/// Parse `source`, returning the numbers or a diagnostic describing why not.
///
/// The diagnostic carries `source` registered under `file`, and every report
/// uses `headline` as its main message.
pub fn check(file: &str, source: &str, headline: &str) -> Result<Vec<u64>, Diagnostic<String>> {
    let output = parse_numbers(source);
    if !output.has_failures() {
        return Ok(output.numbers);
    }

    let config = BundleConfig::new(headline).with_code(ParseErrorCode::E1000.as_str());
    let resolver = SourceResolver::new(file, source);
    let diag = error_diagnostic_from_bundle(&config, &resolver, output.failures);
    Err(diag.with_file(file, source))
}
