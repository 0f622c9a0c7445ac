//! Hook for user error payloads.
//!
//! A parser may attach its own error type to a failure. Implementing
//! [`HasHints`] for that type lets it add notes to the report generated for
//! it, or replace that report entirely. Both methods have defaults, so an
//! empty `impl` opts a type in with the stock behaviour.
//!
//! ```
//! use pinpoint_diagnostic::{HasHints, Note};
//!
//! struct Unterminated;
//!
//! impl HasHints<String> for Unterminated {
//!     fn hints(&self) -> Vec<Note<String>> {
//!         vec![Note::Hint("close the string with `\"`".to_string())]
//!     }
//! }
//! ```

use std::convert::Infallible;

use crate::{Note, Position, Report};

/// Customizes the reports generated for a user error payload.
pub trait HasHints<M> {
    /// Extra notes appended to the report generated for this payload.
    fn hints(&self) -> Vec<Note<M>> {
        Vec::new()
    }

    /// Rewrite the reports generated for this payload at `at`.
    ///
    /// The default returns `default_reports` unchanged. Returning an empty
    /// vector suppresses the failure entirely.
    fn shape_reports(&self, default_reports: Vec<Report<M>>, at: &Position) -> Vec<Report<M>> {
        let _ = at;
        default_reports
    }
}

// Payload type of parsers that never produce custom errors.
impl<M> HasHints<M> for Infallible {}

impl<M> HasHints<M> for String {}

impl<M> HasHints<M> for &str {}
