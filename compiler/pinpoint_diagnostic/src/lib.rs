//! Source-located diagnostics built from parser failures.
//!
//! The crate has two halves:
//! - The diagnostic model: [`Position`], [`Marker`], [`Report`], [`Note`],
//!   and [`Diagnostic`], which together describe what went wrong, where,
//!   and how to fix it.
//! - The bundle converter: [`diagnostic_from_bundle`] folds a stream of
//!   structural parse [`Failure`]s into a [`Diagnostic`], resolving offsets
//!   through a [`PositionResolver`] and letting custom error payloads hook in
//!   through [`HasHints`].
//!
//! ```
//! use pinpoint_diagnostic::{
//!     error_diagnostic_from_bundle, BundleConfig, ErrorItem, Failure, SourceResolver,
//! };
//! use std::convert::Infallible;
//!
//! let source = "12 3x";
//! let failures: Vec<Failure<String, Infallible>> = vec![Failure::plain(
//!     4,
//!     Some(ErrorItem::tokens("x")),
//!     [ErrorItem::label("digit")],
//! )];
//!
//! let config = BundleConfig::new("could not read numbers");
//! let resolver = SourceResolver::new("input.txt", source);
//! let diag = error_diagnostic_from_bundle(&config, &resolver, failures);
//!
//! assert_eq!(diag.error_count(), 1);
//! assert_eq!(diag.reports()[0].annotations.len(), 2);
//! ```
//!
//! Printing is left to the caller; [`emitter::JsonEmitter`] provides a
//! structured form for tooling.

pub mod bundle;
mod diagnostic;
pub mod emitter;
mod hints;
mod position;
mod report;
mod resolver;

pub use bundle::{
    diagnostic_from_bundle, error_diagnostic_from_bundle, warning_diagnostic_from_bundle,
    BundleConfig, ErrorItem, Failure, FailureComponent, FailureKind, IntrinsicFailure,
    UNKNOWN_ERROR,
};
pub use diagnostic::Diagnostic;
pub use hints::HasHints;
pub use position::{LineCol, Position, NO_FILE};
pub use report::{Marker, Note, Report, Severity};
pub use resolver::{LineOffsetTable, PositionResolver, SourcePos, SourceResolver};
