//! Failure-bundle to diagnostic conversion.
//!
//! Folds a stream of structural [`Failure`]s into one [`Diagnostic`]. Each
//! failure is resolved to a [`Position`], rendered into a default [`Report`],
//! and then dispatched on its kind:
//!
//! - plain failures contribute the default report;
//! - fancy failures contribute, per component in sorted order, the default
//!   report (intrinsic detail), the payload's
//!   [`shape_reports`](HasHints::shape_reports) result (custom payload), or
//!   the nested diagnostic verbatim (sub-diagnostic).
//!
//! Report order is failure order, then component order. Components equal
//! by value are dispatched once; components that only render alike are all
//! dispatched. The converter is total: malformed descriptions fall back to
//! [`UNKNOWN_ERROR`], and a fancy failure without components still
//! contributes its default report.

mod failure;

pub use failure::{ErrorItem, Failure, FailureComponent, FailureKind, IntrinsicFailure};

use failure::ordered_components;

use std::fmt;

use tracing::{debug, trace};

use crate::{Diagnostic, HasHints, Marker, Note, Position, PositionResolver, Report};

/// Annotation used when a failure renders to zero or more than two lines.
pub const UNKNOWN_ERROR: &str = "<<Unknown error>>";

/// Parameters shared by every report a conversion produces.
///
/// This config struct pattern keeps the converter's signature readable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleConfig<M> {
    /// Code attached to every generated report.
    pub code: Option<M>,
    /// Headline of every generated report.
    pub headline: M,
    /// Notes attached to reports generated for plain failures.
    pub default_notes: Vec<Note<M>>,
}

impl<M> BundleConfig<M> {
    pub fn new(headline: impl Into<M>) -> Self {
        BundleConfig {
            code: None,
            headline: headline.into(),
            default_notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<M>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_default_note(mut self, note: Note<M>) -> Self {
        self.default_notes.push(note);
        self
    }

    #[must_use]
    pub fn with_default_notes(mut self, notes: impl IntoIterator<Item = Note<M>>) -> Self {
        self.default_notes.extend(notes);
        self
    }
}

/// Convert a stream of failures into a diagnostic.
///
/// `is_error` picks the severity of each failure's default report.
/// `resolver` is called once per failure.
#[tracing::instrument(level = "debug", skip_all)]
pub fn diagnostic_from_bundle<M, E, R, F, I>(
    is_error: F,
    config: &BundleConfig<M>,
    resolver: &R,
    failures: I,
) -> Diagnostic<M>
where
    M: Clone + PartialEq + From<String>,
    E: HasHints<M> + fmt::Display + PartialEq,
    R: PositionResolver + ?Sized,
    F: Fn(&Failure<M, E>) -> bool,
    I: IntoIterator<Item = Failure<M, E>>,
{
    let diag = failures
        .into_iter()
        .fold(Diagnostic::new(), |mut acc, failure| {
            acc.merge(convert_failure(&is_error, config, resolver, failure));
            acc
        });
    debug!(reports = diag.len(), "converted failure bundle");
    diag
}

/// Convert failures, reporting every one as an error.
pub fn error_diagnostic_from_bundle<M, E, R, I>(
    config: &BundleConfig<M>,
    resolver: &R,
    failures: I,
) -> Diagnostic<M>
where
    M: Clone + PartialEq + From<String>,
    E: HasHints<M> + fmt::Display + PartialEq,
    R: PositionResolver + ?Sized,
    I: IntoIterator<Item = Failure<M, E>>,
{
    diagnostic_from_bundle(|_: &Failure<M, E>| true, config, resolver, failures)
}

/// Convert failures, reporting every one as a warning.
pub fn warning_diagnostic_from_bundle<M, E, R, I>(
    config: &BundleConfig<M>,
    resolver: &R,
    failures: I,
) -> Diagnostic<M>
where
    M: Clone + PartialEq + From<String>,
    E: HasHints<M> + fmt::Display + PartialEq,
    R: PositionResolver + ?Sized,
    I: IntoIterator<Item = Failure<M, E>>,
{
    diagnostic_from_bundle(|_: &Failure<M, E>| false, config, resolver, failures)
}

/// Everything one failure contributes, as a diagnostic to merge.
fn convert_failure<M, E, R, F>(
    is_error: &F,
    config: &BundleConfig<M>,
    resolver: &R,
    failure: Failure<M, E>,
) -> Diagnostic<M>
where
    M: Clone + PartialEq + From<String>,
    E: HasHints<M> + fmt::Display + PartialEq,
    R: PositionResolver + ?Sized,
    F: Fn(&Failure<M, E>) -> bool,
{
    let source = resolver.resolve(failure.offset);
    let at = Position::point(source.line, source.column, source.file);
    trace!(offset = failure.offset, %at, plain = failure.is_plain(), "converting failure");

    let annotations = annotations_for(&at, failure.message_lines());
    let report = if is_error(&failure) {
        Report::error(config.code.clone(), config.headline.clone())
    } else {
        Report::warning(config.code.clone(), config.headline.clone())
    };
    let report = annotations
        .into_iter()
        .fold(report, |r, (pos, marker)| r.with_annotation(pos, marker));

    match failure.kind {
        FailureKind::Plain { .. } => {
            let report = report.with_notes(config.default_notes.iter().cloned());
            Diagnostic::new().with_report(report)
        }
        FailureKind::Fancy(components) if components.is_empty() => {
            Diagnostic::new().with_report(report)
        }
        FailureKind::Fancy(components) => {
            let components = ordered_components(components, FailureComponent::sort_key);
            let hints = components.iter().flat_map(|c| match c {
                FailureComponent::Custom(payload) => payload.hints(),
                _ => Vec::new(),
            });
            let report = report.with_notes(hints);

            let mut out = Diagnostic::new();
            for component in components {
                match component {
                    FailureComponent::Intrinsic(detail) => {
                        trace!(%detail, "intrinsic failure");
                        out.add_report(report.clone());
                    }
                    FailureComponent::SubDiagnostic(nested) => {
                        trace!(reports = nested.len(), "splicing nested diagnostic");
                        out.merge(nested);
                    }
                    FailureComponent::Custom(payload) => {
                        let shaped = payload.shape_reports(vec![report.clone()], &at);
                        trace!(reports = shaped.len(), "shaped custom payload");
                        out.extend(shaped);
                    }
                }
            }
            out
        }
    }
}

/// Build the annotations for a rendered failure description.
fn annotations_for<M: From<String>>(
    at: &Position,
    lines: Vec<String>,
) -> Vec<(Position, Marker<M>)> {
    let line_count = lines.len();
    let mut lines = lines.into_iter();
    match (lines.next(), lines.next()) {
        (Some(only), None) => vec![(at.clone(), Marker::Primary(only.into()))],
        (Some(first), Some(second)) if line_count == 2 => vec![
            (at.clone(), Marker::Primary(first.into())),
            (at.clone(), Marker::Secondary(second.into())),
        ],
        _ => {
            debug!(line_count, "failure description has no usable shape");
            vec![(at.clone(), Marker::Primary(UNKNOWN_ERROR.to_string().into()))]
        }
    }
}
