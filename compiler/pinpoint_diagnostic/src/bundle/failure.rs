//! Structural failures produced by a parser or lexer.
//!
//! A [`Failure`] is located by a raw input offset and is either *plain*
//! (an unexpected item and a set of expected items) or *fancy* (a list of
//! [`FailureComponent`]s). Components make the payload dispatch explicit:
//! a custom error goes through [`HasHints`](crate::HasHints), a nested
//! diagnostic is spliced in as-is.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::Diagnostic;

/// One item in an unexpected/expected description.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorItem {
    /// Literal input text.
    Tokens(String),
    /// A named class of input, e.g. `digit`.
    Label(String),
    EndOfInput,
}

impl ErrorItem {
    pub fn tokens(text: impl Into<String>) -> Self {
        ErrorItem::Tokens(text.into())
    }

    pub fn label(name: impl Into<String>) -> Self {
        ErrorItem::Label(name.into())
    }
}

impl fmt::Display for ErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorItem::Tokens(text) => f.write_str(&pretty_tokens(text)),
            ErrorItem::Label(name) => f.write_str(name),
            ErrorItem::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Quote literal text, naming whitespace and control characters.
fn pretty_tokens(text: &str) -> String {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => "empty input".to_string(),
        (Some(c), None) => match char_name(c) {
            Some(name) => name.to_string(),
            None => format!("'{c}'"),
        },
        _ => format!("\"{}\"", text.escape_debug()),
    }
}

fn char_name(c: char) -> Option<&'static str> {
    match c {
        '\n' => Some("newline"),
        '\t' => Some("tab"),
        ' ' => Some("space"),
        '\r' => Some("carriage return"),
        '\0' => Some("null"),
        _ => None,
    }
}

/// A failure detail that carries no user payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum IntrinsicFailure {
    /// A raw failure message, e.g. from an assertion in the grammar.
    Fail(String),
    /// Indentation did not match the reference level.
    Indentation {
        /// How `actual` had to relate to `reference`.
        ordering: Ordering,
        reference: u32,
        actual: u32,
    },
}

impl fmt::Display for IntrinsicFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntrinsicFailure::Fail(msg) => f.write_str(msg),
            IntrinsicFailure::Indentation {
                ordering,
                reference,
                actual,
            } => {
                let relation = match ordering {
                    Ordering::Less => "less than",
                    Ordering::Equal => "equal to",
                    Ordering::Greater => "greater than",
                };
                write!(
                    f,
                    "incorrect indentation (got {actual}, should be {relation} {reference})"
                )
            }
        }
    }
}

/// One part of a fancy failure.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FailureComponent<M, E> {
    Intrinsic(IntrinsicFailure),
    /// A user payload, rendered by `Display` and shaped by `HasHints`.
    Custom(E),
    /// A payload that already is a diagnostic; spliced in unchanged.
    SubDiagnostic(Diagnostic<M>),
}

impl<M, E: fmt::Display> FailureComponent<M, E> {
    /// Rank used to order components inside one failure.
    fn rank(&self) -> u8 {
        match self {
            FailureComponent::Intrinsic(IntrinsicFailure::Fail(_)) => 0,
            FailureComponent::Intrinsic(IntrinsicFailure::Indentation { .. }) => 1,
            FailureComponent::Custom(_) | FailureComponent::SubDiagnostic(_) => 2,
        }
    }

    /// One-line description of the component.
    pub fn render(&self) -> String {
        match self {
            FailureComponent::Intrinsic(detail) => detail.to_string(),
            FailureComponent::Custom(payload) => payload.to_string(),
            FailureComponent::SubDiagnostic(diag) => {
                let n = diag.reports().len();
                format!(
                    "nested diagnostic with {n} report{}",
                    if n == 1 { "" } else { "s" }
                )
            }
        }
    }

    pub(crate) fn sort_key(&self) -> (u8, String) {
        (self.rank(), self.render())
    }
}

/// What went wrong at a failure's offset.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FailureKind<M, E> {
    /// Token mismatch without payload.
    Plain {
        unexpected: Option<ErrorItem>,
        expected: BTreeSet<ErrorItem>,
    },
    /// One or more components, possibly carrying payloads.
    Fancy(Vec<FailureComponent<M, E>>),
}

/// A structural parse failure at a raw input offset.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Failure<M, E> {
    pub offset: usize,
    pub kind: FailureKind<M, E>,
}

impl<M, E> Failure<M, E> {
    /// A plain token-mismatch failure.
    pub fn plain(
        offset: usize,
        unexpected: Option<ErrorItem>,
        expected: impl IntoIterator<Item = ErrorItem>,
    ) -> Self {
        Failure {
            offset,
            kind: FailureKind::Plain {
                unexpected,
                expected: expected.into_iter().collect(),
            },
        }
    }

    /// A fancy failure with the given components.
    pub fn fancy(
        offset: usize,
        components: impl IntoIterator<Item = FailureComponent<M, E>>,
    ) -> Self {
        Failure {
            offset,
            kind: FailureKind::Fancy(components.into_iter().collect()),
        }
    }

    /// A fancy failure carrying a single raw message.
    pub fn fail(offset: usize, message: impl Into<String>) -> Self {
        let detail = IntrinsicFailure::Fail(message.into());
        Self::fancy(offset, [FailureComponent::Intrinsic(detail)])
    }

    /// A fancy failure carrying a single custom payload.
    pub fn custom(offset: usize, payload: E) -> Self {
        Self::fancy(offset, [FailureComponent::Custom(payload)])
    }

    /// A fancy failure whose payload is a nested diagnostic.
    pub fn nested(offset: usize, diagnostic: Diagnostic<M>) -> Self {
        Self::fancy(offset, [FailureComponent::SubDiagnostic(diagnostic)])
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, FailureKind::Plain { .. })
    }
}

impl<M: PartialEq, E: fmt::Display + PartialEq> Failure<M, E> {
    /// Render the failure description, one entry per line.
    ///
    /// Plain failures give an `unexpected` line and/or an `expecting` line.
    /// Fancy failures give one line per distinct component, in the order
    /// the converter dispatches them.
    pub fn message_lines(&self) -> Vec<String> {
        match &self.kind {
            FailureKind::Plain {
                unexpected,
                expected,
            } => {
                if unexpected.is_none() && expected.is_empty() {
                    return vec!["unknown parse error".to_string()];
                }
                let mut lines = Vec::with_capacity(2);
                if let Some(item) = unexpected {
                    lines.push(format!("unexpected {item}"));
                }
                if !expected.is_empty() {
                    let items: Vec<String> = expected.iter().map(ToString::to_string).collect();
                    lines.push(format!("expecting {}", or_list(&items)));
                }
                lines
            }
            FailureKind::Fancy(components) => {
                if components.is_empty() {
                    return vec!["unknown fancy parse error".to_string()];
                }
                ordered_components(components.iter(), |c| c.sort_key())
                    .into_iter()
                    .flat_map(|c| {
                        c.render()
                            .lines()
                            .map(str::to_string)
                            .collect::<Vec<_>>()
                    })
                    .collect()
            }
        }
    }
}

/// Sort components by rank, then rendered text, dropping repeated values.
///
/// Only components equal by value collapse. Two nested diagnostics or two
/// payloads that merely render alike are both kept. The sort is stable, so
/// such look-alikes keep their input order.
pub(crate) fn ordered_components<C: PartialEq>(
    components: impl IntoIterator<Item = C>,
    sort_key: impl Fn(&C) -> (u8, String),
) -> Vec<C> {
    let mut distinct: Vec<C> = Vec::new();
    for component in components {
        if !distinct.contains(&component) {
            distinct.push(component);
        }
    }
    let mut keyed: Vec<((u8, String), C)> =
        distinct.into_iter().map(|c| (sort_key(&c), c)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Join items as `a`, `a or b`, or `a, b, or c`.
fn or_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
