//! Reports: one located, annotated message.
//!
//! Defines [`Report`], [`Marker`], [`Note`], and [`Severity`]. A report is the
//! unit a printer renders as a single `error[...]: ...` block.

use std::fmt;

use crate::Position;

/// Severity level for reports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Lowercase name used by printers and emitters.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role of one annotation inside a report.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker<M> {
    /// The main explanation at this position.
    Primary(M),
    /// Supporting context at this position.
    Secondary(M),
    /// Proposed replacement text for this position.
    Suggestion(M),
}

impl<M> Marker<M> {
    /// The message carried by the marker.
    pub fn message(&self) -> &M {
        match self {
            Marker::Primary(m) | Marker::Secondary(m) | Marker::Suggestion(m) => m,
        }
    }

    /// Short name of the marker kind, used by structured emitters.
    pub fn kind(&self) -> &'static str {
        match self {
            Marker::Primary(_) => "primary",
            Marker::Secondary(_) => "secondary",
            Marker::Suggestion(_) => "suggestion",
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Marker::Primary(_))
    }
}

/// A free-form message rendered after a report's annotations.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Note<M> {
    /// Additional context.
    Note(M),
    /// Advice on how to fix the problem.
    Hint(M),
}

impl<M> Note<M> {
    pub fn message(&self) -> &M {
        match self {
            Note::Note(m) | Note::Hint(m) => m,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Note::Note(_) => "note",
            Note::Hint(_) => "hint",
        }
    }
}

impl<M: fmt::Display> fmt::Display for Note<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

/// A single error or warning with positioned annotations and notes.
///
/// Built with [`Report::error`] or [`Report::warning`], then grown through
/// the `with_*` combinators. Annotations and notes render in the order they
/// were added.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "reports should be added to a diagnostic, not silently dropped"]
pub struct Report<M> {
    /// Severity level.
    pub severity: Severity,
    /// Optional code for searchability.
    pub code: Option<M>,
    /// Main message.
    pub headline: M,
    /// Positions and the marker attached to each.
    pub annotations: Vec<(Position, Marker<M>)>,
    /// Trailing notes and hints.
    pub notes: Vec<Note<M>>,
}

impl<M> Report<M> {
    fn new_with_severity(severity: Severity, code: Option<M>, headline: M) -> Self {
        Report {
            severity,
            code,
            headline,
            annotations: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Create an empty error report.
    #[cold]
    pub fn error(code: Option<M>, headline: M) -> Self {
        Self::new_with_severity(Severity::Error, code, headline)
    }

    /// Create an empty warning report.
    #[cold]
    pub fn warning(code: Option<M>, headline: M) -> Self {
        Self::new_with_severity(Severity::Warning, code, headline)
    }

    /// Append one annotation.
    pub fn with_annotation(mut self, position: Position, marker: Marker<M>) -> Self {
        self.annotations.push((position, marker));
        self
    }

    /// Append a primary annotation.
    pub fn with_primary(self, position: Position, message: impl Into<M>) -> Self {
        self.with_annotation(position, Marker::Primary(message.into()))
    }

    /// Append a secondary annotation.
    pub fn with_secondary(self, position: Position, message: impl Into<M>) -> Self {
        self.with_annotation(position, Marker::Secondary(message.into()))
    }

    /// Append a replacement suggestion.
    pub fn with_suggestion(self, position: Position, replacement: impl Into<M>) -> Self {
        self.with_annotation(position, Marker::Suggestion(replacement.into()))
    }

    /// Append a note.
    pub fn with_note(mut self, note: Note<M>) -> Self {
        self.notes.push(note);
        self
    }

    /// Append every note from `notes`, in order.
    pub fn with_notes(mut self, notes: impl IntoIterator<Item = Note<M>>) -> Self {
        self.notes.extend(notes);
        self
    }

    /// Append a hint.
    pub fn with_hint(self, hint: impl Into<M>) -> Self {
        self.with_note(Note::Hint(hint.into()))
    }

    /// Turn this report into an error, keeping everything else.
    pub fn into_error(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }

    /// Turn this report into a warning, keeping everything else.
    pub fn into_warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    /// Position of the first primary annotation.
    pub fn primary_position(&self) -> Option<&Position> {
        self.annotations
            .iter()
            .find(|(_, marker)| marker.is_primary())
            .map(|(pos, _)| pos)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl<M: fmt::Display> fmt::Display for Report<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.severity, code, self.headline)?,
            None => write!(f, "{}: {}", self.severity, self.headline)?,
        }

        for (pos, marker) in &self.annotations {
            let arrow = match marker {
                Marker::Primary(_) => "-->",
                Marker::Secondary(_) => "   ",
                Marker::Suggestion(_) => "~~>",
            };
            write!(f, "\n  {arrow} {pos}: {}", marker.message())?;
        }

        for note in &self.notes {
            write!(f, "\n  = {note}")?;
        }

        Ok(())
    }
}
