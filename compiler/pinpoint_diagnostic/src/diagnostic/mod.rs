//! The diagnostic bundle handed to printers.
//!
//! A [`Diagnostic`] is an ordered list of [`Report`]s plus the source text of
//! every file those reports may point into. Reports only ever get appended;
//! insertion order is display order.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Report, Severity};

/// An ordered bundle of reports together with registered source files.
///
/// Files are optional: a printer must cope with positions whose file was
/// never registered (e.g. by omitting the snippet).
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic<M> {
    reports: Vec<Report<M>>,
    files: FxHashMap<String, String>,
}

impl<M> Default for Diagnostic<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Diagnostic<M> {
    /// Create an empty diagnostic: no reports, no files.
    pub fn new() -> Self {
        Diagnostic {
            reports: Vec::new(),
            files: FxHashMap::default(),
        }
    }

    /// Append a report.
    pub fn add_report(&mut self, report: Report<M>) {
        self.reports.push(report);
    }

    /// Append a report, builder style.
    pub fn with_report(mut self, report: Report<M>) -> Self {
        self.add_report(report);
        self
    }

    /// Register the contents of a file.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn add_file(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(name.into(), contents.into());
    }

    /// Register the contents of a file, builder style.
    pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.add_file(name, contents);
        self
    }

    /// Move everything from `other` into `self`.
    ///
    /// Reports of `other` follow those of `self`; files of `other` overwrite
    /// same-named files of `self`.
    pub fn merge(&mut self, other: Diagnostic<M>) {
        self.reports.extend(other.reports);
        self.files.extend(other.files);
    }

    /// Concatenate two diagnostics.
    pub fn combine(mut self, other: Diagnostic<M>) -> Self {
        self.merge(other);
        self
    }

    /// Reports in display order.
    pub fn reports(&self) -> &[Report<M>] {
        &self.reports
    }

    /// Consume the diagnostic, returning its reports in display order.
    pub fn into_reports(self) -> Vec<Report<M>> {
        self.reports
    }

    /// All registered files, keyed by name.
    pub fn files(&self) -> &FxHashMap<String, String> {
        &self.files
    }

    /// Registered file names, sorted.
    pub fn file_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.files.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Contents registered under `name`, if any.
    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn has_reports(&self) -> bool {
        !self.reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Check for no reports. Registered files do not count.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Number of error reports.
    pub fn error_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_error()).count()
    }

    /// Number of warning reports.
    pub fn warning_count(&self) -> usize {
        self.reports.len() - self.error_count()
    }

    pub fn has_errors(&self) -> bool {
        self.reports.iter().any(Report::is_error)
    }

    /// Promote every warning to an error.
    pub fn warnings_to_errors(mut self) -> Self {
        for report in &mut self.reports {
            report.severity = Severity::Error;
        }
        self
    }
}

impl<M> Extend<Report<M>> for Diagnostic<M> {
    fn extend<I: IntoIterator<Item = Report<M>>>(&mut self, iter: I) {
        self.reports.extend(iter);
    }
}

impl<M> FromIterator<Report<M>> for Diagnostic<M> {
    fn from_iter<I: IntoIterator<Item = Report<M>>>(iter: I) -> Self {
        let mut diag = Diagnostic::new();
        diag.extend(iter);
        diag
    }
}

impl<M: fmt::Display> fmt::Display for Diagnostic<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, report) in self.reports.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{report}")?;
        }
        Ok(())
    }
}
