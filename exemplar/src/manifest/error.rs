use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

use super::DELIMITER;

/// What is wrong with a manifest declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestProblem {
    /// Nothing before the `|`.
    MissingName,
    /// The name slugifies to nothing usable, e.g. `'''`.
    UnusableSlug { name: String },
    /// More than one `|` on the line.
    ExtraDelimiter,
    /// Slugifies to the same identifier as an earlier declaration.
    DuplicateSlug {
        name: String,
        slug: String,
        first: Range<usize>,
    },
}

impl ManifestProblem {
    pub fn severity(&self) -> Severity {
        match self {
            ManifestProblem::DuplicateSlug { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Short text shown under the offending declaration.
    fn label(&self) -> String {
        match self {
            ManifestProblem::MissingName => format!("expected a name before `{}`", DELIMITER),
            ManifestProblem::UnusableSlug { .. } => "identifier would be empty".to_string(),
            ManifestProblem::ExtraDelimiter => format!("second `{}` here", DELIMITER),
            ManifestProblem::DuplicateSlug { slug, .. } => format!("also resolves to `{}`", slug),
        }
    }

    fn notes(&self) -> Vec<String> {
        match self {
            ManifestProblem::MissingName | ManifestProblem::ExtraDelimiter => {
                vec![format!("expected `name` or `name{}display-name`", DELIMITER)]
            }
            ManifestProblem::UnusableSlug { .. } => {
                vec!["identifiers keep letters and digits; spaces and slashes become `-`".to_string()]
            }
            ManifestProblem::DuplicateSlug { .. } => {
                vec!["both examples would be written to the same page".to_string()]
            }
        }
    }
}

impl fmt::Display for ManifestProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestProblem::MissingName => write!(f, "missing example name"),
            ManifestProblem::UnusableSlug { name } => {
                write!(f, "`{}` does not produce a usable identifier", name)
            }
            ManifestProblem::ExtraDelimiter => {
                write!(f, "more than one `{}` in declaration", DELIMITER)
            }
            ManifestProblem::DuplicateSlug { name, .. } => {
                write!(f, "`{}` has the same identifier as an earlier example", name)
            }
        }
    }
}

/// A problem with one manifest declaration, located by its byte span.
#[derive(Debug, Clone)]
pub struct ManifestError {
    pub problem: ManifestProblem,
    pub span: Range<usize>,
    pub file_id: usize,
}

impl ManifestError {
    pub fn new(problem: ManifestProblem, span: Range<usize>, file_id: usize) -> Self {
        ManifestError {
            problem,
            span,
            file_id,
        }
    }

    pub fn severity(&self) -> Severity {
        self.problem.severity()
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }

    /// The declaration as a codespan diagnostic. Duplicates also point at the
    /// first declaration.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let mut labels = vec![
            Label::primary(self.file_id, self.span.clone()).with_message(self.problem.label()),
        ];
        if let ManifestProblem::DuplicateSlug { first, .. } = &self.problem {
            labels.push(
                Label::secondary(self.file_id, first.clone()).with_message("first declared here"),
            );
        }
        Diagnostic::new(self.severity())
            .with_message(self.problem.to_string())
            .with_labels(labels)
            .with_notes(self.problem.notes())
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.problem.fmt(f)
    }
}

impl std::error::Error for ManifestError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_points_at_both_declarations() {
        let err = ManifestError::new(
            ManifestProblem::DuplicateSlug {
                name: "hello/world".to_string(),
                slug: "hello-world".to_string(),
                first: 0..11,
            },
            12..23,
            0,
        );
        assert!(err.is_warning());
        let diag = err.to_diagnostic();
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.labels.len(), 2);
        assert_eq!(diag.labels[0].range, 12..23);
        assert_eq!(diag.labels[0].message, "also resolves to `hello-world`");
        assert_eq!(diag.labels[1].range, 0..11);
    }

    #[test]
    fn errors_carry_label_and_note() {
        let err = ManifestError::new(ManifestProblem::ExtraDelimiter, 4..9, 2);
        assert!(!err.is_warning());
        assert_eq!(err.to_string(), "more than one `|` in declaration");
        let diag = err.to_diagnostic();
        assert_eq!(diag.labels.len(), 1);
        assert_eq!(diag.labels[0].file_id, 2);
        assert_eq!(diag.labels[0].message, "second `|` here");
        assert_eq!(diag.notes, vec!["expected `name` or `name|display-name`".to_string()]);
    }
}
