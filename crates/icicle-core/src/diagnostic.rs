//! Diagnostic boundary.
//!
//! Generation logic never prints or fails the batch on its own; every
//! detected problem is handed to a [`Reporter`] exactly once.

use crate::{
    error::{Error, SinkError, ValidationError},
    model::TypeIdentity,
    types::Severity,
};
use derive_more::Display;
use serde::Serialize;
use std::fmt;

///
/// Element
/// what a diagnostic is attributed to
///

#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize)]
pub enum Element {
    #[display("{_0}")]
    Type(TypeIdentity),

    #[display("{owner}.{name}")]
    Field { owner: TypeIdentity, name: String },
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub element: Element,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn error(element: Element, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            element,
            message: message.into(),
        }
    }

    /// Attribute a sink failure to the owner whose artifact was abandoned.
    #[must_use]
    pub fn from_sink(owner: &TypeIdentity, err: &SinkError) -> Self {
        Self::error(Element::Type(owner.clone()), err.to_string())
    }

    /// Attribute a group-level failure to its owner.
    #[must_use]
    pub fn from_error(owner: &TypeIdentity, err: &Error) -> Self {
        match err {
            Error::Sink(err) => Self::from_sink(owner, err),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.element, self.message)
    }
}

impl From<&ValidationError> for Diagnostic {
    fn from(err: &ValidationError) -> Self {
        Self::error(
            Element::Field {
                owner: err.owner.clone(),
                name: err.field.clone(),
            },
            err.to_string(),
        )
    }
}

///
/// Reporter
///

pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

///
/// CollectingReporter
/// keeps diagnostics in report order
///

#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

///
/// TracingReporter
/// forwards diagnostics as tracing events and counts errors
///

#[derive(Debug, Default)]
pub struct TracingReporter {
    errors: usize,
}

impl TracingReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: 0 }
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.errors
    }
}

impl Reporter for TracingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        let element = &diagnostic.element;

        match diagnostic.severity {
            Severity::Error => {
                self.errors += 1;
                tracing::error!(element = %element, "{}", diagnostic.message);
            }
            Severity::Warning => tracing::warn!(element = %element, "{}", diagnostic.message),
            Severity::Note => tracing::info!(element = %element, "{}", diagnostic.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Modifier;

    #[test]
    fn validation_errors_are_attributed_to_the_field() {
        let err = ValidationError {
            owner: TypeIdentity::new("com.example.Foo"),
            field: "count".to_string(),
            violations: vec![Modifier::Private],
        };
        let diagnostic = Diagnostic::from(&err);

        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.element.to_string(), "com.example.Foo.count");
        assert_eq!(
            diagnostic.to_string(),
            "error: com.example.Foo.count: field 'count' must not be private, static or final (found: private)"
        );
    }

    #[test]
    fn collecting_reporter_tracks_errors() {
        let mut reporter = CollectingReporter::new();
        assert!(!reporter.has_errors());

        let owner = TypeIdentity::new("com.example.Foo");
        let err = SinkError::Create {
            artifact: "com.example.Foo$$Icicle".to_string(),
            source: std::io::Error::other("read-only"),
        };
        reporter.report(Diagnostic::from_sink(&owner, &err));

        assert!(reporter.has_errors());
        assert_eq!(reporter.diagnostics[0].element, Element::Type(owner));
    }

    #[test]
    fn group_errors_are_attributed_to_the_owner() {
        let owner = TypeIdentity::new("com.example.Foo");
        let err = Error::from(SinkError::Commit {
            artifact: "com.example.Foo$$Icicle".to_string(),
            source: std::io::Error::other("rename failed"),
        });
        let diagnostic = Diagnostic::from_error(&owner, &err);

        assert_eq!(diagnostic.element, Element::Type(owner));
        assert_eq!(
            diagnostic.message,
            "impossible to commit 'com.example.Foo$$Icicle': rename failed"
        );
    }

    #[test]
    fn tracing_reporter_counts_errors_only() {
        let mut reporter = TracingReporter::new();
        let element = Element::Type(TypeIdentity::new("a.B"));

        reporter.report(Diagnostic::error(element.clone(), "broken"));
        reporter.report(Diagnostic {
            severity: Severity::Warning,
            element,
            message: "odd".to_string(),
        });

        assert_eq!(reporter.error_count(), 1);
    }
}
