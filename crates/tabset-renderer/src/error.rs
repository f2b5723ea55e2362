//! Tab directive errors and diagnostics.

use std::fmt;

/// Error raised by a single tab directive invocation.
///
/// Errors never abort a document: the transformer records them as
/// [`Diagnostic`]s at the invocation's line and continues with its siblings.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TabsError {
    /// The invocation has neither a first line nor a body.
    #[error("{directive} directive requires content")]
    ContentRequired {
        /// Directive name (`tabs`, `tab`, `group-tab`, `code-tab`).
        directive: &'static str,
    },

    /// A structured tab record could not be decoded.
    #[error("malformed tab metadata: {reason}")]
    MalformedMetadata {
        /// Decoder message.
        reason: String,
    },

    /// A code tab has no title and its language is not in the language table.
    #[error("unknown language `{language}` (give the code tab an explicit title)")]
    UnknownLanguage {
        /// Language identifier as written.
        language: String,
    },

    /// Another panel of the same tabs block already uses this token.
    #[error("duplicate tab id `{id}` in tabs block")]
    DuplicateTabId {
        /// Colliding token.
        id: String,
    },

    /// A panel directive was used outside of a `tabs` block.
    #[error("{directive} directive must be nested inside a tabs directive")]
    TabOutsideTabs {
        /// Directive name.
        directive: &'static str,
    },
}

/// What a diagnostic reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The invocation failed and produced no output.
    Error(TabsError),
    /// Recoverable markup problem (unclosed or stray directive fences).
    Warning(String),
}

/// A problem attributed to a source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line of the offending invocation (1-indexed).
    pub line: usize,
    /// Error or warning.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Create an error diagnostic.
    #[must_use]
    pub fn error(line: usize, error: TabsError) -> Self {
        Self {
            line,
            kind: DiagnosticKind::Error(error),
        }
    }

    /// Create a warning diagnostic.
    #[must_use]
    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            kind: DiagnosticKind::Warning(message.into()),
        }
    }

    /// Whether this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Error(_))
    }

    /// The error, if this diagnostic is one.
    #[must_use]
    pub fn as_error(&self) -> Option<&TabsError> {
        match &self.kind {
            DiagnosticKind::Error(err) => Some(err),
            DiagnosticKind::Warning(_) => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::Error(err) => write!(f, "line {}: error: {err}", self.line),
            DiagnosticKind::Warning(msg) => write!(f, "line {}: warning: {msg}", self.line),
        }
    }
}
