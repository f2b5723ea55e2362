//! Generic markup parsing with colon-fenced directives.
//!
//! The tab builders treat the generic parser as a black box: they hand it a
//! [`Fragment`] and get back nodes. While parsing, the parser passes every
//! directive invocation it meets to [`ParseContext::invoke`], which is how
//! nested `tab`, `group-tab` and `code-tab` directives reach the builders.
//!
//! # Syntax
//!
//! ```markdown
//! ::: tabs
//! ::: tab Unix
//! Run `make`.
//! :::
//! ::: tab[Windows]
//! Run `nmake`.
//! :::
//! :::
//! ```
//!
//! - An opener is three or more colons, a name and an optional argument,
//!   either as the rest of the line or in brackets.
//! - A line of only colons closes the innermost open directive.
//! - Directive syntax inside fenced code blocks is ignored.

mod context;
mod markdown;
mod scanner;

pub use context::ParseContext;
pub use markdown::MarkdownParser;

use crate::node::Node;

/// A parser that turns a content fragment into nodes.
///
/// Implementations must pass directive invocations to
/// [`ParseContext::invoke`] and keep source order in their output.
pub trait MarkupParser: Send + Sync {
    /// Parse `fragment` into nodes.
    fn parse(&self, fragment: &Fragment, ctx: &mut ParseContext<'_>) -> Vec<Node>;
}

/// A run of source lines with its position in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    first_line: usize,
    lines: Vec<String>,
}

impl Fragment {
    /// Fragment for a whole document, starting at line 1.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::at_line(text, 1)
    }

    /// Fragment whose first line is line `first_line` of the document.
    #[must_use]
    pub fn at_line(text: &str, first_line: usize) -> Self {
        Self {
            first_line,
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Fragment from already split lines.
    #[must_use]
    pub fn from_lines(lines: Vec<String>, first_line: usize) -> Self {
        Self { first_line, lines }
    }

    /// Document line number of the first line (1-indexed).
    #[must_use]
    pub fn first_line(&self) -> usize {
        self.first_line
    }

    /// Document line number of the line at `index`.
    #[must_use]
    pub fn line_number(&self, index: usize) -> usize {
        self.first_line + index
    }

    /// Source lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether the fragment has no non-whitespace content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    /// Source text, lines joined with `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Split off the first non-blank line.
    ///
    /// Returns the trimmed line (if any) and the lines after it.
    #[must_use]
    pub fn split_head(&self) -> (Option<String>, Fragment) {
        match self.lines.iter().position(|l| !l.trim().is_empty()) {
            Some(idx) => (
                Some(self.lines[idx].trim().to_owned()),
                Self::from_lines(self.lines[idx + 1..].to_vec(), self.line_number(idx + 1)),
            ),
            None => (None, Self::from_lines(Vec::new(), self.first_line)),
        }
    }
}

/// A directive invocation found by the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Directive name.
    pub name: String,
    /// Argument given on the opener line (trimmed, possibly empty).
    pub argument: String,
    /// Lines between the opener and its closer.
    pub body: Fragment,
    /// Line of the opener (1-indexed).
    pub line: usize,
}

impl Invocation {
    /// The invocation's first line and the remaining body.
    ///
    /// The first line is the opener argument when one is given. Otherwise it
    /// is the first non-blank body line, which is then removed from the body.
    #[must_use]
    pub fn head(&self) -> (Option<String>, Fragment) {
        if self.argument.is_empty() {
            self.body.split_head()
        } else {
            (Some(self.argument.clone()), self.body.clone())
        }
    }
}
