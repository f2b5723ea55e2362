//! Parse context threaded through the recursive parse of one document.

use super::{Fragment, Invocation, MarkupParser};
use crate::error::Diagnostic;
use crate::language::LanguageTable;
use crate::node::Node;
use crate::state::DocumentState;
use crate::tabs;
use crate::transformer::TabsOptions;

/// Everything a directive needs while a document is being parsed.
///
/// One context exists per document build. It owns the document's
/// [`DocumentState`] and collects diagnostics; the parser, language table and
/// options are borrowed from the transformer.
pub struct ParseContext<'a> {
    parser: &'a dyn MarkupParser,
    languages: &'a dyn LanguageTable,
    options: &'a TabsOptions,
    state: DocumentState,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ParseContext<'a> {
    /// Create a context for a new document.
    #[must_use]
    pub fn new(
        parser: &'a dyn MarkupParser,
        languages: &'a dyn LanguageTable,
        options: &'a TabsOptions,
    ) -> Self {
        Self {
            parser,
            languages,
            options,
            state: DocumentState::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Parse a fragment with the document's parser.
    pub fn parse(&mut self, fragment: &Fragment) -> Vec<Node> {
        let parser = self.parser;
        parser.parse(fragment, self)
    }

    /// Run a directive invocation.
    ///
    /// Returns the produced nodes, or gives the invocation back if no tab
    /// directive has its name. A failing directive produces no nodes and
    /// records an error diagnostic at its line.
    pub fn invoke(&mut self, invocation: Invocation) -> Result<Vec<Node>, Invocation> {
        let Some(directive) = tabs::Directive::from_name(&invocation.name) else {
            return Err(invocation);
        };

        let line = invocation.line;
        match directive.run(self, &invocation) {
            Ok(nodes) => Ok(nodes),
            Err(err) => {
                tracing::debug!(line, directive = directive.name(), error = %err, "Tab directive failed");
                self.diagnostics.push(Diagnostic::error(line, err));
                Ok(Vec::new())
            }
        }
    }

    /// Record a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the context, returning diagnostics in source order.
    #[must_use]
    pub fn into_diagnostics(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(|d| d.line);
        self.diagnostics
    }

    pub(crate) fn state(&mut self) -> &mut DocumentState {
        &mut self.state
    }

    pub(crate) fn languages(&self) -> &'a dyn LanguageTable {
        self.languages
    }

    pub(crate) fn options(&self) -> &'a TabsOptions {
        self.options
    }
}
