//! Document entry point.

use crate::directive::{Fragment, MarkdownParser, MarkupParser, ParseContext};
use crate::error::Diagnostic;
use crate::html::render_html;
use crate::language::{LanguageTable, SyntaxLanguages};
use crate::node::Node;

/// What to do when two panels of one tabs block resolve to the same token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateIdPolicy {
    /// Report `DuplicateTabId` and drop the later panel.
    Reject,
    /// Keep both panels and report a warning.
    #[default]
    Allow,
}

/// Transformation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabsOptions {
    /// Handling of token collisions within a tabs block.
    pub duplicate_ids: DuplicateIdPolicy,
}

/// Result of transforming one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Output nodes in source order.
    pub nodes: Vec<Node>,
    /// Errors and warnings, sorted by line.
    pub diagnostics: Vec<Diagnostic>,
}

impl Document {
    /// Whether any directive failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Render the nodes to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        render_html(&self.nodes)
    }
}

/// Converts markup containing tab directives into a node tree.
///
/// Each call to [`transform`](Self::transform) builds one document with fresh
/// state, so a transformer can be shared across documents and threads.
///
/// # Example
///
/// ```
/// use tabset_renderer::TabsTransformer;
///
/// let source = "\
/// ::: tabs
/// ::: tab Unix
/// Run `make`.
/// :::
/// ::: tab Windows
/// Run `nmake`.
/// :::
/// :::";
/// let document = TabsTransformer::new().transform(source);
/// let block = document.nodes[0].as_tabs().unwrap();
///
/// assert_eq!(block.menu.headers[0].title, "Unix");
/// assert!(block.menu.headers[0].is_active);
/// assert!(!document.has_errors());
/// ```
pub struct TabsTransformer {
    parser: Box<dyn MarkupParser>,
    languages: Box<dyn LanguageTable>,
    options: TabsOptions,
}

impl TabsTransformer {
    /// Create a transformer with the markdown parser and the bundled language table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: Box::new(MarkdownParser::new()),
            languages: Box::new(SyntaxLanguages::global()),
            options: TabsOptions::default(),
        }
    }

    /// Use a different generic parser.
    #[must_use]
    pub fn with_parser(mut self, parser: impl MarkupParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a different language table.
    #[must_use]
    pub fn with_languages(mut self, languages: impl LanguageTable + 'static) -> Self {
        self.languages = Box::new(languages);
        self
    }

    /// Set transformation options.
    #[must_use]
    pub fn with_options(mut self, options: TabsOptions) -> Self {
        self.options = options;
        self
    }

    /// Transform one document.
    #[must_use]
    pub fn transform(&self, source: &str) -> Document {
        let mut ctx = ParseContext::new(self.parser.as_ref(), self.languages.as_ref(), &self.options);
        let nodes = ctx.parse(&Fragment::new(source));
        let diagnostics = ctx.into_diagnostics();

        tracing::debug!(
            nodes = nodes.len(),
            diagnostics = diagnostics.len(),
            "Transformed document"
        );
        Document { nodes, diagnostics }
    }
}

impl Default for TabsTransformer {
    fn default() -> Self {
        Self::new()
    }
}
