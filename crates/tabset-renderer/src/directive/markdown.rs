//! Default generic parser: CommonMark via pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

use super::scanner::{Segment, scan};
use super::{Fragment, MarkupParser, ParseContext};
use crate::node::Node;

/// Parser that renders plain text runs as CommonMark and hands directives to
/// the parse context.
///
/// Invocations no directive claims are rendered as ordinary markdown, fences
/// included.
///
/// # Example
///
/// ```
/// use tabset_renderer::{MarkdownParser, Node, TabsTransformer};
///
/// let transformer = TabsTransformer::new().with_parser(MarkdownParser::new());
/// let document = transformer.transform("Some *text*.");
/// assert_eq!(document.nodes, vec![Node::Markup("<p>Some <em>text</em>.</p>\n".to_owned())]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MarkdownParser {
    options: Options,
}

impl MarkdownParser {
    /// Create a parser with tables, strikethrough and task lists enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }

    /// Create a parser with explicit pulldown-cmark options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    fn flush(&self, pending: &mut String, nodes: &mut Vec<Node>) {
        if !pending.trim().is_empty() {
            let mut rendered = String::with_capacity(pending.len() * 3 / 2);
            html::push_html(&mut rendered, Parser::new_ext(pending.as_str(), self.options));
            nodes.push(Node::Markup(rendered));
        }
        pending.clear();
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupParser for MarkdownParser {
    fn parse(&self, fragment: &Fragment, ctx: &mut ParseContext<'_>) -> Vec<Node> {
        let scanned = scan(fragment);
        for warning in scanned.warnings {
            ctx.report(warning);
        }

        let mut nodes = Vec::new();
        let mut pending = String::new();
        for segment in scanned.segments {
            match segment {
                Segment::Text(text) => {
                    pending.push_str(&text.text());
                    pending.push('\n');
                }
                Segment::Invocation { invocation, raw } => match ctx.invoke(invocation) {
                    Ok(produced) => {
                        self.flush(&mut pending, &mut nodes);
                        nodes.extend(produced);
                    }
                    Err(_) => {
                        pending.push_str(&raw.text());
                        pending.push('\n');
                    }
                },
            }
        }
        self.flush(&mut pending, &mut nodes);

        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::StaticLanguages;
    use crate::transformer::TabsOptions;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> (Vec<Node>, usize) {
        let parser = MarkdownParser::new();
        let languages = StaticLanguages::new();
        let options = TabsOptions::default();
        let mut ctx = ParseContext::new(&parser, &languages, &options);
        let nodes = ctx.parse(&Fragment::new(source));
        (nodes, ctx.diagnostics().len())
    }

    #[test]
    fn test_plain_markdown() {
        let (nodes, diagnostics) = parse("# Title\n\nText.");
        assert_eq!(
            nodes,
            vec![Node::Markup("<h1>Title</h1>\n<p>Text.</p>\n".to_owned())]
        );
        assert_eq!(diagnostics, 0);
    }

    #[test]
    fn test_blank_fragment_yields_nothing() {
        let (nodes, _) = parse("\n  \n");
        assert!(nodes.is_empty());
    }

    #[test]
    fn test_unknown_directive_passes_through() {
        let (nodes, _) = parse("::: note\nhello\n:::");
        assert_eq!(nodes.len(), 1);
        let Node::Markup(html) = &nodes[0] else {
            panic!("expected markup");
        };
        assert!(html.contains("::: note"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_directive_splits_markup() {
        let (nodes, _) = parse("Before\n::: tabs\n::: tab A\nx\n:::\n:::\nAfter");
        assert_eq!(nodes.len(), 3);
        assert!(matches!(&nodes[0], Node::Markup(h) if h.contains("Before")));
        assert!(matches!(nodes[1], Node::Tabs(_)));
        assert!(matches!(&nodes[2], Node::Markup(h) if h.contains("After")));
    }

    #[test]
    fn test_scanner_warnings_are_reported() {
        let (_, diagnostics) = parse("text\n:::\n");
        assert_eq!(diagnostics, 1);
    }
}
