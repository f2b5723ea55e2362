//! `code-tab` shorthand.

use super::panel::{PanelBody, PanelFields, build_panel};
use crate::directive::{Invocation, ParseContext};
use crate::error::TabsError;
use crate::node::{CODE_TAB_CLASS, CodeBlock, Node};
use crate::util::{slugify, trim_blank_lines};

const NAME: &str = "code-tab";

/// Build a panel wrapping the body as a literal code block.
///
/// The first line is `language [title words...]`. Without title words the
/// title comes from the language table.
pub(super) fn code_tab(
    ctx: &mut ParseContext<'_>,
    invocation: &Invocation,
) -> Result<Node, TabsError> {
    let (head, body) = invocation.head();
    let head = head.ok_or(TabsError::ContentRequired { directive: NAME })?;

    let mut words = head.split_whitespace();
    let language = words
        .next()
        .ok_or(TabsError::ContentRequired { directive: NAME })?
        .to_owned();
    let title_words: Vec<&str> = words.collect();

    let title = if title_words.is_empty() {
        ctx.languages()
            .lookup(&language)
            .map(str::to_owned)
            .ok_or_else(|| TabsError::UnknownLanguage {
                language: language.clone(),
            })?
    } else {
        title_words.join(" ")
    };

    let lines: Vec<&str> = body.lines().iter().map(String::as_str).collect();
    let source = trim_blank_lines(&lines).join("\n");

    let fields = PanelFields {
        id: Some(slugify(&title)),
        title,
        classes: vec![CODE_TAB_CLASS.to_owned()],
        body: PanelBody::Nodes(vec![Node::CodeBlock(CodeBlock { language, source })]),
    };
    build_panel(ctx, NAME, invocation.line, fields)
}

#[cfg(test)]
mod tests {
    use crate::error::TabsError;
    use crate::language::StaticLanguages;
    use crate::node::{CodeBlock, Node};
    use crate::transformer::TabsTransformer;
    use pretty_assertions::assert_eq;

    fn transform(source: &str) -> crate::Document {
        TabsTransformer::new()
            .with_languages(StaticLanguages::new().with("python", "Python"))
            .transform(source)
    }

    #[test]
    fn test_title_from_language_table() {
        let document = transform("::: tabs\n::: code-tab python\n\nprint(1)\n\n:::\n:::");
        let block = document.nodes[0].as_tabs().unwrap();
        let panel = block.panels().next().unwrap();

        assert_eq!(panel.title, "Python");
        assert_eq!(panel.token, "data-tab-python");
        assert_eq!(
            panel.classes,
            vec!["tabset-panel", "code-tab", "data-tab-python", "active"]
        );
        assert_eq!(
            panel.body,
            vec![Node::CodeBlock(CodeBlock {
                language: "python".to_owned(),
                source: "print(1)".to_owned(),
            })]
        );
    }

    #[test]
    fn test_explicit_title_skips_lookup() {
        let document = transform("::: tabs\n::: code-tab klingon Battle Plan\nqapla'\n:::\n:::");
        assert!(document.diagnostics.is_empty());

        let block = document.nodes[0].as_tabs().unwrap();
        let panel = block.panels().next().unwrap();
        assert_eq!(panel.title, "Battle Plan");
        assert_eq!(panel.token, "data-tab-battle-plan");
        assert_eq!(
            panel.body,
            vec![Node::CodeBlock(CodeBlock {
                language: "klingon".to_owned(),
                source: "qapla'".to_owned(),
            })]
        );
    }

    #[test]
    fn test_unknown_language_without_title() {
        let document = transform("::: tabs\n::: code-tab klingon\nqapla'\n:::\n:::");
        let block = document.nodes[0].as_tabs().unwrap();

        assert_eq!(block.panels().count(), 0);
        assert_eq!(document.diagnostics[0].line, 2);
        assert_eq!(
            document.diagnostics[0].as_error(),
            Some(&TabsError::UnknownLanguage {
                language: "klingon".to_owned()
            })
        );
    }

    #[test]
    fn test_language_on_first_body_line() {
        let document = transform("::: tabs\n::: code-tab\npython\nx = 1\ny = 2\n:::\n:::");
        let block = document.nodes[0].as_tabs().unwrap();
        let panel = block.panels().next().unwrap();

        assert_eq!(panel.title, "Python");
        assert_eq!(
            panel.body,
            vec![Node::CodeBlock(CodeBlock {
                language: "python".to_owned(),
                source: "x = 1\ny = 2".to_owned(),
            })]
        );
    }

    #[test]
    fn test_code_body_is_not_parsed() {
        let document = transform("::: tabs\n::: code-tab python\n# not a heading\n*x*\n:::\n:::");
        let block = document.nodes[0].as_tabs().unwrap();
        let panel = block.panels().next().unwrap();

        let Node::CodeBlock(code) = &panel.body[0] else {
            panic!("expected code block");
        };
        assert_eq!(code.source, "# not a heading\n*x*");
    }

    #[test]
    fn test_code_tab_requires_language() {
        let document = transform("::: tabs\n::: code-tab\n:::\n:::");
        assert_eq!(
            document.diagnostics[0].as_error(),
            Some(&TabsError::ContentRequired {
                directive: "code-tab"
            })
        );
    }
}
