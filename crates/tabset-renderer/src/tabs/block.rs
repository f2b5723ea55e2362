//! `tabs` container.

use crate::directive::{Invocation, ParseContext};
use crate::error::TabsError;
use crate::node::{CONTAINER_CLASS, HeaderMenu, MENU_CLASS, Node, TabsBlock};

/// Build one tabs block from its body.
///
/// The body is parsed with a fresh block frame, so nested panel directives
/// register their headers here. The menu is assembled once parsing is done.
pub(super) fn build_tabs(
    ctx: &mut ParseContext<'_>,
    invocation: &Invocation,
) -> Result<Vec<Node>, TabsError> {
    let body = &invocation.body;
    if body.is_blank() {
        return Err(TabsError::ContentRequired { directive: "tabs" });
    }

    let enclosing = ctx.state().begin_block();
    let children = ctx.parse(body);
    let headers = ctx.state().end_block(enclosing);

    if headers.is_empty() {
        tracing::debug!(line = invocation.line, "Tabs block has no panels");
    } else {
        tracing::debug!(line = invocation.line, panels = headers.len(), "Built tabs block");
    }

    Ok(vec![Node::Tabs(TabsBlock {
        classes: vec![CONTAINER_CLASS.to_owned()],
        menu: HeaderMenu {
            classes: vec![MENU_CLASS.to_owned()],
            headers,
        },
        children,
    })])
}

#[cfg(test)]
mod tests {
    use crate::error::TabsError;
    use crate::language::StaticLanguages;
    use crate::node::Node;
    use crate::transformer::TabsTransformer;
    use pretty_assertions::assert_eq;

    fn transform(source: &str) -> crate::Document {
        TabsTransformer::new()
            .with_languages(StaticLanguages::new())
            .transform(source)
    }

    #[test]
    fn test_menu_mirrors_panels() {
        let source = "::: tabs\n::: tab Unix\nmake\n:::\n::: tab Windows\nnmake\n:::\n:::";
        let document = transform(source);
        let block = document.nodes[0].as_tabs().unwrap();

        assert_eq!(block.classes, vec!["tabset"]);
        assert_eq!(block.menu.classes, vec!["tabset-menu"]);

        let header_tokens: Vec<_> = block.menu.headers.iter().map(|h| &h.token).collect();
        let panel_tokens: Vec<_> = block.panels().map(|p| &p.token).collect();
        assert_eq!(header_tokens, panel_tokens);

        let active: Vec<_> = block.menu.headers.iter().map(|h| h.is_active).collect();
        assert_eq!(active, vec![true, false]);
    }

    #[test]
    fn test_empty_body_requires_content() {
        let document = transform("::: tabs\n\n:::");

        assert!(document.nodes.is_empty());
        assert_eq!(
            document.diagnostics[0].as_error(),
            Some(&TabsError::ContentRequired { directive: "tabs" })
        );
    }

    #[test]
    fn test_block_without_panels_has_empty_menu() {
        let document = transform("::: tabs\nJust text.\n:::");
        let block = document.nodes[0].as_tabs().unwrap();

        assert!(block.menu.headers.is_empty());
        assert_eq!(
            block.children,
            vec![Node::Markup("<p>Just text.</p>\n".to_owned())]
        );
        assert!(document.diagnostics.is_empty());
    }

    #[test]
    fn test_stray_content_stays_in_order() {
        let source = "::: tabs\n::: tab A\na\n:::\nstray\n::: tab B\nb\n:::\n:::";
        let document = transform(source);
        let block = document.nodes[0].as_tabs().unwrap();

        assert_eq!(block.children.len(), 3);
        assert!(matches!(block.children[0], Node::Panel(_)));
        assert!(matches!(&block.children[1], Node::Markup(html) if html.contains("stray")));
        assert!(matches!(block.children[2], Node::Panel(_)));
    }

    #[test]
    fn test_nested_block_keeps_parent_headers() {
        let source = "\
::: tabs
::: tab Outer A
:::: tabs
::: tab Inner 1
i1
:::
::: tab Inner 2
i2
:::
::::
:::
::: tab Outer B
ob
:::
:::";
        let document = transform(source);
        assert!(document.diagnostics.is_empty(), "{:?}", document.diagnostics);

        let outer = document.nodes[0].as_tabs().unwrap();
        let outer_titles: Vec<_> = outer.menu.headers.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(outer_titles, vec!["Outer A", "Outer B"]);
        assert!(outer.menu.headers[0].is_active);
        assert!(!outer.menu.headers[1].is_active);

        let first = outer.panels().next().unwrap();
        let inner = first.body[0].as_tabs().unwrap();
        let inner_titles: Vec<_> = inner.menu.headers.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(inner_titles, vec!["Inner 1", "Inner 2"]);
        assert!(inner.menu.headers[0].is_active);

        // Auto ids are document-scoped: outer A, inner 1, inner 2, outer B
        let outer_tokens: Vec<_> = outer.panels().map(|p| p.token.as_str()).collect();
        assert_eq!(outer_tokens, vec!["data-tab-1", "data-tab-4"]);
    }
}
