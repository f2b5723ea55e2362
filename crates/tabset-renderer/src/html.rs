//! HTML writer for the node tree.
//!
//! Produces the markup the bundled stylesheet and script expect: a container
//! `<div>` holding the header menu followed by one `<div>` per panel. Headers
//! and panels carry their token both as a class and as a `data-tab` attribute.

use std::borrow::Cow;

use crate::node::{CodeBlock, HeaderMenu, Node, TabHeader, TabPanel, TabsBlock};

/// Render nodes to an HTML string.
///
/// # Example
///
/// ```
/// use tabset_renderer::{CodeBlock, Node, render_html};
///
/// let html = render_html(&[Node::CodeBlock(CodeBlock {
///     language: "sh".to_owned(),
///     source: "echo <hi>".to_owned(),
/// })]);
/// assert_eq!(html, "<pre><code class=\"language-sh\">echo &lt;hi&gt;</code></pre>\n");
/// ```
#[must_use]
pub fn render_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

/// Escape text for use in HTML content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Markup(html) => out.push_str(html),
            Node::CodeBlock(code) => write_code_block(code, out),
            Node::Tabs(block) => write_tabs(block, out),
            Node::Panel(panel) => write_panel(panel, out),
        }
    }
}

fn write_code_block(code: &CodeBlock, out: &mut String) {
    out.push_str("<pre><code class=\"language-");
    out.push_str(&escape_html(&code.language));
    out.push_str("\">");
    out.push_str(&escape_html(&code.source));
    out.push_str("</code></pre>\n");
}

fn write_tabs(block: &TabsBlock, out: &mut String) {
    open_div(&block.classes, out);
    out.push_str(">\n");
    write_menu(&block.menu, out);
    write_nodes(&block.children, out);
    out.push_str("</div>\n");
}

fn write_menu(menu: &HeaderMenu, out: &mut String) {
    open_div(&menu.classes, out);
    out.push_str(" role=\"tablist\">");
    for header in &menu.headers {
        write_header(header, out);
    }
    out.push_str("</div>\n");
}

fn write_header(header: &TabHeader, out: &mut String) {
    out.push_str("<a");
    push_class_attr(&header.classes(), out);
    push_attr("data-tab", &header.token, out);
    out.push_str(" role=\"tab\" aria-selected=\"");
    out.push_str(if header.is_active { "true" } else { "false" });
    out.push_str("\">");
    out.push_str(&escape_html(&header.title));
    out.push_str("</a>");
}

fn write_panel(panel: &TabPanel, out: &mut String) {
    open_div(&panel.classes, out);
    push_attr("data-tab", &panel.token, out);
    out.push_str(" role=\"tabpanel\">\n");
    write_nodes(&panel.body, out);
    out.push_str("</div>\n");
}

/// Write `<div class="..."` without closing the tag.
fn open_div(classes: &[String], out: &mut String) {
    out.push_str("<div");
    push_class_attr(classes, out);
}

fn push_class_attr(classes: &[String], out: &mut String) {
    if !classes.is_empty() {
        push_attr("class", &classes.join(" "), out);
    }
}

fn push_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}
