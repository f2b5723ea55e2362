//! Panel builder and the `tab` directive.

use crate::directive::{Fragment, Invocation, ParseContext};
use crate::error::{Diagnostic, TabsError};
use crate::metadata::TabTitle;
use crate::node::{ACTIVE_CLASS, ClassList, Node, PANEL_CLASS, TOKEN_PREFIX, TabPanel};
use crate::transformer::DuplicateIdPolicy;

/// Panel body before parsing.
#[derive(Debug)]
pub(crate) enum PanelBody {
    /// Markup to parse recursively.
    Markup(Fragment),
    /// Nodes built by a shorthand directive.
    Nodes(Vec<Node>),
}

impl PanelBody {
    fn is_empty(&self) -> bool {
        match self {
            Self::Markup(fragment) => fragment.is_blank(),
            Self::Nodes(nodes) => nodes.is_empty(),
        }
    }
}

/// Normalized input of the panel builder.
#[derive(Debug)]
pub(crate) struct PanelFields {
    pub(crate) title: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) body: PanelBody,
}

/// `tab` directive: first line is a bare title or a JSON record.
pub(super) fn tab(ctx: &mut ParseContext<'_>, invocation: &Invocation) -> Result<Node, TabsError> {
    let (head, body) = invocation.head();
    let head = head.ok_or(TabsError::ContentRequired { directive: "tab" })?;

    let fields = match TabTitle::parse(&head)? {
        TabTitle::Bare(title) => PanelFields {
            title,
            id: None,
            classes: Vec::new(),
            body: PanelBody::Markup(body),
        },
        TabTitle::Structured(record) => PanelFields {
            title: record.tab_name,
            id: record.tab_id,
            classes: record.classes,
            body: PanelBody::Markup(body),
        },
    };

    build_panel(ctx, "tab", invocation.line, fields)
}

/// Build one panel and register its header with the enclosing tabs block.
///
/// All validation happens before the document state is touched, so a failed
/// panel never consumes the block's first-panel slot or an id. A token already
/// used in the block is kept with a warning unless the options reject it.
pub(crate) fn build_panel(
    ctx: &mut ParseContext<'_>,
    directive: &'static str,
    line: usize,
    fields: PanelFields,
) -> Result<Node, TabsError> {
    if fields.title.trim().is_empty() {
        return Err(TabsError::ContentRequired { directive });
    }
    if !ctx.state().in_block() {
        return Err(TabsError::TabOutsideTabs { directive });
    }

    let token = match &fields.id {
        Some(id) => format!("{TOKEN_PREFIX}{id}"),
        None => format!("{TOKEN_PREFIX}{}", ctx.state().next_auto_id()),
    };
    if !ctx.state().claim_token(&token) {
        match ctx.options().duplicate_ids {
            DuplicateIdPolicy::Reject => return Err(TabsError::DuplicateTabId { id: token }),
            DuplicateIdPolicy::Allow => {
                tracing::debug!(line, token = %token, "Duplicate tab id kept");
                ctx.report(Diagnostic::warning(
                    line,
                    format!("duplicate tab id `{token}` in tabs block"),
                ));
            }
        }
    }

    let is_active = ctx.state().take_is_first();
    ctx.state()
        .register_header(token.as_str(), fields.title.as_str(), is_active);

    if fields.body.is_empty() {
        tracing::debug!(token = %token, "Tab panel has no body");
    }
    let body = match fields.body {
        PanelBody::Markup(fragment) => ctx.parse(&fragment),
        PanelBody::Nodes(nodes) => nodes,
    };

    let mut classes = ClassList::new();
    classes.push(PANEL_CLASS);
    classes.extend(fields.classes.iter().map(String::as_str));
    classes.push(&token);
    if is_active {
        classes.push(ACTIVE_CLASS);
    }

    Ok(Node::Panel(TabPanel {
        token,
        title: fields.title,
        classes: classes.into_vec(),
        body,
        is_active,
    }))
}
