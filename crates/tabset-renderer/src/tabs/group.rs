//! `group-tab` shorthand.

use super::panel::{PanelBody, PanelFields, build_panel};
use crate::directive::{Invocation, ParseContext};
use crate::error::TabsError;
use crate::node::Node;
use crate::util::slugify;

const NAME: &str = "group-tab";

/// Build a panel whose id is the slug of its label.
///
/// Equal labels share a token across every tabs block of the document. Each
/// block still marks its own first panel active.
pub(super) fn group_tab(
    ctx: &mut ParseContext<'_>,
    invocation: &Invocation,
) -> Result<Node, TabsError> {
    let (label, body) = invocation.head();
    let label = label.ok_or(TabsError::ContentRequired { directive: NAME })?;

    let fields = PanelFields {
        id: Some(slugify(&label)),
        title: label,
        classes: Vec::new(),
        body: PanelBody::Markup(body),
    };
    build_panel(ctx, NAME, invocation.line, fields)
}
