//! Tab directives.
//!
//! - `tabs`: container; builds the header menu from the panels its body produces
//! - `tab`: a panel titled by a bare string or a JSON record
//! - `group-tab`: a panel whose id is derived from its label, so equal labels
//!   share a token across every tabs block of the document
//! - `code-tab`: a panel wrapping a code block, titled after its language
//!
//! The two shorthands call the panel builder directly with normalized fields.

mod block;
mod code;
mod group;
mod panel;

use crate::directive::{Invocation, ParseContext};
use crate::error::TabsError;
use crate::node::Node;

/// Directives handled by this module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Directive {
    Tabs,
    Tab,
    GroupTab,
    CodeTab,
}

impl Directive {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "tabs" => Some(Self::Tabs),
            "tab" => Some(Self::Tab),
            "group-tab" => Some(Self::GroupTab),
            "code-tab" => Some(Self::CodeTab),
            _ => None,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Tab => "tab",
            Self::GroupTab => "group-tab",
            Self::CodeTab => "code-tab",
        }
    }

    pub(crate) fn run(
        self,
        ctx: &mut ParseContext<'_>,
        invocation: &Invocation,
    ) -> Result<Vec<Node>, TabsError> {
        match self {
            Self::Tabs => block::build_tabs(ctx, invocation),
            Self::Tab => panel::tab(ctx, invocation).map(|node| vec![node]),
            Self::GroupTab => group::group_tab(ctx, invocation).map(|node| vec![node]),
            Self::CodeTab => code::code_tab(ctx, invocation).map(|node| vec![node]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_names_round_trip() {
        for directive in [
            Directive::Tabs,
            Directive::Tab,
            Directive::GroupTab,
            Directive::CodeTab,
        ] {
            assert_eq!(Directive::from_name(directive.name()), Some(directive));
        }
        assert_eq!(Directive::from_name("note"), None);
    }
}
