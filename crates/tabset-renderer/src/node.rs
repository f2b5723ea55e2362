//! Output node tree.
//!
//! The transformer emits one [`Node::Tabs`] per tabs block. Its menu carries
//! one [`TabHeader`] per panel in source order, and its children carry the
//! panels themselves. A header and its panel are bound by their shared token.

use serde::Serialize;

/// Prefix prepended to every tab id to form the linking token.
pub const TOKEN_PREFIX: &str = "data-tab-";

/// Class marking the first panel (and its header) of a tabs block.
pub const ACTIVE_CLASS: &str = "active";

/// Base class of the tabs block container.
pub const CONTAINER_CLASS: &str = "tabset";

/// Base class of the header menu.
pub const MENU_CLASS: &str = "tabset-menu";

/// Positional class of every header entry.
pub const ITEM_CLASS: &str = "item";

/// Base class of every panel.
pub const PANEL_CLASS: &str = "tabset-panel";

/// Class added to panels produced by `code-tab`.
pub const CODE_TAB_CLASS: &str = "code-tab";

/// A node produced by the generic parser or by a tabs directive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Node {
    /// Rendered markup from the generic parser, passed through as-is.
    Markup(String),
    /// Literal code block tagged with its language.
    CodeBlock(CodeBlock),
    /// A complete tabs block.
    Tabs(TabsBlock),
    /// A single panel, as emitted while its enclosing block is being parsed.
    Panel(TabPanel),
}

impl Node {
    /// Returns the panel if this node is one.
    #[must_use]
    pub fn as_panel(&self) -> Option<&TabPanel> {
        match self {
            Self::Panel(panel) => Some(panel),
            _ => None,
        }
    }

    /// Returns the tabs block if this node is one.
    #[must_use]
    pub fn as_tabs(&self) -> Option<&TabsBlock> {
        match self {
            Self::Tabs(block) => Some(block),
            _ => None,
        }
    }
}

/// Literal code block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Language identifier the block is tagged with.
    pub language: String,
    /// Raw source, without a trailing newline.
    pub source: String,
}

/// Header menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabHeader {
    /// Linking token shared with the panel.
    pub token: String,
    /// Display title.
    pub title: String,
    /// Whether this is the first header of its block.
    pub is_active: bool,
}

impl TabHeader {
    /// Ordered class set: `active` (first header only), `item`, token.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        let mut classes = ClassList::new();
        if self.is_active {
            classes.push(ACTIVE_CLASS);
        }
        classes.push(ITEM_CLASS);
        classes.push(&self.token);
        classes.into_vec()
    }
}

/// A single selectable content pane.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabPanel {
    /// Linking token shared with the header.
    pub token: String,
    /// Display title.
    pub title: String,
    /// Ordered class set: base, supplied, token, `active` (first panel only).
    pub classes: Vec<String>,
    /// Parsed body.
    pub body: Vec<Node>,
    /// Whether this is the first panel of its block.
    pub is_active: bool,
}

/// Header menu of a tabs block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderMenu {
    /// Menu classes.
    pub classes: Vec<String>,
    /// Header entries in discovery order.
    pub headers: Vec<TabHeader>,
}

/// One tabs container: header menu followed by its parsed content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabsBlock {
    /// Container classes.
    pub classes: Vec<String>,
    /// Header menu, always emitted (possibly empty).
    pub menu: HeaderMenu,
    /// Panels in source order, interleaved with any other content of the block.
    pub children: Vec<Node>,
}

impl TabsBlock {
    /// Iterate over the panels of this block in source order.
    pub fn panels(&self) -> impl Iterator<Item = &TabPanel> {
        self.children.iter().filter_map(Node::as_panel)
    }
}

/// Ordered, de-duplicated list of CSS classes.
#[derive(Debug, Default)]
pub(crate) struct ClassList {
    items: Vec<String>,
}

impl ClassList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a class unless it is empty or already present.
    pub(crate) fn push(&mut self, class: &str) {
        if !class.is_empty() && !self.items.iter().any(|c| c == class) {
            self.items.push(class.to_owned());
        }
    }

    pub(crate) fn extend<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) {
        for class in classes {
            self.push(class);
        }
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.items
    }
}
