//! Per-document bookkeeping for tab directives.

use std::collections::HashSet;

use crate::node::TabHeader;

/// Bookkeeping for the tabs block currently being parsed.
#[derive(Debug, Default)]
pub struct BlockFrame {
    headers: Vec<TabHeader>,
    next_is_first: bool,
    tokens: HashSet<String>,
    open: bool,
}

/// Scratch state for one document build.
///
/// The auto-id counter spans the whole document. Everything else belongs to
/// the innermost open tabs block: [`begin_block`](Self::begin_block) starts a
/// fresh frame and hands back the enclosing one, which
/// [`end_block`](Self::end_block) restores. A tabs block nested inside a panel
/// therefore never touches its parent's headers.
///
/// # Example
///
/// ```
/// use tabset_renderer::DocumentState;
///
/// let mut state = DocumentState::new();
/// let outer = state.begin_block();
/// assert!(state.take_is_first());
/// assert!(!state.take_is_first());
/// state.register_header("data-tab-1", "Unix", true);
/// let headers = state.end_block(outer);
/// assert_eq!(headers.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DocumentState {
    frame: BlockFrame,
    auto_id: usize,
}

impl DocumentState {
    /// Create state for a new document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tabs block: clear the header accumulator and arm the first-panel flag.
    ///
    /// Returns the enclosing block's frame, to be passed back to
    /// [`end_block`](Self::end_block).
    #[must_use = "the enclosing frame must be restored with end_block"]
    pub fn begin_block(&mut self) -> BlockFrame {
        let fresh = BlockFrame {
            next_is_first: true,
            open: true,
            ..BlockFrame::default()
        };
        std::mem::replace(&mut self.frame, fresh)
    }

    /// Finish the current tabs block and restore the enclosing one.
    ///
    /// Returns the headers registered during the block, in call order.
    pub fn end_block(&mut self, enclosing: BlockFrame) -> Vec<TabHeader> {
        std::mem::replace(&mut self.frame, enclosing).headers
    }

    /// Whether a tabs block is currently open.
    #[must_use]
    pub fn in_block(&self) -> bool {
        self.frame.open
    }

    /// Append a header to the current block. Returns its index.
    pub fn register_header(
        &mut self,
        token: impl Into<String>,
        title: impl Into<String>,
        is_active: bool,
    ) -> usize {
        self.frame.headers.push(TabHeader {
            token: token.into(),
            title: title.into(),
            is_active,
        });
        self.frame.headers.len() - 1
    }

    /// Return the first-panel flag and clear it.
    ///
    /// Yields `true` exactly once per block.
    pub fn take_is_first(&mut self) -> bool {
        std::mem::take(&mut self.frame.next_is_first)
    }

    /// Next document-scoped auto id. Starts at 1 and strictly increases.
    pub fn next_auto_id(&mut self) -> usize {
        self.auto_id += 1;
        self.auto_id
    }

    /// Record a token as used by the current block.
    ///
    /// Returns `false` if the block already holds it.
    pub fn claim_token(&mut self, token: &str) -> bool {
        self.frame.tokens.insert(token.to_owned())
    }
}
