//! Tabbed content directives for markdown.
//!
//! This crate turns colon-fenced `tabs` directives into a structured node
//! tree: one header menu per tabs block followed by its panels, each header
//! bound to its panel by a shared linking token.
//!
//! # Architecture
//!
//! - [`TabsTransformer`]: entry point; builds one [`Document`] per call
//! - [`MarkupParser`]: the generic parser, [`MarkdownParser`] by default.
//!   It hands every directive it meets to [`ParseContext::invoke`]
//! - `tabs`: the `tabs`, `tab`, `group-tab` and `code-tab` builders
//! - [`DocumentState`]: auto ids and the header accumulator of the open block
//! - [`LanguageTable`]: display names for code tabs
//! - [`render_html`]: HTML writer for the node tree
//!
//! Directive errors never abort a document. They are collected as
//! [`Diagnostic`]s and the failing invocation emits nothing.
//!
//! # Example
//!
//! ```
//! use tabset_renderer::{StaticLanguages, TabsTransformer};
//!
//! let source = "\
//! ::: tabs
//! ::: group-tab Linux
//! apt install foo
//! :::
//! ::: code-tab python
//! print(1)
//! :::
//! :::";
//! let document = TabsTransformer::new()
//!     .with_languages(StaticLanguages::new().with("python", "Python"))
//!     .transform(source);
//!
//! let block = document.nodes[0].as_tabs().unwrap();
//! let tokens: Vec<_> = block.menu.headers.iter().map(|h| h.token.as_str()).collect();
//! assert_eq!(tokens, ["data-tab-linux", "data-tab-python"]);
//! ```

pub mod directive;
mod error;
mod html;
mod language;
mod metadata;
mod node;
mod state;
mod tabs;
mod transformer;
mod util;

pub use directive::{Fragment, Invocation, MarkdownParser, MarkupParser, ParseContext};
pub use error::{Diagnostic, DiagnosticKind, TabsError};
pub use html::{escape_html, render_html};
pub use language::{LanguageOverrides, LanguageTable, StaticLanguages, SyntaxLanguages};
pub use metadata::{TabRecord, TabTitle};
pub use node::{
    ACTIVE_CLASS, CODE_TAB_CLASS, CONTAINER_CLASS, CodeBlock, HeaderMenu, ITEM_CLASS, MENU_CLASS,
    Node, PANEL_CLASS, TOKEN_PREFIX, TabHeader, TabPanel, TabsBlock,
};
pub use state::{BlockFrame, DocumentState};
pub use transformer::{Document, DuplicateIdPolicy, TabsOptions, TabsTransformer};
pub use util::slugify;
