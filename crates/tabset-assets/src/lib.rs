//! Bundled frontend assets for tabset output.
//!
//! The stylesheet and script that make rendered tabs switchable are compiled
//! into the binary via `rust-embed`. Hosts use them in two steps:
//!
//! - **Registration** (build start): [`register_assets`] adds external
//!   references and the bundled files to a page [`AssetRegistry`]
//! - **Publishing** (build end): [`AssetPublisher::publish`] copies the bundled
//!   files into `<output>/_static/tabset/`

mod publisher;
mod registry;

use std::borrow::Cow;

pub use publisher::{AssetError, AssetPublisher, PublishOutcome};
pub use registry::{AssetKind, AssetList, AssetRegistry, register_assets};

/// Directory under the output root that holds static files.
pub const STATIC_DIR: &str = "_static";

/// Subdirectory of [`STATIC_DIR`] the bundled files are published to.
pub const ASSET_DIR: &str = "tabset";

#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
struct Bundled;

/// Get a bundled asset by file name (`tabs.css`, `tabs.js`).
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Bundled::get(path).map(|f| f.data)
}

/// Iterate bundled asset file names.
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Bundled::iter()
}

/// Return the MIME type for a path or URL, ignoring any query or fragment.
pub fn mime_for(path: &str) -> mime_guess::Mime {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    mime_guess::from_path(path).first_or_octet_stream()
}
