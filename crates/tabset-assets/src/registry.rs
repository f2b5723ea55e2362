//! Page asset registration.

use crate::{ASSET_DIR, STATIC_DIR, iter, mime_for};

/// Kind of page asset, decided from its MIME type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

impl AssetKind {
    /// Classify a path or URL. Returns `None` for anything that is neither
    /// CSS nor JavaScript.
    pub fn of(path: &str) -> Option<Self> {
        let mime = mime_for(path);
        match (mime.type_().as_str(), mime.subtype().as_str()) {
            ("text", "css") => Some(Self::Stylesheet),
            ("text" | "application", "javascript") => Some(Self::Script),
            _ => None,
        }
    }
}

/// Receiver of page asset references.
///
/// Paths are either absolute URLs or relative to the static directory of the
/// output root.
pub trait AssetRegistry {
    /// Add a stylesheet to every page.
    fn add_stylesheet(&mut self, path: &str);
    /// Add a script to every page.
    fn add_script(&mut self, path: &str);
}

/// Register external references first, then the bundled files.
///
/// Paths that are neither stylesheets nor scripts are skipped.
pub fn register_assets<R: AssetRegistry + ?Sized>(registry: &mut R, external: &[String]) {
    let mut bundled: Vec<String> = iter().map(|name| format!("{ASSET_DIR}/{name}")).collect();
    bundled.sort();

    for path in external.iter().chain(&bundled) {
        match AssetKind::of(path) {
            Some(AssetKind::Stylesheet) => registry.add_stylesheet(path),
            Some(AssetKind::Script) => registry.add_script(path),
            None => tracing::debug!(path = %path, "Skipping asset of unknown kind"),
        }
    }
}

/// Ordered, de-duplicated asset list that renders page tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetList {
    stylesheets: Vec<String>,
    scripts: Vec<String>,
}

impl AssetList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered stylesheets in registration order.
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Registered scripts in registration order.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Render `<link>` and `<script>` tags for a page.
    ///
    /// `root` is the relative path from the page to the output root, such as
    /// `""` or `"../"`. Absolute URLs are emitted as-is.
    pub fn render_tags(&self, root: &str) -> String {
        let mut out = String::new();
        for path in &self.stylesheets {
            out.push_str("<link rel=\"stylesheet\" href=\"");
            out.push_str(&resolve(root, path));
            out.push_str("\">\n");
        }
        for path in &self.scripts {
            out.push_str("<script src=\"");
            out.push_str(&resolve(root, path));
            out.push_str("\"></script>\n");
        }
        out
    }
}

impl AssetRegistry for AssetList {
    fn add_stylesheet(&mut self, path: &str) {
        push_unique(&mut self.stylesheets, path);
    }

    fn add_script(&mut self, path: &str) {
        push_unique(&mut self.scripts, path);
    }
}

fn push_unique(list: &mut Vec<String>, path: &str) {
    if !list.iter().any(|p| p == path) {
        list.push(path.to_owned());
    }
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("//") || path.starts_with('/') || path.contains("://")
}

fn resolve(root: &str, path: &str) -> String {
    if is_absolute_url(path) {
        path.to_owned()
    } else {
        format!("{root}{STATIC_DIR}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_asset_kind() {
        assert_eq!(AssetKind::of("tabset/tabs.css"), Some(AssetKind::Stylesheet));
        assert_eq!(AssetKind::of("tabset/tabs.js"), Some(AssetKind::Script));
        assert_eq!(AssetKind::of("logo.png"), None);
    }

    #[test]
    fn test_register_bundled_only() {
        let mut list = AssetList::new();
        register_assets(&mut list, &[]);

        assert_eq!(list.stylesheets(), ["tabset/tabs.css"]);
        assert_eq!(list.scripts(), ["tabset/tabs.js"]);
    }

    #[test]
    fn test_register_external_first() {
        let external = vec![
            "https://cdn.example.com/segment.css".to_owned(),
            "https://cdn.example.com/tab.js".to_owned(),
            "https://cdn.example.com/font.woff2".to_owned(),
        ];
        let mut list = AssetList::new();
        register_assets(&mut list, &external);

        assert_eq!(
            list.stylesheets(),
            ["https://cdn.example.com/segment.css", "tabset/tabs.css"]
        );
        assert_eq!(
            list.scripts(),
            ["https://cdn.example.com/tab.js", "tabset/tabs.js"]
        );
    }

    #[test]
    fn test_register_twice_is_idempotent() {
        let mut list = AssetList::new();
        register_assets(&mut list, &[]);
        register_assets(&mut list, &[]);

        assert_eq!(list.stylesheets().len(), 1);
        assert_eq!(list.scripts().len(), 1);
    }

    #[test]
    fn test_render_tags() {
        let mut list = AssetList::new();
        list.add_stylesheet("https://cdn.example.com/a.css");
        list.add_stylesheet("tabset/tabs.css");
        list.add_script("tabset/tabs.js");

        assert_eq!(
            list.render_tags("../"),
            "<link rel=\"stylesheet\" href=\"https://cdn.example.com/a.css\">\n\
             <link rel=\"stylesheet\" href=\"../_static/tabset/tabs.css\">\n\
             <script src=\"../_static/tabset/tabs.js\"></script>\n"
        );
    }
}
