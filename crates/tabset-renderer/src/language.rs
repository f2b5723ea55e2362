//! Language identifier to display name lookup for code tabs.
//!
//! A code tab without an explicit title is named after its language. The
//! default table is built once from the `two-face` syntax registry (syntect's
//! grammars plus the ones curated by bat), with a few common aliases on top.

use std::collections::HashMap;
use std::sync::LazyLock;

use syntect::parsing::SyntaxSet;

/// Identifiers whose display name replaces or extends the registry's.
const ALIASES: &[(&str, &str)] = &[
    ("bash", "Bash"),
    ("sh", "Bash"),
    ("shell", "Bash"),
    ("zsh", "Bash"),
    ("console", "Console"),
    ("shell-session", "Console"),
    ("text", "Text"),
    ("plain", "Text"),
    ("powershell", "PowerShell"),
    ("pwsh", "PowerShell"),
    ("ps1", "PowerShell"),
];

/// Read-only mapping from a short language identifier to a display name.
pub trait LanguageTable: Send + Sync {
    /// Display name for `language`, or `None` if it is not registered.
    fn lookup(&self, language: &str) -> Option<&str>;
}

impl<T: LanguageTable + ?Sized> LanguageTable for &T {
    fn lookup(&self, language: &str) -> Option<&str> {
        (**self).lookup(language)
    }
}

/// Language table backed by a `syntect` syntax set.
///
/// Every syntax is reachable by its lower-cased name and by each of its file
/// extensions. The first syntax to claim an identifier keeps it. The shared
/// [`global`](Self::global) table also applies a fixed alias list, so `bash`
/// is titled "Bash" rather than the grammar's long name.
///
/// # Example
///
/// ```
/// use tabset_renderer::{LanguageTable, SyntaxLanguages};
///
/// let languages = SyntaxLanguages::global();
/// assert_eq!(languages.lookup("python"), Some("Python"));
/// assert_eq!(languages.lookup("ts"), Some("TypeScript"));
/// assert_eq!(languages.lookup("bash"), Some("Bash"));
/// ```
#[derive(Debug)]
pub struct SyntaxLanguages {
    names: HashMap<String, String>,
}

static GLOBAL: LazyLock<SyntaxLanguages> = LazyLock::new(|| {
    SyntaxLanguages::from_syntax_set(&two_face::syntax::extra_newlines()).with_aliases(ALIASES)
});

impl SyntaxLanguages {
    /// Shared table built from the bundled syntax set on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Build a table from an arbitrary syntax set.
    #[must_use]
    pub fn from_syntax_set(syntaxes: &SyntaxSet) -> Self {
        let mut names = HashMap::new();
        for syntax in syntaxes.syntaxes() {
            let ids = std::iter::once(syntax.name.to_lowercase())
                .chain(syntax.file_extensions.iter().map(|ext| ext.to_lowercase()));
            for id in ids {
                names.entry(id).or_insert_with(|| syntax.name.clone());
            }
        }
        tracing::debug!(count = names.len(), "Built language table");
        Self { names }
    }

    /// Replace or add display names for the given identifiers.
    #[must_use]
    pub fn with_aliases(mut self, aliases: &[(&str, &str)]) -> Self {
        for (id, name) in aliases {
            self.names.insert(id.to_lowercase(), (*name).to_owned());
        }
        self
    }

    /// Iterate over `(identifier, display name)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl LanguageTable for SyntaxLanguages {
    fn lookup(&self, language: &str) -> Option<&str> {
        self.names
            .get(&language.to_lowercase())
            .map(String::as_str)
    }
}

/// Host-supplied display names consulted before another table.
///
/// Identifiers match case-insensitively.
///
/// # Example
///
/// ```
/// use tabset_renderer::{LanguageOverrides, LanguageTable, StaticLanguages};
///
/// let base = StaticLanguages::new().with("py", "Python");
/// let languages = LanguageOverrides::new(base).with("Py", "Python 3");
/// assert_eq!(languages.lookup("py"), Some("Python 3"));
/// ```
#[derive(Debug)]
pub struct LanguageOverrides<T> {
    names: HashMap<String, String>,
    base: T,
}

impl<T: LanguageTable> LanguageOverrides<T> {
    /// Wrap `base` with no overrides.
    #[must_use]
    pub fn new(base: T) -> Self {
        Self {
            names: HashMap::new(),
            base,
        }
    }

    /// Override the display name of one identifier.
    #[must_use]
    pub fn with(mut self, language: impl AsRef<str>, name: impl Into<String>) -> Self {
        self.names
            .insert(language.as_ref().to_lowercase(), name.into());
        self
    }
}

impl<T: LanguageTable> LanguageTable for LanguageOverrides<T> {
    fn lookup(&self, language: &str) -> Option<&str> {
        self.names
            .get(&language.to_lowercase())
            .map(String::as_str)
            .or_else(|| self.base.lookup(language))
    }
}

/// Fixed language table, for hosts that bring their own registry.
///
/// # Example
///
/// ```
/// use tabset_renderer::{LanguageTable, StaticLanguages};
///
/// let languages: StaticLanguages = [("py", "Python")].into_iter().collect();
/// assert_eq!(languages.lookup("py"), Some("Python"));
/// assert_eq!(languages.lookup("rb"), None);
/// ```
#[derive(Debug, Default)]
pub struct StaticLanguages {
    names: HashMap<String, String>,
}

impl StaticLanguages {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a display name for an identifier.
    #[must_use]
    pub fn with(mut self, language: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(language.into(), name.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticLanguages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl LanguageTable for StaticLanguages {
    fn lookup(&self, language: &str) -> Option<&str> {
        self.names.get(language).map(String::as_str)
    }
}
