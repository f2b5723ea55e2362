//! Shared helpers for tab directives.

/// Convert a free-text label into a tab id.
///
/// Lower-cases the label and joins its whitespace-separated words with single
/// dashes. Punctuation is kept, so `C++` and `C` stay distinct. Two labels that
/// differ only in case or spacing produce the same id.
///
/// # Examples
///
/// ```
/// use tabset_renderer::slugify;
///
/// assert_eq!(slugify("My Example"), "my-example");
/// assert_eq!(slugify("  my   example "), "my-example");
/// assert_eq!(slugify("C++"), "c++");
/// ```
#[must_use]
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Trim blank lines from both ends of a block of lines.
pub(crate) fn trim_blank_lines<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}
