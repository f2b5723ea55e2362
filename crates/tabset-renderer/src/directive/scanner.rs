//! Splits a fragment into plain text runs and top-level directive invocations.
//!
//! Nested directives stay inside their parent's body; they are found when the
//! body itself is parsed.

use super::{Fragment, Invocation};
use crate::error::Diagnostic;

/// A piece of a scanned fragment.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Lines outside any directive.
    Text(Fragment),
    /// A complete directive, with its raw source for pass-through.
    Invocation { invocation: Invocation, raw: Fragment },
}

/// Result of scanning one fragment.
#[derive(Debug, Default)]
pub(crate) struct Scan {
    pub(crate) segments: Vec<Segment>,
    pub(crate) warnings: Vec<Diagnostic>,
}

/// A directive fence line.
#[derive(Debug, PartialEq, Eq)]
enum FenceLine {
    Open { name: String, argument: String },
    Close,
}

/// Directive being collected.
struct Pending {
    name: String,
    argument: String,
    line: usize,
    depth: usize,
    raw: Vec<String>,
    body: Vec<String>,
}

impl Pending {
    fn finish(self) -> Segment {
        Segment::Invocation {
            invocation: Invocation {
                name: self.name,
                argument: self.argument,
                body: Fragment::from_lines(self.body, self.line + 1),
                line: self.line,
            },
            raw: Fragment::from_lines(self.raw, self.line),
        }
    }
}

/// Scan `fragment` for top-level directives.
pub(crate) fn scan(fragment: &Fragment) -> Scan {
    let mut scan = Scan::default();
    let mut fence = CodeFence::default();
    let mut text: Vec<String> = Vec::new();
    let mut text_start = fragment.first_line();
    let mut pending: Option<Pending> = None;

    for (idx, line) in fragment.lines().iter().enumerate() {
        let line_num = fragment.line_number(idx);
        fence.update(line);
        let directive = if fence.in_fence() {
            None
        } else {
            parse_fence_line(line)
        };

        if let Some(current) = pending.as_mut() {
            current.raw.push(line.clone());
            match directive {
                Some(FenceLine::Open { .. }) => current.depth += 1,
                Some(FenceLine::Close) => current.depth -= 1,
                None => {}
            }
            if current.depth == 0 {
                if let Some(done) = pending.take() {
                    scan.segments.push(done.finish());
                }
                text_start = line_num + 1;
            } else {
                current.body.push(line.clone());
            }
            continue;
        }

        match directive {
            Some(FenceLine::Open { name, argument }) => {
                if !text.is_empty() {
                    scan.segments.push(Segment::Text(Fragment::from_lines(
                        std::mem::take(&mut text),
                        text_start,
                    )));
                }
                pending = Some(Pending {
                    name,
                    argument,
                    line: line_num,
                    depth: 1,
                    raw: vec![line.clone()],
                    body: Vec::new(),
                });
            }
            Some(FenceLine::Close) => {
                scan.warnings.push(Diagnostic::warning(
                    line_num,
                    "stray ::: with no opening directive",
                ));
                if text.is_empty() {
                    text_start = line_num;
                }
                text.push(line.clone());
            }
            None => {
                if text.is_empty() {
                    text_start = line_num;
                }
                text.push(line.clone());
            }
        }
    }

    if let Some(unclosed) = pending {
        scan.warnings.push(Diagnostic::warning(
            unclosed.line,
            format!(
                "unclosed directive :::{} (missing closing :::)",
                unclosed.name
            ),
        ));
        scan.segments.push(unclosed.finish());
    }
    if !text.is_empty() {
        scan.segments
            .push(Segment::Text(Fragment::from_lines(text, text_start)));
    }

    scan
}

/// Parse a whole line as a directive opener or closer.
fn parse_fence_line(line: &str) -> Option<FenceLine> {
    let trimmed = line.trim();
    if !trimmed.starts_with(":::") {
        return None;
    }

    let colon_count = trimmed.chars().take_while(|&c| c == ':').count();
    let after_colons = trimmed[colon_count..].trim_start();
    if after_colons.is_empty() {
        return Some(FenceLine::Close);
    }

    let name_end = after_colons
        .find(|c: char| c == '[' || c.is_whitespace())
        .unwrap_or(after_colons.len());
    let name = &after_colons[..name_end];
    if !is_valid_directive_name(name) {
        return None;
    }

    let rest = &after_colons[name_end..];
    // Text after a bracketed argument is kept, separated by a space
    let argument = match bracketed(rest) {
        Some(inner) => {
            let trailing = rest[inner.len() + 2..].trim();
            if trailing.is_empty() {
                inner.trim().to_owned()
            } else {
                format!("{} {trailing}", inner.trim())
            }
        }
        None => rest.trim().to_owned(),
    };

    Some(FenceLine::Open {
        name: name.to_owned(),
        argument,
    })
}

fn is_valid_directive_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Content of a leading `[...]` group, honouring nested brackets.
fn bracketed(s: &str) -> Option<&str> {
    if !s.starts_with('[') {
        return None;
    }
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[1..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Tracks whether the scanner is inside a fenced code block.
///
/// A fence opens with three or more backticks or tildes and closes with a
/// line of the same character that is at least as long.
#[derive(Debug, Default)]
struct CodeFence {
    open: Option<(char, usize)>,
}

impl CodeFence {
    fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    fn update(&mut self, line: &str) {
        let trimmed = line.trim_start();
        let Some(first) = trimmed.chars().next() else {
            return;
        };
        if first != '`' && first != '~' {
            return;
        }
        let run = trimmed.chars().take_while(|&c| c == first).count();
        if run < 3 {
            return;
        }

        match self.open {
            None => self.open = Some((first, run)),
            Some((ch, len)) if ch == first && run >= len && trimmed[run..].trim().is_empty() => {
                self.open = None;
            }
            Some(_) => {}
        }
    }
}
