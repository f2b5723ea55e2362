//! `tabset languages` command implementation.

use clap::Args;
use tabset_renderer::SyntaxLanguages;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the languages command.
#[derive(Args)]
pub(crate) struct LanguagesArgs {
    /// Only show identifiers or names containing this text (case-insensitive).
    filter: Option<String>,
}

impl LanguagesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let rows = matching(SyntaxLanguages::global(), self.filter.as_deref());
        if rows.is_empty() {
            Output::new().warning("No matching languages");
            return Ok(());
        }

        let width = rows.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
        let output = Output::stdout();
        for (id, name) in rows {
            output.row(id, name, width);
        }
        Ok(())
    }
}

/// Table rows matching `filter`, sorted by identifier.
fn matching<'a>(languages: &'a SyntaxLanguages, filter: Option<&str>) -> Vec<(&'a str, &'a str)> {
    let filter = filter.map(str::to_lowercase);
    let mut rows: Vec<_> = languages
        .iter()
        .filter(|(id, name)| {
            filter
                .as_deref()
                .is_none_or(|f| id.contains(f) || name.to_lowercase().contains(f))
        })
        .collect();
    rows.sort_unstable();
    rows
}
