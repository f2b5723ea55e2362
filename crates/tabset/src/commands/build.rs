//! `tabset build` command implementation.

use std::fs;
use std::path::{Component, Path, PathBuf};

use clap::Args;
use tabset_assets::{AssetList, AssetPublisher, PublishOutcome, register_assets};
use tabset_config::{CliSettings, Config, DuplicateIds, OutputFormat};
use tabset_renderer::{
    Diagnostic, DiagnosticKind, Document, DuplicateIdPolicy, LanguageOverrides, SyntaxLanguages,
    TabsOptions, TabsTransformer, escape_html,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Page format: html or json (overrides config).
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Fail the build and skip asset publishing on directive errors.
    #[arg(long)]
    strict: bool,

    /// Path to configuration file (default: auto-discover tabset.toml).
    #[arg(short, long, env = "TABSET_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            format: self.format,
            strict: self.strict.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Source: {}",
            config.build_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Output: {}",
            config.build_resolved.output_dir.display()
        ));

        let summary = build_site(&config, &output)?;

        if summary.failed {
            return Err(CliError::Build(format!(
                "Build failed with {} directive error(s)",
                summary.errors
            )));
        }
        if summary.errors + summary.warnings > 0 {
            output.warning(&format!(
                "{} error(s), {} warning(s)",
                summary.errors, summary.warnings
            ));
        }
        if summary.assets == PublishOutcome::SkippedIncompatible {
            output.info("Tab assets not copied for this format");
        }
        output.success(&format!(
            "Built {} page(s) to {}",
            summary.pages,
            config.build_resolved.output_dir.display()
        ));
        Ok(())
    }
}

/// Counts reported by a build.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct BuildSummary {
    pub(crate) pages: usize,
    pub(crate) errors: usize,
    pub(crate) warnings: usize,
    pub(crate) failed: bool,
    pub(crate) assets: PublishOutcome,
}

/// Build every markdown document under the source directory.
pub(crate) fn build_site(config: &Config, output: &Output) -> Result<BuildSummary, CliError> {
    let build = &config.build_resolved;
    if !build.source_dir.is_dir() {
        return Err(CliError::Validation(format!(
            "Source directory not found: {}",
            build.source_dir.display()
        )));
    }

    // Builder start: pages need the asset list before any of them is written
    let mut assets = AssetList::new();
    register_assets(&mut assets, &config.assets.external);

    let languages = config
        .tabs
        .languages
        .iter()
        .fold(LanguageOverrides::new(SyntaxLanguages::global()), |table, (id, name)| {
            table.with(id, name)
        });
    let transformer = TabsTransformer::new()
        .with_languages(languages)
        .with_options(TabsOptions {
            duplicate_ids: match config.tabs.duplicate_ids {
                DuplicateIds::Reject => DuplicateIdPolicy::Reject,
                DuplicateIds::Allow => DuplicateIdPolicy::Allow,
            },
        });

    let mut summary = BuildSummary {
        pages: 0,
        errors: 0,
        warnings: 0,
        failed: false,
        assets: PublishOutcome::SkippedIncompatible,
    };

    for source in find_documents(&build.source_dir)? {
        let rel = source.strip_prefix(&build.source_dir).unwrap_or(source.as_path());
        let text = fs::read_to_string(&source)?;
        let document = transformer.transform(&text);

        for diagnostic in &document.diagnostics {
            report(output, rel, diagnostic);
            if diagnostic.is_error() {
                summary.errors += 1;
            } else {
                summary.warnings += 1;
            }
        }

        let dest = build.output_dir.join(rel).with_extension(build.format.extension());
        let page = match build.format {
            OutputFormat::Html => render_page(rel, &document, &assets),
            OutputFormat::Json => serde_json::to_string_pretty(&document.nodes)?,
        };
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, page)?;
        tracing::info!(page = %dest.display(), "Wrote page");
        summary.pages += 1;
    }

    // Builder finish
    summary.failed = build.strict && summary.errors > 0;
    summary.assets = AssetPublisher::new().publish(
        &build.output_dir,
        build.format == OutputFormat::Html,
        summary.failed,
    )?;

    Ok(summary)
}

/// Markdown files under `dir`, sorted.
fn find_documents(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("**/*.md");
    let mut paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping unreadable path");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

/// Print a diagnostic as `path:line: severity: message`.
fn report(output: &Output, rel: &Path, diagnostic: &Diagnostic) {
    let path = rel.display();
    match &diagnostic.kind {
        DiagnosticKind::Error(err) => {
            output.error(&format!("{path}:{}: error: {err}", diagnostic.line));
        }
        DiagnosticKind::Warning(msg) => {
            output.warning(&format!("{path}:{}: warning: {msg}", diagnostic.line));
        }
    }
}

/// Wrap a document in a standalone HTML page.
fn render_page(rel: &Path, document: &Document, assets: &AssetList) -> String {
    let title = rel
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let depth = rel
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
        .saturating_sub(1);
    let root = "../".repeat(depth);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{}</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(&title),
        assets.render_tags(&root),
        document.to_html()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabset_config::BuildConfig;
    use tempfile::TempDir;

    const GOOD: &str = "# Install\n\n::: tabs\n::: tab Unix\nmake\n:::\n::: tab Windows\nnmake\n:::\n:::\n";
    const BROKEN: &str = "::: tabs\n::: code-tab no-such-language\nx\n:::\n:::\n";

    fn config(temp: &TempDir, format: OutputFormat, strict: bool) -> Config {
        let mut config = Config::default();
        config.build_resolved = BuildConfig {
            source_dir: temp.path().join("docs"),
            output_dir: temp.path().join("out"),
            format,
            strict,
        };
        config
    }

    fn write_doc(temp: &TempDir, rel: &str, content: &str) {
        let path = temp.path().join("docs").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_build_html_site() {
        let temp = TempDir::new().unwrap();
        write_doc(&temp, "index.md", GOOD);
        write_doc(&temp, "guide/setup.md", GOOD);

        let summary = build_site(&config(&temp, OutputFormat::Html, false), &Output::new()).unwrap();

        assert_eq!(
            summary,
            BuildSummary {
                pages: 2,
                errors: 0,
                warnings: 0,
                failed: false,
                assets: PublishOutcome::Copied(2),
            }
        );
        let index = fs::read_to_string(temp.path().join("out/index.html")).unwrap();
        assert!(index.contains("<title>index</title>"));
        assert!(index.contains("href=\"_static/tabset/tabs.css\""));
        assert!(index.contains("<div class=\"tabset\">"));

        let nested = fs::read_to_string(temp.path().join("out/guide/setup.html")).unwrap();
        assert!(nested.contains("src=\"../_static/tabset/tabs.js\""));
        assert!(temp.path().join("out/_static/tabset/tabs.css").is_file());
    }

    #[test]
    fn test_build_json_skips_assets() {
        let temp = TempDir::new().unwrap();
        write_doc(&temp, "index.md", GOOD);

        let summary = build_site(&config(&temp, OutputFormat::Json, false), &Output::new()).unwrap();

        assert_eq!(summary.assets, PublishOutcome::SkippedIncompatible);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("out/index.json")).unwrap())
                .unwrap();
        assert_eq!(json[1]["type"], "tabs");
        assert_eq!(json[1]["data"]["menu"]["headers"][0]["title"], "Unix");
        assert!(!temp.path().join("out/_static").exists());
    }

    #[test]
    fn test_build_errors_are_not_fatal_by_default() {
        let temp = TempDir::new().unwrap();
        write_doc(&temp, "broken.md", BROKEN);

        let summary = build_site(&config(&temp, OutputFormat::Html, false), &Output::new()).unwrap();

        assert_eq!(summary.errors, 1);
        assert!(!summary.failed);
        assert_eq!(summary.assets, PublishOutcome::Copied(2));
        assert!(temp.path().join("out/broken.html").is_file());
    }

    #[test]
    fn test_strict_build_skips_assets_after_error() {
        let temp = TempDir::new().unwrap();
        write_doc(&temp, "good.md", GOOD);
        write_doc(&temp, "broken.md", BROKEN);

        let summary = build_site(&config(&temp, OutputFormat::Html, true), &Output::new()).unwrap();

        assert!(summary.failed);
        assert_eq!(summary.assets, PublishOutcome::SkippedAfterFailure);
        assert!(!temp.path().join("out/_static").exists());
    }

    #[test]
    fn test_configured_language_names() {
        let temp = TempDir::new().unwrap();
        write_doc(&temp, "broken.md", BROKEN);
        let mut config = config(&temp, OutputFormat::Json, false);
        config
            .tabs
            .languages
            .insert("no-such-language".to_owned(), "Made Up".to_owned());

        let summary = build_site(&config, &Output::new()).unwrap();

        assert_eq!(summary.errors, 0);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("out/broken.json")).unwrap())
                .unwrap();
        assert_eq!(json[0]["data"]["menu"]["headers"][0]["title"], "Made Up");
    }

    #[test]
    fn test_duplicate_ids_warn_by_default() {
        let temp = TempDir::new().unwrap();
        write_doc(
            &temp,
            "dup.md",
            "::: tabs\n::: group-tab Linux\na\n:::\n::: group-tab linux\nb\n:::\n:::\n",
        );

        let summary = build_site(&config(&temp, OutputFormat::Html, true), &Output::new()).unwrap();

        assert_eq!((summary.errors, summary.warnings), (0, 1));
        assert!(!summary.failed);
    }

    #[test]
    fn test_missing_source_dir() {
        let temp = TempDir::new().unwrap();

        let err = build_site(&config(&temp, OutputFormat::Html, false), &Output::new()).unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_find_documents_ignores_other_files() {
        let temp = TempDir::new().unwrap();
        write_doc(&temp, "b.md", "");
        write_doc(&temp, "a/c.md", "");
        write_doc(&temp, "notes.txt", "");

        let found = find_documents(&temp.path().join("docs")).unwrap();
        let rel: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(temp.path().join("docs")).unwrap().to_path_buf())
            .collect();

        assert_eq!(rel, vec![PathBuf::from("a/c.md"), PathBuf::from("b.md")]);
    }
}
