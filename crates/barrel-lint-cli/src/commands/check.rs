//! Check command implementation.

use anyhow::{bail, Context, Result};
use barrel_lint_core::{Analyzer, ImportRuleBox, SourceImports};
use barrel_lint_rules::{rules_from_config, Preset};
use std::io::Read;
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    imports: &Path,
    format: OutputFormat,
    preset: Option<&str>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = super::load_config(source)?;
    let fail_on = config.fail_on();

    let rules: Vec<ImportRuleBox> = match preset {
        Some(name) => match Preset::from_name(name) {
            Some(preset) => preset.rules(),
            None => bail!("Unknown preset '{name}' (expected minimal, recommended or strict)"),
        },
        None => rules_from_config(&config).context("Invalid rule options")?,
    };

    let mut builder = Analyzer::builder().config(config);
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;
    let files = read_imports(imports)?;

    tracing::info!(
        "Checking {} file(s) with {} rule(s)",
        files.len(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze(&files).context("Analysis failed")?;

    super::output::print(&result, format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Reads extracted imports from a JSON file, or from stdin for `-`.
fn read_imports(path: &Path) -> Result<Vec<SourceImports>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read imports from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read imports: {}", path.display()))?
    };

    parse_imports(&content)
}

fn parse_imports(content: &str) -> Result<Vec<SourceImports>> {
    serde_json::from_str(content).context("Imports must be a JSON array of {file, imports} records")
}
