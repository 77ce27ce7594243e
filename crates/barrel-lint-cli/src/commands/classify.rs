//! Classify command implementation.

use anyhow::{Context, Result};
use barrel_lint_core::{FileContext, ImportDecl, ImportRule, ViolationDiagnostic, Workspace};
use barrel_lint_rules::{NoBarrelFilesImport, NAME};

use crate::config_resolver::ConfigSource;

/// Runs the classify command.
pub fn run(
    file: &str,
    import: &str,
    target_project: Option<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = super::load_config(source)?;
    let workspace = Workspace::from_config(&config).context("Invalid workspace")?;
    let rule = NoBarrelFilesImport::from_config(&config.rule_config(NAME))
        .context("Invalid rule options")?;

    let mut decl = ImportDecl::new(import, 1, 1);
    if let Some(project) = target_project {
        decl = decl.with_target_project(project);
    }

    let ctx = FileContext::new(file, &workspace);
    println!("file:           {}", ctx.path);
    println!(
        "source project: {}",
        ctx.source_project.as_deref().unwrap_or("-")
    );
    println!(
        "target project: {}",
        ctx.target_project(&decl).as_deref().unwrap_or("-")
    );

    let Some(classification) = rule
        .classify_import(&ctx, &decl)
        .with_context(|| format!("Cannot classify '{import}'"))?
    else {
        println!("classification: unresolved (import not checked)");
        return Ok(());
    };
    println!("classification: {classification}");

    let violations = rule
        .check(&ctx, std::slice::from_ref(&decl))
        .with_context(|| format!("Cannot check '{import}'"))?;

    if violations.is_empty() {
        println!("verdict:        allowed");
        return Ok(());
    }

    println!("verdict:        reported");
    for violation in &violations {
        let report = miette::Report::new(ViolationDiagnostic::from(violation));
        eprintln!("{report:?}");
    }

    Ok(())
}
