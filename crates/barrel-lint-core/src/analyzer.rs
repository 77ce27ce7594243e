//! Core analyzer for orchestrating lint execution.

use crate::config::{Config, ConfigError};
use crate::context::{FileContext, SourceImports};
use crate::error::ClassifyError;
use crate::rule::{ImportRule, ImportRuleBox};
use crate::types::{LintResult, Violation};
use crate::workspace::Workspace;

use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during analysis.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum AnalyzerError {
    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A classification failure that invalidates the whole pass.
    #[error("Analysis aborted in {file}: {source}")]
    Classify {
        /// File being analyzed when the error surfaced.
        file: String,
        /// Underlying error.
        #[source]
        #[diagnostic_source]
        source: ClassifyError,
    },
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    workspace: Option<Workspace>,
    rules: Vec<ImportRuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workspace explicitly instead of building it from the config.
    #[must_use]
    pub fn workspace(mut self, workspace: Workspace) -> Self {
        self.workspace = Some(workspace);
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: ImportRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: ImportRuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is invalid or the workspace
    /// described by the config is inconsistent.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let workspace = match self.workspace {
            Some(workspace) => workspace,
            None => Workspace::from_config(&config)?,
        };

        let exclude = self
            .exclude_patterns
            .iter()
            .chain(&config.analyzer.exclude)
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .collect();

        Ok(Analyzer {
            workspace,
            rules,
            exclude,
            config,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance. An analyzer is
/// immutable once built and can be reused for any number of files.
pub struct Analyzer {
    workspace: Workspace,
    rules: Vec<ImportRuleBox>,
    exclude: Vec<glob::Pattern>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the workspace snapshot.
    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs every enabled rule over the given files.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Classify`] when a rule hits an error that
    /// invalidates the pass.
    pub fn analyze(&self, files: &[SourceImports]) -> Result<LintResult, AnalyzerError> {
        info!(
            "Analyzing {} file(s) with {} rule(s)",
            files.len(),
            self.rules.len()
        );

        let mut result = LintResult::new();

        for file in files {
            if self.should_exclude(&file.file) {
                debug!("Excluding: {}", file.file);
                continue;
            }

            let violations = self.analyze_file(file)?;
            result.violations.extend(violations);
            result.files_checked += 1;
            result.imports_checked += file.imports.len();
        }

        result.sort();

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    fn analyze_file(&self, file: &SourceImports) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", file.file);

        let ctx = FileContext::new(&file.file, &self.workspace);
        let mut violations = Vec::new();

        for rule in &self.rules {
            let found = rule
                .check(&ctx, &file.imports)
                .map_err(|source| AnalyzerError::Classify {
                    file: ctx.path.clone(),
                    source,
                })?;
            violations.extend(self.apply_severity_override(rule.name(), found));
        }

        Ok(violations)
    }

    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }

    fn should_exclude(&self, path: &str) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ImportDecl;
    use crate::types::{Location, Severity};

    struct EveryImport;

    impl ImportRule for EveryImport {
        fn name(&self) -> &'static str {
            "every-import"
        }
        fn code(&self) -> &'static str {
            "T001"
        }
        fn check(
            &self,
            ctx: &FileContext<'_>,
            imports: &[ImportDecl],
        ) -> Result<Vec<Violation>, ClassifyError> {
            Ok(imports
                .iter()
                .map(|i| {
                    Violation::new(
                        self.code(),
                        self.name(),
                        Severity::Error,
                        Location::new(ctx.path.clone(), i.line, i.column),
                        "import",
                    )
                })
                .collect())
        }
    }

    struct AlwaysBroken;

    impl ImportRule for AlwaysBroken {
        fn name(&self) -> &'static str {
            "always-broken"
        }
        fn code(&self) -> &'static str {
            "T002"
        }
        fn check(
            &self,
            ctx: &FileContext<'_>,
            _imports: &[ImportDecl],
        ) -> Result<Vec<Violation>, ClassifyError> {
            Err(ClassifyError::NotUnderRoot {
                file: ctx.path.clone(),
                source_root: "libs/test/src".into(),
            })
        }
    }

    fn files() -> Vec<SourceImports> {
        vec![
            SourceImports {
                file: "libs/test/src/b.ts".into(),
                imports: vec![ImportDecl::new("./x", 2, 1)],
            },
            SourceImports {
                file: "libs/test/src/a.spec.ts".into(),
                imports: vec![ImportDecl::new("./y", 1, 1)],
            },
            SourceImports {
                file: "libs/test/src/a.ts".into(),
                imports: vec![ImportDecl::new("./y", 5, 1), ImportDecl::new("./z", 1, 1)],
            },
        ]
    }

    #[test]
    fn test_excludes_and_sorts() {
        let analyzer = Analyzer::builder()
            .rule(EveryImport)
            .exclude("**/*.spec.ts")
            .build()
            .expect("Failed to build analyzer");

        let result = analyzer.analyze(&files()).unwrap();
        assert_eq!(result.files_checked, 2);
        assert_eq!(result.imports_checked, 3);
        let lines: Vec<(String, usize)> = result
            .violations
            .iter()
            .map(|v| (v.location.file.display().to_string(), v.location.line))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("libs/test/src/a.ts".to_string(), 1),
                ("libs/test/src/a.ts".to_string(), 5),
                ("libs/test/src/b.ts".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_severity_override_and_disable() {
        let config = Config::parse(
            r#"
[rules.every-import]
severity = "info"

[rules.always-broken]
enabled = false
"#,
        )
        .unwrap();

        let analyzer = Analyzer::builder()
            .config(config)
            .rule(EveryImport)
            .rule(AlwaysBroken)
            .build()
            .unwrap();
        assert_eq!(analyzer.rule_count(), 1);

        let result = analyzer.analyze(&files()).unwrap();
        assert!(result.violations.iter().all(|v| v.severity == Severity::Info));
    }

    #[test]
    fn test_fatal_rule_error_aborts() {
        let analyzer = Analyzer::builder().rule(AlwaysBroken).build().unwrap();
        let err = analyzer.analyze(&files()).unwrap_err();
        assert!(matches!(err, AnalyzerError::Classify { .. }));
        assert!(err.to_string().contains("libs/test/src/b.ts"));
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let result = Analyzer::builder().exclude("a/***/b").build();
        assert!(matches!(result, Err(AnalyzerError::Glob(_))));
    }
}
