//! Rule trait for defining import lint rules.

use crate::context::{FileContext, ImportDecl};
use crate::error::ClassifyError;
use crate::types::{Severity, Violation};

/// A per-file rule over the import declarations of that file.
///
/// Rules never see source text; the host walks the syntax tree and hands
/// over the import literals with their positions.
///
/// # Example
///
/// ```ignore
/// use barrel_lint_core::{FileContext, ImportDecl, ImportRule, Violation};
///
/// pub struct NoDeepImports;
///
/// impl ImportRule for NoDeepImports {
///     fn name(&self) -> &'static str { "no-deep-imports" }
///     fn code(&self) -> &'static str { "DEEP001" }
///
///     fn check(&self, ctx: &FileContext, imports: &[ImportDecl]) -> Result<Vec<Violation>, ClassifyError> {
///         Ok(imports.iter().filter(|i| i.path.matches('/').count() > 3).map(/* ... */).collect())
///     }
/// }
/// ```
pub trait ImportRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-barrel-files-import").
    fn name(&self) -> &'static str;

    /// Returns the primary rule code (e.g., "BRL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks the imports of a single file.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures that invalidate the whole pass
    /// (see [`ClassifyError::is_fatal_for_pass`]); per-import problems are
    /// skipped by the rule itself.
    fn check(
        &self,
        ctx: &FileContext<'_>,
        imports: &[ImportDecl],
    ) -> Result<Vec<Violation>, ClassifyError>;
}

/// Type alias for boxed `ImportRule` trait objects.
pub type ImportRuleBox = Box<dyn ImportRule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasTable;
    use crate::types::Location;
    use crate::workspace::Workspace;

    struct TestRule;

    impl ImportRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
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
                        self.default_severity(),
                        Location::new(ctx.path.clone(), i.line, i.column),
                        "Test violation",
                    )
                })
                .collect())
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);

        let ws = Workspace::new(Vec::new(), AliasTable::new()).unwrap();
        let ctx = FileContext::new("a.ts", &ws);
        let found = rule.check(&ctx, &[ImportDecl::new("./b", 3, 1)]).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].location.line, 3);
    }
}
