//! End-to-end checks through the analyzer with a TOML-described workspace.

use barrel_lint_core::{Analyzer, Config, ImportDecl, Severity, SourceImports};
use barrel_lint_rules::rules_from_config;

const WORKSPACE: &str = r#"
[[projects]]
name = "test"
root = "libs/test"
source_root = "libs/test/src"

[[projects]]
name = "other"
root = "libs/other"
source_root = "libs/other/src"

[aliases]
"@myapp/test" = ["libs/test/src/index.ts"]
"@myapp/other" = ["libs/other/src/index.ts"]
"@myapp/other/*" = ["libs/other/src/*"]
"#;

fn analyzer(rule_section: &str) -> Analyzer {
    let config = Config::parse(&format!("{WORKSPACE}\n{rule_section}")).unwrap();
    let mut builder = Analyzer::builder();
    for rule in rules_from_config(&config).unwrap() {
        builder = builder.rule_box(rule);
    }
    builder.config(config).build().unwrap()
}

fn file(path: &str, imports: &[&str]) -> SourceImports {
    SourceImports {
        file: path.to_string(),
        imports: imports
            .iter()
            .enumerate()
            .map(|(i, p)| ImportDecl::new(*p, i + 1, 1))
            .collect(),
    }
}

const ALL_SWITCHES: &str = r#"
[rules.no-barrel-files-import]
disallow_folder_root_and_barrel = true
"#;

#[test]
fn test_imports_of_other_libs_are_allowed() {
    let result = analyzer(ALL_SWITCHES)
        .analyze(&[file(
            "libs/test/src/main.ts",
            &["@myapp/other", "@myapp/other/button", "rxjs"],
        )])
        .unwrap();
    assert!(result.violations.is_empty());
    assert_eq!(result.imports_checked, 3);
}

#[test]
fn test_own_alias_is_reported_without_options() {
    let result = analyzer("")
        .analyze(&[file("libs/test/src/main.ts", &["@myapp/test", "./index", "."])])
        .unwrap();
    assert_eq!(result.violations.len(), 1);
    let v = &result.violations[0];
    assert_eq!(v.code, "BRL001");
    assert_eq!(v.severity, Severity::Error);
    assert!(result.has_violations_at(Severity::Error));
}

#[test]
fn test_barrels_pass_when_options_are_off() {
    let result = analyzer("")
        .analyze(&[
            file("libs/test/src/main.ts", &["./index", "../index"]),
            file("libs/test/src/component/component.ts", &["../../index", "../"]),
        ])
        .unwrap();
    assert!(result.violations.is_empty());
    assert_eq!(result.files_checked, 2);
}

#[test]
fn test_parent_and_current_root_barrels_are_reported() {
    let result = analyzer(ALL_SWITCHES)
        .analyze(&[
            file("libs/test/src/main.ts", &["./index", "./component/component"]),
            file("libs/test/src/component/component.ts", &["../../index", "../main"]),
        ])
        .unwrap();

    let found: Vec<(String, usize, &str)> = result
        .violations
        .iter()
        .map(|v| (v.location.file.display().to_string(), v.location.line, v.code.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            ("libs/test/src/component/component.ts".to_string(), 1, "BRL003"),
            ("libs/test/src/main.ts".to_string(), 1, "BRL003"),
        ]
    );
}

#[test]
fn test_main_barrel_only_skips_adjacent_barrels() {
    let result = analyzer("[rules.no-barrel-files-import]\ndisallow_main_barrel_only = true")
        .analyze(&[file(
            "libs/test/src/component/component.ts",
            &["./index", "../../index"],
        )])
        .unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].location.line, 2);
}

#[test]
fn test_severity_and_exclude_come_from_config() {
    let config = r#"
[analyzer]
exclude = ["**/*.spec.ts"]

[rules.no-barrel-files-import]
severity = "warning"
"#;
    let result = analyzer(config)
        .analyze(&[
            file("libs/test/src/main.ts", &["@myapp/test"]),
            file("libs/test/src/main.spec.ts", &["@myapp/test"]),
        ])
        .unwrap();
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Warning);
    assert!(!result.has_violations_at(Severity::Error));
}

#[test]
fn test_disabled_rule_reports_nothing() {
    let result = analyzer("[rules.no-barrel-files-import]\nenabled = false")
        .analyze(&[file("libs/test/src/main.ts", &["@myapp/test"])])
        .unwrap();
    assert!(result.violations.is_empty());
}

#[test]
fn test_tooling_files_outside_source_root_are_skipped() {
    let result = analyzer(ALL_SWITCHES)
        .analyze(&[
            file("libs/test/.storybook/preview.ts", &["../src/index"]),
            file("libs/test/jest.config.ts", &["./src/index"]),
            file("libs/test/src/main.ts", &["./index"]),
        ])
        .unwrap();
    assert_eq!(result.files_checked, 3);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(
        result.violations[0].location.file.display().to_string(),
        "libs/test/src/main.ts"
    );
}

#[test]
fn test_sibling_roots_sharing_a_name_prefix() {
    let config = Config::parse(
        r#"
[[projects]]
name = "ui"
root = "libs/ui"
source_root = "libs/ui"

[[projects]]
name = "ui-kit"
root = "libs/ui-kit"
source_root = "libs/ui-kit"

[aliases]
"@myapp/ui" = ["libs/ui/index.ts"]
"@myapp/ui-kit" = ["libs/ui-kit/index.ts"]
"#,
    )
    .unwrap();
    let mut builder = Analyzer::builder();
    for rule in rules_from_config(&config).unwrap() {
        builder = builder.rule_box(rule);
    }
    let result = builder
        .config(config)
        .build()
        .unwrap()
        .analyze(&[file("libs/ui/button.ts", &["@myapp/ui", "./card", "@myapp/ui-kit"])])
        .unwrap();

    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].code, "BRL001");
    assert_eq!(result.violations[0].import_path.as_deref(), Some("@myapp/ui"));
}

#[test]
fn test_invalid_options_are_rejected() {
    let config = Config::parse(&format!(
        "{WORKSPACE}\n[rules.no-barrel-files-import]\ndisallow_own_alias = false"
    ))
    .unwrap();
    assert!(rules_from_config(&config).is_err());
}
