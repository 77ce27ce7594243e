//! Runs the built binary against a throwaway workspace.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r#"
[[projects]]
name = "test"
root = "libs/test"
source_root = "libs/test/src"

[aliases]
"@myapp/test" = ["libs/test/src/index.ts"]

[rules.no-barrel-files-import]
disallow_folder_root_and_barrel = true
"#;

const PLAIN_CONFIG: &str = r#"
[[projects]]
name = "test"
root = "libs/test"
source_root = "libs/test/src"

[aliases]
"@myapp/test" = ["libs/test/src/index.ts"]
"#;

fn workspace() -> TempDir {
    workspace_with(CONFIG)
}

fn workspace_with(config: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("barrel-lint.toml"), config).unwrap();
    tmp
}

fn barrel_lint(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_barrel-lint"))
        .args(args)
        .current_dir(dir)
        .env("BARREL_LINT_CONFIG_DIR", dir.join("no-global"))
        .output()
        .unwrap()
}

#[test]
fn check_reports_and_fails() {
    let ws = workspace();
    let imports = ws.path().join("imports.json");
    fs::write(
        &imports,
        r#"[{"file": "libs/test/src/main.ts", "imports": [{"path": "@myapp/test", "line": 2}]}]"#,
    )
    .unwrap();

    let out = barrel_lint(
        ws.path(),
        &["check", "--imports", "imports.json", "--format", "compact"],
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.contains("libs/test/src/main.ts:2:1: error [BRL001]"), "{stdout}");
}

#[test]
fn check_passes_clean_imports() {
    let ws = workspace();
    let imports = ws.path().join("imports.json");
    fs::write(
        &imports,
        r#"[{"file": "libs/test/src/main.ts", "imports": [{"path": "./component/component"}]}]"#,
    )
    .unwrap();

    let out = barrel_lint(ws.path(), &["check", "--imports", "imports.json", "--format", "json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["violations"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["imports_checked"], 1);
}

#[test]
fn classify_prints_verdict() {
    let ws = workspace();
    let out = barrel_lint(
        ws.path(),
        &["classify", "--file", "libs/test/src/component/component.ts", "--import", "../../index"],
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(out.status.success());
    assert!(stdout.contains("from-barrel-file (nesting match: true)"), "{stdout}");
    assert!(stdout.contains("reported"), "{stdout}");
}

#[test]
fn init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    assert!(barrel_lint(tmp.path(), &["init"]).status.success());
    assert!(tmp.path().join("barrel-lint.toml").exists());
    assert!(!barrel_lint(tmp.path(), &["init"]).status.success());
    assert!(barrel_lint(tmp.path(), &["init", "--force"]).status.success());
}

#[test]
fn check_preset_replaces_configured_options() {
    let ws = workspace_with(PLAIN_CONFIG);
    fs::write(
        ws.path().join("imports.json"),
        r#"[{"file": "libs/test/src/component/component.ts", "imports": [{"path": "./index"}]}]"#,
    )
    .unwrap();
    let args = ["check", "--imports", "imports.json", "--format", "compact"];

    assert!(barrel_lint(ws.path(), &args).status.success());

    let out = barrel_lint(ws.path(), &[&args[..], &["--preset", "strict"][..]].concat());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.contains("[BRL003]"), "{stdout}");
}

#[test]
fn check_rejects_unknown_preset() {
    let ws = workspace_with(PLAIN_CONFIG);
    fs::write(ws.path().join("imports.json"), "[]").unwrap();

    let out = barrel_lint(
        ws.path(),
        &["check", "--imports", "imports.json", "--preset", "bogus"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown preset 'bogus'"));
}

#[test]
fn check_exclude_drops_matching_files() {
    let ws = workspace();
    fs::write(
        ws.path().join("imports.json"),
        r#"[
            {"file": "libs/test/src/main.spec.ts", "imports": [{"path": "@myapp/test"}]},
            {"file": "libs/test/src/main.ts", "imports": [{"path": "./component/component"}]}
        ]"#,
    )
    .unwrap();

    let out = barrel_lint(
        ws.path(),
        &[
            "check",
            "--imports",
            "imports.json",
            "--format",
            "json",
            "--exclude",
            "**/*.spec.ts",
        ],
    );
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["files_checked"], 1);
    assert_eq!(json["violations"].as_array().map(Vec::len), Some(0));
}
