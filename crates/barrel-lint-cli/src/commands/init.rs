//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# barrel-lint configuration

# Fail the run on violations at or above this severity
fail_on = "error"

[analyzer]
# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Projects of the monorepo
# [[projects]]
# name = "test"
# root = "libs/test"
# source_root = "libs/test/src"

# Path aliases: alias -> [barrel entry file]
[aliases]
# "@myapp/test" = ["libs/test/src/index.ts"]

[rules.no-barrel-files-import]
enabled = true
# severity = "warning"  # Override default severity
# preset = "recommended"  # minimal | recommended | strict

# Own-alias imports are always reported
disallow_own_alias = true

# Report folder imports ("./", "../") and every barrel import
disallow_folder_root_and_barrel = false

# Report imports that climb exactly to the project's main barrel
disallow_main_barrel_only = false

# Report every barrel import regardless of depth
disallow_any_barrel = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("barrel-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created barrel-lint.toml");
    println!("\nNext steps:");
    println!("  1. Declare your projects and aliases in barrel-lint.toml");
    println!("  2. Run: barrel-lint check --imports imports.json");

    Ok(())
}
