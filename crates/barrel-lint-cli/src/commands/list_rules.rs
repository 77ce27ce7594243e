//! List rules command implementation.

use barrel_lint_rules::{all_rules, ViolationKind};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        for kind in ViolationKind::ALL {
            println!("{:<10} {:<25} {}", kind.code(), rule.name(), kind.message());
        }
        println!("{:<10} {:<25} {}", "", "", rule.description());
    }

    println!("\nPresets:");
    println!("  minimal      - BRL001 only (default)");
    println!("  recommended  - BRL001, BRL003 for imports of the main barrel");
    println!("  strict       - BRL001, BRL002, BRL003");

    println!("\nSelect a preset in the config or on the command line, e.g.:");
    println!("  barrel-lint check --imports imports.json --preset strict");
}
