//! List rules command implementation.

use brace_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<40} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<40} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - all rules at their default severity (default)");
    println!("  strict       - all rules escalated to error");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  brace-lint check --rules no-empty-line-after-opening-brace");
    println!("  brace-lint check --rules BL001");
}
