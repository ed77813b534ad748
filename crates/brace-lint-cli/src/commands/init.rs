//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# brace-lint configuration

# Severity threshold for a failing exit code (info | warning | error)
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/node_modules/**",
    "**/vendor/**",
]

# File extensions to analyze
# extensions = ["ts", "tsx", "js", "jsx"]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.no-empty-line-after-opening-brace]
enabled = true
# severity = "error"  # Override default severity
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("brace-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created brace-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit brace-lint.toml to configure rules");
    println!("  2. Run: brace-lint check");

    Ok(())
}
