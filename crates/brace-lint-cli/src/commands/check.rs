//! Check command implementation.

use anyhow::{Context, Result};
use brace_lint_core::{Analyzer, Config, RuleBox};
use brace_lint_rules::{recommended_rules, NoEmptyLineAfterOpeningBrace};
use std::path::Path;

use super::output;
use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let source = config_resolver::resolve(path, explicit_config);
    let config = match &source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };
    let fail_on = config.fail_on_severity();

    // Build analyzer
    let mut builder = Analyzer::builder().root(path).config(config);

    // Add exclude patterns
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    // Add rules based on filter
    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names)
    } else {
        recommended_rules()
    };

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    output::print(&result, format)?;

    // Exit with error code when the configured threshold is reached
    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            "no-empty-line-after-opening-brace" | "BL001" => {
                rules.push(Box::new(NoEmptyLineAfterOpeningBrace::new()));
            }
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}
