//! Configuration types for brace-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::Severity;

/// Top-level configuration for brace-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing exit (default: "error").
    /// Violations at or above this severity fail the check run.
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Severity threshold at which a check run should fail.
    #[must_use]
    pub fn fail_on_severity(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// File extensions to analyze (without the dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_excludes(),
            extensions: default_extensions(),
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Default exclude patterns applied when none are configured.
#[must_use]
pub fn default_excludes() -> Vec<String> {
    vec![
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/vendor/**".to_string(),
    ]
}

fn default_extensions() -> Vec<String> {
    ["c", "cc", "cpp", "cs", "go", "java", "js", "jsx", "kt", "rs", "ts", "tsx"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert_eq!(config.fail_on_severity(), Severity::Error);
        assert!(config.analyzer.extensions.iter().any(|e| e == "ts"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
fail_on = "warning"

[analyzer]
root = "./src"
exclude = ["**/generated/**"]
extensions = ["ts", "tsx"]

[rules.no-empty-line-after-opening-brace]
enabled = true
severity = "error"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./src"));
        assert_eq!(config.analyzer.extensions, vec!["ts", "tsx"]);
        assert_eq!(config.fail_on_severity(), Severity::Warning);
        assert!(config.is_rule_enabled("no-empty-line-after-opening-brace"));
        assert_eq!(
            config.rule_severity("no-empty-line-after-opening-brace"),
            Some(Severity::Error)
        );
    }

    #[test]
    fn unknown_rule_is_enabled_by_default() {
        let config = Config::default();
        assert!(config.is_rule_enabled("anything"));
        assert_eq!(config.rule_severity("anything"), None);
    }

    #[test]
    fn disabled_rule_is_reported_disabled() {
        let toml = r#"
[rules.no-empty-line-after-opening-brace]
enabled = false
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        assert!(!config.is_rule_enabled("no-empty-line-after-opening-brace"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("not valid [").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
