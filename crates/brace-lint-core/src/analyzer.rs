//! Core analyzer for orchestrating lint execution.

use crate::config::{default_excludes, Config};
use crate::context::FileContext;
use crate::lexer::lex;
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reading a source file (missing, unreadable, or not UTF-8).
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path to the file that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Invalid exclude glob pattern.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_fast: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to abort on the first unreadable file (default: false).
    #[must_use]
    pub fn fail_fast(mut self, fail: bool) -> Self {
        self.fail_fast = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be resolved or an
    /// exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
        }
        if exclude_patterns.is_empty() {
            exclude_patterns.extend(default_excludes());
        }

        let exclude_globs = exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            exclude_globs,
            config: self.config.unwrap_or_default(),
            fail_fast: self.fail_fast,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance. The analyzer walks
/// the root directory, tokenizes each matching source file with the
/// trivia-preserving lexer, and runs every enabled rule over the stream.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    exclude_globs: Vec<glob::Pattern>,
    config: Config,
    fail_fast: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// A file that cannot be read (e.g. not UTF-8) is logged and skipped so
    /// one bad file never aborts the rest of the run, unless `fail_fast`
    /// was set on the builder.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or on the first unreadable
    /// file when `fail_fast` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files();

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Read { path, source }) => {
                    warn!("Skipping {}: {}", path.display(), source);
                    if self.fail_fast {
                        return Err(AnalyzerError::Read { path, source });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        // Sort violations by file, then position
        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file and returns violations.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let tokens = lex(&content);

        let ctx = FileContext::new(path, &content, &self.root);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_violations = rule.check(&ctx, &tokens);
            let rule_violations = self.apply_severity_override(rule.name(), rule_violations);
            violations.extend(rule_violations);
        }

        Ok(violations)
    }

    /// Applies severity overrides from configuration.
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

    /// Discovers all source files to analyze.
    ///
    /// Walks the root honoring `.gitignore` when configured, keeping files
    /// whose extension is in the configured set and which no exclude
    /// pattern matches. The list is sorted for deterministic output.
    fn discover_files(&self) -> Vec<PathBuf> {
        let mut walker = ignore::WalkBuilder::new(&self.root);
        walker
            .git_ignore(self.config.analyzer.respect_gitignore)
            .git_exclude(self.config.analyzer.respect_gitignore)
            .hidden(true);

        let mut files = Vec::new();
        for entry in walker.build() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Walk error: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if !self.has_lintable_extension(&path) {
                continue;
            }
            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        files.sort();
        files
    }

    /// Checks if a path has one of the configured extensions.
    fn has_lintable_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.config.analyzer.extensions.iter().any(|e| e == ext))
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for (pattern, compiled) in self.exclude_patterns.iter().zip(&self.exclude_globs) {
            if compiled.matches(&path_str) {
                return true;
            }

            // Also check as substring for patterns like "**/target/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let analyzer = Analyzer::builder()
            .root(".")
            .exclude("**/target/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.root().is_absolute());
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = Analyzer::builder()
            .root(".")
            .exclude("**/target/**")
            .exclude("**/node_modules/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.should_exclude(Path::new("/foo/target/debug/main.rs")));
        assert!(analyzer.should_exclude(Path::new("/foo/node_modules/lib/index.js")));
        assert!(!analyzer.should_exclude(Path::new("/foo/src/lib.rs")));
    }

    #[test]
    fn invalid_exclude_pattern_fails_build() {
        let result = Analyzer::builder().root(".").exclude("[").build();
        assert!(matches!(result, Err(AnalyzerError::Glob(_))));
    }

    #[test]
    fn discovery_filters_by_extension_and_exclude() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("a.ts"), "{}\n").expect("write");
        std::fs::write(tmp.path().join("b.md"), "# doc\n").expect("write");
        std::fs::create_dir(tmp.path().join("vendor")).expect("mkdir");
        std::fs::write(tmp.path().join("vendor/c.ts"), "{}\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .build()
            .expect("Failed to build analyzer");

        let files = analyzer.discover_files();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.ts"));
    }

    #[test]
    fn extension_filter_uses_config() {
        let mut config = Config::default();
        config.analyzer.extensions = vec!["ts".to_string()];
        let analyzer = Analyzer::builder()
            .root(".")
            .config(config)
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.has_lintable_extension(Path::new("a.ts")));
        assert!(!analyzer.has_lintable_extension(Path::new("a.rs")));
        assert!(!analyzer.has_lintable_extension(Path::new("Makefile")));
    }
}
