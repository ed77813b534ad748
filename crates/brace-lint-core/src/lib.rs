//! # brace-lint-core
//!
//! Core framework for token-level style linting of brace-delimited source.
//!
//! This crate provides the foundational types for building whitespace and
//! layout linters. It includes:
//!
//! - [`lex`] - a trivia-preserving tokenizer for brace-delimited languages
//! - [`Rule`] trait for per-file token-stream rules
//! - [`Analyzer`] for orchestrating lint execution over a directory tree
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use brace_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod lexer;
mod rule;
mod token;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{default_excludes, AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use lexer::lex;
pub use rule::{Rule, RuleBox};
pub use token::{Token, TokenKind};
pub use types::{
    Finding, LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic,
};
