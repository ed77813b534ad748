//! # brace-lint-rules
//!
//! Built-in lint rules for brace-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | BL001 | `no-empty-line-after-opening-brace` | Forbids an empty line directly after an opening brace |
//!
//! ## Usage
//!
//! ```ignore
//! use brace_lint_core::Analyzer;
//! use brace_lint_rules::NoEmptyLineAfterOpeningBrace;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(NoEmptyLineAfterOpeningBrace::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod presets;

pub mod no_empty_line_after_opening_brace;

pub use no_empty_line_after_opening_brace::NoEmptyLineAfterOpeningBrace;
pub use presets::{all_rules, recommended_rules, strict_rules, Preset};

/// Re-export core types for convenience.
pub use brace_lint_core::{Rule, Severity, Violation};
