//! Rule trait for defining token-level lint rules.

use crate::context::FileContext;
use crate::token::Token;
use crate::types::{Severity, Violation};

/// A per-file lint rule over a trivia-preserving token stream.
///
/// Rules receive the complete, in-order tokenization of one source file,
/// including whitespace and newline trivia. A tokenization that discards
/// trivia cannot be used; layout rules depend on it.
///
/// Implementations should keep the detection logic in a pure function over
/// the token slice and use `check` only to adapt its output into
/// [`Violation`]s, so the detector stays trivially testable in isolation.
///
/// # Example
///
/// ```ignore
/// use brace_lint_core::{FileContext, Rule, Severity, Token, Violation};
///
/// pub struct NoTrailingBlank;
///
/// impl Rule for NoTrailingBlank {
///     fn name(&self) -> &'static str { "no-trailing-blank" }
///     fn code(&self) -> &'static str { "BL999" }
///
///     fn check(&self, ctx: &FileContext, tokens: &[Token]) -> Vec<Violation> {
///         detect(tokens)
///             .into_iter()
///             .map(|f| self.violation_for(ctx, f))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "BL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `tokens` - The complete token stream of the file, trivia included
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file, in source order.
    fn check(&self, ctx: &FileContext, tokens: &[Token]) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext, tokens: &[Token]) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::new(ctx.relative_path.clone(), 1, 1),
                format!("{} token(s)", tokens.len()),
            )]
        }
    }

    #[test]
    fn rule_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
    }

    #[test]
    fn rule_check_sees_tokens() {
        let rule = TestRule;
        let content = "{}";
        let ctx = FileContext::new(Path::new("a.ts"), content, Path::new("."));
        let tokens = crate::lex(content);
        let violations = rule.check(&ctx, &tokens);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "2 token(s)");
    }
}
