//! Rule presets for common configurations.

use brace_lint_core::{RuleBox, Severity};

use crate::no_empty_line_after_opening_brace::NoEmptyLineAfterOpeningBrace;

/// Named rule presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Default rule set with default severities.
    Recommended,
    /// All rules, violations escalated to errors.
    Strict,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
        }
    }
}

/// Returns every built-in rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(NoEmptyLineAfterOpeningBrace::new())]
}

/// Returns the recommended rule set.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Returns all rules with severity raised to error.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![Box::new(
        NoEmptyLineAfterOpeningBrace::new().severity(Severity::Error),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_matches_all() {
        assert_eq!(recommended_rules().len(), all_rules().len());
    }

    #[test]
    fn strict_raises_severity() {
        for rule in Preset::Strict.rules() {
            assert_eq!(rule.default_severity(), Severity::Error);
        }
    }
}
