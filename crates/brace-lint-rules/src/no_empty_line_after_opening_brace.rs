//! Rule to forbid an empty line directly after an opening brace.
//!
//! # Rationale
//!
//! A blank line between `{` and the first statement of a block adds
//! vertical noise without separating anything. The reported span points at
//! the blank line itself, which is where a character would be deleted to
//! fix it.
//!
//! # Detection
//!
//! The check is purely lexical: a two-cell window over the significant
//! (non-whitespace) token kinds of the stream. It fires when an `{` is
//! followed by two line terminators with nothing but horizontal whitespace
//! in between. A line containing only spaces or tabs still counts as empty
//! because whitespace tokens never advance the window.

use brace_lint_core::{
    FileContext, Finding, Location, Rule, Severity, Suggestion, Token, TokenKind, Violation,
};

/// Rule code for no-empty-line-after-opening-brace.
pub const CODE: &str = "BL001";

/// Rule name for no-empty-line-after-opening-brace.
pub const NAME: &str = "no-empty-line-after-opening-brace";

/// Failure message reported for each occurrence.
pub const FAILURE_MESSAGE: &str = "Opening brace cannot be followed by empty line";

/// Scans a token stream for opening braces followed by an empty line.
///
/// This is a single forward pass carrying explicit `(two_back, one_back)`
/// window state; whitespace tokens are tested against the live match
/// condition but never shifted into the window, so trailing spaces on a
/// blank line do not suppress a match.
///
/// For a run of three or more newlines after a brace only the first blank
/// line is reported: after the first match the window has shifted past the
/// brace, so later newline pairs no longer see `OpenBrace` two back. One
/// report per brace is the intended behavior, not a missed match.
///
/// Findings come back in ascending offset order, one per match, never
/// merged or deduplicated. The scan has no failure mode; a truncated or
/// otherwise odd stream simply yields fewer matches.
#[must_use]
pub fn detect(tokens: &[Token]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut two_back: Option<TokenKind> = None;
    let mut one_back: Option<TokenKind> = None;

    for token in tokens {
        if two_back == Some(TokenKind::OpenBrace)
            && one_back == Some(TokenKind::Newline)
            && token.kind == TokenKind::Newline
        {
            findings.push(Finding::new(token.offset, 1, FAILURE_MESSAGE));
        }

        if token.kind.is_significant() {
            two_back = one_back;
            one_back = Some(token.kind);
        }
    }

    findings
}

/// Forbids an empty line directly after an opening brace.
#[derive(Debug, Clone)]
pub struct NoEmptyLineAfterOpeningBrace {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoEmptyLineAfterOpeningBrace {
    fn default() -> Self {
        Self::new()
    }
}

impl NoEmptyLineAfterOpeningBrace {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoEmptyLineAfterOpeningBrace {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids an empty line directly after an opening brace"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, tokens: &[Token]) -> Vec<Violation> {
        detect(tokens)
            .into_iter()
            .map(|finding| {
                let (line, column) = ctx.line_col_for(finding.offset);
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    Location::new(ctx.relative_path.clone(), line, column)
                        .with_span(finding.offset, finding.length),
                    finding.message,
                )
                .with_suggestion(Suggestion::new(
                    "Remove the empty line after the opening brace",
                ))
            })
            .collect()
    }
}
