//! Token model for trivia-preserving lexing.

/// Classification of a lexical token.
///
/// The set is deliberately coarse: rules that scan raw token streams only
/// need to tell braces, newlines, whitespace, and "everything else" apart.
/// Comments and string literals get their own kinds so that braces and
/// newlines inside them never leak into the stream as structural tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Opening brace `{`.
    OpenBrace,
    /// Closing brace `}`.
    CloseBrace,
    /// A single line terminator (`\n`, `\r`, or `\r\n` as one token).
    Newline,
    /// A run of horizontal whitespace (spaces, tabs).
    Whitespace,
    /// A `// ...` comment, up to but not including the line terminator.
    LineComment,
    /// A `/* ... */` comment, possibly spanning multiple lines.
    BlockComment,
    /// A string literal (`"..."`, `'...'`, or a multi-line `` `...` ``).
    Str,
    /// Anything else: identifiers, keywords, numbers, operators.
    Text,
}

impl TokenKind {
    /// Returns `true` for tokens that advance a rule's token window.
    ///
    /// Only horizontal whitespace is transparent; newlines and comments are
    /// significant because line-layout rules depend on them.
    #[must_use]
    pub fn is_significant(self) -> bool {
        self != Self::Whitespace
    }
}

/// A positioned lexical token.
///
/// Tokens carry byte offsets into the source text they were lexed from.
/// A token stream produced by [`crate::lex`] is contiguous: each token
/// starts where the previous one ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Kind of this token.
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub offset: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, offset: usize, len: usize) -> Self {
        Self { kind, offset, len }
    }

    /// Byte offset one past the last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Slices this token's text out of the source it was lexed from.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.offset..self.end()]
    }
}
