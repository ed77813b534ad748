//! Trivia-preserving lexer for brace-delimited source.
//!
//! Unlike a parser-oriented tokenizer this lexer keeps every byte of the
//! input: whitespace, newlines, and comments come back as tokens of their
//! own. Layout rules need that trivia to reason about blank lines.
//!
//! The lexer is language-agnostic across the C family, Rust, JavaScript,
//! TypeScript, Go, Java, and Kotlin: it understands `//` and `/* */`
//! comments, single/double-quoted strings with backslash escapes, and
//! backtick template literals. It never fails; malformed input (an
//! unterminated string or comment) is consumed best-effort.

use crate::token::{Token, TokenKind};

/// Lexes source text into a contiguous, trivia-preserving token stream.
///
/// Guarantees:
/// - tokens are in ascending offset order and cover the input exactly;
/// - `\r\n` is a single [`TokenKind::Newline`] token;
/// - braces inside strings and comments never produce brace tokens.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }
    tokens
}

struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn next_token(&mut self) -> Option<Token> {
        let start = self.pos;
        let first = self.peek(0)?;

        let kind = match first {
            b'\r' => {
                self.pos += 1;
                // CRLF is one line terminator
                if self.peek(0) == Some(b'\n') {
                    self.pos += 1;
                }
                TokenKind::Newline
            }
            b'\n' => {
                self.pos += 1;
                TokenKind::Newline
            }
            b' ' | b'\t' | 0x0B | 0x0C => {
                while matches!(self.peek(0), Some(b' ' | b'\t' | 0x0B | 0x0C)) {
                    self.pos += 1;
                }
                TokenKind::Whitespace
            }
            b'{' => {
                self.pos += 1;
                TokenKind::OpenBrace
            }
            b'}' => {
                self.pos += 1;
                TokenKind::CloseBrace
            }
            b'/' if self.peek(1) == Some(b'/') => {
                self.pos += 2;
                while !matches!(self.peek(0), None | Some(b'\n' | b'\r')) {
                    self.pos += 1;
                }
                TokenKind::LineComment
            }
            b'/' if self.peek(1) == Some(b'*') => {
                self.pos += 2;
                loop {
                    match self.peek(0) {
                        None => break,
                        Some(b'*') if self.peek(1) == Some(b'/') => {
                            self.pos += 2;
                            break;
                        }
                        Some(_) => self.pos += 1,
                    }
                }
                TokenKind::BlockComment
            }
            // A lone apostrophe (Rust lifetime, contraction in a word) is
            // ordinary content; only a pair on the same line is a literal.
            b'\'' if !self.closes_on_line(b'\'') => {
                self.pos += 1;
                TokenKind::Text
            }
            quote @ (b'"' | b'\'') => {
                self.quoted(quote, false);
                TokenKind::Str
            }
            b'`' => {
                self.quoted(b'`', true);
                TokenKind::Str
            }
            _ => {
                self.text_run();
                TokenKind::Text
            }
        };

        Some(Token::new(kind, start, self.pos - start))
    }

    /// Looks ahead for a closing quote before the line terminator,
    /// honoring backslash escapes, without consuming anything.
    fn closes_on_line(&self, quote: u8) -> bool {
        let mut i = self.pos + 1;
        loop {
            match self.bytes.get(i) {
                None | Some(b'\n' | b'\r') => return false,
                Some(b'\\') => match self.bytes.get(i + 1) {
                    None | Some(b'\n' | b'\r') => return false,
                    Some(_) => i += 2,
                },
                Some(&c) if c == quote => return true,
                Some(_) => i += 1,
            }
        }
    }

    /// Consumes a quoted literal starting at the opening quote.
    ///
    /// Single- and double-quoted strings stop at an unescaped line
    /// terminator when unterminated; template literals (`multiline`) may
    /// span lines and run to end of input when unterminated.
    fn quoted(&mut self, quote: u8, multiline: bool) {
        self.pos += 1;
        loop {
            match self.peek(0) {
                None => break,
                Some(b'\\') if self.peek(1).is_some() => self.pos += 2,
                Some(c) if c == quote => {
                    self.pos += 1;
                    break;
                }
                Some(b'\n' | b'\r') if !multiline => break,
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Consumes a maximal run of ordinary content.
    ///
    /// Stops before any byte that could start another token kind. All stop
    /// bytes are ASCII, so the run always ends on a UTF-8 boundary.
    fn text_run(&mut self) {
        self.pos += 1;
        while let Some(c) = self.peek(0) {
            match c {
                b'{' | b'}' | b'\n' | b'\r' | b' ' | b'\t' | 0x0B | 0x0C | b'/' | b'"'
                | b'\'' | b'`' => break,
                _ => self.pos += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokens_cover_input_contiguously() {
        let source = "fn main() {\n    let x = \"{\"; // brace in string\n}\n";
        let tokens = lex(source);
        let mut expected_offset = 0;
        for token in &tokens {
            assert_eq!(token.offset, expected_offset);
            expected_offset = token.end();
        }
        assert_eq!(expected_offset, source.len());
    }

    #[test]
    fn crlf_is_one_newline_token() {
        let tokens = lex("{\r\n\r\n}");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::OpenBrace,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::CloseBrace,
            ]
        );
        assert_eq!(tokens[1].len, 2);
    }

    #[test]
    fn lone_cr_is_a_newline_token() {
        assert_eq!(
            kinds("{\r}"),
            vec![
                TokenKind::OpenBrace,
                TokenKind::Newline,
                TokenKind::CloseBrace
            ]
        );
    }

    #[test]
    fn whitespace_run_is_one_token() {
        let tokens = lex("a  \t b");
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[1].len, 4);
    }

    #[test]
    fn line_comment_excludes_terminator() {
        let tokens = lex("// hello\n");
        assert_eq!(tokens[0].kind, TokenKind::LineComment);
        assert_eq!(tokens[0].len, 8);
        assert_eq!(tokens[1].kind, TokenKind::Newline);
    }

    #[test]
    fn block_comment_spans_lines_as_one_token() {
        let tokens = lex("/* a\nb */x");
        assert_eq!(tokens[0].kind, TokenKind::BlockComment);
        assert_eq!(tokens[1].kind, TokenKind::Text);
    }

    #[test]
    fn unterminated_block_comment_runs_to_eof() {
        let tokens = lex("/* never closed");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::BlockComment);
    }

    #[test]
    fn braces_in_strings_are_not_brace_tokens() {
        assert!(!kinds("\"{ }\"").contains(&TokenKind::OpenBrace));
        assert!(!kinds("'{'").contains(&TokenKind::OpenBrace));
        assert!(!kinds("`{\n}`").contains(&TokenKind::OpenBrace));
    }

    #[test]
    fn lone_apostrophe_is_text_not_string_start() {
        // Rust lifetime syntax: no closing quote on the line
        let tokens = lex("impl<'a> Foo {");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::OpenBrace));
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Str));
    }

    #[test]
    fn multiple_lifetimes_keep_brace_visible() {
        let tokens = lex("impl<'a, 'b> Handler<'a, 'b> {\n");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::OpenBrace));
    }

    #[test]
    fn char_literal_is_one_string_token() {
        let tokens = lex("let c = 'x';");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Str));
    }

    #[test]
    fn escaped_apostrophe_char_literal_closes() {
        let tokens = lex(r"let c = '\'';");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Str));
        assert!(tokens.iter().all(|t| t.kind != TokenKind::OpenBrace));
    }

    #[test]
    fn escaped_quote_does_not_close_string() {
        let tokens = lex(r#""a\"b""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Str);
    }

    #[test]
    fn unterminated_string_stops_at_line_end() {
        let tokens = lex("\"oops\n{");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[1].kind, TokenKind::Newline);
        assert_eq!(tokens[2].kind, TokenKind::OpenBrace);
    }

    #[test]
    fn template_literal_spans_lines() {
        let tokens = lex("`a\nb`x");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[1].kind, TokenKind::Text);
    }

    #[test]
    fn division_is_plain_text() {
        let kinds = kinds("a / b");
        assert!(!kinds.contains(&TokenKind::LineComment));
        assert!(!kinds.contains(&TokenKind::BlockComment));
    }

    #[test]
    fn non_ascii_content_lexes_as_text() {
        let source = "日本語 {\n}";
        let tokens = lex(source);
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text(source), "日本語");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::OpenBrace));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(lex("").is_empty());
    }
}
