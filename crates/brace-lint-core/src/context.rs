//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
///
/// Carries the source text alongside path information so rules can turn
/// byte offsets from token-level findings into reportable locations.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Converts a byte offset into a 1-indexed (line, column) pair.
    ///
    /// Offsets past the end of the content resolve to the position just
    /// after the last character.
    #[must_use]
    pub fn line_col_for(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let before = &self.content.as_bytes()[..offset];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |p| p + 1);
        let column = self.content[line_start..offset].chars().count() + 1;
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(content: &str) -> FileContext<'_> {
        FileContext {
            path: Path::new("/project/src/app.ts"),
            content,
            relative_path: PathBuf::from("src/app.ts"),
        }
    }

    #[test]
    fn relative_path_strips_root() {
        let content = "";
        let context = FileContext::new(
            Path::new("/project/src/app.ts"),
            content,
            Path::new("/project"),
        );
        assert_eq!(context.relative_path, PathBuf::from("src/app.ts"));
    }

    #[test]
    fn relative_path_falls_back_to_full_path() {
        let content = "";
        let context = FileContext::new(
            Path::new("/elsewhere/app.ts"),
            content,
            Path::new("/project"),
        );
        assert_eq!(context.relative_path, PathBuf::from("/elsewhere/app.ts"));
    }

    #[test]
    fn line_col_at_start() {
        assert_eq!(ctx("abc").line_col_for(0), (1, 1));
    }

    #[test]
    fn line_col_after_newline() {
        let c = ctx("ab\ncd\nef");
        assert_eq!(c.line_col_for(3), (2, 1));
        assert_eq!(c.line_col_for(4), (2, 2));
        assert_eq!(c.line_col_for(6), (3, 1));
    }

    #[test]
    fn line_col_on_blank_line() {
        // "{\n\n}" - the second newline starts line 2
        let c = ctx("{\n\n}");
        assert_eq!(c.line_col_for(2), (2, 1));
    }

    #[test]
    fn line_col_counts_chars_not_bytes() {
        let c = ctx("日本\nx");
        assert_eq!(c.line_col_for(6), (1, 3));
    }

    #[test]
    fn line_col_clamps_past_end() {
        assert_eq!(ctx("ab").line_col_for(99), (1, 3));
    }
}
