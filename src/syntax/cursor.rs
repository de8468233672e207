//! Scalar cursor with UTF-16-compatible position tracking.

use crate::ast::Position;
use crate::syntax::classify::is_white_space;

/// Cursor over one message.
///
/// Internally the cursor indexes the message by byte; the public
/// [`Position`] counts UTF-16 code units so offsets line up with
/// JavaScript tooling.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    message: &'a str,
    byte_offset: usize,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(message: &'a str) -> Self {
        Self {
            message,
            byte_offset: 0,
            position: Position::start(),
        }
    }

    pub(crate) fn message(&self) -> &'a str {
        self.message
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.byte_offset >= self.message.len()
    }

    /// Unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.message[self.byte_offset..]
    }

    /// Input between `start` (a byte offset) and the cursor.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.message[start..self.byte_offset]
    }

    /// Scalar under the cursor.
    pub(crate) fn char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Scalar after the one under the cursor.
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next()?;
        chars.next()
    }

    /// Advances past one scalar. No-op at end of input.
    pub(crate) fn bump(&mut self) {
        let Some(ch) = self.char() else {
            return;
        };
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        self.position.offset += ch.len_utf16();
        self.byte_offset += ch.len_utf8();
    }

    /// Consumes `prefix` if the input continues with it.
    pub(crate) fn bump_if(&mut self, prefix: &str) -> bool {
        if !self.rest().starts_with(prefix) {
            return false;
        }
        self.bump_to(self.byte_offset + prefix.len());
        true
    }

    /// Advances to the next occurrence of `pattern`, or to the end of input
    /// if there is none. Returns whether `pattern` was found.
    pub(crate) fn bump_until(&mut self, pattern: &str) -> bool {
        match self.rest().find(pattern) {
            Some(index) => {
                self.bump_to(self.byte_offset + index);
                true
            }
            None => {
                self.bump_to(self.message.len());
                false
            }
        }
    }

    /// Advances scalar by scalar until the byte offset reaches `target`.
    pub(crate) fn bump_to(&mut self, target: usize) {
        debug_assert!(target >= self.byte_offset, "cursor cannot move backwards");
        let target = target.min(self.message.len());
        while self.byte_offset < target {
            self.bump();
        }
    }

    /// Skips pattern whitespace.
    pub(crate) fn bump_space(&mut self) {
        while self.char().is_some_and(is_white_space) {
            self.bump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplementary_scalar_advances_offset_by_two() {
        let mut cursor = Cursor::new("😀a");
        cursor.bump();
        assert_eq!(cursor.position().offset, 2);
        assert_eq!(cursor.position().column, 2);
        assert_eq!(cursor.char(), Some('a'));
    }

    #[test]
    fn test_newline_resets_column() {
        let mut cursor = Cursor::new("a\nb");
        cursor.bump_to(2);
        let position = cursor.position();
        assert_eq!((position.offset, position.line, position.column), (2, 2, 1));
    }

    #[test]
    fn test_bump_if_and_until() {
        let mut cursor = Cursor::new("</b> tail");
        assert!(!cursor.bump_if("<b"));
        assert!(cursor.bump_if("</"));
        assert!(cursor.bump_until(">"));
        assert_eq!(cursor.char(), Some('>'));
        assert!(!cursor.bump_until("'"));
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_peek_does_not_advance() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.char(), Some('a'));
        assert_eq!(cursor.position(), Position::start());
    }
}
