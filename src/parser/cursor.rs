//! Position-tracked reader over a puzzle file's bytes.
//!
//! Every `match`/`read` operation either succeeds and advances, or fails and
//! leaves the cursor where it was. Failures are `false`/`None`; turning them
//! into errors is up to the dialect reader that knows what it expected.
//!
//! The cursor owns its buffer. [`TextCursor::take_section`] hands out a copy,
//! so a section cursor can splice properties out of its own bytes without
//! disturbing the file cursor it came from.

use super::span::{offset_to_location, Location};

/// A mutable view over a byte buffer with a read position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCursor {
    data: Vec<u8>,
    pos: usize,
}

impl TextCursor {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    /// Whether the cursor has consumed the whole buffer.
    pub fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Whether at least `count` unread bytes remain.
    pub fn bytes_available(&self, count: usize) -> bool {
        self.pos + count <= self.data.len()
    }

    /// The unread part of the buffer.
    pub fn remaining(&self) -> &[u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    /// The whole buffer, including bytes already read.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Line and column of the read position.
    pub fn location(&self) -> Location {
        offset_to_location(&self.data, self.pos)
    }

    /// Consume `literal` if the unread bytes start with it exactly.
    pub fn match_literal(&mut self, literal: &str) -> bool {
        if self.remaining().starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consume optional spaces or tabs followed by `\n` or `\r\n`.
    ///
    /// Returns false, without advancing, if the line has other content or
    /// the buffer is exhausted.
    pub fn skip_line(&mut self) -> bool {
        let rest = self.remaining();
        let indent = rest
            .iter()
            .take_while(|&&b| b == b' ' || b == b'\t')
            .count();
        let terminator = match &rest[indent..] {
            [b'\n', ..] => 1,
            [b'\r', b'\n', ..] => 2,
            _ => return false,
        };
        self.pos += indent + terminator;
        true
    }

    /// Skip any number of blank lines, returning how many were skipped.
    pub fn skip_blank_lines(&mut self) -> usize {
        let mut count = 0;
        while self.skip_line() {
            count += 1;
        }
        count
    }

    /// Read a JSON string literal starting at the cursor.
    ///
    /// The returned text includes the surrounding quotes; see [`unquote`]
    /// for the decoded value.
    pub fn read_quoted_string(&mut self) -> Option<String> {
        let len = quoted_len(self.remaining())?;
        let text = String::from_utf8_lossy(&self.remaining()[..len]).into_owned();
        self.pos += len;
        Some(text)
    }

    /// Read one or more ASCII digits.
    pub fn read_digits(&mut self) -> Option<String> {
        let len = self
            .remaining()
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return None;
        }
        let digits = String::from_utf8_lossy(&self.remaining()[..len]).into_owned();
        self.pos += len;
        Some(digits)
    }

    /// Read the rest of the current line and consume its terminator.
    pub fn read_line(&mut self) -> String {
        let rest = self.remaining();
        let (line, consumed) = match rest.iter().position(|&b| b == b'\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let text = String::from_utf8_lossy(line).into_owned();
        self.pos += consumed;
        text
    }

    /// Consume everything up to and including the next blank line.
    ///
    /// Blank means empty or only spaces and tabs.
    ///
    /// Without a blank line the rest of the buffer is taken. The result is an
    /// owned copy, independent of this cursor's buffer.
    pub fn take_section(&mut self) -> Vec<u8> {
        let rest = self.remaining();
        let end = find_section_end(rest).unwrap_or(rest.len());
        let section = rest[..end].to_vec();
        self.pos += end;
        section
    }

    /// Find a `<name>: <value>` line in the unread buffer, return its value
    /// and remove the whole line from the buffer.
    ///
    /// The line must begin at a line boundary. The cursor position counts as
    /// one, so a property on the first unread line is found without a
    /// preceding newline. Bytes before the cursor and
    /// the cursor position itself are untouched, so later properties keep
    /// their content. Returns `None` and leaves the buffer alone when there
    /// is no such line.
    pub fn extract_property(&mut self, name: &str) -> Option<String> {
        let key = format!("{}: ", name);
        let line_start = line_starts(&self.data, self.pos)
            .find(|&start| self.data[start..].starts_with(key.as_bytes()))?;

        let value_start = line_start + key.len();
        let (value_end, line_end) = match self.data[value_start..]
            .iter()
            .position(|&b| b == b'\n')
        {
            Some(newline) => (value_start + newline, value_start + newline + 1),
            None => (self.data.len(), self.data.len()),
        };

        let value = &self.data[value_start..value_end];
        let value = value.strip_suffix(b"\r").unwrap_or(value);
        let value = String::from_utf8_lossy(value).into_owned();

        self.data.drain(line_start..line_end);
        Some(value)
    }
}

/// Decode a quoted string returned by [`TextCursor::read_quoted_string`].
pub fn unquote(quoted: &str) -> Option<String> {
    serde_json::from_str(quoted).ok()
}

/// Length of the JSON string literal at the start of `s`, quotes included.
fn quoted_len(s: &[u8]) -> Option<usize> {
    if s.first() != Some(&b'"') {
        return None;
    }

    let mut i = 1;
    while i < s.len() {
        match s[i] {
            b'"' => return Some(i + 1),
            b'\\' => match s.get(i + 1)? {
                b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => i += 2,
                b'u' => {
                    let hex = s.get(i + 2..i + 6)?;
                    if !hex.iter().all(u8::is_ascii_hexdigit) {
                        return None;
                    }
                    i += 6;
                }
                _ => return None,
            },
            // Control characters, including raw newlines, end the match.
            c if c < 0x20 => return None,
            _ => i += 1,
        }
    }

    None
}

/// End offset (exclusive) of the first blank line in `s`.
///
/// A line holding only spaces or tabs is blank, as in [`TextCursor::skip_line`].
fn find_section_end(s: &[u8]) -> Option<usize> {
    s.iter().enumerate().find_map(|(i, &b)| {
        if b != b'\n' {
            return None;
        }
        let line = &s[i + 1..];
        let indent = line
            .iter()
            .take_while(|&&b| b == b' ' || b == b'\t')
            .count();
        match &line[indent..] {
            [b'\n', ..] => Some(i + 1 + indent + 1),
            [b'\r', b'\n', ..] => Some(i + 1 + indent + 2),
            _ => None,
        }
    })
}

/// Offsets at or after `from` where a line begins.
fn line_starts(data: &[u8], from: usize) -> impl Iterator<Item = usize> + '_ {
    let from = from.min(data.len());
    let first = (from == 0 || data[from - 1] == b'\n').then_some(from);

    first.into_iter().chain(
        data[from..]
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == b'\n')
            .map(move |(i, _)| from + i + 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_at_end() {
        let mut cursor = TextCursor::new("ab");
        assert!(!cursor.at_end());

        assert!(cursor.match_literal("ab"));
        assert!(cursor.at_end());
        assert!(TextCursor::new("").at_end());
    }

    #[test]
    fn test_match_literal_advances_on_success() {
        let mut cursor = TextCursor::new("; Hexobans\nrest");

        assert!(cursor.match_literal("; Hexobans\n"));
        assert_eq!(cursor.remaining(), b"rest");
    }

    #[test]
    fn test_match_literal_is_exact() {
        let mut cursor = TextCursor::new("; hexobans");

        assert!(!cursor.match_literal("; Hexobans"));
        assert!(!cursor.match_literal("; hexobans and more"));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_line() {
        let mut cursor = TextCursor::new("  \t\n\r\nx");

        assert!(cursor.skip_line());
        assert!(cursor.skip_line());
        assert!(!cursor.skip_line());
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn test_skip_line_rejects_content_and_eof() {
        let mut cursor = TextCursor::new("  # #\n");
        assert!(!cursor.skip_line());
        assert_eq!(cursor.position(), 0);

        let mut empty = TextCursor::new("   ");
        assert!(!empty.skip_line());
        assert_eq!(empty.position(), 0);
    }

    #[test]
    fn test_skip_blank_lines() {
        let mut cursor = TextCursor::new("\n\n \nx");

        assert_eq!(cursor.skip_blank_lines(), 3);
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn test_read_quoted_string() {
        let mut cursor = TextCursor::new("\"dws001\"\n    # # #");

        assert_eq!(cursor.read_quoted_string().as_deref(), Some("\"dws001\""));
        assert_eq!(cursor.peek(), Some(b'\n'));
    }

    #[test]
    fn test_read_quoted_string_with_escapes() {
        let mut cursor = TextCursor::new(r#""a \"b\" é\\" tail"#);

        let quoted = cursor.read_quoted_string().unwrap();
        assert_eq!(quoted, r#""a \"b\" é\\""#);
        assert_eq!(unquote(&quoted).as_deref(), Some("a \"b\" é\\"));
        assert_eq!(cursor.remaining(), b" tail");
    }

    #[test]
    fn test_read_quoted_string_failures_do_not_advance() {
        for text in ["dws001", "\"unterminated", "\"line\nbreak\"", "\"bad \\x escape\""] {
            let mut cursor = TextCursor::new(text);
            assert_eq!(cursor.read_quoted_string(), None, "{:?}", text);
            assert_eq!(cursor.position(), 0);
        }
    }

    #[test]
    fn test_read_digits() {
        let mut cursor = TextCursor::new("042\n");

        assert_eq!(cursor.read_digits().as_deref(), Some("042"));
        assert_eq!(cursor.read_digits(), None);
        assert_eq!(cursor.peek(), Some(b'\n'));
    }

    #[test]
    fn test_read_line() {
        let mut cursor = TextCursor::new("first\r\nsecond");

        assert_eq!(cursor.read_line(), "first");
        assert_eq!(cursor.read_line(), "second");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_take_section_stops_after_blank_line() {
        let mut cursor = TextCursor::new(" # #\n#   #\n\n # #\n");

        assert_eq!(cursor.take_section(), b" # #\n#   #\n\n".to_vec());
        assert_eq!(cursor.take_section(), b" # #\n".to_vec());
        assert!(cursor.at_end());
        assert_eq!(cursor.take_section(), Vec::<u8>::new());
    }

    #[test]
    fn test_take_section_crlf_blank_line() {
        let mut cursor = TextCursor::new(" # #\r\n\r\nnext");

        assert_eq!(cursor.take_section(), b" # #\r\n\r\n".to_vec());
        assert_eq!(cursor.remaining(), b"next");
    }

    #[test]
    fn test_take_section_whitespace_only_line() {
        let mut cursor = TextCursor::new(" # #\n   \n # #\n \t\r\nlast\n");

        assert_eq!(cursor.take_section(), b" # #\n   \n".to_vec());
        assert_eq!(cursor.take_section(), b" # #\n \t\r\n".to_vec());
        assert_eq!(cursor.remaining(), b"last\n");
    }

    #[test]
    fn test_take_section_is_independent_copy() {
        let mut outer = TextCursor::new("grid\nTitle: A\n\nmore\nTitle: B\n");
        let mut section = TextCursor::new(outer.take_section());

        assert_eq!(section.extract_property("Title").as_deref(), Some("A"));
        assert_eq!(outer.remaining(), b"more\nTitle: B\n");
    }

    #[test]
    fn test_extract_property_splices_line() {
        let mut cursor = TextCursor::new("  # #\n #   #\nAuthor: X\nSource: Y\n");

        assert_eq!(cursor.extract_property("Author").as_deref(), Some("X"));
        assert_eq!(cursor.as_bytes(), b"  # #\n #   #\nSource: Y\n");
        assert_eq!(cursor.extract_property("Source").as_deref(), Some("Y"));
        assert_eq!(cursor.as_bytes(), b"  # #\n #   #\n");
    }

    #[test]
    fn test_extract_property_missing_leaves_buffer() {
        let mut cursor = TextCursor::new("  # #\nTitle: A\n");

        assert_eq!(cursor.extract_property("Author"), None);
        assert_eq!(cursor.as_bytes(), b"  # #\nTitle: A\n");
    }

    #[test]
    fn test_extract_property_does_not_disturb_others() {
        let mut cursor = TextCursor::new("# #\nDifficulty: 6\nAuthor: A\nHint: x\n");
        let before = cursor.as_bytes().to_vec();
        let difficulty_at = find(&before, b"Difficulty: 6\n");

        assert_eq!(cursor.extract_property("Author").as_deref(), Some("A"));

        let after = cursor.as_bytes();
        assert_eq!(find(after, b"Difficulty: 6\n"), difficulty_at);
        assert_eq!(cursor.extract_property("Difficulty").as_deref(), Some("6"));
        assert_eq!(cursor.as_bytes(), b"# #\nHint: x\n");
    }

    #[test]
    fn test_extract_property_at_buffer_start() {
        let mut cursor = TextCursor::new("Author: Aymeric du Peloux\n\n; HEXOCET 01\n");

        assert_eq!(
            cursor.extract_property("Author").as_deref(),
            Some("Aymeric du Peloux")
        );
        assert_eq!(cursor.remaining(), b"\n; HEXOCET 01\n");
    }

    #[test]
    fn test_extract_property_requires_line_start() {
        let mut cursor = TextCursor::new("; Title: nope\nxTitle: nope\n");

        assert_eq!(cursor.extract_property("Title"), None);
    }

    #[test]
    fn test_extract_property_last_line_without_newline() {
        let mut cursor = TextCursor::new("# #\nDifficulty: 8");

        assert_eq!(cursor.extract_property("Difficulty").as_deref(), Some("8"));
        assert_eq!(cursor.as_bytes(), b"# #\n");
    }

    #[test]
    fn test_extract_property_keeps_read_bytes() {
        let mut cursor = TextCursor::new("skip\nTitle: A\nrest");
        assert!(cursor.match_literal("skip\n"));

        assert_eq!(cursor.extract_property("Title").as_deref(), Some("A"));
        assert_eq!(cursor.as_bytes(), b"skip\nrest");
        assert_eq!(cursor.remaining(), b"rest");
    }

    #[test]
    fn test_location() {
        let mut cursor = TextCursor::new("ab\ncd");
        assert!(cursor.match_literal("ab\nc"));

        assert_eq!(cursor.location(), Location::new(4, 2, 2));
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }
}
