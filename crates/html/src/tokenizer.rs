//! Single-pass markup scanner.
//!
//! The scan only knows two structural bytes, `<` and `>`, and an "inside a tag" flag:
//! - `<` outside a tag ends the current text run and opens a tag. Inside a tag it is dropped.
//! - `>` always ends the current run as a tag token, even when no `<` opened it.
//! - A tag still open at end of input is discarded.
//!
//! No entity, comment or rawtext handling happens here; `&amp;` stays literal text and
//! `<!-- a > b -->` closes at the first `>`.
use crate::types::Token;
use memchr::memchr2;
use std::borrow::Cow;

/// Lazy tokenizer over a complete document string.
///
/// The tree builder pulls from this iterator directly, so no token list is ever buffered
/// during [`crate::parse`].
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    in_tag: bool,
    buffer: Cow<'a, str>,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            in_tag: false,
            buffer: Cow::Borrowed(""),
            done: false,
        }
    }

    // `<` and `>` are ASCII, so every cut made here lands on a UTF-8 boundary.
    fn append(&mut self, start: usize, end: usize) {
        debug_assert!(self.input.is_char_boundary(start));
        debug_assert!(self.input.is_char_boundary(end));
        if start == end {
            return;
        }
        let run = &self.input[start..end];
        if self.buffer.is_empty() {
            self.buffer = Cow::Borrowed(run);
        } else {
            // Only reachable when a `<` was swallowed inside a tag.
            self.buffer.to_mut().push_str(run);
        }
    }

    fn take_buffer(&mut self) -> Cow<'a, str> {
        std::mem::replace(&mut self.buffer, Cow::Borrowed(""))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.done {
            return None;
        }
        let input = self.input;
        let bytes = input.as_bytes();
        loop {
            let start = self.pos;
            let Some(rel) = memchr2(b'<', b'>', &bytes[start..]) else {
                self.append(start, bytes.len());
                self.pos = bytes.len();
                self.done = true;
                if self.in_tag {
                    if !self.buffer.is_empty() {
                        log::debug!(
                            target: "html.tokenizer",
                            "dropping unterminated tag at end of input: {:?}",
                            self.buffer
                        );
                    }
                    self.buffer = Cow::Borrowed("");
                    return None;
                }
                if self.buffer.is_empty() {
                    return None;
                }
                return Some(Token::Text(self.take_buffer()));
            };

            let at = start + rel;
            self.append(start, at);
            self.pos = at + 1;

            if bytes[at] == b'>' {
                self.in_tag = false;
                return Some(Token::Tag(self.take_buffer()));
            }

            if !self.in_tag {
                self.in_tag = true;
                if !self.buffer.is_empty() {
                    return Some(Token::Text(self.take_buffer()));
                }
            }
        }
    }
}

/// Collects every token of `input`. Mostly useful for tests and debugging.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Tokenizer::new(input).collect()
}

/// Returns the text outside of tags, concatenated.
///
/// This is a flag scan, not a token pass: `<` enters a tag, `>` leaves one, and both are
/// dropped. A stray `>` keeps the text before it (`a > b` gives `a  b`), and whitespace-only
/// runs survive.
pub fn strip_tags(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    let mut pos = 0;
    while let Some(rel) = memchr2(b'<', b'>', &bytes[pos..]) {
        let at = pos + rel;
        if !in_tag {
            out.push_str(&input[pos..at]);
        }
        in_tag = bytes[at] == b'<';
        pos = at + 1;
    }
    if !in_tag {
        out.push_str(&input[pos..]);
    }
    out
}
