//! Marker scanning and rewriting.
//!
//! This module implements the single pass that turns pascal-string
//! markers into octal length escapes. Two marker forms are recognized
//! inside double-quoted literals:
//!
//! - **Presized**: `"\p`, whose `p` placeholder is replaced with the
//!   octal-encoded count of the bytes between it and the closing `"`.
//! - **Unsized**: `"\` followed by up to three handwritten digits,
//!   which are discarded and recomputed from the actual content.
//!
//! The scanner walks the buffer once with a byte cursor, delegating to
//! the comment skipper so marker text inside `//` and `/* ... */`
//! comments is never touched. Literals with no closing `"` count to
//! the end of the buffer; that is named policy rather than an error,
//! and it is what makes a second pass over converted output a fixpoint.

mod comments;

use crate::buffer::SourceBuffer;
use crate::error::Result;
use crate::octal::encode_octal;
use comments::skip_comment;
use memchr::memchr;
use std::fs;
use std::path::Path;

/// Opens a literal whose length placeholder is the `p` byte.
const PRESIZED_MARKER: &[u8] = b"\"\\p";
/// Opens a literal carrying zero to three handwritten digits.
const UNSIZED_MARKER: &[u8] = b"\"\\";
/// Handwritten placeholders are at most this many digits.
const MAX_PLACEHOLDER_DIGITS: usize = 3;

/// Single-pass converter over one source buffer.
///
/// Owns the buffer for the duration of the scan; [`run`](Self::run)
/// consumes the converter and hands the rewritten bytes back.
pub struct Converter {
    buf: SourceBuffer,
    pos: usize,
}

impl Converter {
    /// Take ownership of a fully-read source file.
    pub fn new(source: Vec<u8>) -> Self {
        Self {
            buf: SourceBuffer::new(source),
            pos: 0,
        }
    }

    /// Run the scan to completion and return the rewritten bytes.
    pub fn run(mut self) -> Result<Vec<u8>> {
        while self.pos < self.buf.len() {
            let after_comment = skip_comment(&self.buf, self.pos);
            if after_comment != self.pos {
                // Re-examine the position after the comment fresh, so
                // adjacent comments are each skipped in turn.
                self.pos = after_comment;
                continue;
            }

            if self.buf.matches_at(self.pos, PRESIZED_MARKER) {
                self.rewrite_presized()?;
            } else if self.buf.matches_at(self.pos, UNSIZED_MARKER) {
                self.rewrite_unsized()?;
            }

            self.pos += 1;
        }
        Ok(self.buf.into_bytes())
    }

    /// Rewrite a `"\p` marker in place.
    ///
    /// The content length is the byte count from just past the marker
    /// to the closing `"`. A zero count means the literal is empty and
    /// the marker survives verbatim; there is nothing to prefix.
    fn rewrite_presized(&mut self) -> Result<()> {
        let content_start = self.pos + PRESIZED_MARKER.len();
        let count = self.count_to_quote(content_start);

        // Land on the placeholder byte itself.
        self.pos = content_start - 1;
        if count > 0 {
            self.buf.delete_range(self.pos, 1);
            self.buf.insert_at(self.pos, &encode_octal(count))?;
        }
        Ok(())
    }

    /// Rewrite a `"\` marker, discarding any handwritten digits.
    ///
    /// When the byte after the digits is the closing `"`, the literal
    /// holds nothing but the placeholder and is left alone. Otherwise
    /// the digits are deleted and the recomputed escape spliced in at
    /// the same position.
    fn rewrite_unsized(&mut self) -> Result<()> {
        self.pos += UNSIZED_MARKER.len();
        let digits = self.count_placeholder_digits(self.pos);

        if self.buf.byte(self.pos + digits) == Some(b'"') {
            return Ok(());
        }

        self.buf.delete_range(self.pos, digits);
        let count = self.count_to_quote(self.pos);
        self.buf.insert_at(self.pos, &encode_octal(count))?;
        Ok(())
    }

    /// Count the bytes from `start` up to the closing `"`, or to the
    /// end of the buffer when the literal is unterminated.
    fn count_to_quote(&self, start: usize) -> usize {
        let tail = &self.buf.as_bytes()[start..];
        memchr(b'"', tail).unwrap_or(tail.len())
    }

    /// Count handwritten placeholder digits at `start`, capped at
    /// three.
    ///
    /// The accepted range is the full decimal `'0'..='9'`, matching the
    /// observed behavior this tool preserves: `8` and `9` count as
    /// placeholder digits even though emitted escapes are octal.
    fn count_placeholder_digits(&self, start: usize) -> usize {
        let mut digits = 0;
        while digits < MAX_PLACEHOLDER_DIGITS {
            match self.buf.byte(start + digits) {
                Some(byte) if byte.is_ascii_digit() => digits += 1,
                _ => break,
            }
        }
        digits
    }
}

/// Convert an in-memory source, returning the rewritten bytes.
///
/// # Examples
///
/// ```
/// let converted = psconv::convert(br#"char *s = "\pAB";"#.to_vec())?;
/// assert_eq!(converted, br#"char *s = "\002AB";"#);
/// # Ok::<(), psconv::Error>(())
/// ```
pub fn convert(source: Vec<u8>) -> Result<Vec<u8>> {
    Converter::new(source).run()
}

/// Rewrite a source file in place.
///
/// The file is fully read and converted before anything is written
/// back, so a conversion failure leaves the on-disk contents exactly
/// as they were.
pub fn rewrite_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let converted = convert(fs::read(path)?)?;
    fs::write(path, converted)?;
    Ok(())
}
