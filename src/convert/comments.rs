//! Comment skipping for the marker scan.
//!
//! Only enough of the C and C++ comment grammar is recognized to keep
//! the scanner from rewriting marker text inside comments: `//` line
//! comments, including backslash line continuations, and `/* ... */`
//! block comments. Nothing here understands string literals; the
//! scanner never hands this module a position inside one that matters.

use crate::buffer::SourceBuffer;
use memchr::memmem;

/// Skip any comment starting at `pos`.
///
/// Returns the position of the first byte after the comment, or `pos`
/// unchanged when no comment starts there. The newline terminating a
/// line comment is not consumed; it is left for the caller to see.
pub fn skip_comment(buf: &SourceBuffer, pos: usize) -> usize {
    if buf.matches_at(pos, b"//") {
        skip_line_comment(buf, pos + 2)
    } else if buf.matches_at(pos, b"/*") {
        skip_block_comment(buf, pos + 2)
    } else {
        pos
    }
}

/// Scan past a line comment body, honoring backslash continuations.
///
/// A `\` arms a continuation. While armed, spaces keep it armed and a
/// newline is consumed, splicing the next line into the comment; any
/// other byte disarms it. The comment ends at the first unescaped
/// newline, which is not consumed. A comment with no newline runs to
/// the end of the buffer.
fn skip_line_comment(buf: &SourceBuffer, mut pos: usize) -> usize {
    let mut continuation = false;
    while let Some(byte) = buf.byte(pos) {
        if continuation {
            // A newline here is part of the splice and gets consumed;
            // anything but a space disarms the continuation.
            continuation = byte == b' ';
        } else {
            match byte {
                b'\\' => continuation = true,
                b'\n' => break,
                _ => {}
            }
        }
        pos += 1;
    }
    pos
}

/// Scan past a block comment body.
///
/// Returns the position just after the closing `*/`, or the end of the
/// buffer when the comment is unterminated; the unscanned remainder is
/// treated as comment text by policy.
fn skip_block_comment(buf: &SourceBuffer, pos: usize) -> usize {
    match memmem::find(&buf.as_bytes()[pos..], b"*/") {
        Some(terminator) => pos + terminator + 2,
        None => buf.len(),
    }
}
