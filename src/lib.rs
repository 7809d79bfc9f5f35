//! psconv - Easily use pascal strings in C-family sources
//!
//! This library rewrites pascal-string markers in source text into the
//! octal length escapes a C compiler understands, in a single pass over
//! an in-memory copy of the file.
//!
//! # Features
//!
//! - **Presized markers**: `"\p...` has its `p` placeholder replaced by
//!   the 3-digit octal count of the literal's content
//! - **Unsized markers**: `"\NN...` has its handwritten digits
//!   discarded and recomputed from the actual content
//! - **Comment aware**: markers inside `//` comments (including
//!   backslash line continuations) and `/* ... */` comments are never
//!   rewritten
//! - **Byte oriented**: any encoding is processed as a plain byte
//!   stream; each byte counts as one unit of length
//!
//! # Example - Converting a buffer
//!
//! ```
//! use psconv::convert;
//!
//! let source = br#"const char *s = "\ppascal";"#.to_vec();
//! let converted = convert(source)?;
//! assert_eq!(converted, br#"const char *s = "\006pascal";"#);
//! # Ok::<(), psconv::Error>(())
//! ```
//!
//! # Example - Rewriting a file in place
//!
//! ```no_run
//! # fn main() -> psconv::Result<()> {
//! psconv::rewrite_file("strings.c")?;
//! # Ok(())
//! # }
//! ```
//!
//! The file is fully read and converted before anything is written
//! back, so a failed run leaves the on-disk contents untouched.

/// Growable source buffer with explicit insert/delete primitives
///
/// The scanner mutates the file contents exclusively through this
/// module's splice operations.
pub mod buffer;

/// Marker scanning and rewriting
///
/// This module provides the single-pass engine that recognizes the two
/// marker forms, skips comments, and splices octal length escapes into
/// the buffer.
pub mod convert;

/// Unified error types
pub mod error;

/// Fixed-width octal encoding of literal lengths
pub mod octal;

// Re-export commonly used items for convenience
pub use convert::{Converter, convert, rewrite_file};
pub use error::{Error, Result};
