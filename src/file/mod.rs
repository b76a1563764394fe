//! Byte-level building blocks shared by the writer and its test decoder.
//!
//! # Key Components
//!
//! - [`crate::file::io`] - Little-endian fixed-width access and `vbr` (LEB128) integers
//! - `crate::file::parser::Parser` - Cursor over an encoded container, used by the
//!   conforming decoder that backs the round-trip tests
//!
//! The writer never reads its own output, so the cursor is only compiled for tests.

pub(crate) mod io;

#[cfg(test)]
pub(crate) mod parser;
