//! Cursor-based reader for encoded containers.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a bounds-checked cursor
//! over a byte slice. It reads exactly the primitive shapes the container format is made
//! of: fixed-width little-endian values, `vbr` integers and raw byte runs. Only the test
//! decoder uses it.
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::file::parser::Parser::seek`] - Move to specific position
//! - [`crate::file::parser::Parser::advance_by`] - Move forward by specified bytes
//! - [`crate::file::parser::Parser::pos`] - Get current position
//!
//! ## Data Access Methods
//! - [`crate::file::parser::Parser::read_le`] - Read primitive types (little-endian)
//! - [`crate::file::parser::Parser::read_vbr`] - Read a `vbr` encoded integer
//! - [`crate::file::parser::Parser::read_bytes`] - Read a run of raw bytes
//!
//! # Usage Examples
//!
//! ```rust,ignore
//! use crate::file::parser::Parser;
//!
//! let data = [0xAC, 0x02, 0x10, 0x00];
//! let mut parser = Parser::new(&data);
//!
//! assert_eq!(parser.read_vbr()?, 300);
//! assert_eq!(parser.read_le::<u16>()?, 0x0010);
//! assert!(!parser.has_more_data());
//! # Ok::<(), docscope::Error>(())
//! ```

use crate::{
    file::io::{read_le_at, read_vbr_at, LeIO},
    Error::OutOfBounds,
    Result,
};

/// A bounds-checked cursor over an encoded container.
///
/// The parser maintains an internal position and refuses every read that would run past
/// the end of the data, so truncated streams surface as [`crate::Error::OutOfBounds`]
/// instead of panics.
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if there is still unread data.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Move to a specific position. Seeking to the end of the data is allowed.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `pos` lies beyond the data.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(OutOfBounds);
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by the specified number of bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        let end = self.calc_end_position(step)?;
        self.position = end;
        Ok(())
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Calculates `self.position + length`, checking for overflow and data bounds.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the result lies beyond the data.
    pub fn calc_end_position(&self, length: usize) -> Result<usize> {
        let end = self.position.checked_add(length).ok_or(OutOfBounds)?;

        if end > self.data.len() {
            return Err(OutOfBounds);
        }

        Ok(end)
    }

    /// Read a type T from the current position in little-endian and advance.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_le<T: LeIO>(&mut self) -> Result<T> {
        read_le_at(self.data, &mut self.position)
    }

    /// Read a `vbr` (unsigned LEB128) integer and advance.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] for truncated input or
    /// [`crate::Error::Malformed`] for values wider than 64 bits.
    pub fn read_vbr(&mut self) -> Result<u64> {
        read_vbr_at(self.data, &mut self.position)
    }

    /// Read a `vbr` integer that must fit into a `u32`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the value is wider than 32 bits.
    pub fn read_vbr_u32(&mut self) -> Result<u32> {
        let start = self.position;
        let value = self.read_vbr()?;
        u32::try_from(value)
            .map_err(|_| malformed_error!("vbr value {} at offset {} exceeds u32", value, start))
    }

    /// Reads a slice of bytes of the specified length from the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `length` bytes would exceed the data.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let end = self.calc_end_position(length)?;
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_read_sequence() {
        let data = [0xAC, 0x02, 0x10, 0x00, 0x61, 0x62];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_vbr().unwrap(), 300);
        assert_eq!(parser.read_le::<u16>().unwrap(), 0x0010);
        assert_eq!(parser.read_bytes(2).unwrap(), b"ab");
        assert!(!parser.has_more_data());
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn test_read_bytes_out_of_bounds() {
        let mut parser = Parser::new(&[0x01, 0x02]);
        assert!(matches!(parser.read_bytes(3), Err(Error::OutOfBounds)));
        assert_eq!(parser.pos(), 0);
    }

    #[test]
    fn test_seek_and_advance() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut parser = Parser::new(&data);

        parser.advance_by(2).unwrap();
        assert_eq!(parser.read_le::<u8>().unwrap(), 0x03);

        parser.seek(4).unwrap();
        assert!(!parser.has_more_data());
        assert!(parser.seek(5).is_err());
        assert!(parser.advance_by(1).is_err());
    }

    #[test]
    fn test_read_vbr_u32_range() {
        let mut parser = Parser::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
        assert_eq!(parser.read_vbr_u32().unwrap(), u32::MAX);

        let mut parser = Parser::new(&[0x80, 0x80, 0x80, 0x80, 0x10]);
        assert!(matches!(
            parser.read_vbr_u32(),
            Err(Error::Malformed { .. })
        ));
    }
}
