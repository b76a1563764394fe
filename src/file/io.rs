//! Low-level byte order and variable-length integer utilities for the container format.
//!
//! This module provides the endian-aware, bounds-checked primitives every other layer of
//! the crate is built on: fixed-width little-endian reads and writes at an offset, and the
//! LEB128 style variable bit-rate (`vbr`) encoding used for abbreviation codes, block ids,
//! lengths and most record operands.
//!
//! # Key Components
//!
//! ## Core Trait
//! - [`crate::file::io::LeIO`] - Conversion between primitive integers and little-endian bytes
//!
//! ## Fixed-Width Functions
//! - [`crate::file::io::read_le`] - Read a value from the start of a buffer
//! - [`crate::file::io::read_le_at`] - Read a value at an offset with auto-advance
//! - [`crate::file::io::write_le_at`] - Write a value at an offset with auto-advance
//!
//! ## Variable-Length Functions
//! - [`crate::file::io::write_vbr`] - Append an unsigned LEB128 value to a buffer
//! - [`crate::file::io::read_vbr_at`] - Read an unsigned LEB128 value at an offset
//! - [`crate::file::io::vbr_size`] - Encoded size of a value in bytes
//! - [`crate::file::io::zigzag_encode`] / [`crate::file::io::zigzag_decode`] - Signed mapping
//!
//! # Examples
//!
//! ```rust,ignore
//! use docscope::file::io::{read_vbr_at, write_vbr};
//!
//! let mut data = Vec::new();
//! write_vbr(300, &mut data);
//! assert_eq!(data, [0xAC, 0x02]);
//!
//! let mut offset = 0;
//! assert_eq!(read_vbr_at(&data, &mut offset)?, 300);
//! assert_eq!(offset, 2);
//! # Ok::<(), docscope::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All functions in this module are pure operations on caller-provided buffers and can be
//! called concurrently from multiple threads.

use crate::{Error::OutOfBounds, Result};

/// Trait for converting primitive integers from and to little-endian byte arrays.
///
/// Each implementation defines a `Bytes` associated type that represents the fixed-size
/// byte array required for that particular type (e.g., `[u8; 4]` for `u32`).
pub trait LeIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;

    /// Write T to a byte buffer in little-endian
    fn to_le_bytes(self) -> Self::Bytes;
}

// Implement LeIO support for u64
impl LeIO for u64 {
    type Bytes = [u8; 8];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u64::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u64::to_le_bytes(self)
    }
}

// Implement LeIO support for u32
impl LeIO for u32 {
    type Bytes = [u8; 4];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u32::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u32::to_le_bytes(self)
    }
}

// Implement LeIO support from u16
impl LeIO for u16 {
    type Bytes = [u8; 2];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u16::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u16::to_le_bytes(self)
    }
}

// Implement LeIO support from u8
impl LeIO for u8 {
    type Bytes = [u8; 1];

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u8::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> Self::Bytes {
        u8::to_le_bytes(self)
    }
}

/// Safely reads a value of type `T` in little-endian byte order from the start of a buffer.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le<T: LeIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_le_at(data, &mut offset)
}

/// Safely reads a value of type `T` in little-endian byte order at a specific offset.
///
/// The offset is advanced by the number of bytes read.
///
/// # Arguments
///
/// * `data` - The byte buffer to read from
/// * `offset` - Mutable reference to the offset position (will be advanced after reading)
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le_at<T: LeIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    if (type_len + *offset) > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..*offset + type_len].try_into() else {
        return Err(OutOfBounds);
    };

    *offset += type_len;

    Ok(T::from_le_bytes(read))
}

/// Safely writes a value of type `T` in little-endian byte order at a specific offset.
///
/// Used to back-patch block lengths once the block body is complete. The offset is
/// advanced by the number of bytes written.
///
/// # Arguments
///
/// * `data` - The mutable byte buffer to write to
/// * `offset` - Mutable reference to the offset position (will be advanced after writing)
/// * `value` - The value to write
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the buffer is too small.
pub fn write_le_at<T: LeIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    let type_len = std::mem::size_of::<T>();
    if (type_len + *offset) > data.len() {
        return Err(OutOfBounds);
    }

    let bytes = value.to_le_bytes();
    data[*offset..*offset + type_len].copy_from_slice(bytes.as_ref());
    *offset += type_len;

    Ok(())
}

/// Appends `value` as an unsigned LEB128 sequence: 7 bits per byte, least significant
/// group first, high bit set on every byte except the last.
pub fn write_vbr(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Number of bytes [`write_vbr`] produces for `value`.
#[must_use]
pub fn vbr_size(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Reads an unsigned LEB128 value at `offset`, advancing the offset past it.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if the sequence runs past the end of `data`, or
/// [`crate::Error::Malformed`] if it does not fit into 64 bits.
pub fn read_vbr_at(data: &[u8], offset: &mut usize) -> Result<u64> {
    let mut value = 0u64;
    let mut shift = 0u32;

    loop {
        if *offset >= data.len() {
            return Err(OutOfBounds);
        }

        let byte = data[*offset];
        *offset += 1;

        if shift == 63 && byte > 1 {
            return Err(malformed_error!(
                "vbr value exceeds u64 capacity at offset {}",
                *offset - 1
            ));
        }

        value |= u64::from(byte & 0x7F) << shift;
        if (byte & 0x80) == 0 {
            return Ok(value);
        }

        shift += 7;
    }
}

/// Maps a signed value onto the unsigned range so small magnitudes stay small.
#[must_use]
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
#[must_use]
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
