//! Abbreviation definitions and the per-writer abbreviation map.
//!
//! An abbreviation describes the operand layout of one record kind: a literal holding the
//! record id followed by typed operands. Writing a record through its abbreviation saves the
//! per-operand length prefixes an unabbreviated record needs, and lets a reader decode the
//! operands without guessing.
//!
//! # Key Types
//! - [`AbbrevOp`] - One operand of an abbreviation
//! - [`AbbrevShape`] - The closed set of operand layouts used by the record catalog
//! - [`Abbrev`] - A complete abbreviation definition
//! - [`AbbreviationMap`] - Record kind to assigned code, owned by one writer

use crate::{
    bitcode::ids::RecordId,
    file::io::write_vbr,
};
use strum::EnumCount;

/// Operand tag: literal value
pub const OP_LITERAL: u8 = 0;
/// Operand tag: fixed-width little-endian value
pub const OP_FIXED: u8 = 1;
/// Operand tag: `vbr` value
pub const OP_VBR: u8 = 2;
/// Operand tag: counted array of scalar elements
pub const OP_ARRAY: u8 = 3;
/// Operand tag: length-prefixed byte blob
pub const OP_BLOB: u8 = 4;

/// Element encoding of an [`AbbrevOp::Array`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ElementOp {
    /// Fixed-width little-endian element, width in bytes
    Fixed(u8),
    /// `vbr` element
    Vbr,
}

/// One operand of an abbreviation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AbbrevOp {
    /// A constant that is implied and not written
    Literal(u64),
    /// Fixed-width little-endian value, width in bytes (1, 2, 4 or 8)
    Fixed(u8),
    /// `vbr` value
    Vbr,
    /// `vbr` count followed by that many elements; consumes all remaining values
    Array(ElementOp),
    /// `vbr` length followed by raw bytes; consumes the record blob
    Blob,
}

/// Returns true if `value` can be stored in `width` bytes.
#[must_use]
pub fn fits_fixed(value: u64, width: u8) -> bool {
    width >= 8 || value >> (u32::from(width) * 8) == 0
}

/// Appends `value` as `width` little-endian bytes.
pub fn write_fixed(value: u64, width: u8, out: &mut Vec<u8>) {
    out.extend_from_slice(&value.to_le_bytes()[..usize::from(width)]);
}

impl AbbrevOp {
    /// Appends the definition of this operand.
    pub fn encode(&self, out: &mut Vec<u8>) {
        match *self {
            AbbrevOp::Literal(value) => {
                out.push(OP_LITERAL);
                write_vbr(value, out);
            }
            AbbrevOp::Fixed(width) => {
                out.push(OP_FIXED);
                out.push(width);
            }
            AbbrevOp::Vbr => out.push(OP_VBR),
            AbbrevOp::Array(element) => {
                out.push(OP_ARRAY);
                match element {
                    ElementOp::Fixed(width) => {
                        out.push(OP_FIXED);
                        out.push(width);
                    }
                    ElementOp::Vbr => out.push(OP_VBR),
                }
            }
            AbbrevOp::Blob => out.push(OP_BLOB),
        }
    }
}

/// Operand layouts of the record catalog, excluding the leading record id literal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AbbrevShape {
    /// `[fixed1]`
    Bool,
    /// `[vbr]`
    Unsigned,
    /// `[vbr]`, zig-zag encoded
    Integer,
    /// `[blob]`
    String,
    /// `[array(fixed1)]`
    SymbolId,
    /// `[vbr line, fixed1 in_root_dir, blob filename]`
    Location,
    /// `[fixed1 kind, fixed1 field]`
    TypedRef,
}

impl AbbrevShape {
    /// The operands following the record id literal.
    #[must_use]
    pub const fn operands(self) -> &'static [AbbrevOp] {
        match self {
            AbbrevShape::Bool => &[AbbrevOp::Fixed(1)],
            AbbrevShape::Unsigned | AbbrevShape::Integer => &[AbbrevOp::Vbr],
            AbbrevShape::String => &[AbbrevOp::Blob],
            AbbrevShape::SymbolId => &[AbbrevOp::Array(ElementOp::Fixed(1))],
            AbbrevShape::Location => &[AbbrevOp::Vbr, AbbrevOp::Fixed(1), AbbrevOp::Blob],
            AbbrevShape::TypedRef => &[AbbrevOp::Fixed(1), AbbrevOp::Fixed(1)],
        }
    }
}

/// A complete abbreviation definition.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Abbrev {
    ops: Vec<AbbrevOp>,
}

impl Abbrev {
    /// Creates an abbreviation from its operands.
    #[must_use]
    pub fn new(ops: Vec<AbbrevOp>) -> Self {
        Abbrev { ops }
    }

    /// The abbreviation of a catalog record: its id as literal, then its shape.
    #[must_use]
    pub fn for_record(record: RecordId) -> Self {
        let mut ops = Vec::with_capacity(4);
        ops.push(AbbrevOp::Literal(u64::from(record.raw())));
        ops.extend_from_slice(record.shape().operands());
        Abbrev { ops }
    }

    /// The operands.
    #[must_use]
    pub fn ops(&self) -> &[AbbrevOp] {
        &self.ops
    }

    /// The value of the leading literal, i.e. the record id the abbreviation stands for.
    #[must_use]
    pub fn literal(&self) -> Option<u64> {
        match self.ops.first() {
            Some(AbbrevOp::Literal(value)) => Some(*value),
            _ => None,
        }
    }

    /// Appends the body of a `DEFINE_ABBREV` entry: operand count, then each operand.
    pub fn encode(&self, out: &mut Vec<u8>) {
        write_vbr(self.ops.len() as u64, out);
        for op in &self.ops {
            op.encode(out);
        }
    }
}

/// Maps each record kind to the abbreviation code assigned to it.
///
/// The map is owned by a single writer and filled while the format-info block is written.
/// Codes are never reassigned, and asking for a code that was never assigned is a defect in
/// the writer, so both cases panic.
#[derive(Clone, Debug)]
pub struct AbbreviationMap {
    codes: Vec<Option<u64>>,
}

impl Default for AbbreviationMap {
    fn default() -> Self {
        Self::new()
    }
}

impl AbbreviationMap {
    /// Creates an empty map sized for the full record catalog.
    #[must_use]
    pub fn new() -> Self {
        AbbreviationMap {
            codes: vec![None; RecordId::COUNT + 1],
        }
    }

    /// Assigns `code` to `record`.
    ///
    /// # Panics
    ///
    /// Panics if `record` already has a code.
    pub fn add(&mut self, record: RecordId, code: u64) {
        let slot = &mut self.codes[record.raw() as usize];
        assert!(
            slot.is_none(),
            "abbreviation for record {record:?} assigned twice"
        );
        *slot = Some(code);
    }

    /// The code assigned to `record`.
    ///
    /// # Panics
    ///
    /// Panics if no code was assigned to `record`.
    #[must_use]
    pub fn get(&self, record: RecordId) -> u64 {
        match self.codes[record.raw() as usize] {
            Some(code) => code,
            None => panic!("no abbreviation assigned to record {record:?}"),
        }
    }

    /// Returns true if `record` has a code.
    #[must_use]
    pub fn contains(&self, record: RecordId) -> bool {
        self.codes[record.raw() as usize].is_some()
    }

    /// Number of record kinds with a code.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    /// Returns true if no code has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if every record kind of the catalog has a code.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == RecordId::COUNT
    }
}
