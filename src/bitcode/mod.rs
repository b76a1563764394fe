//! # Container Layout
//!
//! ```text
//! "DOCS"                      4 byte signature
//! block 0    format info      block and record names, one abbreviation per record kind
//! block 8    version          FORMAT_VERSION
//! block ..   top-level node   one per dispatched node, in dispatch order
//! ```
//!
//! Every record is written through the abbreviation its kind was assigned in the format-info
//! block. Records of empty strings and zero symbol ids are left out; a reader substitutes the
//! default value.
//!
//! # Examples
//!
//! ```rust
//! use docscope::bitcode::{BitcodeWriter, BlockId, RecordId};
//!
//! let mut writer = BitcodeWriter::new(Vec::new())?;
//! {
//!     let mut block = writer.enter_block(BlockId::EnumValue);
//!     block.emit_string(RecordId::EnumValueName, "Red");
//!     block.emit_integer(RecordId::EnumValueValue, -1);
//! }
//! assert_eq!(writer.depth(), 0);
//! # Ok::<(), docscope::Error>(())
//! ```

pub mod abbrev;
pub mod batch;
mod blocks;
pub mod guard;
pub mod ids;
mod javadoc;
pub mod record;
pub mod stream;
pub mod writer;

pub use abbrev::{Abbrev, AbbrevOp, AbbrevShape, AbbreviationMap};
pub use batch::{write_units, ExtractedUnit, SerializeConfig};
pub use guard::BlockGuard;
pub use ids::{BlockId, RecordId, FORMAT_VERSION, SIGNATURE};
pub use writer::{BitcodeWriter, WriteBlock};
