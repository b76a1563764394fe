//! Byte-level block/record writer.
//!
//! [`BlockStream`] knows the container encoding but nothing about the metadata graph: it
//! writes the header, opens and closes blocks, defines abbreviations inside the format-info
//! block and emits records. Output is staged in an in-memory buffer so that block lengths can
//! be back-patched when a block closes; the buffer is handed to the sink by [`BlockStream::flush`]
//! once no block is open.
//!
//! # Block Layout
//!
//! ```text
//! ENTER_SUBBLOCK(vbr) block_id(vbr) length(u32 LE) body... END_BLOCK(vbr)
//!                                   |<---------- length ---------------->|
//! ```

use std::{collections::HashMap, io::Write};

use crate::{
    bitcode::{
        abbrev::{fits_fixed, write_fixed, Abbrev, AbbrevOp, ElementOp},
        ids::{
            BLOCKINFO_CODE_SETBID, BLOCK_INFO_BLOCK_ID, DEFINE_ABBREV, END_BLOCK,
            ENTER_SUBBLOCK, FIRST_APPLICATION_ABBREV, SIGNATURE, UNABBREV_RECORD,
        },
        record::RecordBuffer,
    },
    file::io::{vbr_size, write_le_at, write_vbr},
    Error, Result,
};

/// A block that has been entered but not yet closed.
#[derive(Debug, Clone, Copy)]
struct OpenBlock {
    id: u32,
    length_offset: usize,
}

/// Writes the container encoding into a [`Write`] sink.
pub struct BlockStream<W: Write> {
    sink: W,
    buffer: Vec<u8>,
    open: Vec<OpenBlock>,
    block_info: HashMap<u32, Vec<Abbrev>>,
    info_target: Option<u32>,
    deferred: Option<Error>,
    written: u64,
}

impl<W: Write> BlockStream<W> {
    /// Creates a stream writing into `sink`. Nothing is written until [`Self::flush`].
    pub fn new(sink: W) -> Self {
        BlockStream {
            sink,
            buffer: Vec::with_capacity(4096),
            open: Vec::with_capacity(16),
            block_info: HashMap::new(),
            info_target: None,
            deferred: None,
            written: 0,
        }
    }

    /// Writes the container signature.
    pub fn emit_header(&mut self) {
        debug_assert!(self.buffer.is_empty() && self.written == 0);
        self.buffer.extend_from_slice(&SIGNATURE);
    }

    /// Opens a block with the given raw id and reserves its length field.
    pub fn enter_subblock(&mut self, id: u32) {
        write_vbr(ENTER_SUBBLOCK, &mut self.buffer);
        write_vbr(u64::from(id), &mut self.buffer);

        let length_offset = self.buffer.len();
        self.buffer.extend_from_slice(&[0; 4]);
        self.open.push(OpenBlock { id, length_offset });
    }

    /// Closes the innermost open block and back-patches its length.
    ///
    /// A body that does not fit the length field is recorded and reported by the next
    /// [`Self::flush`].
    ///
    /// # Panics
    ///
    /// Panics if no block is open.
    pub fn exit_block(&mut self) {
        let Some(block) = self.open.pop() else {
            panic!("END_BLOCK without an open block");
        };

        write_vbr(END_BLOCK, &mut self.buffer);
        if block.id == BLOCK_INFO_BLOCK_ID {
            self.info_target = None;
        }

        let size = self.buffer.len() - (block.length_offset + 4);
        let mut offset = block.length_offset;
        let patched = match u32::try_from(size) {
            Ok(length) => write_le_at(&mut self.buffer, &mut offset, length),
            Err(_) => Err(Error::BlockTooLarge {
                block: block.id,
                size,
            }),
        };

        if let Err(error) = patched {
            self.deferred.get_or_insert(error);
        }
    }

    /// Raw id of the innermost open block.
    #[must_use]
    pub fn current_block(&self) -> Option<u32> {
        self.open.last().map(|block| block.id)
    }

    /// Number of open blocks.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Writes a record whose operands are all `vbr` and self-describing.
    pub fn emit_unabbrev_record(&mut self, code: u64, values: &[u64]) {
        write_vbr(UNABBREV_RECORD, &mut self.buffer);
        write_vbr(code, &mut self.buffer);
        write_vbr(values.len() as u64, &mut self.buffer);
        for value in values {
            write_vbr(*value, &mut self.buffer);
        }
    }

    /// Defines `abbrev` for all blocks with id `block` and returns the code assigned to it.
    ///
    /// Emits a `SETBID` record first when the definition targets a different block than the
    /// previous one.
    ///
    /// # Panics
    ///
    /// Panics if the innermost open block is not the format-info block.
    pub fn emit_block_info_abbrev(&mut self, block: u32, abbrev: Abbrev) -> u64 {
        self.switch_block_info_target(block);

        write_vbr(DEFINE_ABBREV, &mut self.buffer);
        abbrev.encode(&mut self.buffer);

        let abbrevs = self.block_info.entry(block).or_default();
        abbrevs.push(abbrev);
        FIRST_APPLICATION_ABBREV + abbrevs.len() as u64 - 1
    }

    /// Makes `block` the target of following format-info definitions.
    ///
    /// # Panics
    ///
    /// Panics if the innermost open block is not the format-info block.
    pub fn switch_block_info_target(&mut self, block: u32) {
        assert_eq!(
            self.current_block(),
            Some(BLOCK_INFO_BLOCK_ID),
            "format-info records outside the format-info block"
        );

        if self.info_target != Some(block) {
            self.emit_unabbrev_record(BLOCKINFO_CODE_SETBID, &[u64::from(block)]);
            self.info_target = Some(block);
        }
    }

    /// The abbreviations defined for `block`, in code order.
    #[must_use]
    pub fn abbrevs_for(&self, block: u32) -> &[Abbrev] {
        self.block_info.get(&block).map_or(&[], Vec::as_slice)
    }

    /// Writes `record` using abbreviation `code` of the innermost open block.
    ///
    /// # Panics
    ///
    /// Panics if no block is open, `code` is not defined for the open block, or the operands
    /// do not match the abbreviation (wrong count, a value too wide for its fixed operand, a
    /// missing or unexpected blob).
    pub fn emit_record_with_abbrev(&mut self, code: u64, record: &RecordBuffer) {
        let Some(block) = self.current_block() else {
            panic!("record emitted outside of any block");
        };

        let index = code
            .checked_sub(FIRST_APPLICATION_ABBREV)
            .and_then(|index| usize::try_from(index).ok());
        let Some(abbrev) = index.and_then(|index| self.block_info.get(&block)?.get(index))
        else {
            panic!("abbreviation {code} is not defined for block {block}");
        };

        write_vbr(code, &mut self.buffer);

        let mut values = record.values().iter().copied();
        let mut blob_used = false;
        for op in abbrev.ops() {
            match *op {
                AbbrevOp::Literal(_) => {}
                AbbrevOp::Fixed(width) => {
                    let Some(value) = values.next() else {
                        panic!("missing operand for abbreviation {code} of block {block}");
                    };
                    assert!(
                        fits_fixed(value, width),
                        "value {value} does not fit {width} byte operand of abbreviation {code}"
                    );
                    write_fixed(value, width, &mut self.buffer);
                }
                AbbrevOp::Vbr => {
                    let Some(value) = values.next() else {
                        panic!("missing operand for abbreviation {code} of block {block}");
                    };
                    write_vbr(value, &mut self.buffer);
                }
                AbbrevOp::Array(element) => {
                    let rest: Vec<u64> = values.by_ref().collect();
                    write_vbr(rest.len() as u64, &mut self.buffer);
                    for value in rest {
                        match element {
                            ElementOp::Fixed(width) => {
                                assert!(
                                    fits_fixed(value, width),
                                    "array element {value} does not fit {width} byte operand"
                                );
                                write_fixed(value, width, &mut self.buffer);
                            }
                            ElementOp::Vbr => write_vbr(value, &mut self.buffer),
                        }
                    }
                }
                AbbrevOp::Blob => {
                    let Some(blob) = record.blob() else {
                        panic!("abbreviation {code} of block {block} expects a blob");
                    };
                    self.buffer.reserve(vbr_size(blob.len() as u64) + blob.len());
                    write_vbr(blob.len() as u64, &mut self.buffer);
                    self.buffer.extend_from_slice(blob);
                    blob_used = true;
                }
            }
        }

        assert!(
            values.next().is_none(),
            "too many operands for abbreviation {code} of block {block}"
        );
        assert!(
            blob_used || record.blob().is_none(),
            "abbreviation {code} of block {block} takes no blob"
        );
    }

    /// Bytes staged but not yet handed to the sink.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Drops everything staged after the first `mark` bytes, including a deferred error.
    ///
    /// # Panics
    ///
    /// Panics if a block is still open.
    pub fn discard_from(&mut self, mark: usize) {
        assert!(self.open.is_empty(), "discard with {} open blocks", self.open.len());
        self.buffer.truncate(mark);
        self.deferred = None;
    }

    /// Total bytes handed to the sink so far.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Hands all staged bytes to the sink.
    ///
    /// # Errors
    ///
    /// Returns the deferred [`Error::BlockTooLarge`] of a block closed since the last flush,
    /// in which case the staged bytes are discarded, or [`Error::Io`] if the sink fails.
    ///
    /// # Panics
    ///
    /// Panics if a block is still open.
    pub fn flush(&mut self) -> Result<()> {
        assert!(self.open.is_empty(), "flush with {} open blocks", self.open.len());

        if let Some(error) = self.deferred.take() {
            self.buffer.clear();
            return Err(error);
        }

        if !self.buffer.is_empty() {
            self.sink.write_all(&self.buffer)?;
            self.written += self.buffer.len() as u64;
            self.buffer.clear();
        }
        Ok(())
    }

    /// Flushes the sink itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink fails.
    pub fn flush_sink(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Gives back the sink. Staged bytes that were not flushed are lost.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
