//! The serialization engine.
//!
//! [`BitcodeWriter`] turns the metadata graph into a container. Construction writes the
//! preamble (header, format-info block, version block); each call to
//! [`BitcodeWriter::dispatch_info`] then writes one self-contained top-level block and hands
//! it to the sink.
//!
//! Node types describe their own layout by implementing [`WriteBlock`] on top of the field
//! emitters provided here: scalar fields become records of the current block, composite
//! fields become nested blocks opened with [`BitcodeWriter::enter_block`], ordered children
//! become list blocks written with [`BitcodeWriter::emit_list`].
//!
//! # Failure Semantics
//!
//! Emission itself cannot fail: bytes are staged in memory until a top-level block is
//! complete. Violations of the input contract (a missing mandatory symbol id, a record kind
//! written in a block it does not belong to) are defects of the caller and panic. Whatever
//! the panicking node had staged is discarded, and if anything was staged the writer is
//! poisoned. The sink refusing bytes surfaces as [`crate::Error::Io`] from the flush that
//! ends construction, a dispatch, or [`BitcodeWriter::finish`]; the writer is poisoned
//! afterwards.

use std::io::Write;

use strum::IntoEnumIterator;

use crate::{
    bitcode::{
        abbrev::{Abbrev, AbbrevShape, AbbreviationMap},
        guard::BlockGuard,
        ids::{
            BlockId, RecordId, BLOCKINFO_CODE_BLOCKNAME, BLOCKINFO_CODE_SETRECORDNAME,
            BLOCK_INFO_BLOCK_ID, FORMAT_VERSION,
        },
        record::RecordBuffer,
        stream::BlockStream,
    },
    file::io::zigzag_encode,
    metadata::{FieldId, InfoKind, InfoNode, Location, Reference, SymbolId},
    Error, Result,
};

/// A node that is written as one block.
///
/// Implementations open their block through [`BitcodeWriter::enter_block`], emit their
/// scalar fields as records and recurse into their composite fields. They cannot fail;
/// output errors are reported when the enclosing top-level block is flushed.
pub trait WriteBlock {
    /// Writes `self` as a block at the writer's current position.
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>);
}

/// Writes the metadata graph of one unit into a byte sink.
///
/// One writer owns one output stream. It is not shared between threads; independent units
/// use independent writers (see [`crate::bitcode::batch`]).
///
/// # Examples
///
/// ```rust
/// use docscope::{
///     metadata::{Info, InfoNode, NamespaceInfo, SymbolId},
///     BitcodeWriter,
/// };
///
/// let ns = NamespaceInfo {
///     info: Info::new(SymbolId::from_usr("c:@N@util"), "util"),
///     ..NamespaceInfo::default()
/// };
///
/// let mut writer = BitcodeWriter::new(Vec::new())?;
/// writer.dispatch_info(&InfoNode::Namespace(ns))?;
/// let bytes = writer.finish()?;
///
/// assert_eq!(&bytes[..4], b"DOCS");
/// # Ok::<(), docscope::Error>(())
/// ```
pub struct BitcodeWriter<W: Write> {
    stream: BlockStream<W>,
    abbrevs: AbbreviationMap,
    record: RecordBuffer,
    poisoned: bool,
}

impl<W: Write> BitcodeWriter<W> {
    /// Creates a writer and writes the container preamble into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the sink refuses the preamble.
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = BitcodeWriter {
            stream: BlockStream::new(sink),
            abbrevs: AbbreviationMap::new(),
            record: RecordBuffer::new(),
            poisoned: false,
        };

        writer.stream.emit_header();
        writer.emit_block_info();
        writer.emit_version();
        writer.flush_pending()?;

        log::debug!(
            "created writer, preamble of {} bytes with {} abbreviations",
            writer.stream.written(),
            writer.abbrevs.len()
        );
        Ok(writer)
    }

    /// Writes one top-level node and flushes it to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StreamPoisoned`] if an earlier flush failed, otherwise
    /// [`crate::Error::Io`] or [`crate::Error::BlockTooLarge`] if this flush fails.
    ///
    /// # Panics
    ///
    /// Panics if the node, or a node nested in it, is missing a mandatory symbol id.
    pub fn dispatch_info(&mut self, info: &InfoNode) -> Result<()> {
        log::debug!("dispatching {:?} {}", info.kind(), info.info().name);
        self.emit_block(info)
    }

    /// Writes any [`WriteBlock`] node as a top-level block and flushes it to the sink.
    ///
    /// # Errors
    ///
    /// Same as [`Self::dispatch_info`].
    ///
    /// # Panics
    ///
    /// Panics if called while a block is open.
    pub fn emit_block<T: WriteBlock + ?Sized>(&mut self, node: &T) -> Result<()> {
        if self.poisoned {
            return Err(Error::StreamPoisoned);
        }
        assert_eq!(self.depth(), 0, "top-level block written inside an open block");

        {
            let scope = DispatchScope {
                mark: self.stream.pending(),
                writer: self,
            };
            node.write_block(&mut *scope.writer);
        }
        self.flush_pending()
    }

    /// Flushes the sink and gives it back.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StreamPoisoned`] if an earlier flush failed, or
    /// [`crate::Error::Io`] if flushing the sink fails.
    pub fn finish(mut self) -> Result<W> {
        if self.poisoned {
            return Err(Error::StreamPoisoned);
        }

        self.flush_pending()?;
        self.stream.flush_sink()?;

        log::debug!("finished container of {} bytes", self.stream.written());
        Ok(self.stream.into_inner())
    }

    /// The abbreviation codes assigned by the format-info block.
    #[must_use]
    pub fn abbreviations(&self) -> &AbbreviationMap {
        &self.abbrevs
    }

    /// Number of open blocks.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stream.depth()
    }

    /// Raw id of the innermost open block.
    #[must_use]
    pub fn current_block(&self) -> Option<u32> {
        self.stream.current_block()
    }

    /// Returns true once a flush has failed.
    #[must_use]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Total bytes handed to the sink so far.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.stream.written()
    }

    /// Opens a block; it is closed when the returned guard is dropped.
    pub fn enter_block(&mut self, block: BlockId) -> BlockGuard<'_, W> {
        BlockGuard::new(self, block.raw())
    }

    pub(crate) fn enter_block_raw(&mut self, block: u32) -> BlockGuard<'_, W> {
        BlockGuard::new(self, block)
    }

    pub(crate) fn stream_mut(&mut self) -> &mut BlockStream<W> {
        &mut self.stream
    }

    /// Asserts that a mandatory symbol id is present.
    ///
    /// Called before the block of the node is opened, so nothing of the node is written.
    ///
    /// # Panics
    ///
    /// Panics if `id` is [`SymbolId::ZERO`].
    pub fn require_symbol(&self, block: BlockId, id: SymbolId) {
        assert!(
            !id.is_zero(),
            "{} is missing its mandatory symbol id",
            block.name()
        );
    }

    /// Writes a string record. Empty strings are not written.
    pub fn emit_string(&mut self, record: RecordId, value: &str) {
        debug_assert_eq!(record.shape(), AbbrevShape::String);
        if value.is_empty() {
            return;
        }

        self.begin_record(record);
        self.record.set_blob(value.as_bytes());
        self.end_record(record);
    }

    /// Writes a symbol id record. The zero id is not written.
    pub fn emit_symbol_id(&mut self, record: RecordId, id: SymbolId) {
        debug_assert_eq!(record.shape(), AbbrevShape::SymbolId);
        if id.is_zero() {
            return;
        }

        self.begin_record(record);
        self.record.extend_bytes(id.as_bytes());
        self.end_record(record);
    }

    /// Writes a source location record.
    pub fn emit_location(&mut self, record: RecordId, location: &Location) {
        debug_assert_eq!(record.shape(), AbbrevShape::Location);

        self.begin_record(record);
        self.record.push(u64::from(location.line));
        self.record.push(u64::from(location.in_root_dir));
        self.record.set_blob(location.filename.as_bytes());
        self.end_record(record);
    }

    /// Writes a typed reference record: the kind of the target and the role of the reference.
    pub fn emit_typed_ref(&mut self, record: RecordId, kind: InfoKind, field: FieldId) {
        debug_assert_eq!(record.shape(), AbbrevShape::TypedRef);

        self.begin_record(record);
        self.record.push(kind as u64);
        self.record.push(field as u64);
        self.end_record(record);
    }

    /// Writes a boolean record.
    pub fn emit_bool(&mut self, record: RecordId, value: bool) {
        debug_assert_eq!(record.shape(), AbbrevShape::Bool);

        self.begin_record(record);
        self.record.push(u64::from(value));
        self.end_record(record);
    }

    /// Writes an unsigned integer record.
    pub fn emit_unsigned(&mut self, record: RecordId, value: u64) {
        debug_assert_eq!(record.shape(), AbbrevShape::Unsigned);

        self.begin_record(record);
        self.record.push(value);
        self.end_record(record);
    }

    /// Writes a signed integer record.
    pub fn emit_integer(&mut self, record: RecordId, value: i64) {
        debug_assert_eq!(record.shape(), AbbrevShape::Integer);

        self.begin_record(record);
        self.record.push(zigzag_encode(value));
        self.end_record(record);
    }

    /// Writes a reference block, tagged with the role it plays in its parent.
    pub fn emit_reference(&mut self, reference: &Reference, field: FieldId) {
        let mut block = self.enter_block(BlockId::Reference);
        block.emit_symbol_id(RecordId::ReferenceUsr, reference.id);
        block.emit_string(RecordId::ReferenceName, &reference.name);
        block.emit_typed_ref(RecordId::ReferenceType, reference.kind, field);
    }

    /// Writes an ordered list as a list block tagged with `field`.
    ///
    /// The list block is written even when `items` is empty, which keeps an empty list
    /// distinguishable from an absent one.
    pub fn emit_list<T>(
        &mut self,
        field: FieldId,
        items: &[T],
        mut emit: impl FnMut(&mut Self, &T),
    ) {
        let mut list = self.enter_block(BlockId::List);
        list.emit_unsigned(RecordId::ListField, field as u64);
        for item in items {
            emit(&mut *list, item);
        }
    }

    /// Writes a list of nodes, one block per element, in order.
    pub fn emit_blocks<T: WriteBlock>(&mut self, field: FieldId, items: &[T]) {
        self.emit_list(field, items, |writer, item| item.write_block(writer));
    }

    /// Writes a list of references, each tagged with the role of the list.
    pub fn emit_references(&mut self, field: FieldId, references: &[Reference]) {
        self.emit_list(field, references, |writer, reference| {
            writer.emit_reference(reference, field);
        });
    }

    fn begin_record(&mut self, record: RecordId) {
        let current = self.stream.current_block();
        assert!(
            current == Some(record.block().raw()),
            "record {record:?} belongs to {:?} but was emitted in block {current:?}",
            record.block()
        );
        self.record.clear();
    }

    fn end_record(&mut self, record: RecordId) {
        let code = self.abbrevs.get(record);
        self.stream.emit_record_with_abbrev(code, &self.record);
    }

    fn emit_block_info(&mut self) {
        let mut info = self.enter_block_raw(BLOCK_INFO_BLOCK_ID);

        for block in BlockId::iter() {
            info.stream.switch_block_info_target(block.raw());
            let name: Vec<u64> = block.name().bytes().map(u64::from).collect();
            info.stream.emit_unabbrev_record(BLOCKINFO_CODE_BLOCKNAME, &name);

            for record in block.records() {
                let mut values = Vec::with_capacity(record.name().len() + 1);
                values.push(u64::from(record.raw()));
                values.extend(record.name().bytes().map(u64::from));
                info.stream.emit_unabbrev_record(BLOCKINFO_CODE_SETRECORDNAME, &values);

                let code = info
                    .stream
                    .emit_block_info_abbrev(block.raw(), Abbrev::for_record(record));
                info.abbrevs.add(record, code);
            }
        }
    }

    fn emit_version(&mut self) {
        let mut block = self.enter_block(BlockId::Version);
        block.emit_unsigned(RecordId::Version, FORMAT_VERSION);
    }

    fn flush_pending(&mut self) -> Result<()> {
        let pending = self.stream.pending();
        match self.stream.flush() {
            Ok(()) => {
                log::debug!("flushed {pending} bytes");
                Ok(())
            }
            Err(error) => {
                self.poisoned = true;
                log::warn!("abandoning output stream after failed flush: {error}");
                Err(error)
            }
        }
    }
}

/// Discards the staged bytes of a top-level block whose writing panicked.
///
/// By the time this drops during unwinding the block guards have closed every block, so the
/// buffer holds a well-formed but incomplete node. It is cut back to where the node began and
/// the writer is poisoned.
struct DispatchScope<'a, W: Write> {
    writer: &'a mut BitcodeWriter<W>,
    mark: usize,
}

impl<W: Write> Drop for DispatchScope<'_, W> {
    fn drop(&mut self) {
        if !std::thread::panicking() || self.writer.stream.pending() <= self.mark {
            return;
        }

        let staged = self.writer.stream.pending() - self.mark;
        self.writer.stream.discard_from(self.mark);
        self.writer.poisoned = true;
        log::warn!("abandoning output stream, discarded {staged} bytes of an interrupted block");
    }
}
