//! Scoped block nesting.

use std::{
    io::Write,
    ops::{Deref, DerefMut},
};

use crate::bitcode::writer::BitcodeWriter;

/// An open block of a [`BitcodeWriter`].
///
/// Created by [`BitcodeWriter::enter_block`]. The guard mutably borrows the writer and
/// dereferences to it, so the block body is written through the guard; nested blocks borrow
/// through it again. Dropping the guard closes the block, which yields exactly one
/// terminator per opened block in reverse opening order, on every exit path including early
/// returns and unwinding.
///
/// # Examples
///
/// ```rust
/// use docscope::bitcode::{BitcodeWriter, BlockId};
///
/// let mut writer = BitcodeWriter::new(Vec::new())?;
/// {
///     let mut outer = writer.enter_block(BlockId::Namespace);
///     let inner = outer.enter_block(BlockId::List);
///     assert_eq!(inner.depth(), 2);
/// }
/// assert_eq!(writer.depth(), 0);
/// # Ok::<(), docscope::Error>(())
/// ```
pub struct BlockGuard<'a, W: Write> {
    writer: &'a mut BitcodeWriter<W>,
    block: u32,
    depth: usize,
}

impl<'a, W: Write> BlockGuard<'a, W> {
    pub(crate) fn new(writer: &'a mut BitcodeWriter<W>, block: u32) -> Self {
        writer.stream_mut().enter_subblock(block);
        let depth = writer.depth();
        log::trace!("enter block {block} at depth {depth}");

        BlockGuard {
            writer,
            block,
            depth,
        }
    }

    /// Raw id of the block this guard keeps open.
    #[must_use]
    pub fn block(&self) -> u32 {
        self.block
    }
}

impl<W: Write> Deref for BlockGuard<'_, W> {
    type Target = BitcodeWriter<W>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl<W: Write> DerefMut for BlockGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl<W: Write> Drop for BlockGuard<'_, W> {
    fn drop(&mut self) {
        // Nested guards borrow from this one and are always dropped first.
        debug_assert_eq!(self.writer.depth(), self.depth);
        debug_assert_eq!(self.writer.current_block(), Some(self.block));

        self.writer.stream_mut().exit_block();
        log::trace!("exit block {} at depth {}", self.block, self.depth);
    }
}
